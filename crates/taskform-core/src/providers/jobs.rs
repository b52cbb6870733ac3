//! Jobs task provider: the base fields and nothing else.

use crate::domain::{FieldSet, FormContext, JobsTask, ProviderError, SubmittedData, TaskInfo, ValidationError};
use crate::ports::Translator;
use crate::typed::{FieldProvider, ValidatedSubmission};

use super::base::BaseProvider;

#[derive(Debug, Clone, Copy, Default)]
pub struct JobsProvider {
    base: BaseProvider,
}

impl JobsProvider {
    pub fn new() -> Self {
        Self {
            base: BaseProvider::new(),
        }
    }
}

impl FieldProvider<JobsTask> for JobsProvider {
    fn get_fields(
        &self,
        task_info: &mut TaskInfo,
        task: Option<&JobsTask>,
        context: &FormContext,
    ) -> Result<FieldSet, ProviderError> {
        self.base.get_fields(task_info, task, context)
    }

    fn validate_fields(
        &self,
        data: &SubmittedData,
        context: &FormContext,
        translator: &dyn Translator,
    ) -> Result<(), ValidationError> {
        FieldProvider::<JobsTask>::validate_fields(&self.base, data, context, translator)
    }

    fn save_fields(&self, submission: &ValidatedSubmission, task: &mut JobsTask) {
        self.base.save_fields(submission, task);
    }
}
