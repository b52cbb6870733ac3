//! E-mail task provider.
//!
//! Adds sender name, sender e-mail, reply e-mail and the four page
//! references used to build links in generated mails, on top of the base
//! fields.

use tracing::debug;

use crate::domain::{
    EMAIL_FIELDS, EmailTask, FieldDescriptor, FieldKey, FieldSet, FormContext, ProviderError,
    SubmittedData, TaskInfo, ValidationError,
};
use crate::ports::Translator;
use crate::typed::{FieldProvider, ValidatedSubmission};

use super::base::BaseProvider;
use super::{checks, render};

/// Page references checked by `validate_fields`, in check order.
const PAGE_FIELDS: [FieldKey; 4] = [
    FieldKey::PageCatalog,
    FieldKey::PageDetail,
    FieldKey::PageLogin,
    FieldKey::PageDownload,
];

#[derive(Debug, Clone, Copy, Default)]
pub struct EmailProvider {
    base: BaseProvider,
}

impl EmailProvider {
    pub fn new() -> Self {
        Self {
            base: BaseProvider::new(),
        }
    }
}

impl FieldProvider<EmailTask> for EmailProvider {
    fn get_fields(
        &self,
        task_info: &mut TaskInfo,
        task: Option<&EmailTask>,
        context: &FormContext,
    ) -> Result<FieldSet, ProviderError> {
        let mut fields = FieldSet::new();

        for key in EMAIL_FIELDS {
            let value = render::form_value(task_info, key, context, || {
                task.and_then(|t| t.get(key))
                    .unwrap_or_default()
                    .to_string()
            });
            fields.insert(key, FieldDescriptor::new(key, render::input(key, &value)));
        }

        fields.merge_missing(self.base.get_fields(task_info, task, context)?);
        Ok(fields)
    }

    fn validate_fields(
        &self,
        data: &SubmittedData,
        context: &FormContext,
        translator: &dyn Translator,
    ) -> Result<(), ValidationError> {
        let fail = |key: FieldKey| {
            debug!(field = %key, "validation failed");
            ValidationError::new(key, translator.translate(&key.error_key()))
        };

        if !checks::is_email(data.value(FieldKey::SenderEmail)) {
            return Err(fail(FieldKey::SenderEmail));
        }

        let reply = data.value(FieldKey::ReplyEmail);
        if !reply.is_empty() && !checks::is_email(reply) {
            return Err(fail(FieldKey::ReplyEmail));
        }

        if let Some(key) = PAGE_FIELDS
            .into_iter()
            .find(|key| !checks::is_page_id(data.value(*key)))
        {
            return Err(fail(key));
        }

        FieldProvider::<EmailTask>::validate_fields(&self.base, data, context, translator)
    }

    fn save_fields(&self, submission: &ValidatedSubmission, task: &mut EmailTask) {
        self.base.save_fields(submission, task);

        for key in EMAIL_FIELDS {
            if let Some(slot) = task.slot_mut(key) {
                *slot = submission.value(key).to_string();
            }
        }
    }
}
