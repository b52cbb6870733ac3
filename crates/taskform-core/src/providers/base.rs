//! Base provider: fields every Aimeos task type shares.
//!
//! - `aimeos_sitecode`: sites the task runs for
//! - `aimeos_controller`: job controllers to execute
//! - `aimeos_config`: free-form configuration handed to the controllers

use tracing::debug;

use crate::domain::{
    BASE_FIELDS, FieldDescriptor, FieldKey, FieldSet, FormContext, ProviderError, SubmittedData,
    TaskInfo, ValidationError,
};
use crate::domain::form::split_list;
use crate::ports::Translator;
use crate::typed::{FieldProvider, SchedulerTask, ValidatedSubmission};

use super::render;

#[derive(Debug, Clone, Copy, Default)]
pub struct BaseProvider;

impl BaseProvider {
    pub fn new() -> Self {
        Self
    }
}

impl<T: SchedulerTask> FieldProvider<T> for BaseProvider {
    fn get_fields(
        &self,
        task_info: &mut TaskInfo,
        task: Option<&T>,
        context: &FormContext,
    ) -> Result<FieldSet, ProviderError> {
        let mut fields = FieldSet::new();

        for key in BASE_FIELDS {
            let value = render::form_value(task_info, key, context, || {
                task.and_then(|t| t.base().form_value(key))
                    .unwrap_or_default()
            });

            let code = match key {
                FieldKey::SiteCode => render::multi_select(key, &context.sites, &split_list(&value)),
                FieldKey::Controller => {
                    render::multi_select(key, &context.controllers, &split_list(&value))
                }
                _ => render::textarea(key, &value),
            };
            fields.insert(key, FieldDescriptor::new(key, code));
        }

        Ok(fields)
    }

    fn validate_fields(
        &self,
        data: &SubmittedData,
        context: &FormContext,
        translator: &dyn Translator,
    ) -> Result<(), ValidationError> {
        check_selection(data, FieldKey::SiteCode, &context.sites, translator)?;
        check_selection(data, FieldKey::Controller, &context.controllers, translator)?;
        Ok(())
    }

    fn save_fields(&self, submission: &ValidatedSubmission, task: &mut T) {
        let base = task.base_mut();
        base.sites = owned(submission.list(FieldKey::SiteCode));
        base.controllers = owned(submission.list(FieldKey::Controller));
        base.config = submission.value(FieldKey::Config).to_string();
    }
}

/// At least one value, and every value one the host offers.
fn check_selection(
    data: &SubmittedData,
    key: FieldKey,
    available: &[String],
    translator: &dyn Translator,
) -> Result<(), ValidationError> {
    let selected = data.list(key);
    let unknown = selected
        .iter()
        .copied()
        .find(|value| !available.iter().any(|a| a == value));

    if selected.is_empty() || unknown.is_some() {
        debug!(field = %key, unknown = ?unknown, "selection rejected");
        return Err(ValidationError::new(key, translator.translate(&key.error_key())));
    }
    Ok(())
}

fn owned(values: Vec<&str>) -> Vec<String> {
    values.into_iter().map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{BaseSettings, FormAction, JobsTask};
    use crate::typed::submission::assume_valid;

    fn context(action: FormAction) -> FormContext {
        FormContext::new(action)
            .with_sites(["default", "b2b"])
            .with_controllers(["order/email/payment", "customer/email/account"])
    }

    fn valid() -> SubmittedData {
        SubmittedData::new()
            .with(FieldKey::SiteCode, "default")
            .with(FieldKey::Controller, "order/email/payment")
    }

    #[test]
    fn renders_three_shared_fields() {
        let mut info = TaskInfo::new();
        let fields =
            FieldProvider::<JobsTask>::get_fields(&BaseProvider, &mut info, None, &context(FormAction::Add))
                .unwrap();

        assert_eq!(fields.keys(), BASE_FIELDS.to_vec());
        assert!(fields.get(FieldKey::Config).unwrap().code.starts_with("<textarea"));
    }

    #[test]
    fn edit_mode_selects_stored_values() {
        let task = JobsTask {
            base: BaseSettings {
                sites: vec!["b2b".to_string()],
                controllers: vec![],
                config: "a <b>".to_string(),
            },
        };
        let mut info = TaskInfo::new();
        let fields = BaseProvider
            .get_fields(&mut info, Some(&task), &context(FormAction::Edit))
            .unwrap();

        assert_eq!(info.get(FieldKey::SiteCode), Some("b2b"));
        assert!(fields
            .get(FieldKey::SiteCode)
            .unwrap()
            .code
            .contains(r#"<option value="b2b" selected="selected">"#));
        assert!(fields.get(FieldKey::Config).unwrap().code.contains("a &lt;b&gt;"));
    }

    #[test]
    fn accepts_offered_selection() {
        let result =
            FieldProvider::<JobsTask>::validate_fields(&BaseProvider, &valid(), &context(FormAction::Add), &());
        assert!(result.is_ok());
    }

    #[test]
    fn rejects_missing_site() {
        let data = SubmittedData::new().with(FieldKey::Controller, "order/email/payment");
        let err =
            FieldProvider::<JobsTask>::validate_fields(&BaseProvider, &data, &context(FormAction::Add), &())
                .unwrap_err();
        assert_eq!(err.field, FieldKey::SiteCode);
        assert!(err.message.ends_with("default.error.sitecode"));
    }

    #[test]
    fn rejects_controller_the_host_does_not_offer() {
        let data = valid().with(FieldKey::Controller, "order/email/payment,admin/cache");
        let err =
            FieldProvider::<JobsTask>::validate_fields(&BaseProvider, &data, &context(FormAction::Add), &())
                .unwrap_err();
        assert_eq!(err.field, FieldKey::Controller);
    }

    #[test]
    fn saves_lists_and_config() {
        let submission = assume_valid(
            JobsTask::TYPE,
            valid()
                .with(FieldKey::SiteCode, "default, b2b")
                .with(FieldKey::Config, "x = 1"),
        );
        let mut task = JobsTask::default();
        BaseProvider.save_fields(&submission, &mut task);

        assert_eq!(task.base.sites, vec!["default", "b2b"]);
        assert_eq!(task.base.controllers, vec!["order/email/payment"]);
        assert_eq!(task.base.config, "x = 1");
    }
}
