//! AppBuilder - provider の登録とワイヤリング
//!
//! # 学習ポイント
//! - Builder パターンの実装
//! - 起動時検証（Fail-fast 設計）

use serde_json::Value;

use crate::domain::{EmailTask, FieldSet, FormContext, JobsTask, ProviderError, SubmittedData, TaskInfo};
use crate::ports::{MessageSink, Translator};
use crate::providers::{EmailProvider, JobsProvider};
use crate::typed::{FieldProvider, ProviderRegistry, RegistryError, SchedulerTask, ValidatedSubmission};

/// AppBuilder は App を構築
///
/// # 使用例
/// ```ignore
/// let app = AppBuilder::new()
///     .register::<EmailTask, _>(EmailProvider::new())?
///     .expect_task_types(&["aimeos.email"])
///     .build()?;
/// ```
///
/// # Fail-fast 設計
/// - expect_task_types() で期待される task_type を登録
/// - build() 時に「期待集合 ⊆ 登録済み集合」をチェック
pub struct AppBuilder {
    registry: ProviderRegistry,
    expected_task_types: Option<Vec<String>>,
}

/// BuildError は App 構築時のエラー
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("Missing task types: {0:?}. These task types were expected but have no field provider.")]
    MissingTaskTypes(Vec<String>),
}

impl AppBuilder {
    pub fn new() -> Self {
        Self {
            registry: ProviderRegistry::new(),
            expected_task_types: None,
        }
    }

    /// Builder with the e-mail and jobs providers registered.
    pub fn with_aimeos_providers() -> Result<Self, RegistryError> {
        Self::new()
            .register::<EmailTask, _>(EmailProvider::new())?
            .register::<JobsTask, _>(JobsProvider::new())
    }

    pub fn register<T: SchedulerTask, P: FieldProvider<T> + 'static>(
        mut self,
        provider: P,
    ) -> Result<Self, RegistryError> {
        self.registry.register::<T, P>(provider)?;
        Ok(self)
    }

    pub fn expect_task_types(mut self, task_types: &[&str]) -> Self {
        self.expected_task_types = Some(task_types.iter().map(|t| t.to_string()).collect());
        self
    }

    pub fn build(self) -> Result<App, BuildError> {
        if let Some(expected) = &self.expected_task_types {
            let registered = self.registry.registered_types();
            let missing: Vec<String> = expected
                .iter()
                .filter(|t| !registered.contains(t))
                .cloned()
                .collect();
            if !missing.is_empty() {
                return Err(BuildError::MissingTaskTypes(missing));
            }
        }
        Ok(App {
            registry: self.registry,
        })
    }
}

impl Default for AppBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Entry point for a host that stores task records as JSON.
pub struct App {
    pub registry: ProviderRegistry,
}

impl App {
    pub fn get_fields(
        &self,
        task_type: &str,
        task_info: &mut TaskInfo,
        task: Option<&Value>,
        context: &FormContext,
        messages: &mut dyn MessageSink,
    ) -> Result<FieldSet, ProviderError> {
        let provider = self.registry.require(task_type)?;
        Ok(provider.get_fields_dyn(task_info, task, context, messages))
    }

    pub fn validate(
        &self,
        task_type: &str,
        data: &SubmittedData,
        context: &FormContext,
        translator: &dyn Translator,
        messages: &mut dyn MessageSink,
    ) -> Result<Option<ValidatedSubmission>, ProviderError> {
        let provider = self.registry.require(task_type)?;
        Ok(provider.accept_dyn(data, context, translator, messages))
    }

    pub fn save(&self, submission: &ValidatedSubmission, task: &mut Value) -> Result<(), ProviderError> {
        let provider = self.registry.require(submission.task_type())?;
        provider.save_dyn(submission, task)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{FieldKey, FormAction};
    use crate::impls::FlashMessages;
    use serde_json::json;

    #[test]
    fn test_build_success() {
        let app = AppBuilder::new()
            .register::<EmailTask, _>(EmailProvider::new())
            .unwrap()
            .expect_task_types(&[EmailTask::TYPE])
            .build();
        assert!(app.is_ok());
    }

    #[test]
    fn test_build_missing_task_types() {
        let app = AppBuilder::new()
            .register::<EmailTask, _>(EmailProvider::new())
            .unwrap()
            .expect_task_types(&[EmailTask::TYPE, JobsTask::TYPE])
            .build();
        assert!(matches!(
            app,
            Err(BuildError::MissingTaskTypes(missing)) if missing == vec![JobsTask::TYPE.to_string()]
        ));
    }

    #[test]
    fn test_aimeos_providers_then_duplicate_registration_fails() {
        let result = AppBuilder::with_aimeos_providers()
            .unwrap()
            .register::<EmailTask, _>(EmailProvider::new());
        assert!(matches!(result, Err(RegistryError::AlreadyRegistered(t)) if t == EmailTask::TYPE));
    }

    #[test]
    fn test_build_with_aimeos_providers() {
        let app = AppBuilder::with_aimeos_providers()
            .unwrap()
            .expect_task_types(&[EmailTask::TYPE, JobsTask::TYPE])
            .build()
            .unwrap();
        assert_eq!(app.registry.len(), 2);
    }

    #[test]
    fn edit_validate_save_through_json_records() {
        let app = AppBuilder::with_aimeos_providers().unwrap().build().unwrap();
        let context = FormContext::new(FormAction::Edit)
            .with_sites(["default"])
            .with_controllers(["order/email/payment"]);
        let mut flash = FlashMessages::new();

        let stored = json!({ "uid": 3, "aimeos_sender_email": "old@example.com" });
        let mut info = TaskInfo::new();
        let fields = app
            .get_fields(EmailTask::TYPE, &mut info, Some(&stored), &context, &mut flash)
            .unwrap();
        assert_eq!(fields.len(), 10);
        assert_eq!(info.get(FieldKey::SenderEmail), Some("old@example.com"));

        let data = SubmittedData::new()
            .with(FieldKey::SenderEmail, "new@example.com")
            .with(FieldKey::PageCatalog, "1")
            .with(FieldKey::PageDetail, "2")
            .with(FieldKey::PageLogin, "3")
            .with(FieldKey::PageDownload, "4")
            .with(FieldKey::SiteCode, "default")
            .with(FieldKey::Controller, "order/email/payment");
        let submission = app
            .validate(EmailTask::TYPE, &data, &context, &(), &mut flash)
            .unwrap()
            .expect("valid submission");
        assert!(flash.is_empty());

        let mut task = stored.clone();
        app.save(&submission, &mut task).unwrap();
        assert_eq!(task["uid"], 3);
        assert_eq!(task["aimeos_sender_email"], "new@example.com");
        assert_eq!(task["aimeos_reply_email"], "");
        assert_eq!(task["aimeos_sitecode"], json!(["default"]));
    }

    #[test]
    fn rejected_submission_posts_a_notice() {
        let app = AppBuilder::with_aimeos_providers().unwrap().build().unwrap();
        let mut flash = FlashMessages::new();
        let data = SubmittedData::new().with(FieldKey::SenderEmail, "not-an-email");

        let submission = app
            .validate(EmailTask::TYPE, &data, &FormContext::default(), &(), &mut flash)
            .unwrap();

        assert!(submission.is_none());
        assert_eq!(flash.messages()[0].text, FieldKey::SenderEmail.error_key());
    }

    #[test]
    fn unknown_task_type_is_an_error() {
        let app = AppBuilder::new().build().unwrap();
        let mut flash = FlashMessages::new();
        let err = app
            .get_fields("aimeos.unknown", &mut TaskInfo::new(), None, &FormContext::default(), &mut flash)
            .unwrap_err();
        assert!(matches!(err, ProviderError::UnknownTaskType(_)));
    }
}
