//! FieldProvider trait - task_type ごとの追加 field の定義・検証・保存
//!
//! # 学習ポイント
//! - ジェネリック trait (`FieldProvider<T>`)
//! - 共通の振る舞い（base provider）への委譲

use crate::domain::{FieldSet, FormContext, ProviderError, SubmittedData, TaskInfo, ValidationError};
use crate::ports::Translator;

use super::submission::ValidatedSubmission;
use super::task::SchedulerTask;

/// Contributes additional form fields for task records of type `T`.
///
/// Call order driven by the host: `get_fields` while the add/edit form is
/// shown, `validate_fields` on submit, `save_fields` only after validation
/// succeeded (enforced by [`ValidatedSubmission`]).
pub trait FieldProvider<T: SchedulerTask>: Send + Sync {
    /// Build the descriptors of this provider's fields.
    ///
    /// In edit mode, fields the form carries no value for are filled in
    /// `task_info` from the stored task.
    fn get_fields(
        &self,
        task_info: &mut TaskInfo,
        task: Option<&T>,
        context: &FormContext,
    ) -> Result<FieldSet, ProviderError>;

    /// Check the submitted values; the first malformed field fails the call.
    fn validate_fields(
        &self,
        data: &SubmittedData,
        context: &FormContext,
        translator: &dyn Translator,
    ) -> Result<(), ValidationError>;

    /// Copy validated values onto the task record.
    fn save_fields(&self, submission: &ValidatedSubmission, task: &mut T);
}
