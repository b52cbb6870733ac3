//! Host 境界 - provider を scheduler module から呼べる形にする
//!
//! # 学習ポイント
//! - Type erasure パターン (`AdditionalFieldProvider<T, P>` → `DynProvider`)
//! - エラーの封じ込め: host に例外を返さず、通知 + 安全な既定値に変換する

use std::marker::PhantomData;

use serde_json::Value;
use tracing::{debug, warn};

use crate::domain::{FieldSet, FormContext, ProviderError, SubmittedData, TaskInfo};
use crate::ports::{MessageSink, Severity, Translator};

use super::provider::FieldProvider;
use super::submission::ValidatedSubmission;
use super::task::SchedulerTask;

/// Binds a [`FieldProvider`] to its task record type and contains its errors.
///
/// `get_additional_fields` and `validate_additional_fields` never fail: any
/// error is posted to the message sink and a safe default is returned
/// (empty field set / `false`).
pub struct AdditionalFieldProvider<T: SchedulerTask, P: FieldProvider<T>> {
    provider: P,
    _marker: PhantomData<T>,
}

impl<T: SchedulerTask, P: FieldProvider<T>> AdditionalFieldProvider<T, P> {
    pub fn new(provider: P) -> Self {
        Self {
            provider,
            _marker: PhantomData,
        }
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    pub fn get_additional_fields(
        &self,
        task_info: &mut TaskInfo,
        task: Option<&T>,
        context: &FormContext,
        messages: &mut dyn MessageSink,
    ) -> FieldSet {
        match self.provider.get_fields(task_info, task, context) {
            Ok(fields) => fields,
            Err(e) => {
                warn!(task_type = T::TYPE, error = %e, "building additional fields failed");
                messages.add_message(&e.to_string(), Severity::Error);
                FieldSet::new()
            }
        }
    }

    pub fn validate_additional_fields(
        &self,
        data: &SubmittedData,
        context: &FormContext,
        translator: &dyn Translator,
        messages: &mut dyn MessageSink,
    ) -> bool {
        self.accept_submission(data, context, translator, messages)
            .is_some()
    }

    /// Validate and, on success, hand out the token `save_additional_fields`
    /// requires.
    pub fn accept_submission(
        &self,
        data: &SubmittedData,
        context: &FormContext,
        translator: &dyn Translator,
        messages: &mut dyn MessageSink,
    ) -> Option<ValidatedSubmission> {
        match self.provider.validate_fields(data, context, translator) {
            Ok(()) => Some(ValidatedSubmission::new(T::TYPE, data.clone())),
            Err(e) => {
                debug!(task_type = T::TYPE, field = %e.field, "submission rejected");
                messages.add_message(&e.message, Severity::Error);
                None
            }
        }
    }

    /// Copy a validated submission onto the task record.
    ///
    /// Fails only when the submission was validated for another task type.
    pub fn save_additional_fields(
        &self,
        submission: &ValidatedSubmission,
        task: &mut T,
    ) -> Result<(), ProviderError> {
        if submission.task_type() != T::TYPE {
            return Err(ProviderError::SubmissionMismatch {
                validated: submission.task_type().to_string(),
                target: T::TYPE.to_string(),
            });
        }
        self.provider.save_fields(submission, task);
        debug!(task_type = T::TYPE, "additional fields saved");
        Ok(())
    }
}

/// DynProvider は object-safe な provider の抽象化
///
/// task record は host の永続化層が持つ JSON object のまま受け渡します。
/// `HashMap<String, Arc<dyn DynProvider>>` に格納できます。
pub trait DynProvider: Send + Sync {
    fn task_type(&self) -> &'static str;

    fn get_fields_dyn(
        &self,
        task_info: &mut TaskInfo,
        task: Option<&Value>,
        context: &FormContext,
        messages: &mut dyn MessageSink,
    ) -> FieldSet;

    fn accept_dyn(
        &self,
        data: &SubmittedData,
        context: &FormContext,
        translator: &dyn Translator,
        messages: &mut dyn MessageSink,
    ) -> Option<ValidatedSubmission>;

    /// Save into a JSON task record. Attributes this provider does not know
    /// are kept; a `null` record is replaced by a fresh object.
    fn save_dyn(&self, submission: &ValidatedSubmission, task: &mut Value) -> Result<(), ProviderError>;
}

impl<T: SchedulerTask, P: FieldProvider<T>> DynProvider for AdditionalFieldProvider<T, P> {
    fn task_type(&self) -> &'static str {
        T::TYPE
    }

    fn get_fields_dyn(
        &self,
        task_info: &mut TaskInfo,
        task: Option<&Value>,
        context: &FormContext,
        messages: &mut dyn MessageSink,
    ) -> FieldSet {
        let record = match task.map(decode::<T>).transpose() {
            Ok(record) => record,
            Err(e) => {
                warn!(task_type = T::TYPE, error = %e, "building additional fields failed");
                messages.add_message(&e.to_string(), Severity::Error);
                return FieldSet::new();
            }
        };
        self.get_additional_fields(task_info, record.as_ref(), context, messages)
    }

    fn accept_dyn(
        &self,
        data: &SubmittedData,
        context: &FormContext,
        translator: &dyn Translator,
        messages: &mut dyn MessageSink,
    ) -> Option<ValidatedSubmission> {
        self.accept_submission(data, context, translator, messages)
    }

    fn save_dyn(&self, submission: &ValidatedSubmission, task: &mut Value) -> Result<(), ProviderError> {
        let mut record = if task.is_null() {
            T::default()
        } else {
            decode::<T>(task)?
        };
        self.save_additional_fields(submission, &mut record)?;

        let encoded = serde_json::to_value(&record).map_err(|source| ProviderError::Encode {
            task_type: T::TYPE.to_string(),
            source,
        })?;
        merge_into(task, encoded);
        Ok(())
    }
}

fn decode<T: SchedulerTask>(value: &Value) -> Result<T, ProviderError> {
    serde_json::from_value(value.clone()).map_err(|source| ProviderError::Decode {
        task_type: T::TYPE.to_string(),
        source,
    })
}

fn merge_into(target: &mut Value, encoded: Value) {
    match (&mut *target, encoded) {
        (Value::Object(dst), Value::Object(src)) => {
            for (k, v) in src {
                dst.insert(k, v);
            }
        }
        (slot, other) => *slot = other,
    }
}
