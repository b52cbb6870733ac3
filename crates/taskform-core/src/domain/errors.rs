//! Errors - エラー型
//!
//! - `ValidationError`: 入力値の形式エラー（どの field か + 翻訳済みメッセージ）
//! - `ProviderError`: provider / registry 層のエラー（task record の変換失敗など）

use thiserror::Error;

use super::field::FieldKey;

/// A submitted field is malformed.
///
/// `message` is already localized; it is what the user sees.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ValidationError {
    pub field: FieldKey,
    pub message: String,
}

impl ValidationError {
    pub fn new(field: FieldKey, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("task record for task_type={task_type} could not be decoded: {source}")]
    Decode {
        task_type: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("task record for task_type={task_type} could not be encoded: {source}")]
    Encode {
        task_type: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("no field provider registered for task_type={0}")]
    UnknownTaskType(String),

    #[error("submission validated for task_type={validated} cannot be saved as task_type={target}")]
    SubmissionMismatch { validated: String, target: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_displays_the_message_only() {
        let err = ValidationError::new(FieldKey::SenderEmail, "Invalid sender e-mail");
        assert_eq!(err.to_string(), "Invalid sender e-mail");
    }

    #[test]
    fn provider_error_wraps_validation_transparently() {
        let err: ProviderError = ValidationError::new(FieldKey::PageLogin, "bad").into();
        assert_eq!(err.to_string(), "bad");
        assert!(matches!(err, ProviderError::Validation(e) if e.field == FieldKey::PageLogin));
    }
}
