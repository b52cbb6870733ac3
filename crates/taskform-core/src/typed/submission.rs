//! ValidatedSubmission - 検証済みの送信データ
//!
//! save は検証に成功したデータしか受け取らない、という前提を型で表現します。
//! crate の外からはこの型を作れません。

use crate::domain::{FieldKey, SubmittedData};

/// Submitted form data that passed a provider's validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedSubmission {
    task_type: &'static str,
    data: SubmittedData,
}

impl ValidatedSubmission {
    pub(crate) fn new(task_type: &'static str, data: SubmittedData) -> Self {
        Self { task_type, data }
    }

    /// Task type of the provider that validated the data.
    pub fn task_type(&self) -> &'static str {
        self.task_type
    }

    pub fn data(&self) -> &SubmittedData {
        &self.data
    }

    /// The submitted value, or the empty string when the key is absent.
    pub fn value(&self, key: FieldKey) -> &str {
        self.data.value(key)
    }

    pub fn list(&self, key: FieldKey) -> Vec<&str> {
        self.data.list(key)
    }

    pub fn into_inner(self) -> SubmittedData {
        self.data
    }
}

#[cfg(test)]
pub(crate) fn assume_valid(task_type: &'static str, data: SubmittedData) -> ValidatedSubmission {
    ValidatedSubmission::new(task_type, data)
}
