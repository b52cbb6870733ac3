//! MessageSink port - host に表示する通知の受け口

use serde::{Deserialize, Serialize};

/// Severity of a user-visible notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Warning,
    Error,
}

/// MessageSink collects notices the host shows above the task form.
pub trait MessageSink {
    fn add_message(&mut self, text: &str, severity: Severity);
}
