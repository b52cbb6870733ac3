use serde::Serialize;

use crate::ports::{MessageSink, Severity};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FlashMessage {
    pub text: String,
    pub severity: Severity,
}

/// Collects notices in order so the caller can display them after the call.
#[derive(Debug, Clone, Default)]
pub struct FlashMessages {
    messages: Vec<FlashMessage>,
}

impl FlashMessages {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> &[FlashMessage] {
        &self.messages
    }

    pub fn take(&mut self) -> Vec<FlashMessage> {
        std::mem::take(&mut self.messages)
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

impl MessageSink for FlashMessages {
    fn add_message(&mut self, text: &str, severity: Severity) {
        self.messages.push(FlashMessage {
            text: text.to_string(),
            severity,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_messages_in_order_until_taken() {
        let mut flash = FlashMessages::new();
        flash.add_message("first", Severity::Error);
        flash.add_message("second", Severity::Info);

        assert_eq!(flash.messages().len(), 2);
        let taken = flash.take();
        assert_eq!(taken[0].text, "first");
        assert_eq!(taken[1].severity, Severity::Info);
        assert!(flash.is_empty());
    }
}
