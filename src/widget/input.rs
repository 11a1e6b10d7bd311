// src/widget/input.rs

/// Text box the user types into before a message is sent.
#[derive(Debug, Default, Clone)]
pub struct ChatInput {
    buffer: String,
}

impl ChatInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self) -> &str {
        &self.buffer
    }

    pub fn set_value(&mut self, value: impl Into<String>) {
        self.buffer = value.into();
    }

    /// Adds a line break without sending.
    pub fn newline(&mut self) {
        self.buffer.push('\n');
    }

    pub fn push_str(&mut self, text: &str) {
        self.buffer.push_str(text);
    }

    /// Whether the send action is enabled.
    pub fn can_send(&self) -> bool {
        !self.buffer.trim().is_empty()
    }

    /// Take the trimmed text out of the box. Blank input stays put and
    /// yields nothing.
    pub fn submit(&mut self) -> Option<String> {
        if !self.can_send() {
            return None;
        }
        let text = self.buffer.trim().to_string();
        self.buffer.clear();
        Some(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn send_disabled_when_empty() {
        let mut input = ChatInput::new();
        assert!(!input.can_send());
        input.set_value("Hello");
        assert!(input.can_send());
    }

    #[test]
    fn submit_trims_and_clears() {
        let mut input = ChatInput::new();
        input.set_value("  Test message \n");
        assert_eq!(input.submit().as_deref(), Some("Test message"));
        assert_eq!(input.value(), "");
    }

    #[test]
    fn blank_input_is_not_submitted() {
        let mut input = ChatInput::new();
        input.set_value("   ");
        assert_eq!(input.submit(), None);
        assert_eq!(input.value(), "   ");
    }

    #[test]
    fn newline_keeps_multiline_text() {
        let mut input = ChatInput::new();
        input.push_str("first");
        input.newline();
        input.push_str("second");
        assert_eq!(input.submit().as_deref(), Some("first\nsecond"));
    }
}
