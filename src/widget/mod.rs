// src/widget/mod.rs
//! The conversation shell around a [`ChatService`]: open/closed state, the
//! displayed message list and a plain-text rendering of it.

pub mod input;
pub mod message;

use std::sync::Arc;

use tracing::warn;

use crate::{config::Config, services::ChatService};

pub use input::ChatInput;
pub use message::{Message, format_time};

pub const ERROR_REPLY: &str = "Sorry, I encountered an error. Please try again.";
pub const EMPTY_STATE: &str = "No messages yet. Start a conversation!";
pub const TYPING_INDICATOR: &str = "Bot is typing...";

pub struct ChatWidget<S: ChatService> {
    service: Arc<S>,
    title: String,
    button_icon: String,
    open: bool,
    loading: bool,
    messages: Vec<Message>,
}

impl<S: ChatService> ChatWidget<S> {
    pub fn new(service: Arc<S>, config: &Config) -> Self {
        Self {
            service,
            title: config.title.clone(),
            button_icon: config.button_icon.clone(),
            open: config.start_open,
            loading: false,
            messages: Vec::new(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn minimize(&mut self) {
        self.open = false;
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// Start over: new session on the service side, empty list here.
    pub fn reset(&mut self) {
        self.service.reset();
        self.messages.clear();
    }

    /// Post one user message and append whatever comes back.
    ///
    /// A failed exchange never reaches the list as-is; it is replaced by
    /// [`ERROR_REPLY`]. Blank text is ignored.
    pub async fn submit(&mut self, text: &str) {
        if let Some(text) = self.begin_submit(text) {
            self.finish_submit(&text).await;
        }
    }

    /// First half of [`submit`](Self::submit): show the user message and
    /// mark the widget as waiting. Returns the text to send, or `None` for
    /// blank input.
    pub fn begin_submit(&mut self, text: &str) -> Option<String> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }

        self.messages.push(Message::user(text));
        self.loading = true;
        Some(text.to_string())
    }

    /// Second half of [`submit`](Self::submit): wait for the reply and
    /// append it, or the error reply.
    pub async fn finish_submit(&mut self, text: &str) {
        let reply = match self.service.send(text).await {
            Ok(answer) => Message::bot(answer),
            Err(err) => {
                warn!(error = %err, "showing error reply");
                Message::bot(ERROR_REPLY)
            }
        };

        self.messages.push(reply);
        self.loading = false;
    }

    /// Render the widget as plain text lines.
    pub fn render(&self) -> Vec<String> {
        if !self.open {
            return vec![format!("[{}] {}", self.button_icon, self.title)];
        }

        let mut lines = vec![format!("== {} ==", self.title)];
        if self.messages.is_empty() {
            lines.push(EMPTY_STATE.to_string());
        } else {
            lines.extend(
                self.messages
                    .iter()
                    .map(|m| format!("[{}] {}: {}", m.time(), m.speaker(), m.text)),
            );
        }
        if self.loading {
            lines.push(TYPING_INDICATOR.to_string());
        }
        lines
    }
}
