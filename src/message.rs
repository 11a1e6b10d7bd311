// src/message.rs
use serde::{Deserialize, Serialize};

/// Body posted to the chat backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest {
    pub chat_id: String,
    pub user_input: String,
}

/// Body returned by the chat backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatResponse {
    #[serde(default)]
    pub chat_id: Option<String>,
    pub answer: String,
}

impl ChatResponse {
    /// The server-assigned chat id, if it sent a usable one.
    pub fn session_id(&self) -> Option<&str> {
        self.chat_id.as_deref().filter(|id| !id.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_uses_camel_case_fields() {
        let req = ChatRequest {
            chat_id: "abc".to_string(),
            user_input: "hi".to_string(),
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json, serde_json::json!({ "chatId": "abc", "userInput": "hi" }));
    }

    #[test]
    fn response_without_chat_id_is_accepted() {
        let resp: ChatResponse = serde_json::from_str(r#"{"answer": "hello"}"#).unwrap();
        assert_eq!(resp.answer, "hello");
        assert_eq!(resp.session_id(), None);
    }

    #[test]
    fn empty_chat_id_is_not_a_session_id() {
        let resp: ChatResponse =
            serde_json::from_str(r#"{"chatId": "", "answer": "hello"}"#).unwrap();
        assert_eq!(resp.session_id(), None);
    }

    #[test]
    fn response_without_answer_is_rejected() {
        let parsed = serde_json::from_str::<ChatResponse>(r#"{"chatId": "U1"}"#);
        assert!(parsed.is_err());
    }
}
