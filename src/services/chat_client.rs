// src/services/chat_client.rs
use async_trait::async_trait;
use tracing::{debug, error, info};

use crate::{
    config::Config,
    error::ChatError,
    message::{ChatRequest, ChatResponse},
    services::session::{Session, SessionId},
};

/// What the widget needs from a chat backend.
#[async_trait]
pub trait ChatService: Send + Sync {
    /// Send one user message and return the reply text.
    async fn send(&self, text: &str) -> Result<String, ChatError>;

    /// Drop the current conversation and start a new one.
    fn reset(&self);
}

/// Chat client that talks JSON over HTTP and carries the session id along.
///
/// One POST per `send`, no retry and no timeout beyond what the underlying
/// `reqwest::Client` applies. Text is sent as given; trimming and blank
/// checks belong to the caller.
#[derive(Debug)]
pub struct HttpChatClient {
    http: reqwest::Client,
    endpoint: String,
    session: Session,
}

impl HttpChatClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self::with_session(endpoint, SessionId::generate())
    }

    pub fn with_session(endpoint: impl Into<String>, id: SessionId) -> Self {
        Self::with_http_client(reqwest::Client::new(), endpoint, id)
    }

    pub fn with_http_client(http: reqwest::Client, endpoint: impl Into<String>, id: SessionId) -> Self {
        Self {
            http,
            endpoint: endpoint.into(),
            session: Session::new(id),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.endpoint())
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// The id the next request will carry.
    pub fn session_id(&self) -> SessionId {
        self.session.current()
    }

    async fn exchange(&self, request: &ChatRequest) -> Result<ChatResponse, reqwest::Error> {
        self.http
            .post(&self.endpoint)
            .json(request)
            .send()
            .await?
            .error_for_status()?
            .json::<ChatResponse>()
            .await
    }
}

#[async_trait]
impl ChatService for HttpChatClient {
    async fn send(&self, text: &str) -> Result<String, ChatError> {
        let request = ChatRequest {
            chat_id: self.session.current().to_string(),
            user_input: text.to_string(),
        };
        debug!(chat_id = %request.chat_id, chars = text.chars().count(), "sending chat message");

        let response = match self.exchange(&request).await {
            Ok(response) => response,
            Err(err) => {
                error!(chat_id = %request.chat_id, error = %err, "error sending message to chat backend");
                return Err(err.into());
            }
        };

        if let Some(id) = response.session_id()
            && self.session.replace(SessionId::from(id))
        {
            info!(from = %request.chat_id, to = %id, "chat session id updated by server");
        }

        Ok(response.answer)
    }

    fn reset(&self) {
        let id = self.session.renew();
        info!(chat_id = %id, "chat session reset");
    }
}
