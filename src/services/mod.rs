// src/services/mod.rs
pub mod chat_client;
pub mod session;

pub use chat_client::{ChatService, HttpChatClient};
pub use session::{Session, SessionId};
