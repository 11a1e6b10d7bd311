// src/lib.rs
pub mod config;
pub mod error;
pub mod message;
pub mod services;
pub mod terminal;
pub mod widget;

pub use config::Config;
pub use error::{ChatError, ConfigError};
pub use services::{ChatService, HttpChatClient, SessionId};
pub use widget::ChatWidget;
