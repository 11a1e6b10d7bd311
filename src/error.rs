// src/error.rs
use thiserror::Error;

/// Failure of a single chat exchange.
///
/// Network errors, non-2xx statuses and undecodable bodies all surface
/// through the same variant; callers are not expected to tell them apart.
#[derive(Debug, Error)]
pub enum ChatError {
    #[error("chat request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{var} must be set to a non-empty value")]
    Empty { var: &'static str },

    #[error("{var} must start with '/', got `{value}`")]
    RelativePath { var: &'static str, value: String },

    #[error("{var} must be an http(s) URL, got `{value}`")]
    BaseUrl { var: &'static str, value: String },

    #[error("{var} must be a boolean, got `{value}`")]
    Bool { var: &'static str, value: String },
}
