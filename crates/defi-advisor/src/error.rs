//! Error Types for the DeFi Advisor

use thiserror::Error;

pub type Result<T> = std::result::Result<T, AdvisorError>;

#[derive(Error, Debug)]
pub enum AdvisorError {
    #[error("Upstream unavailable: {0}")]
    Upstream(String),

    #[error("RPC error {code}: {message}")]
    Rpc { code: i64, message: String },

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Address rejected: {0}")]
    InvalidAddress(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl AdvisorError {
    /// One-line message suitable for the `{error: ...}` report section.
    pub fn report_message(&self) -> String {
        match self {
            Self::Upstream(msg) => format!("Chain data source unreachable: {msg}"),
            Self::Rpc { message, .. } => format!("Fullnode rejected the request: {message}"),
            Self::MalformedResponse(msg) => format!("Unexpected fullnode response: {msg}"),
            Self::InvalidAddress(msg) => format!("Address rejected: {msg}"),
            Self::Config(msg) => format!("Configuration error: {msg}"),
            Self::Network(err) => format!("Network failure: {err}"),
            Self::Serialization(err) => format!("Serialization failure: {err}"),
        }
    }
}
