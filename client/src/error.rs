//! Client error types

use thiserror::Error;

/// Errors returned by the Roster API client
///
/// `Validation` is the server rejecting the submitted name. Every other
/// variant is a transport failure: the server could not be reached or
/// answered with something the client does not understand.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("{0}")]
    Validation(String),

    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("Deserialization error: {0}")]
    Deserialization(String),
}

impl ClientError {
    /// True for failures that are not the server rejecting the input
    pub fn is_transport(&self) -> bool {
        !matches!(self, ClientError::Validation(_))
    }
}
