use thiserror::Error;

/// Error type for token encoding and decoding.
#[derive(Debug, Clone, Error)]
pub enum TokenError {
    #[error("Subject identifier is nil")]
    InvalidSubject,

    #[error("Failed to encode token: {0}")]
    EncodingFailed(String),

    #[error("Token is malformed: {0}")]
    Malformed(String),

    #[error("Token signed with unexpected algorithm")]
    UnexpectedAlgorithm,

    #[error("Token signature verification failed")]
    BadSignature,
}
