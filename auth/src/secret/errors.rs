use thiserror::Error;

/// Error type for secret hashing operations.
#[derive(Debug, Clone, Error)]
pub enum SecretError {
    #[error("Secret or digest is empty")]
    EmptyInput,

    #[error("Secret does not match digest")]
    Mismatch,

    #[error("Invalid hashing cost factor: {0}")]
    InvalidCost(String),

    #[error("Secret hashing failed: {0}")]
    HashingFailed(String),

    #[error("Invalid digest encoding: {0}")]
    InvalidDigest(String),
}
