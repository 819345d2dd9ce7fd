use auth::PairError;
use auth::SecretError;
use auth::TokenError;
use thiserror::Error;

/// Error for credential store operations.
#[derive(Debug, Clone, Error)]
pub enum CredentialStoreError {
    #[error("Credential not found")]
    NotFound,

    #[error("Username is already registered")]
    AlreadyExists,

    #[error("Stored digest changed concurrently")]
    Conflict,

    #[error("Failed to persist to store: {0}")]
    PersistenceFailed(String),
}

/// Top-level error for session operations.
#[derive(Debug, Clone, Error)]
pub enum SessionError {
    #[error("Username or secret is empty")]
    EmptyInput,

    #[error("Token pair is incomplete")]
    EmptyPair,

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Profile not found")]
    NotFound,

    #[error("Username is already registered")]
    AlreadyRegistered,

    #[error("Failed to persist refresh digest: {0}")]
    PersistenceFailed(String),

    #[error(transparent)]
    Pair(#[from] PairError),

    #[error(transparent)]
    Token(#[from] TokenError),

    #[error(transparent)]
    Secret(#[from] SecretError),
}

impl SessionError {
    /// Collapse lookup misses into the generic credential failure.
    ///
    /// `NotFound` and `InvalidCredentials` stay distinct internally for
    /// logging; anything that crosses a trust boundary must not reveal
    /// which usernames exist.
    pub fn redacted(self) -> Self {
        match self {
            SessionError::NotFound => SessionError::InvalidCredentials,
            other => other,
        }
    }
}

impl From<CredentialStoreError> for SessionError {
    fn from(err: CredentialStoreError) -> Self {
        match err {
            CredentialStoreError::NotFound => SessionError::NotFound,
            CredentialStoreError::AlreadyExists => SessionError::AlreadyRegistered,
            // The losing side of a rotation race observes the updated
            // digest, indistinguishable from presenting a consumed token.
            CredentialStoreError::Conflict => SessionError::InvalidCredentials,
            CredentialStoreError::PersistenceFailed(msg) => SessionError::PersistenceFailed(msg),
        }
    }
}
