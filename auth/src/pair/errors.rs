use thiserror::Error;

use crate::jwt::TokenError;
use crate::jwt::TokenKind;

/// Error type for token-pair validation.
#[derive(Debug, Clone, Error)]
pub enum PairError {
    #[error(transparent)]
    Token(#[from] TokenError),

    #[error("The {expected} slot holds a {actual} token")]
    KindMismatch {
        expected: TokenKind,
        actual: TokenKind,
    },

    #[error("Access and refresh tokens name different subjects")]
    SubjectMismatch,

    #[error("Refresh token is expired")]
    RefreshExpired,
}
