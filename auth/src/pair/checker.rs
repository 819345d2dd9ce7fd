use chrono::Utc;
use uuid::Uuid;

use super::errors::PairError;
use super::issuer::TokenPair;
use crate::jwt::TokenClaims;
use crate::jwt::TokenCodec;
use crate::jwt::TokenKind;

/// Validates that a presented token pair is internally consistent.
///
/// Refresh-token expiry is authoritative for whether a refresh may proceed.
/// Access-token expiry is not checked: an expired access token alongside a
/// live refresh token is the normal reason a client refreshes.
pub struct TokenConsistencyChecker {
    codec: TokenCodec,
}

impl TokenConsistencyChecker {
    /// Create a checker over the given codec.
    pub fn new(codec: TokenCodec) -> Self {
        Self { codec }
    }

    /// Check a presented pair and return the shared subject.
    ///
    /// # Errors
    /// * `Token` - Either token is malformed, mis-signed, or mis-algorithmed
    /// * `KindMismatch` - A token was presented in the wrong slot
    /// * `SubjectMismatch` - Access and refresh subjects differ
    /// * `RefreshExpired` - Refresh token expired at or before now
    pub fn check(&self, pair: &TokenPair) -> Result<Uuid, PairError> {
        let access = self.codec.decode(&pair.access)?;
        let refresh = self.codec.decode(&pair.refresh)?;

        Self::expect_kind(&access, TokenKind::Access)?;
        Self::expect_kind(&refresh, TokenKind::Refresh)?;

        if access.sub != refresh.sub {
            return Err(PairError::SubjectMismatch);
        }

        if refresh.is_expired(Utc::now().timestamp()) {
            return Err(PairError::RefreshExpired);
        }

        Ok(access.sub)
    }

    fn expect_kind(claims: &TokenClaims, expected: TokenKind) -> Result<(), PairError> {
        if claims.kind != expected {
            return Err(PairError::KindMismatch {
                expected,
                actual: claims.kind,
            });
        }
        Ok(())
    }
}
