use chrono::Duration;
use uuid::Uuid;

use crate::jwt::TokenCodec;
use crate::jwt::TokenError;
use crate::jwt::TokenKind;

/// An access/refresh token pair issued together for one subject.
///
/// Never issued partially: both tokens exist or neither does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenPair {
    pub access: String,
    pub refresh: String,
}

/// Issues access/refresh pairs with independent expirations.
///
/// A short access TTL keeps the exposure window small while the refresh
/// token persists across sessions.
pub struct TokenPairIssuer {
    codec: TokenCodec,
    access_ttl: Duration,
    refresh_ttl: Duration,
}

impl TokenPairIssuer {
    /// Create an issuer over the given codec and TTLs.
    pub fn new(codec: TokenCodec, access_ttl: Duration, refresh_ttl: Duration) -> Self {
        Self {
            codec,
            access_ttl,
            refresh_ttl,
        }
    }

    /// Issue a token pair for `subject`.
    ///
    /// Both tokens carry the same subject, so `access.sub == refresh.sub`
    /// holds by construction.
    ///
    /// # Errors
    /// * `InvalidSubject` - Subject is the nil UUID
    /// * `EncodingFailed` - Token signing failed
    pub fn issue(&self, subject: Uuid) -> Result<TokenPair, TokenError> {
        if subject.is_nil() {
            return Err(TokenError::InvalidSubject);
        }

        let access = self
            .codec
            .encode(subject, TokenKind::Access, self.access_ttl)?;
        let refresh = self
            .codec
            .encode(subject, TokenKind::Refresh, self.refresh_ttl)?;

        Ok(TokenPair { access, refresh })
    }
}
