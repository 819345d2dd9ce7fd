use std::fmt;

use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;
use uuid::Uuid;

/// Which slot of a token pair a token belongs to.
///
/// Encoded into every token so a token presented in the wrong slot can be
/// rejected instead of relying on caller bookkeeping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenKind {
    Access,
    Refresh,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Access => write!(f, "access"),
            TokenKind::Refresh => write!(f, "refresh"),
        }
    }
}

/// Fixed claim structure carried by every issued token.
///
/// No optional fields and no untyped claim map: a token always names its
/// subject, its expiration, and its kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenClaims {
    /// Subject (profile identifier)
    pub sub: Uuid,

    /// Expiration time (Unix timestamp)
    pub exp: i64,

    /// Access or refresh slot
    pub kind: TokenKind,
}

impl TokenClaims {
    /// Build claims expiring `ttl` from now.
    ///
    /// A negative `ttl` produces an already-expired token.
    pub fn new(subject: Uuid, kind: TokenKind, ttl: Duration) -> Self {
        let expires_at = Utc::now() + ttl;

        Self {
            sub: subject,
            exp: expires_at.timestamp(),
            kind,
        }
    }

    /// Check expiration against the given Unix timestamp.
    ///
    /// A token expiring exactly now is treated as expired.
    pub fn is_expired(&self, now: i64) -> bool {
        self.exp <= now
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_claims_expiration() {
        let subject = Uuid::new_v4();
        let claims = TokenClaims::new(subject, TokenKind::Access, Duration::minutes(15));

        assert_eq!(claims.sub, subject);
        assert_eq!(claims.kind, TokenKind::Access);

        let now = Utc::now().timestamp();
        assert!(!claims.is_expired(now));
        assert!(claims.is_expired(now + 16 * 60));
    }

    #[test]
    fn test_negative_ttl_is_expired() {
        let claims = TokenClaims::new(Uuid::new_v4(), TokenKind::Refresh, Duration::minutes(-1));
        assert!(claims.is_expired(Utc::now().timestamp()));
    }

    #[test]
    fn test_is_expired_at_boundary() {
        let claims = TokenClaims {
            sub: Uuid::new_v4(),
            exp: 1000,
            kind: TokenKind::Refresh,
        };

        assert!(!claims.is_expired(999));
        assert!(claims.is_expired(1000));
        assert!(claims.is_expired(1001));
    }
}
