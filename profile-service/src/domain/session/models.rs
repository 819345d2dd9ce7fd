use std::fmt;

use auth::SecretDigest;
use uuid::Uuid;

/// Profile unique identifier type.
///
/// Opaque 128-bit subject identity, assigned once at registration and
/// referenced by every token issued for the profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ProfileId(pub Uuid);

impl ProfileId {
    /// Generate a new random profile ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ProfileId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ProfileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Credential record returned by a username lookup.
///
/// Holds only what the login flow needs: the identity and the password
/// digest. Plaintext secrets never appear here (only their digests are
/// persisted).
#[derive(Debug, Clone)]
pub struct StoredCredential {
    pub profile_id: ProfileId,
    pub password_digest: SecretDigest,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_ids_are_unique() {
        assert_ne!(ProfileId::new(), ProfileId::new());
    }

    #[test]
    fn test_profile_id_is_not_nil() {
        assert!(!ProfileId::new().0.is_nil());
    }
}
