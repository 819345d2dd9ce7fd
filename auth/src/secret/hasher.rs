use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::Error as PasswordHashError;
use argon2::password_hash::PasswordHash;
use argon2::password_hash::PasswordHasher as Argon2PasswordHasher;
use argon2::password_hash::PasswordVerifier;
use argon2::password_hash::SaltString;
use argon2::Algorithm;
use argon2::Argon2;
use argon2::Params;
use argon2::Version;

use super::errors::SecretError;

/// One-way hash of a secret in PHC string format.
///
/// Carries the algorithm, parameters, salt, and hash output. Opaque to
/// callers: digests are compared through [`SecretHasher::verify`], never
/// reversed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecretDigest(String);

impl SecretDigest {
    /// Wrap an already-stored PHC string.
    pub fn new(phc: String) -> Self {
        Self(phc)
    }

    /// Get the digest as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// One-way hasher for passwords and refresh-token fingerprints.
///
/// Internally uses Argon2id with a random salt per call, so hashing the same
/// input twice yields different digests.
pub struct SecretHasher {
    argon2: Argon2<'static>,
}

impl SecretHasher {
    /// Create a hasher with the given time-cost factor (iterations).
    ///
    /// Memory and parallelism stay at the argon2 defaults; only the time
    /// cost is tunable through configuration.
    ///
    /// # Errors
    /// * `InvalidCost` - Cost factor is outside the algorithm's valid range
    pub fn new(cost: u32) -> Result<Self, SecretError> {
        let params = Params::new(Params::DEFAULT_M_COST, cost, Params::DEFAULT_P_COST, None)
            .map_err(|e| SecretError::InvalidCost(e.to_string()))?;

        Ok(Self {
            argon2: Argon2::new(Algorithm::Argon2id, Version::V0x13, params),
        })
    }

    /// Hash secret bytes with a freshly generated salt.
    ///
    /// # Errors
    /// * `EmptyInput` - Secret has zero length
    /// * `HashingFailed` - Hashing operation failed
    pub fn hash(&self, secret: &[u8]) -> Result<SecretDigest, SecretError> {
        if secret.is_empty() {
            return Err(SecretError::EmptyInput);
        }

        let salt = SaltString::generate(&mut OsRng);

        self.argon2
            .hash_password(secret, &salt)
            .map(|hash| SecretDigest(hash.to_string()))
            .map_err(|e| SecretError::HashingFailed(e.to_string()))
    }

    /// Verify secret bytes against a stored digest.
    ///
    /// Succeeds only on exact match. Comparison timing safety is that of the
    /// underlying argon2 implementation.
    ///
    /// # Errors
    /// * `EmptyInput` - Secret or digest is empty
    /// * `Mismatch` - Secret does not correspond to the digest
    /// * `InvalidDigest` - Digest is not a parsable PHC string
    pub fn verify(&self, digest: &SecretDigest, secret: &[u8]) -> Result<(), SecretError> {
        if digest.is_empty() || secret.is_empty() {
            return Err(SecretError::EmptyInput);
        }

        let parsed_digest = PasswordHash::new(digest.as_str())
            .map_err(|e| SecretError::InvalidDigest(e.to_string()))?;

        match self.argon2.verify_password(secret, &parsed_digest) {
            Ok(()) => Ok(()),
            Err(PasswordHashError::Password) => Err(SecretError::Mismatch),
            Err(e) => Err(SecretError::InvalidDigest(e.to_string())),
        }
    }
}
