use async_trait::async_trait;
use auth::SecretDigest;

use crate::domain::session::errors::CredentialStoreError;
use crate::domain::session::models::ProfileId;
use crate::domain::session::models::StoredCredential;

/// Persistence port for credentials and refresh digests.
///
/// The store is the only shared mutable resource in the session flows. Digest
/// writes must be atomic per profile: a digest is replaced as a whole, never
/// patched, and `replace_digest` must be conditioned on the previously read
/// value so two concurrent refreshes for one profile cannot both succeed.
#[async_trait]
pub trait CredentialStore: Send + Sync + 'static {
    /// Persist a new credential record under `username`.
    ///
    /// # Errors
    /// * `AlreadyExists` - Username is already registered
    /// * `PersistenceFailed` - Store write failed
    async fn create_credential(
        &self,
        username: &str,
        credential: StoredCredential,
    ) -> Result<(), CredentialStoreError>;

    /// Look up the identity and password digest for `username`.
    ///
    /// # Errors
    /// * `NotFound` - No credential under this username
    async fn find_credential(&self, username: &str)
        -> Result<StoredCredential, CredentialStoreError>;

    /// Fetch the stored refresh digest for a profile.
    ///
    /// # Errors
    /// * `NotFound` - No digest stored for this profile
    async fn find_digest(&self, profile_id: &ProfileId)
        -> Result<SecretDigest, CredentialStoreError>;

    /// Store a refresh digest, overwriting any prior value.
    ///
    /// Used on login, where the presented password already authenticated the
    /// caller. Must be atomic per profile.
    ///
    /// # Errors
    /// * `PersistenceFailed` - Store write failed
    async fn store_digest(
        &self,
        profile_id: &ProfileId,
        digest: SecretDigest,
    ) -> Result<(), CredentialStoreError>;

    /// Replace the stored refresh digest only if it still equals `expected`.
    ///
    /// Used on refresh: of two concurrent rotations for one profile, exactly
    /// one observes its expected digest and wins; the other fails `Conflict`.
    ///
    /// # Errors
    /// * `NotFound` - No digest stored for this profile
    /// * `Conflict` - Current digest is not `expected`
    /// * `PersistenceFailed` - Store write failed
    async fn replace_digest(
        &self,
        profile_id: &ProfileId,
        expected: &SecretDigest,
        digest: SecretDigest,
    ) -> Result<(), CredentialStoreError>;
}
