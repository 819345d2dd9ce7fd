use std::collections::HashMap;

use async_trait::async_trait;
use auth::SecretDigest;
use tokio::sync::Mutex;

use crate::domain::session::errors::CredentialStoreError;
use crate::domain::session::models::ProfileId;
use crate::domain::session::models::StoredCredential;
use crate::domain::session::ports::CredentialStore;

/// In-memory credential store.
///
/// Deterministic implementation of [`CredentialStore`] for tests and local
/// runs. A single mutex guards both maps, which gives every operation the
/// per-profile atomic read-then-replace semantics the port requires.
pub struct InMemoryCredentialStore {
    inner: Mutex<Inner>,
}

#[derive(Default)]
struct Inner {
    credentials: HashMap<String, StoredCredential>,
    refresh_digests: HashMap<ProfileId, SecretDigest>,
}

impl InMemoryCredentialStore {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Inner::default()),
        }
    }
}

impl Default for InMemoryCredentialStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CredentialStore for InMemoryCredentialStore {
    async fn create_credential(
        &self,
        username: &str,
        credential: StoredCredential,
    ) -> Result<(), CredentialStoreError> {
        let mut inner = self.inner.lock().await;

        if inner.credentials.contains_key(username) {
            return Err(CredentialStoreError::AlreadyExists);
        }

        inner.credentials.insert(username.to_string(), credential);
        Ok(())
    }

    async fn find_credential(
        &self,
        username: &str,
    ) -> Result<StoredCredential, CredentialStoreError> {
        self.inner
            .lock()
            .await
            .credentials
            .get(username)
            .cloned()
            .ok_or(CredentialStoreError::NotFound)
    }

    async fn find_digest(
        &self,
        profile_id: &ProfileId,
    ) -> Result<SecretDigest, CredentialStoreError> {
        self.inner
            .lock()
            .await
            .refresh_digests
            .get(profile_id)
            .cloned()
            .ok_or(CredentialStoreError::NotFound)
    }

    async fn store_digest(
        &self,
        profile_id: &ProfileId,
        digest: SecretDigest,
    ) -> Result<(), CredentialStoreError> {
        self.inner
            .lock()
            .await
            .refresh_digests
            .insert(*profile_id, digest);
        Ok(())
    }

    async fn replace_digest(
        &self,
        profile_id: &ProfileId,
        expected: &SecretDigest,
        digest: SecretDigest,
    ) -> Result<(), CredentialStoreError> {
        let mut inner = self.inner.lock().await;

        let current = inner
            .refresh_digests
            .get(profile_id)
            .ok_or(CredentialStoreError::NotFound)?;

        if current != expected {
            return Err(CredentialStoreError::Conflict);
        }

        inner.refresh_digests.insert(*profile_id, digest);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn digest(value: &str) -> SecretDigest {
        SecretDigest::new(value.to_string())
    }

    fn credential() -> StoredCredential {
        StoredCredential {
            profile_id: ProfileId::new(),
            password_digest: digest("$argon2id$stub"),
        }
    }

    #[tokio::test]
    async fn test_create_and_find_credential() {
        let store = InMemoryCredentialStore::new();
        let created = credential();

        store
            .create_credential("alice", created.clone())
            .await
            .expect("Failed to create credential");

        let found = store
            .find_credential("alice")
            .await
            .expect("Credential missing");
        assert_eq!(found.profile_id, created.profile_id);

        let result = store.find_credential("bob").await;
        assert!(matches!(result, Err(CredentialStoreError::NotFound)));
    }

    #[tokio::test]
    async fn test_create_duplicate_username() {
        let store = InMemoryCredentialStore::new();

        store
            .create_credential("alice", credential())
            .await
            .expect("Failed to create credential");

        let result = store.create_credential("alice", credential()).await;
        assert!(matches!(result, Err(CredentialStoreError::AlreadyExists)));
    }

    #[tokio::test]
    async fn test_store_digest_overwrites() {
        let store = InMemoryCredentialStore::new();
        let id = ProfileId::new();

        store
            .store_digest(&id, digest("first"))
            .await
            .expect("Failed to store digest");
        store
            .store_digest(&id, digest("second"))
            .await
            .expect("Failed to store digest");

        let found = store.find_digest(&id).await.expect("Digest missing");
        assert_eq!(found, digest("second"));
    }

    #[tokio::test]
    async fn test_replace_digest_requires_expected_value() {
        let store = InMemoryCredentialStore::new();
        let id = ProfileId::new();

        store
            .store_digest(&id, digest("current"))
            .await
            .expect("Failed to store digest");

        // Stale expectation loses
        let result = store
            .replace_digest(&id, &digest("stale"), digest("next"))
            .await;
        assert!(matches!(result, Err(CredentialStoreError::Conflict)));

        // Matching expectation wins
        store
            .replace_digest(&id, &digest("current"), digest("next"))
            .await
            .expect("Failed to replace digest");

        let found = store.find_digest(&id).await.expect("Digest missing");
        assert_eq!(found, digest("next"));
    }

    #[tokio::test]
    async fn test_replace_digest_missing_profile() {
        let store = InMemoryCredentialStore::new();

        let result = store
            .replace_digest(&ProfileId::new(), &digest("any"), digest("next"))
            .await;
        assert!(matches!(result, Err(CredentialStoreError::NotFound)));
    }
}
