use std::sync::Arc;

use auth::SecretError;
use auth::SecretHasher;
use auth::TokenCodec;
use auth::TokenConsistencyChecker;
use auth::TokenPair;
use auth::TokenPairIssuer;
use sha2::Digest;
use sha2::Sha256;

use crate::config::AuthConfig;
use crate::domain::session::errors::SessionError;
use crate::domain::session::models::ProfileId;
use crate::domain::session::models::StoredCredential;
use crate::domain::session::ports::CredentialStore;

/// Session orchestrator: registration, login, and refresh rotation.
///
/// Holds no state of its own; all persistence goes through the injected
/// [`CredentialStore`]. Each successful refresh consumes the presented
/// refresh token by replacing the stored digest, so a captured refresh token
/// is usable at most once.
pub struct SessionService<S>
where
    S: CredentialStore,
{
    store: Arc<S>,
    hasher: SecretHasher,
    issuer: TokenPairIssuer,
    checker: TokenConsistencyChecker,
}

/// Refresh tokens are fingerprinted before slow-hashing, bounding the
/// hasher's input to 32 bytes regardless of token length.
fn refresh_fingerprint(token: &str) -> [u8; 32] {
    Sha256::digest(token.as_bytes()).into()
}

impl<S> SessionService<S>
where
    S: CredentialStore,
{
    /// Create a session service with an injected store and auth settings.
    ///
    /// # Errors
    /// * `Secret` - Configured hash cost is out of range
    pub fn new(store: Arc<S>, config: &AuthConfig) -> Result<Self, SessionError> {
        let hasher = SecretHasher::new(config.hash_cost)?;
        let codec = TokenCodec::new(config.secret.as_bytes());
        let issuer = TokenPairIssuer::new(codec.clone(), config.access_ttl(), config.refresh_ttl());
        let checker = TokenConsistencyChecker::new(codec);

        Ok(Self {
            store,
            hasher,
            issuer,
            checker,
        })
    }

    /// Register a new profile under `username`.
    ///
    /// Only the password's digest is persisted.
    ///
    /// # Errors
    /// * `EmptyInput` - Username or password is empty
    /// * `AlreadyRegistered` - Username is taken
    /// * `PersistenceFailed` - Store write failed
    pub async fn register(&self, username: &str, password: &[u8]) -> Result<ProfileId, SessionError> {
        if username.is_empty() {
            return Err(SessionError::EmptyInput);
        }

        let password_digest = self.hasher.hash(password).map_err(|e| match e {
            SecretError::EmptyInput => SessionError::EmptyInput,
            other => SessionError::Secret(other),
        })?;

        let profile_id = ProfileId::new();
        self.store
            .create_credential(
                username,
                StoredCredential {
                    profile_id,
                    password_digest,
                },
            )
            .await?;

        tracing::info!(%profile_id, "Profile registered");
        Ok(profile_id)
    }

    /// Verify a password and issue a fresh token pair.
    ///
    /// The new refresh token's digest overwrites any previously stored
    /// digest. If persistence fails the minted pair is discarded; nothing
    /// was committed, so the caller may retry idempotently.
    ///
    /// # Errors
    /// * `EmptyInput` - Username or password is empty
    /// * `NotFound` - Unknown username
    /// * `InvalidCredentials` - Password does not match
    /// * `PersistenceFailed` - Digest write failed; the pair was never issued
    pub async fn login(&self, username: &str, password: &[u8]) -> Result<TokenPair, SessionError> {
        if username.is_empty() || password.is_empty() {
            return Err(SessionError::EmptyInput);
        }

        let credential = self.store.find_credential(username).await?;

        self.hasher
            .verify(&credential.password_digest, password)
            .map_err(|e| match e {
                SecretError::Mismatch | SecretError::EmptyInput => SessionError::InvalidCredentials,
                other => SessionError::Secret(other),
            })?;

        let pair = self.issuer.issue(credential.profile_id.0)?;

        let digest = self.hasher.hash(&refresh_fingerprint(&pair.refresh))?;
        self.store
            .store_digest(&credential.profile_id, digest)
            .await
            .map_err(|e| {
                tracing::error!(
                    profile_id = %credential.profile_id,
                    error = %e,
                    "Failed to persist refresh digest, discarding minted pair"
                );
                SessionError::from(e)
            })?;

        Ok(pair)
    }

    /// Rotate a token pair: validate it, consume the refresh token, and
    /// issue a replacement pair.
    ///
    /// The stored digest is replaced only if it still matches the one read
    /// at the start of the call, so of two concurrent refreshes for one
    /// profile exactly one wins.
    ///
    /// # Errors
    /// * `EmptyPair` - Either token string is empty
    /// * `Pair` - The pair is inconsistent, mis-signed, or refresh-expired
    /// * `NotFound` - No stored digest for the subject
    /// * `InvalidCredentials` - Refresh token was already consumed or lost a
    ///   concurrent rotation
    /// * `PersistenceFailed` - Digest write failed; the new pair was never issued
    pub async fn refresh(&self, pair: &TokenPair) -> Result<TokenPair, SessionError> {
        if pair.access.is_empty() || pair.refresh.is_empty() {
            return Err(SessionError::EmptyPair);
        }

        let subject = self.checker.check(pair)?;
        let profile_id = ProfileId(subject);

        let stored = self.store.find_digest(&profile_id).await?;

        self.hasher
            .verify(&stored, &refresh_fingerprint(&pair.refresh))
            .map_err(|e| match e {
                SecretError::Mismatch | SecretError::EmptyInput => {
                    tracing::warn!(
                        %profile_id,
                        "Presented refresh token does not match stored digest, possible replay"
                    );
                    SessionError::InvalidCredentials
                }
                other => SessionError::Secret(other),
            })?;

        let next = self.issuer.issue(subject)?;

        let digest = self.hasher.hash(&refresh_fingerprint(&next.refresh))?;
        self.store
            .replace_digest(&profile_id, &stored, digest)
            .await
            .map_err(|e| {
                tracing::error!(
                    %profile_id,
                    error = %e,
                    "Failed to rotate refresh digest, discarding minted pair"
                );
                SessionError::from(e)
            })?;

        Ok(next)
    }
}
