//! Credential and token lifecycle primitives
//!
//! Provides the building blocks an identity service needs to manage sessions:
//! - Secret hashing and verification (Argon2id)
//! - Signed token encoding and decoding (HS256)
//! - Access/refresh token pair issuance and consistency checking
//!
//! The crate knows nothing about storage or transport; services inject these
//! components and wire them to their own credential store.
//!
//! # Examples
//!
//! ## Hashing secrets
//! ```
//! use auth::SecretHasher;
//!
//! let hasher = SecretHasher::new(2).unwrap();
//! let digest = hasher.hash(b"hunter2").unwrap();
//! assert!(hasher.verify(&digest, b"hunter2").is_ok());
//! ```
//!
//! ## Issuing and checking a token pair
//! ```
//! use auth::{TokenCodec, TokenConsistencyChecker, TokenPairIssuer};
//! use chrono::Duration;
//! use uuid::Uuid;
//!
//! let codec = TokenCodec::new(b"secret_key_at_least_32_bytes_long!");
//! let issuer = TokenPairIssuer::new(codec.clone(), Duration::minutes(15), Duration::hours(72));
//! let checker = TokenConsistencyChecker::new(codec);
//!
//! let subject = Uuid::new_v4();
//! let pair = issuer.issue(subject).unwrap();
//! assert_eq!(checker.check(&pair).unwrap(), subject);
//! ```

pub mod jwt;
pub mod pair;
pub mod secret;

// Re-export commonly used items
pub use jwt::TokenClaims;
pub use jwt::TokenCodec;
pub use jwt::TokenError;
pub use jwt::TokenKind;
pub use pair::PairError;
pub use pair::TokenConsistencyChecker;
pub use pair::TokenPair;
pub use pair::TokenPairIssuer;
pub use secret::SecretDigest;
pub use secret::SecretError;
pub use secret::SecretHasher;
