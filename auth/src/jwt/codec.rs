use chrono::Duration;
use jsonwebtoken::decode;
use jsonwebtoken::encode;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use jsonwebtoken::Validation;
use uuid::Uuid;

use super::claims::TokenClaims;
use super::claims::TokenKind;
use super::errors::TokenError;

/// Signed-token codec bound to one symmetric key.
///
/// Uses HS256 (HMAC with SHA-256); a token whose header records any other
/// algorithm is rejected on decode, closing the algorithm-confusion hole.
#[derive(Clone)]
pub struct TokenCodec {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    algorithm: Algorithm,
}

impl TokenCodec {
    /// Create a codec from the signing key.
    ///
    /// The key should be at least 256 bits for HS256 and must never be
    /// logged or serialized.
    pub fn new(secret: &[u8]) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            algorithm: Algorithm::HS256,
        }
    }

    /// Sign a token for `subject` expiring `ttl` from now.
    ///
    /// # Errors
    /// * `InvalidSubject` - Subject is the nil UUID
    /// * `EncodingFailed` - Token signing failed
    pub fn encode(
        &self,
        subject: Uuid,
        kind: TokenKind,
        ttl: Duration,
    ) -> Result<String, TokenError> {
        if subject.is_nil() {
            return Err(TokenError::InvalidSubject);
        }

        let claims = TokenClaims::new(subject, kind, ttl);
        let header = Header::new(self.algorithm);

        encode(&header, &claims, &self.encoding_key)
            .map_err(|e| TokenError::EncodingFailed(e.to_string()))
    }

    /// Parse and verify a token, returning its claims.
    ///
    /// Expiry is NOT checked here: `exp` is a claim the caller inspects via
    /// [`TokenClaims::is_expired`]. Security-relevant callers must treat an
    /// expired token as invalid.
    ///
    /// # Errors
    /// * `Malformed` - Token cannot be parsed
    /// * `UnexpectedAlgorithm` - Header algorithm is not HS256
    /// * `BadSignature` - Signature does not verify under the key
    pub fn decode(&self, token: &str) -> Result<TokenClaims, TokenError> {
        let mut validation = Validation::new(self.algorithm);
        validation.validate_exp = false;
        validation.required_spec_claims.clear();

        let token_data =
            decode::<TokenClaims>(token, &self.decoding_key, &validation).map_err(|e| {
                match e.kind() {
                    ErrorKind::InvalidSignature => TokenError::BadSignature,
                    ErrorKind::InvalidAlgorithm => TokenError::UnexpectedAlgorithm,
                    _ => TokenError::Malformed(e.to_string()),
                }
            })?;

        Ok(token_data.claims)
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;

    const SECRET: &[u8] = b"my_secret_key_at_least_32_bytes_long!";

    #[test]
    fn test_encode_and_decode() {
        let codec = TokenCodec::new(SECRET);
        let subject = Uuid::new_v4();

        let token = codec
            .encode(subject, TokenKind::Access, Duration::minutes(15))
            .expect("Failed to encode token");
        let claims = codec.decode(&token).expect("Failed to decode token");

        assert_eq!(claims.sub, subject);
        assert_eq!(claims.kind, TokenKind::Access);
        assert!(!claims.is_expired(Utc::now().timestamp()));
    }

    #[test]
    fn test_encode_nil_subject() {
        let codec = TokenCodec::new(SECRET);

        let result = codec.encode(Uuid::nil(), TokenKind::Access, Duration::minutes(15));
        assert!(matches!(result, Err(TokenError::InvalidSubject)));
    }

    #[test]
    fn test_decode_garbage() {
        let codec = TokenCodec::new(SECRET);

        let result = codec.decode("not.a.token");
        assert!(matches!(result, Err(TokenError::Malformed(_))));
    }

    #[test]
    fn test_decode_with_wrong_key() {
        let codec = TokenCodec::new(SECRET);
        let other = TokenCodec::new(b"another_secret_key_32_bytes_long!!");

        let token = codec
            .encode(Uuid::new_v4(), TokenKind::Access, Duration::minutes(15))
            .expect("Failed to encode token");

        let result = other.decode(&token);
        assert!(matches!(result, Err(TokenError::BadSignature)));
    }

    #[test]
    fn test_decode_tampered_signature() {
        let codec = TokenCodec::new(SECRET);

        let token = codec
            .encode(Uuid::new_v4(), TokenKind::Refresh, Duration::hours(72))
            .expect("Failed to encode token");

        // Flip the first character of the signature segment
        let signature_start = token.rfind('.').expect("Token has no signature") + 1;
        let mut bytes = token.into_bytes();
        bytes[signature_start] = if bytes[signature_start] == b'A' { b'B' } else { b'A' };
        let tampered = String::from_utf8(bytes).expect("Tampered token is not UTF-8");

        let result = codec.decode(&tampered);
        assert!(matches!(result, Err(TokenError::BadSignature)));
    }

    #[test]
    fn test_decode_unexpected_algorithm() {
        let codec = TokenCodec::new(SECRET);
        let claims = TokenClaims::new(Uuid::new_v4(), TokenKind::Access, Duration::minutes(15));

        // Same key, different HMAC variant in the header
        let token = jsonwebtoken::encode(
            &Header::new(Algorithm::HS384),
            &claims,
            &EncodingKey::from_secret(SECRET),
        )
        .expect("Failed to encode token");

        let result = codec.decode(&token);
        assert!(matches!(result, Err(TokenError::UnexpectedAlgorithm)));
    }

    #[test]
    fn test_decode_expired_token_succeeds() {
        let codec = TokenCodec::new(SECRET);

        let token = codec
            .encode(Uuid::new_v4(), TokenKind::Access, Duration::minutes(-1))
            .expect("Failed to encode token");

        // Expiry is a claim for the caller, not a decode failure
        let claims = codec.decode(&token).expect("Failed to decode token");
        assert!(claims.is_expired(Utc::now().timestamp()));
    }
}
