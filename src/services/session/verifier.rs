//! Session credential verification (HMAC-signed JWT).
//!
//! The verifier only knows about token strings. Cookie lookup and the
//! request-level "who is this" questions live in `gate`.

use jsonwebtoken::{Algorithm, DecodingKey, Validation};
use thiserror::Error;

use super::claims::UserPayload;

/// Why a credential was rejected. Callers of `verify` never see this; it
/// exists for the log line and for tests.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("empty credential")]
    EmptyCredential,
    #[error("jwt verification failed: {0}")]
    Jwt(#[from] jsonwebtoken::errors::Error),
}

#[derive(Debug, Error)]
pub enum VerifierInitError {
    #[error("session secret must not be empty")]
    EmptySecret,
}

/// Turns a presented credential into an identity.
pub trait CredentialVerifier: Send + Sync {
    fn verify_detailed(&self, credential: &str) -> Result<UserPayload, SessionError>;

    /// Verify and collapse every failure into `None`.
    ///
    /// Malformed, tampered and expired credentials all look the same to the
    /// caller; the reason only shows up in the log.
    fn verify(&self, credential: &str) -> Option<UserPayload> {
        match self.verify_detailed(credential) {
            Ok(payload) => Some(payload),
            Err(err) => {
                tracing::warn!(error = %err, "session credential verification failed");
                None
            }
        }
    }
}

/// HMAC verifier keyed by the process-wide session secret.
///
/// Key material is not printable via Debug.
#[derive(Clone)]
pub struct JwtSessionVerifier {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl std::fmt::Debug for JwtSessionVerifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtSessionVerifier")
            .field("validation", &self.validation)
            .finish()
    }
}

impl JwtSessionVerifier {
    pub fn new(secret: &str, leeway_seconds: u64) -> Result<Self, VerifierInitError> {
        if secret.is_empty() {
            return Err(VerifierInitError::EmptySecret);
        }

        let mut validation = Validation::new(Algorithm::HS256);
        // Any HMAC variant keyed by the shared secret is accepted.
        validation.algorithms = vec![Algorithm::HS256, Algorithm::HS384, Algorithm::HS512];
        // Tokens come from an external issuer that sets no audience.
        validation.validate_aud = false;
        validation.leeway = leeway_seconds;

        Ok(Self {
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
        })
    }
}

impl CredentialVerifier for JwtSessionVerifier {
    // `exp` is required and checked by `Validation`; payload fields are
    // taken as issued.
    fn verify_detailed(&self, credential: &str) -> Result<UserPayload, SessionError> {
        if credential.is_empty() {
            return Err(SessionError::EmptyCredential);
        }

        let data =
            jsonwebtoken::decode::<UserPayload>(credential, &self.decoding_key, &self.validation)?;

        Ok(data.claims)
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use jsonwebtoken::{EncodingKey, Header};
    use serde_json::json;

    pub const TEST_SECRET: &str = "test-session-secret";

    /// Mint a token the way the external issuer does, expiring `ttl_seconds`
    /// from now (negative for already expired).
    pub fn mint(secret: &str, user_id: &str, email: &str, trade: &str, ttl_seconds: i64) -> String {
        let now = chrono::Utc::now().timestamp();
        let claims = json!({
            "userId": user_id,
            "email": email,
            "trade": trade,
            "iat": now,
            "exp": now + ttl_seconds,
        });

        jsonwebtoken::encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .expect("failed to sign test token")
    }

    /// Alter the first character of the signature segment.
    pub fn tamper_signature(token: &str) -> String {
        let (head, sig) = token.rsplit_once('.').expect("token has a signature");
        let mut chars: Vec<char> = sig.chars().collect();
        chars[0] = if chars[0] == 'A' { 'B' } else { 'A' };
        format!("{head}.{}", chars.into_iter().collect::<String>())
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::{TEST_SECRET, mint, tamper_signature};
    use super::*;

    fn verifier() -> JwtSessionVerifier {
        JwtSessionVerifier::new(TEST_SECRET, 0).unwrap()
    }

    #[test]
    fn test_valid_token_yields_issued_fields() {
        let token = mint(TEST_SECRET, "u1", "a@b.com", "plumber", 3600);

        let payload = verifier().verify(&token).expect("token should verify");
        assert_eq!(payload.user_id(), "u1");
        assert_eq!(payload.email(), "a@b.com");
        assert_eq!(payload.trade(), "plumber");
    }

    #[test]
    fn test_other_secret_is_rejected() {
        let token = mint("some-other-secret", "u1", "a@b.com", "plumber", 3600);

        assert!(verifier().verify(&token).is_none());
        assert!(matches!(
            verifier().verify_detailed(&token),
            Err(SessionError::Jwt(_))
        ));
    }

    #[test]
    fn test_expired_token_is_rejected() {
        let token = mint(TEST_SECRET, "u1", "a@b.com", "plumber", -3600);
        assert!(verifier().verify(&token).is_none());
    }

    #[test]
    fn test_leeway_accepts_recently_expired_token() {
        let token = mint(TEST_SECRET, "u1", "a@b.com", "plumber", -5);
        let lenient = JwtSessionVerifier::new(TEST_SECRET, 60).unwrap();

        assert!(lenient.verify(&token).is_some());
        assert!(verifier().verify(&token).is_none());
    }

    #[test]
    fn test_tampered_signature_is_rejected() {
        let token = tamper_signature(&mint(TEST_SECRET, "u1", "a@b.com", "plumber", 3600));
        assert!(verifier().verify(&token).is_none());
    }

    #[test]
    fn test_garbage_and_empty_credentials_are_rejected() {
        assert!(verifier().verify("not-a-jwt").is_none());
        assert!(verifier().verify("a.b.c").is_none());
        assert!(matches!(
            verifier().verify_detailed(""),
            Err(SessionError::EmptyCredential)
        ));
    }

    #[test]
    fn test_token_without_exp_is_rejected() {
        let token = jsonwebtoken::encode(
            &jsonwebtoken::Header::default(),
            &serde_json::json!({ "userId": "u1", "email": "a@b.com", "trade": "plumber" }),
            &jsonwebtoken::EncodingKey::from_secret(TEST_SECRET.as_bytes()),
        )
        .unwrap();

        assert!(verifier().verify(&token).is_none());
    }

    #[test]
    fn test_hmac_variants_are_accepted() {
        let claims = serde_json::json!({
            "userId": "u1",
            "email": "a@b.com",
            "trade": "plumber",
            "exp": chrono::Utc::now().timestamp() + 3600,
        });
        let key = jsonwebtoken::EncodingKey::from_secret(TEST_SECRET.as_bytes());

        for alg in [Algorithm::HS384, Algorithm::HS512] {
            let token =
                jsonwebtoken::encode(&jsonwebtoken::Header::new(alg), &claims, &key).unwrap();
            let payload = verifier().verify(&token).expect("hmac token should verify");
            assert_eq!(payload.trade(), "plumber");
        }

        let foreign = jsonwebtoken::EncodingKey::from_secret(b"another-secret");
        let token =
            jsonwebtoken::encode(&jsonwebtoken::Header::new(Algorithm::HS512), &claims, &foreign)
                .unwrap();
        assert!(verifier().verify(&token).is_none());
    }

    #[test]
    fn test_empty_secret_is_refused() {
        assert!(matches!(
            JwtSessionVerifier::new("", 60),
            Err(VerifierInitError::EmptySecret)
        ));
    }

    #[test]
    fn test_debug_hides_key_material() {
        let rendered = format!("{:?}", verifier());
        assert!(!rendered.contains(TEST_SECRET));
    }
}
