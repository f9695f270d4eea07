//! Request-level identity lookup.
//!
//! `identity` answers "who is this, if anyone" and never fails.
//! `require_identity` turns "no one" into `AuthRequired` for the caller to
//! propagate.

use std::sync::Arc;

use axum::http::HeaderMap;
use thiserror::Error;

use super::claims::UserPayload;
use super::cookie::find_cookie;
use super::verifier::CredentialVerifier;

pub const DEFAULT_COOKIE_NAME: &str = "auth-token";

#[derive(Debug, Error)]
#[error("authentication required")]
pub struct AuthRequired;

#[derive(Clone)]
pub struct SessionGate {
    verifier: Arc<dyn CredentialVerifier>,
    cookie_name: String,
}

impl std::fmt::Debug for SessionGate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionGate")
            .field("cookie_name", &self.cookie_name)
            .finish_non_exhaustive()
    }
}

impl SessionGate {
    pub fn new(verifier: Arc<dyn CredentialVerifier>, cookie_name: impl Into<String>) -> Self {
        Self {
            verifier,
            cookie_name: cookie_name.into(),
        }
    }

    /// Identity of the caller, or `None` when there is no usable credential.
    ///
    /// A missing cookie short-circuits before any signature work.
    pub fn identity(&self, headers: &HeaderMap) -> Option<UserPayload> {
        let credential = match find_cookie(headers, &self.cookie_name) {
            Ok(Some(value)) if !value.is_empty() => value,
            Ok(_) => return None,
            Err(err) => {
                tracing::warn!(error = %err, cookie = %self.cookie_name, "failed to read session cookie");
                return None;
            }
        };

        self.verifier.verify(credential)
    }

    pub fn require_identity(&self, headers: &HeaderMap) -> Result<UserPayload, AuthRequired> {
        self.identity(headers).ok_or(AuthRequired)
    }
}
