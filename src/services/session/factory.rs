/// Factory: build the request-facing `SessionGate` from application `Config`.
use std::sync::Arc;

use crate::config::Config;
use crate::services::session::verifier::VerifierInitError;
use crate::services::session::{JwtSessionVerifier, SessionGate};

pub fn build_session_gate(config: &Config) -> Result<Arc<SessionGate>, VerifierInitError> {
    let verifier = JwtSessionVerifier::new(&config.jwt_secret, config.session_leeway_seconds)?;

    Ok(Arc::new(SessionGate::new(
        Arc::new(verifier),
        config.auth_cookie_name.clone(),
    )))
}
