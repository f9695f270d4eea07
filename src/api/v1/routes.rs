/*
 * Responsibility
 * - URL layout of v1
 * - Which routes need a session is decided by the handler's extractor
 */
use axum::{Router, routing::get};

use crate::api::v1::handlers::{
    diagnostics::speech_key,
    health::health,
    session::{me, session},
};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .route("/session", get(session))
        .route("/me", get(me))
        .route("/diagnostics/speech-key", get(speech_key))
}
