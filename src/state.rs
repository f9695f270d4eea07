/*
 * Responsibility
 * - Shared context attached to the Router (AppState)
 * - Cheap to Clone (Arc inside); the session secret never changes after startup
 */
use std::sync::Arc;

use crate::services::session::SessionGate;

#[derive(Clone, Debug)]
pub struct AppState {
    pub sessions: Arc<SessionGate>,
}

impl AppState {
    pub fn new(sessions: Arc<SessionGate>) -> Self {
        Self { sessions }
    }
}
