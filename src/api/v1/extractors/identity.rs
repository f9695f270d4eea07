use std::convert::Infallible;

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use crate::error::AppError;
use crate::services::session::UserPayload;
use crate::state::AppState;

/// Verified caller. Missing or invalid session cookie → 401.
#[derive(Debug)]
pub struct CurrentUser(pub UserPayload);

impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = state.sessions.require_identity(&parts.headers)?;
        tracing::debug!(user_id = %user.user_id(), trade = %user.trade(), "session verified");
        Ok(CurrentUser(user))
    }
}

/// Caller identity if there is one.
#[derive(Debug)]
pub struct MaybeUser(pub Option<UserPayload>);

impl FromRequestParts<AppState> for MaybeUser {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        Ok(MaybeUser(state.sessions.identity(&parts.headers)))
    }
}
