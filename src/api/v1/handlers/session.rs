/*
 * Responsibility
 * - GET /session: who is calling, if anyone (never 401)
 * - GET /me: the caller's identity, 401 without a valid session
 */
use axum::Json;

use crate::api::v1::dto::session::SessionResponse;
use crate::api::v1::extractors::{CurrentUser, MaybeUser};
use crate::services::session::UserPayload;

pub async fn session(MaybeUser(user): MaybeUser) -> Json<SessionResponse> {
    Json(SessionResponse::from(user))
}

pub async fn me(CurrentUser(user): CurrentUser) -> Json<UserPayload> {
    Json(user)
}
