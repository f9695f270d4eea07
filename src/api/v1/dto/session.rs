use serde::Serialize;

use crate::services::session::UserPayload;

/// Body of `GET /session`: always 200, `user` is null when not signed in.
#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub authenticated: bool,
    pub user: Option<UserPayload>,
}

impl From<Option<UserPayload>> for SessionResponse {
    fn from(user: Option<UserPayload>) -> Self {
        Self {
            authenticated: user.is_some(),
            user,
        }
    }
}
