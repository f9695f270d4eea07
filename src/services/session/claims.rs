use serde::{Deserialize, Serialize};

/// Identity carried by a verified session credential.
///
/// Only produced by decoding a token whose signature and expiry have been
/// checked, so there is deliberately no public constructor. Standard claims
/// (`exp`, `iat`, ...) that travel alongside these fields are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserPayload {
    #[serde(rename = "userId")]
    user_id: String,
    email: String,
    trade: String,
}

impl UserPayload {
    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    // Not logged; handlers that need it read it from the JSON body.
    #[cfg_attr(not(test), allow(dead_code))]
    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn trade(&self) -> &str {
        &self.trade
    }
}
