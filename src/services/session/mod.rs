pub mod claims;
pub mod cookie;
pub mod factory;
pub mod gate;
pub mod verifier;

pub use claims::UserPayload;
pub use factory::build_session_gate;
pub use gate::{AuthRequired, DEFAULT_COOKIE_NAME, SessionGate};
pub use verifier::JwtSessionVerifier;
