pub mod diagnostics;
pub mod health;
pub mod session;
