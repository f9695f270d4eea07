/*!
 * Session extractors
 *
 * Handlers take one of these instead of touching cookies:
 * - CurrentUser: verified identity, rejects with 401
 * - MaybeUser: optional identity, never rejects
 */

mod identity;

pub use identity::{CurrentUser, MaybeUser};
