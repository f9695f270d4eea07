/*
 * Responsibility
 * - Router-level layers shared by every route
 * - Session checks are extractors (api::v1::extractors), not layers
 */
pub mod cors;
pub mod http;
pub mod security_headers;
