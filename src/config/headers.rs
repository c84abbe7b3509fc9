//! HTTP header name constants.
//!
//! Header names the extraction layer reads when capturing request context.
//! `axum::http::header` covers the standard ones; the proxy headers below
//! are de-facto conventions and have no constant there.

/// Client address chain appended by reverse proxies.
pub const HEADER_X_FORWARDED_FOR: &str = "x-forwarded-for";
/// Original scheme seen by the reverse proxy.
pub const HEADER_X_FORWARDED_PROTO: &str = "x-forwarded-proto";

/// Protocol reported when no proxy header says otherwise.
pub const DEFAULT_PROTOCOL: &str = "http";
