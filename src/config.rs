use crate::constants::{WILDCARD, method};
use crate::origin::OriginPattern;

/// Fully resolved CORS settings for one rule, consumed by a
/// [`CorsEngine`](crate::CorsEngine).
#[derive(Debug, Clone, PartialEq)]
pub struct CorsConfig {
    /// Literal origins; `*` admits any origin.
    pub allowed_origins: Vec<String>,
    pub origin_patterns: Vec<OriginPattern>,
    /// Emitted verbatim in `Access-Control-Allow-Methods`; empty echoes the
    /// requested method.
    pub allowed_methods: String,
    /// `None` leaves `Access-Control-Allow-Credentials` unset.
    pub allow_credentials: Option<bool>,
    /// Seconds; only positive values are emitted.
    pub max_age: i64,
    /// Emitted verbatim; empty mirrors `Access-Control-Request-Headers`.
    pub allowed_headers: String,
    pub exposed_headers: String,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: vec![WILDCARD.to_owned()],
            origin_patterns: Vec::new(),
            allowed_methods: [
                method::POST,
                method::GET,
                method::OPTIONS,
                method::PUT,
                method::DELETE,
            ]
            .join(", "),
            allow_credentials: None,
            max_age: 0,
            allowed_headers: String::new(),
            exposed_headers: String::new(),
        }
    }
}

impl CorsConfig {
    pub(crate) fn credentials_enabled(&self) -> bool {
        self.allow_credentials == Some(true)
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;
