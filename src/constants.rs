pub mod header {
    pub const ACCESS_CONTROL_ALLOW_ORIGIN: &str = "Access-Control-Allow-Origin";
    pub const ACCESS_CONTROL_ALLOW_METHODS: &str = "Access-Control-Allow-Methods";
    pub const ACCESS_CONTROL_ALLOW_HEADERS: &str = "Access-Control-Allow-Headers";
    pub const ACCESS_CONTROL_ALLOW_CREDENTIALS: &str = "Access-Control-Allow-Credentials";
    pub const ACCESS_CONTROL_EXPOSE_HEADERS: &str = "Access-Control-Expose-Headers";
    pub const ACCESS_CONTROL_MAX_AGE: &str = "Access-Control-Max-Age";
    pub const ACCESS_CONTROL_REQUEST_HEADERS: &str = "Access-Control-Request-Headers";
    pub const ACCESS_CONTROL_REQUEST_METHOD: &str = "Access-Control-Request-Method";
    pub const ORIGIN: &str = "Origin";
    pub const VARY: &str = "Vary";
}

pub mod method {
    pub const DELETE: &str = "DELETE";
    pub const GET: &str = "GET";
    pub const OPTIONS: &str = "OPTIONS";
    pub const POST: &str = "POST";
    pub const PUT: &str = "PUT";
}

/// Names accepted by the rule-set parser.
pub mod directive {
    /// Top-level handler directive opening each rule.
    pub const CORS: &str = "cors";
    pub const ORIGIN: &str = "origin";
    pub const ORIGIN_REGEXP: &str = "origin_regexp";
    pub const METHODS: &str = "methods";
    pub const ALLOW_CREDENTIALS: &str = "allow_credentials";
    pub const MAX_AGE: &str = "max_age";
    pub const ALLOWED_HEADERS: &str = "allowed_headers";
    pub const EXPOSED_HEADERS: &str = "exposed_headers";
}

/// Module identifier under which hosts register the handler.
pub const HANDLER_ID: &str = "http.handlers.cors";

pub const DEFAULT_PATH: &str = "/";
pub const WILDCARD: &str = "*";
