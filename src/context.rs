use crate::constants::header;
use http::{HeaderMap, Request};

/// The parts of an inbound request the CORS handler looks at.
#[derive(Debug, Clone, Default)]
pub struct RequestContext<'a> {
    pub method: &'a str,
    pub path: &'a str,
    pub origin: &'a str,
    pub access_control_request_method: &'a str,
    pub access_control_request_headers: &'a str,
}

impl<'a> RequestContext<'a> {
    /// Borrows method, path and CORS headers from `request`. Headers that
    /// are absent or not visible ASCII read as empty.
    pub fn from_request<B>(request: &'a Request<B>) -> Self {
        let headers = request.headers();
        Self {
            method: request.method().as_str(),
            path: request.uri().path(),
            origin: header_value(headers, header::ORIGIN),
            access_control_request_method: header_value(
                headers,
                header::ACCESS_CONTROL_REQUEST_METHOD,
            ),
            access_control_request_headers: header_value(
                headers,
                header::ACCESS_CONTROL_REQUEST_HEADERS,
            ),
        }
    }
}

fn header_value<'a>(headers: &'a HeaderMap, name: &str) -> &'a str {
    headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
}

#[cfg(test)]
#[path = "context_test.rs"]
mod context_test;
