use crate::config::CorsConfig;
use crate::constants::{WILDCARD, header};
use crate::context::RequestContext;
use crate::headers::HeaderCollection;
use crate::origin::{OriginDecision, resolve_origin};

pub(crate) enum OriginOutcome {
    Skip,
    Disallow(HeaderCollection),
    Allow(HeaderCollection),
}

pub(crate) struct HeaderBuilder<'a> {
    config: &'a CorsConfig,
}

impl<'a> HeaderBuilder<'a> {
    pub(crate) fn new(config: &'a CorsConfig) -> Self {
        Self { config }
    }

    pub(crate) fn build_origin_headers(&self, request: &RequestContext<'_>) -> OriginOutcome {
        let decision = resolve_origin(
            Some(request.origin),
            &self.config.allowed_origins,
            &self.config.origin_patterns,
        );

        match decision {
            // A literal `*` cannot be combined with credentials.
            OriginDecision::Any if !self.config.credentials_enabled() => {
                let mut headers = HeaderCollection::new();
                headers.push(header::ACCESS_CONTROL_ALLOW_ORIGIN, WILDCARD);
                OriginOutcome::Allow(headers)
            }
            OriginDecision::Any | OriginDecision::Mirror => {
                let mut headers = HeaderCollection::new();
                headers.add_vary(header::ORIGIN);
                headers.push(header::ACCESS_CONTROL_ALLOW_ORIGIN, request.origin);
                OriginOutcome::Allow(headers)
            }
            OriginDecision::Disallow => {
                let mut headers = HeaderCollection::new();
                headers.add_vary(header::ORIGIN);
                OriginOutcome::Disallow(headers)
            }
            OriginDecision::Skip => OriginOutcome::Skip,
        }
    }

    pub(crate) fn build_credentials_header(&self) -> HeaderCollection {
        let mut headers = HeaderCollection::new();
        if self.config.credentials_enabled() {
            headers.push(header::ACCESS_CONTROL_ALLOW_CREDENTIALS, "true");
        }
        headers
    }

    pub(crate) fn build_methods_header(&self, request: &RequestContext<'_>) -> HeaderCollection {
        let mut headers = HeaderCollection::new();
        let value = if self.config.allowed_methods.is_empty() {
            request.access_control_request_method
        } else {
            self.config.allowed_methods.as_str()
        };
        if !value.is_empty() {
            headers.push(header::ACCESS_CONTROL_ALLOW_METHODS, value);
        }
        headers
    }

    pub(crate) fn build_allowed_headers(&self, request: &RequestContext<'_>) -> HeaderCollection {
        let mut headers = HeaderCollection::new();
        if !self.config.allowed_headers.is_empty() {
            headers.push(
                header::ACCESS_CONTROL_ALLOW_HEADERS,
                self.config.allowed_headers.as_str(),
            );
            return headers;
        }

        headers.add_vary(header::ACCESS_CONTROL_REQUEST_HEADERS);
        if !request.access_control_request_headers.is_empty() {
            headers.push(
                header::ACCESS_CONTROL_ALLOW_HEADERS,
                request.access_control_request_headers,
            );
        }
        headers
    }

    pub(crate) fn build_max_age_header(&self) -> HeaderCollection {
        let mut headers = HeaderCollection::new();
        if self.config.max_age > 0 {
            headers.push(
                header::ACCESS_CONTROL_MAX_AGE,
                self.config.max_age.to_string(),
            );
        }
        headers
    }

    pub(crate) fn build_exposed_headers(&self) -> HeaderCollection {
        let mut headers = HeaderCollection::new();
        let value = self.config.exposed_headers.trim();
        if !value.is_empty() {
            headers.push(header::ACCESS_CONTROL_EXPOSE_HEADERS, value);
        }
        headers
    }
}

#[cfg(test)]
#[path = "header_builder_test.rs"]
mod header_builder_test;
