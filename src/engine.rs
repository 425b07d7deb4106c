use crate::config::CorsConfig;
use crate::constants::method;
use crate::context::RequestContext;
use crate::header_builder::{HeaderBuilder, OriginOutcome};
use crate::headers::HeaderCollection;
use http::HeaderMap;

/// Evaluates CORS policy for a single request on behalf of a matched rule.
///
/// Implementations write their verdict into the response headers; the
/// handler only decides whether the pipeline continues.
pub trait CorsEngine: Send + Sync {
    /// Applies `config` to `request`, writing CORS headers into `response`.
    fn handle_request(
        &self,
        config: &CorsConfig,
        request: &RequestContext<'_>,
        response: &mut HeaderMap,
    );

    /// Whether the handler must answer `request` itself instead of
    /// forwarding it.
    fn is_preflight(&self, request: &RequestContext<'_>) -> bool;
}

/// Built-in engine.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardEngine;

impl StandardEngine {
    /// Computes the headers [`CorsEngine::handle_request`] would write.
    pub fn evaluate(&self, config: &CorsConfig, request: &RequestContext<'_>) -> HeaderCollection {
        let builder = HeaderBuilder::new(config);
        let mut headers = HeaderCollection::new();

        match builder.build_origin_headers(request) {
            OriginOutcome::Skip => return headers,
            OriginOutcome::Disallow(origin_headers) => {
                headers.extend(origin_headers);
                return headers;
            }
            OriginOutcome::Allow(origin_headers) => headers.extend(origin_headers),
        }

        headers.extend(builder.build_credentials_header());
        if self.is_preflight(request) {
            headers.extend(builder.build_methods_header(request));
            headers.extend(builder.build_allowed_headers(request));
            headers.extend(builder.build_max_age_header());
        } else {
            headers.extend(builder.build_exposed_headers());
        }
        headers
    }
}

impl CorsEngine for StandardEngine {
    fn handle_request(
        &self,
        config: &CorsConfig,
        request: &RequestContext<'_>,
        response: &mut HeaderMap,
    ) {
        self.evaluate(config, request).apply_to(response);
    }

    fn is_preflight(&self, request: &RequestContext<'_>) -> bool {
        request.method.eq_ignore_ascii_case(method::OPTIONS)
            && !request.access_control_request_method.trim().is_empty()
    }
}

impl<E: CorsEngine + ?Sized> CorsEngine for std::sync::Arc<E> {
    fn handle_request(
        &self,
        config: &CorsConfig,
        request: &RequestContext<'_>,
        response: &mut HeaderMap,
    ) {
        (**self).handle_request(config, request, response);
    }

    fn is_preflight(&self, request: &RequestContext<'_>) -> bool {
        (**self).is_preflight(request)
    }
}

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;
