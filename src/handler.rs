use crate::constants::HANDLER_ID;
use crate::context::RequestContext;
use crate::engine::{CorsEngine, StandardEngine};
use crate::rule::RuleSet;
use arc_swap::ArcSwap;
use http::{Request, Response, StatusCode};
use std::sync::Arc;
use tracing::{debug, info, trace};

/// What the pipeline should do after [`CorsHandler::dispatch`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
    /// Preflight answered; the response is complete.
    Halt,
    /// Hand the request to the next handler.
    Forward,
}

/// Pipeline stage applying the first matching [`CorsRule`](crate::CorsRule)
/// to each request.
///
/// Rules are read through an atomic snapshot, so `reload` never blocks
/// requests and in-flight requests finish against the rules they started
/// with.
pub struct CorsHandler<E = StandardEngine> {
    rules: ArcSwap<RuleSet>,
    engine: E,
}

impl CorsHandler<StandardEngine> {
    pub fn new(rules: RuleSet) -> Self {
        Self::with_engine(rules, StandardEngine)
    }
}

impl Default for CorsHandler<StandardEngine> {
    fn default() -> Self {
        Self::new(RuleSet::empty())
    }
}

impl<E: CorsEngine> CorsHandler<E> {
    pub fn with_engine(rules: RuleSet, engine: E) -> Self {
        Self {
            rules: ArcSwap::from_pointee(rules),
            engine,
        }
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// Current rule set.
    pub fn snapshot(&self) -> Arc<RuleSet> {
        self.rules.load_full()
    }

    /// Replaces the rule set wholesale.
    pub fn reload(&self, rules: RuleSet) {
        let count = rules.len();
        self.rules.store(Arc::new(rules));
        info!(handler = HANDLER_ID, rules = count, "cors rule set reloaded");
    }

    /// Runs the first rule matching the request path, if any.
    ///
    /// On [`Dispatch::Halt`] the response carries status 200 and an empty
    /// body in addition to the engine's headers.
    pub fn dispatch<B, R: Default>(
        &self,
        request: &Request<B>,
        response: &mut Response<R>,
    ) -> Dispatch {
        let rules = self.rules.load();
        let ctx = RequestContext::from_request(request);

        let Some(rule) = rules.find(ctx.path) else {
            trace!(handler = HANDLER_ID, path = ctx.path, "no cors rule matched");
            return Dispatch::Forward;
        };
        debug!(
            handler = HANDLER_ID,
            path = ctx.path,
            rule = rule.path(),
            "cors rule matched"
        );

        self.engine
            .handle_request(rule.config(), &ctx, response.headers_mut());
        if self.engine.is_preflight(&ctx) {
            *response.status_mut() = StatusCode::OK;
            *response.body_mut() = R::default();
            return Dispatch::Halt;
        }
        Dispatch::Forward
    }

    /// [`Self::dispatch`], then calls `next` exactly once unless the
    /// request was a preflight, in which case `None` is returned.
    pub fn serve<B, R, T, F>(
        &self,
        request: &Request<B>,
        response: &mut Response<R>,
        next: F,
    ) -> Option<T>
    where
        R: Default,
        F: FnOnce(&Request<B>, &mut Response<R>) -> T,
    {
        match self.dispatch(request, response) {
            Dispatch::Halt => None,
            Dispatch::Forward => Some(next(request, response)),
        }
    }
}

#[cfg(test)]
#[path = "handler_test.rs"]
mod handler_test;
