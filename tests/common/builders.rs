use bunner_cors_rules::constants::{header, method};
use bunner_cors_rules::{CorsHandler, Dispatch, RuleSet};
use http::{Request, Response, StatusCode};

pub const UNTOUCHED: &str = "from next handler";

pub fn handler(config: &str) -> CorsHandler {
    CorsHandler::new(RuleSet::parse_str(config).expect("valid CORS configuration"))
}

/// Outcome of pushing one request through a handler and a stub next stage.
pub struct Exchange {
    pub dispatch: Dispatch,
    pub next_called: bool,
    pub response: Response<String>,
}

impl Exchange {
    pub fn status(&self) -> StatusCode {
        self.response.status()
    }
}

pub struct RequestBuilder {
    method: String,
    path: String,
    origin: Option<String>,
    request_method: Option<String>,
    request_headers: Option<String>,
}

impl RequestBuilder {
    fn new(method: &str, path: &str) -> Self {
        Self {
            method: method.into(),
            path: path.into(),
            origin: None,
            request_method: None,
            request_headers: None,
        }
    }

    pub fn origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = Some(origin.into());
        self
    }

    pub fn request_method(mut self, method: impl Into<String>) -> Self {
        self.request_method = Some(method.into());
        self
    }

    pub fn request_headers(mut self, headers: impl Into<String>) -> Self {
        self.request_headers = Some(headers.into());
        self
    }

    pub fn build(self) -> Request<()> {
        let mut builder = Request::builder().method(self.method.as_str()).uri(self.path);
        if let Some(origin) = self.origin {
            builder = builder.header(header::ORIGIN, origin);
        }
        if let Some(value) = self.request_method {
            builder = builder.header(header::ACCESS_CONTROL_REQUEST_METHOD, value);
        }
        if let Some(value) = self.request_headers {
            builder = builder.header(header::ACCESS_CONTROL_REQUEST_HEADERS, value);
        }
        builder.body(()).expect("valid request")
    }

    /// Runs the request through `handler`, with a next stage that writes
    /// [`UNTOUCHED`] into the body.
    pub fn send(self, handler: &CorsHandler) -> Exchange {
        let request = self.build();
        let mut response = Response::new(String::new());
        let mut next_called = false;
        let dispatch = match handler.serve(&request, &mut response, |_, res| {
            next_called = true;
            *res.body_mut() = UNTOUCHED.to_string();
        }) {
            Some(()) => Dispatch::Forward,
            None => Dispatch::Halt,
        };
        Exchange {
            dispatch,
            next_called,
            response,
        }
    }
}

pub fn simple_request(path: &str) -> RequestBuilder {
    RequestBuilder::new(method::GET, path)
}

pub fn preflight_request(path: &str) -> RequestBuilder {
    RequestBuilder::new(method::OPTIONS, path).request_method(method::GET)
}

pub fn options_request(path: &str) -> RequestBuilder {
    RequestBuilder::new(method::OPTIONS, path)
}
