use bunner_cors_rules::constants::header;
use http::Response;
use std::collections::HashSet;

pub fn header_value<'a, B>(response: &'a Response<B>, name: &str) -> Option<&'a str> {
    response
        .headers()
        .get(name)
        .and_then(|value| value.to_str().ok())
}

pub fn has_header<B>(response: &Response<B>, name: &str) -> bool {
    response.headers().contains_key(name)
}

pub fn vary_values<B>(response: &Response<B>) -> HashSet<String> {
    header_value(response, header::VARY)
        .map(|value| {
            value
                .split(',')
                .map(|part| part.trim().to_ascii_lowercase())
                .filter(|part| !part.is_empty())
                .collect::<HashSet<_>>()
        })
        .unwrap_or_default()
}
