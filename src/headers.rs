use crate::constants::header;
use crate::util::split_list;
use http::header::{HeaderMap, HeaderName, HeaderValue};
use indexmap::IndexMap;

pub type Headers = IndexMap<String, String>;

/// Ordered response headers with `Vary` merged rather than overwritten.
#[derive(Debug, Default, Clone)]
pub struct HeaderCollection {
    headers: Headers,
}

impl HeaderCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push<N, V>(&mut self, name: N, value: V)
    where
        N: Into<String>,
        V: Into<String>,
    {
        let name = name.into();
        if name.eq_ignore_ascii_case(header::VARY) {
            self.add_vary(value);
        } else {
            self.headers.insert(name, value.into());
        }
    }

    pub fn add_vary<S: Into<String>>(&mut self, value: S) {
        let existing = self.headers.get(header::VARY).map(String::as_str);
        match merge_vary(existing, &value.into()) {
            Some(merged) => {
                self.headers.insert(header::VARY.to_string(), merged);
            }
            None => {
                self.headers.shift_remove(header::VARY);
            }
        }
    }

    pub fn extend(&mut self, other: HeaderCollection) {
        for (name, value) in other.headers {
            self.push(name, value);
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.headers.is_empty()
    }

    pub fn into_headers(self) -> Headers {
        self.headers
    }

    /// Writes every header into `map`, replacing same-named values except
    /// `Vary`, which is merged with whatever `map` already holds. Names or
    /// values `http` refuses are skipped.
    pub fn apply_to(&self, map: &mut HeaderMap) {
        for (name, value) in &self.headers {
            let Ok(header_name) = HeaderName::try_from(name.as_str()) else {
                continue;
            };
            let value = if header_name == http::header::VARY {
                let existing = map.get(&header_name).and_then(|v| v.to_str().ok());
                match merge_vary(existing, value) {
                    Some(merged) => merged,
                    None => continue,
                }
            } else {
                value.clone()
            };
            if let Ok(header_value) = HeaderValue::from_str(&value) {
                map.insert(header_name, header_value);
            }
        }
    }
}

/// Appends `incoming` to a `Vary` value, dropping case-insensitive
/// duplicates. `None` when the result would be empty.
fn merge_vary(existing: Option<&str>, incoming: &str) -> Option<String> {
    let mut entries: Vec<&str> = Vec::new();
    for entry in existing
        .into_iter()
        .flat_map(split_list)
        .chain(split_list(incoming))
    {
        if !entries
            .iter()
            .any(|seen| seen.eq_ignore_ascii_case(entry))
        {
            entries.push(entry);
        }
    }

    if entries.is_empty() {
        None
    } else {
        Some(entries.join(", "))
    }
}

#[cfg(test)]
#[path = "headers_test.rs"]
mod headers_test;
