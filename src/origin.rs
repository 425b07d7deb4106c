use crate::constants::WILDCARD;
use crate::util::equals_ignore_case;
use regex_automata::meta::{BuildError, Regex};
use std::fmt;
use std::time::{Duration, Instant};
use thiserror::Error;

/// Why an `origin_regexp` value could not be turned into an [`OriginPattern`].
#[derive(Debug, Error)]
pub enum PatternError {
    #[error("{0}")]
    Build(#[source] Box<BuildError>),
    #[error("compilation took {elapsed:?}, over the {budget:?} budget")]
    Timeout { elapsed: Duration, budget: Duration },
    #[error("pattern is {length} bytes long, limit is {max}")]
    TooLong { length: usize, max: usize },
}

const PATTERN_COMPILE_BUDGET: Duration = Duration::from_millis(100);
const MAX_PATTERN_LENGTH: usize = 50_000;
pub(crate) const MAX_ORIGIN_LENGTH: usize = 4_096;

/// Compiled `origin_regexp` entry. Matching is case-insensitive and
/// unanchored; patterns supply their own `^`/`$` when needed.
#[derive(Clone)]
pub struct OriginPattern {
    source: String,
    regex: Regex,
}

impl OriginPattern {
    pub fn new(pattern: &str) -> Result<Self, PatternError> {
        Self::compile(pattern, PATTERN_COMPILE_BUDGET)
    }

    fn compile(pattern: &str, budget: Duration) -> Result<Self, PatternError> {
        if pattern.len() > MAX_PATTERN_LENGTH {
            return Err(PatternError::TooLong {
                length: pattern.len(),
                max: MAX_PATTERN_LENGTH,
            });
        }

        let started = Instant::now();
        let regex = Regex::new(&format!("(?i:{pattern})"))
            .map_err(|err| PatternError::Build(Box::new(err)))?;
        let elapsed = started.elapsed();
        if elapsed > budget {
            return Err(PatternError::Timeout { elapsed, budget });
        }

        Ok(Self {
            source: pattern.to_owned(),
            regex,
        })
    }

    #[cfg(test)]
    pub(crate) fn with_budget(pattern: &str, budget: Duration) -> Result<Self, PatternError> {
        Self::compile(pattern, budget)
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }

    pub fn matches(&self, candidate: &str) -> bool {
        self.regex.is_match(candidate.as_bytes())
    }
}

impl fmt::Debug for OriginPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("OriginPattern").field(&self.source).finish()
    }
}

impl PartialEq for OriginPattern {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source
    }
}

/// Outcome of checking a request origin against a rule's allow-lists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OriginDecision {
    /// Matched the `*` literal.
    Any,
    /// Matched a literal or a pattern; echo the request origin back.
    Mirror,
    Disallow,
    /// No `Origin` header, nothing to do.
    Skip,
}

/// Literal origins are checked before patterns.
pub fn resolve_origin(
    request_origin: Option<&str>,
    origins: &[String],
    patterns: &[OriginPattern],
) -> OriginDecision {
    let Some(origin) = request_origin.filter(|origin| !origin.is_empty()) else {
        return OriginDecision::Skip;
    };
    if origin.len() > MAX_ORIGIN_LENGTH {
        return OriginDecision::Disallow;
    }

    for allowed in origins {
        if allowed == WILDCARD {
            return OriginDecision::Any;
        }
        if equals_ignore_case(allowed, origin) {
            return OriginDecision::Mirror;
        }
    }

    if patterns.iter().any(|pattern| pattern.matches(origin)) {
        OriginDecision::Mirror
    } else {
        OriginDecision::Disallow
    }
}

#[cfg(test)]
#[path = "origin_test.rs"]
mod origin_test;
