use std::fmt;
use thiserror::Error;

/// What went wrong while loading a rule set.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigErrorKind {
    #[error("{directive} expects exactly one argument, got {given}")]
    WrongArgumentCount {
        directive: &'static str,
        given: usize,
    },
    #[error("unknown cors config item: {0}")]
    UnknownDirective(String),
    #[error("expected `cors` directive, found `{0}`")]
    UnexpectedDirective(String),
    #[error("allow_credentials must be true or false, got `{0}`")]
    InvalidBoolean(String),
    #[error("max_age must be a valid integer, got `{0}`")]
    InvalidInteger(String),
    #[error("could not compile origin_regexp `{pattern}`: {reason}")]
    InvalidPattern { pattern: String, reason: String },
    #[error("rule path must not be empty")]
    EmptyPath,
    #[error("unterminated quoted string")]
    UnterminatedQuote,
    #[error("unexpected end of input: missing closing brace")]
    UnclosedBlock,
    #[error("unexpected `}}`")]
    UnexpectedClosingBrace,
    #[error("failed to read {path}: {message}")]
    Io { path: String, message: String },
}

/// Where in the configuration text an error was raised.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Location {
    pub source: Option<String>,
    pub line: usize,
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.source {
            Some(source) => write!(f, "{}:{}", source, self.line),
            None => write!(f, "line {}", self.line),
        }
    }
}

/// Fatal error raised while parsing a CORS rule set.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{location}: {kind}")]
pub struct ConfigError {
    kind: ConfigErrorKind,
    location: Location,
}

impl ConfigError {
    pub fn new(kind: ConfigErrorKind, location: Location) -> Self {
        Self { kind, location }
    }

    pub fn kind(&self) -> &ConfigErrorKind {
        &self.kind
    }

    pub fn location(&self) -> &Location {
        &self.location
    }

    pub fn line(&self) -> usize {
        self.location.line
    }
}

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;
