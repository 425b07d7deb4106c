use crate::error::{ConfigError, ConfigErrorKind, Location};
use crate::lexer::{Token, tokenize};

/// Cursor over configuration tokens, handing out directives, their
/// same-line arguments and nested blocks.
#[derive(Debug, Clone)]
pub struct Dispenser {
    source: Option<String>,
    tokens: Vec<Token>,
    cursor: Option<usize>,
    nesting: usize,
}

impl Dispenser {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self {
            source: None,
            tokens,
            cursor: None,
            nesting: 0,
        }
    }

    /// Tokenizes `input`, labelling errors with `source` when given.
    pub fn from_text(input: &str, source: Option<&str>) -> Result<Self, ConfigError> {
        let tokens = tokenize(input).map_err(|(kind, line)| {
            ConfigError::new(
                kind,
                Location {
                    source: source.map(str::to_owned),
                    line,
                },
            )
        })?;

        Ok(Self::new(tokens).with_source(source))
    }

    pub fn with_source(mut self, source: Option<&str>) -> Self {
        self.source = source.map(str::to_owned);
        self
    }

    fn current(&self) -> Option<&Token> {
        self.cursor.and_then(|idx| self.tokens.get(idx))
    }

    fn peek(&self) -> Option<&Token> {
        let next = self.cursor.map_or(0, |idx| idx + 1);
        self.tokens.get(next)
    }

    /// Advances to the next token, returning `false` once input is exhausted.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> bool {
        let next = self.cursor.map_or(0, |idx| idx + 1);
        if next < self.tokens.len() {
            self.cursor = Some(next);
            true
        } else {
            false
        }
    }

    /// Text of the current token, empty before the first [`Self::next`].
    pub fn val(&self) -> &str {
        self.current().map_or("", |token| token.text.as_str())
    }

    pub fn line(&self) -> usize {
        self.current().map_or(0, |token| token.line)
    }

    fn next_on_same_line(&self) -> Option<&Token> {
        let current_line = self.current()?.line;
        self.peek().filter(|token| token.line == current_line)
    }

    /// Advances only when the next token is an argument of the current one.
    /// Unquoted braces end the argument list even on the same line.
    pub fn next_arg(&mut self) -> bool {
        let is_arg = self
            .next_on_same_line()
            .is_some_and(|token| !token.is_open_brace() && !token.is_close_brace());
        is_arg && self.next()
    }

    /// Consumes and returns every remaining argument on the current line.
    pub fn remaining_args(&mut self) -> Vec<String> {
        let mut args = Vec::new();
        while self.next_arg() {
            args.push(self.val().to_owned());
        }
        args
    }

    /// Steps through a `{ ... }` block opened on the current line.
    ///
    /// Yields `Ok(true)` with the cursor on each directive inside the block
    /// and `Ok(false)` after the closing brace has been consumed, or right
    /// away when no block follows. `nesting` is the depth the caller's
    /// directive sits at.
    pub fn next_block(&mut self, nesting: usize) -> Result<bool, ConfigError> {
        if self.nesting <= nesting {
            let opens = self
                .next_on_same_line()
                .is_some_and(|token| token.is_open_brace());
            if !opens {
                return Ok(false);
            }
            self.next();
            self.nesting += 1;
        }

        loop {
            if !self.next() {
                return Err(self.error(ConfigErrorKind::UnclosedBlock));
            }
            let Some(token) = self.current() else {
                return Err(self.error(ConfigErrorKind::UnclosedBlock));
            };
            if token.is_close_brace() {
                self.nesting -= 1;
                if self.nesting <= nesting {
                    return Ok(false);
                }
                continue;
            }
            return Ok(true);
        }
    }

    /// Builds an error pointing at the current token.
    pub fn error(&self, kind: ConfigErrorKind) -> ConfigError {
        let line = self
            .current()
            .or_else(|| self.tokens.last())
            .map_or(0, |token| token.line);
        ConfigError::new(
            kind,
            Location {
                source: self.source.clone(),
                line,
            },
        )
    }
}

#[cfg(test)]
#[path = "dispenser_test.rs"]
mod dispenser_test;
