use crate::error::ConfigErrorKind;

/// A single word of configuration text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub text: String,
    pub line: usize,
    pub quoted: bool,
}

impl Token {
    pub(crate) fn is_open_brace(&self) -> bool {
        !self.quoted && self.text == "{"
    }

    pub(crate) fn is_close_brace(&self) -> bool {
        !self.quoted && self.text == "}"
    }
}

/// Splits configuration text into whitespace-separated tokens.
///
/// `#` at the start of a word comments out the rest of the line. Double
/// quotes group whitespace into one token and understand `\"` and `\\`.
/// On failure returns the offending kind together with the line it was
/// raised on.
pub fn tokenize(input: &str) -> Result<Vec<Token>, (ConfigErrorKind, usize)> {
    let mut tokens = Vec::new();
    let mut chars = input.chars().peekable();
    let mut line = 1;

    while let Some(&ch) = chars.peek() {
        if ch == '\n' {
            line += 1;
            chars.next();
            continue;
        }
        if ch.is_whitespace() {
            chars.next();
            continue;
        }
        if ch == '#' {
            while let Some(&next) = chars.peek() {
                if next == '\n' {
                    break;
                }
                chars.next();
            }
            continue;
        }

        if ch == '"' {
            let start_line = line;
            chars.next();
            let mut text = String::new();
            let mut closed = false;
            while let Some(next) = chars.next() {
                match next {
                    '\\' if matches!(chars.peek(), Some(&'"') | Some(&'\\')) => {
                        if let Some(escaped) = chars.next() {
                            text.push(escaped);
                        }
                    }
                    '"' => {
                        closed = true;
                        break;
                    }
                    '\n' => {
                        line += 1;
                        text.push(next);
                    }
                    other => text.push(other),
                }
            }
            if !closed {
                return Err((ConfigErrorKind::UnterminatedQuote, start_line));
            }
            tokens.push(Token {
                text,
                line: start_line,
                quoted: true,
            });
            continue;
        }

        let mut text = String::new();
        while let Some(&next) = chars.peek() {
            if next.is_whitespace() {
                break;
            }
            text.push(next);
            chars.next();
        }
        tokens.push(Token {
            text,
            line,
            quoted: false,
        });
    }

    Ok(tokens)
}

#[cfg(test)]
#[path = "lexer_test.rs"]
mod lexer_test;
