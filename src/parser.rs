use crate::config::CorsConfig;
use crate::constants::directive;
use crate::dispenser::Dispenser;
use crate::error::{ConfigError, ConfigErrorKind, Location};
use crate::origin::OriginPattern;
use crate::rule::{CorsRule, OriginAccumulator, RuleSet};
use std::path::Path;
use std::str::FromStr;
use tracing::debug;

/// Reads every `cors` entry left in `d` into a [`RuleSet`].
///
/// Stops at the first malformed directive; nothing parsed so far is
/// returned in that case.
pub fn parse_rules(d: &mut Dispenser) -> Result<RuleSet, ConfigError> {
    let mut rules = Vec::new();
    while d.next() {
        rules.push(parse_rule(d)?);
    }
    Ok(RuleSet::new(rules))
}

fn parse_rule(d: &mut Dispenser) -> Result<CorsRule, ConfigError> {
    if d.val() != directive::CORS {
        let kind = if d.val() == "}" {
            ConfigErrorKind::UnexpectedClosingBrace
        } else {
            ConfigErrorKind::UnexpectedDirective(d.val().to_owned())
        };
        return Err(d.error(kind));
    }

    let mut config = CorsConfig::default();
    let mut origins = OriginAccumulator::new(std::mem::take(&mut config.allowed_origins));

    let args = d.remaining_args();
    let path = match args.first() {
        Some(path) if path.is_empty() => return Err(d.error(ConfigErrorKind::EmptyPath)),
        Some(path) => path.as_str(),
        None => "",
    };
    for list in args.iter().skip(1) {
        origins.extend_list(list);
    }

    while d.next_block(0)? {
        let name = d.val().to_owned();
        match name.as_str() {
            directive::ORIGIN => {
                origins.seed();
                for list in d.remaining_args() {
                    origins.extend_list(&list);
                }
            }
            directive::ORIGIN_REGEXP => {
                let pattern = single_arg(d, directive::ORIGIN_REGEXP)?;
                let compiled = OriginPattern::new(&pattern).map_err(|err| {
                    d.error(ConfigErrorKind::InvalidPattern {
                        pattern: pattern.clone(),
                        reason: err.to_string(),
                    })
                })?;
                origins.seed();
                config.origin_patterns.push(compiled);
            }
            directive::METHODS => {
                config.allowed_methods = single_arg(d, directive::METHODS)?;
            }
            directive::ALLOW_CREDENTIALS => {
                let value = single_arg(d, directive::ALLOW_CREDENTIALS)?;
                let enabled = match value.as_str() {
                    "true" => Some(true),
                    "false" => Some(false),
                    _ => None,
                };
                let Some(enabled) = enabled else {
                    return Err(d.error(ConfigErrorKind::InvalidBoolean(value)));
                };
                config.allow_credentials = Some(enabled);
            }
            directive::MAX_AGE => {
                let value = single_arg(d, directive::MAX_AGE)?;
                config.max_age = value
                    .parse()
                    .map_err(|_| d.error(ConfigErrorKind::InvalidInteger(value.clone())))?;
            }
            directive::ALLOWED_HEADERS => {
                config.allowed_headers = single_arg(d, directive::ALLOWED_HEADERS)?;
            }
            directive::EXPOSED_HEADERS => {
                config.exposed_headers = single_arg(d, directive::EXPOSED_HEADERS)?;
            }
            other => {
                return Err(d.error(ConfigErrorKind::UnknownDirective(other.to_owned())));
            }
        }
    }

    config.allowed_origins = origins.finish();
    let rule = CorsRule::new(path, config);
    debug!(
        path = rule.path(),
        origins = ?rule.config().allowed_origins,
        patterns = rule.config().origin_patterns.len(),
        "parsed cors rule"
    );
    Ok(rule)
}

fn single_arg(d: &mut Dispenser, name: &'static str) -> Result<String, ConfigError> {
    let mut args = d.remaining_args();
    if args.len() != 1 {
        return Err(d.error(ConfigErrorKind::WrongArgumentCount {
            directive: name,
            given: args.len(),
        }));
    }
    Ok(args.remove(0))
}

impl RuleSet {
    /// Parses configuration text.
    pub fn parse_str(input: &str) -> Result<Self, ConfigError> {
        let mut d = Dispenser::from_text(input, None)?;
        parse_rules(&mut d)
    }

    /// Reads and parses a configuration file; errors carry its path.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let source = path.display().to_string();
        let input = std::fs::read_to_string(path).map_err(|err| {
            ConfigError::new(
                ConfigErrorKind::Io {
                    path: source.clone(),
                    message: err.to_string(),
                },
                Location {
                    source: Some(source.clone()),
                    line: 0,
                },
            )
        })?;
        let mut d = Dispenser::from_text(&input, Some(&source))?;
        parse_rules(&mut d)
    }
}

impl FromStr for RuleSet {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_str(s)
    }
}

#[cfg(test)]
#[path = "parser_test.rs"]
mod parser_test;
