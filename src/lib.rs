pub mod constants;
mod config;
mod context;
mod dispenser;
mod engine;
mod error;
mod handler;
mod header_builder;
mod headers;
mod lexer;
mod origin;
mod parser;
mod rule;
mod util;

pub use config::CorsConfig;
pub use context::RequestContext;
pub use dispenser::Dispenser;
pub use engine::{CorsEngine, StandardEngine};
pub use error::{ConfigError, ConfigErrorKind, Location};
pub use handler::{CorsHandler, Dispatch};
pub use headers::{HeaderCollection, Headers};
pub use lexer::{Token, tokenize};
pub use origin::{OriginDecision, OriginPattern, PatternError, resolve_origin};
pub use parser::parse_rules;
pub use rule::{CorsRule, RuleSet};
pub use util::{equals_ignore_case, normalize_lower};
