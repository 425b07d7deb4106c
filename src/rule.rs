use crate::config::CorsConfig;
use crate::constants::DEFAULT_PATH;
use crate::util::{normalize_lower, split_list};

/// One path-scoped CORS entry.
#[derive(Debug, Clone, PartialEq)]
pub struct CorsRule {
    path: String,
    config: CorsConfig,
}

impl CorsRule {
    /// Builds a rule, lowercasing `path`. An empty path becomes `/`.
    pub fn new(path: &str, config: CorsConfig) -> Self {
        let path = if path.is_empty() {
            DEFAULT_PATH.to_owned()
        } else {
            normalize_lower(path).into_owned()
        };
        Self { path, config }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn config(&self) -> &CorsConfig {
        &self.config
    }

    /// `lowered_path` must already be lowercase.
    pub(crate) fn matches(&self, lowered_path: &str) -> bool {
        lowered_path.starts_with(&self.path)
    }
}

/// Rules in declaration order; the first prefix match wins.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RuleSet {
    rules: Vec<CorsRule>,
}

impl RuleSet {
    pub fn new(rules: Vec<CorsRule>) -> Self {
        Self { rules }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// First rule whose path prefixes `path`, compared case-insensitively.
    pub fn find(&self, path: &str) -> Option<&CorsRule> {
        if self.rules.is_empty() {
            return None;
        }
        let lowered = normalize_lower(path);
        self.rules.iter().find(|rule| rule.matches(&lowered))
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CorsRule> {
        self.rules.iter()
    }
}

impl<'a> IntoIterator for &'a RuleSet {
    type Item = &'a CorsRule;
    type IntoIter = std::slice::Iter<'a, CorsRule>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.iter()
    }
}

impl FromIterator<CorsRule> for RuleSet {
    fn from_iter<I: IntoIterator<Item = CorsRule>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// Allowed-origin list for a rule under construction.
///
/// Starts from the defaults; the first explicit origin source replaces
/// them, later sources append.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct OriginAccumulator {
    seeded: bool,
    origins: Vec<String>,
}

impl OriginAccumulator {
    pub(crate) fn new(defaults: Vec<String>) -> Self {
        Self {
            seeded: false,
            origins: defaults,
        }
    }

    /// Drops the defaults if no explicit source has been seen yet.
    pub(crate) fn seed(&mut self) {
        if !self.seeded {
            self.origins.clear();
            self.seeded = true;
        }
    }

    /// Adds every entry of a comma-separated origin list.
    pub(crate) fn extend_list(&mut self, list: &str) {
        self.seed();
        self.origins.extend(split_list(list).map(str::to_owned));
    }

    pub(crate) fn finish(self) -> Vec<String> {
        self.origins
    }
}

#[cfg(test)]
#[path = "rule_test.rs"]
mod rule_test;
