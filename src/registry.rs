//! Named storage for compiled rules.

use std::collections::BTreeMap;

use thiserror::Error;

use crate::rule::Rule;

/// A rule family name was registered twice.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("duplicate rule family '{0}'")]
pub struct DuplicateFamily(pub String);

/// Compiled rules keyed by family name: `walls`, `floors`, `pipes`, and so
/// on. Iteration order is the names' sort order, so listings and manifest
/// round-trips are deterministic.
#[derive(Debug, Default, Clone)]
pub struct RuleSet {
    rules: BTreeMap<String, Rule>,
}

impl RuleSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a compiled rule under a family name. Names are claimed
    /// first-come: registering a name twice is an error, even with an
    /// identical rule.
    pub fn insert(&mut self, name: impl Into<String>, rule: Rule) -> Result<(), DuplicateFamily> {
        let name = name.into();
        if self.rules.contains_key(&name) {
            return Err(DuplicateFamily(name));
        }
        self.rules.insert(name, rule);
        Ok(())
    }

    /// Look up a rule by family name.
    pub fn get(&self, name: &str) -> Option<&Rule> {
        self.rules.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.rules.contains_key(name)
    }

    /// Family names in sort order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.rules.keys().map(String::as_str)
    }

    /// All `(name, rule)` pairs in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Rule)> {
        self.rules.iter().map(|(name, rule)| (name.as_str(), rule))
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
