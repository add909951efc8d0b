//! Ordered regex rewrite rules
//!
//! A rule set is a list of `(pattern, replacement, limit)` applied top to
//! bottom, each to the output of the previous one. `limit == 0` rewrites every
//! occurrence, otherwise only the first `limit` ones. Replacements are literal
//! text; `$` carries no group meaning.

use regex::{NoExpand, Regex};
use std::borrow::Cow;

/// One compiled rewrite step.
#[derive(Debug, Clone)]
pub struct Rule {
    pattern: Regex,
    replacement: &'static str,
    limit: usize,
}

impl Rule {
    pub fn new(pattern: &str, replacement: &'static str, limit: usize) -> Result<Self, regex::Error> {
        Ok(Self {
            pattern: Regex::new(pattern)?,
            replacement,
            limit,
        })
    }

    /// Rewrite `input`, borrowing it back when the pattern does not match.
    pub fn apply<'a>(&self, input: &'a str) -> Cow<'a, str> {
        self.pattern
            .replacen(input, self.limit, NoExpand(self.replacement))
    }
}

/// An ordered cascade of [`Rule`]s.
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    rules: Vec<Rule>,
}

impl RuleSet {
    /// Compile a `(pattern, replacement, limit)` table, keeping its order.
    pub fn compile(table: &[(&str, &'static str, usize)]) -> Result<Self, regex::Error> {
        let rules = table
            .iter()
            .map(|&(pattern, replacement, limit)| Rule::new(pattern, replacement, limit))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { rules })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Run every rule in order.
    #[must_use]
    pub fn apply(&self, input: &str) -> String {
        let mut text = input.to_string();
        for rule in &self.rules {
            if let Cow::Owned(rewritten) = rule.apply(&text) {
                text = rewritten;
            }
        }
        text
    }
}
