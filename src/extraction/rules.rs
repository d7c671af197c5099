//! Ordered candidate patterns
//!
//! Each field is located by a list of named regex rules tried in declaration
//! order. The first rule that matches wins, so the most specific pattern goes
//! first and the loose ones act as fallbacks.

use regex::{Captures, Regex};

pub(crate) struct RuleSet {
    field: &'static str,
    rules: Vec<(&'static str, Regex)>,
}

impl RuleSet {
    /// Compile `(name, pattern)` pairs. Patterns are constants, so a bad one
    /// is a programming error caught by the unit tests.
    pub(crate) fn compile<P: AsRef<str>>(field: &'static str, patterns: &[(&'static str, P)]) -> Self {
        let rules = patterns
            .iter()
            .map(|(name, pattern)| (*name, Regex::new(pattern.as_ref()).unwrap()))
            .collect();
        RuleSet { field, rules }
    }

    /// Captures of the first rule that matches anywhere in `text`.
    pub(crate) fn first_match<'t>(&self, text: &'t str) -> Option<(&'static str, Captures<'t>)> {
        self.first_match_among(text, self.rules.len())
    }

    /// Like [`first_match`](Self::first_match) but only tries the first `limit` rules.
    pub(crate) fn first_match_among<'t>(
        &self,
        text: &'t str,
        limit: usize,
    ) -> Option<(&'static str, Captures<'t>)> {
        for (name, regex) in self.rules.iter().take(limit) {
            if let Some(caps) = regex.captures(text) {
                tracing::debug!(field = self.field, rule = *name, "candidate matched");
                return Some((*name, caps));
            }
        }
        tracing::debug!(field = self.field, "no candidate matched");
        None
    }

    #[cfg(test)]
    pub(crate) fn names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|(name, _)| *name).collect()
    }
}
