//! Rule matcher.
//!
//! An ordered table of rules, each a named group of regex patterns with a
//! canned response. Matching normalizes the input once, then walks the table
//! in declaration order and stops at the first rule with any pattern that
//! matches anywhere in the text. Overlap between rules is resolved purely by
//! position in the table.

use crate::error::{HelpdeskError, Result};
use crate::normalize::normalize_input;
use regex::Regex;
use tracing::debug;

/// A named pattern group plus the response shown when it matches
#[derive(Debug, Clone)]
pub struct Rule {
    name: String,
    patterns: Vec<Regex>,
    response: String,
}

impl Rule {
    /// Compile a rule; a pattern that does not compile is a configuration error
    pub fn new<I, S>(name: impl Into<String>, patterns: I, response: impl Into<String>) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let name = name.into();
        let patterns = patterns
            .into_iter()
            .map(|p| {
                let p = p.as_ref();
                Regex::new(p).map_err(|source| HelpdeskError::Pattern {
                    rule: name.clone(),
                    pattern: p.to_string(),
                    source,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            name,
            patterns,
            response: response.into(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn response(&self) -> &str {
        &self.response
    }

    /// Pattern sources in declaration order
    pub fn patterns(&self) -> impl Iterator<Item = &str> {
        self.patterns.iter().map(Regex::as_str)
    }

    /// First pattern that matches already-normalized text
    pub fn matching_pattern(&self, normalized: &str) -> Option<&str> {
        self.patterns
            .iter()
            .find(|re| re.is_match(normalized))
            .map(Regex::as_str)
    }
}

impl PartialEq for Rule {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.response == other.response
            && self.patterns().eq(other.patterns())
    }
}

impl Eq for Rule {}

/// Ordered rule table; earlier rules take priority
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    rules: Vec<Rule>,
}

impl RuleSet {
    pub fn new(rules: Vec<Rule>) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Look up a rule by its exact name
    pub fn get(&self, name: &str) -> Option<&Rule> {
        self.rules.iter().find(|r| r.name == name)
    }

    /// Return the first rule with a pattern matching the input, if any
    pub fn match_input(&self, input: &str) -> Option<&Rule> {
        let text = normalize_input(input);

        for rule in &self.rules {
            if let Some(pattern) = rule.matching_pattern(&text) {
                debug!(rule = %rule.name, pattern = %pattern, "rule matched");
                return Some(rule);
            }
        }

        debug!(input = %text, "no rule matched");
        None
    }
}
