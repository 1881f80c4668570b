//! Troubleshooting catalog: rule table, fixed messages and session settings.
//!
//! The built-in catalog is a TOML document compiled into the binary. It is
//! parsed and every pattern compiled once at startup; any defect there is
//! fatal before the first prompt is shown.

use crate::error::{HelpdeskError, Result};
use crate::rules::{Rule, RuleSet};
use serde::Deserialize;
use std::collections::HashSet;
use tracing::debug;

const BUILTIN_CATALOG: &str = include_str!("../data/catalog.toml");

/// Consecutive unmatched inputs before escalating
pub const DEFAULT_ESCALATE_THRESHOLD: u32 = 3;

/// Conversation settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SessionSettings {
    #[serde(default = "default_escalate_threshold")]
    pub escalate_threshold: u32,

    /// Words that end the conversation (compared case-insensitively)
    #[serde(default = "default_exit_words")]
    pub exit_words: Vec<String>,

    #[serde(default = "default_help_word")]
    pub help_word: String,
}

fn default_escalate_threshold() -> u32 {
    DEFAULT_ESCALATE_THRESHOLD
}

fn default_exit_words() -> Vec<String> {
    ["quit", "q", "e", "exit"].iter().map(|w| w.to_string()).collect()
}

fn default_help_word() -> String {
    "help".to_string()
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            escalate_threshold: default_escalate_threshold(),
            exit_words: default_exit_words(),
            help_word: default_help_word(),
        }
    }
}

/// Fixed texts shown by the console
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Messages {
    pub title: String,
    pub intro: String,
    pub prompt: String,
    pub help: String,
    pub clarify: String,
    pub escalate: String,
    pub goodbye: String,
}

#[derive(Debug, Deserialize)]
struct RuleDef {
    name: String,
    patterns: Vec<String>,
    response: String,
}

#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    session: SessionSettings,
    messages: Messages,
    #[serde(default, rename = "rule")]
    rules: Vec<RuleDef>,
}

/// Compiled catalog
#[derive(Debug, Clone)]
pub struct Catalog {
    pub settings: SessionSettings,
    pub messages: Messages,
    pub rules: RuleSet,
}

impl Catalog {
    /// Catalog compiled into the binary
    pub fn builtin() -> Result<Self> {
        Self::from_toml_str(BUILTIN_CATALOG)
    }

    /// Parse, validate and compile a catalog document
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let file: CatalogFile = toml::from_str(content)?;
        let settings = validate_settings(file.session)?;

        if file.rules.is_empty() {
            return Err(HelpdeskError::Catalog("catalog defines no rules".to_string()));
        }

        let mut seen = HashSet::new();
        let mut rules = Vec::with_capacity(file.rules.len());
        for def in file.rules {
            let name = def.name.trim();
            if name.is_empty() {
                return Err(HelpdeskError::Catalog("rule with empty name".to_string()));
            }
            if !seen.insert(name.to_string()) {
                return Err(HelpdeskError::Catalog(format!("duplicate rule '{}'", name)));
            }
            if def.patterns.is_empty() {
                return Err(HelpdeskError::Catalog(format!("rule '{}' has no patterns", name)));
            }
            rules.push(Rule::new(name, &def.patterns, def.response)?);
        }

        debug!(rules = rules.len(), threshold = settings.escalate_threshold, "catalog loaded");

        Ok(Self {
            settings,
            messages: file.messages,
            rules: RuleSet::new(rules),
        })
    }
}

/// Check limits and lowercase the command words
fn validate_settings(mut settings: SessionSettings) -> Result<SessionSettings> {
    if settings.escalate_threshold == 0 {
        return Err(HelpdeskError::Catalog(
            "escalate_threshold must be at least 1".to_string(),
        ));
    }

    settings.exit_words = settings
        .exit_words
        .iter()
        .map(|w| w.trim().to_lowercase())
        .filter(|w| !w.is_empty())
        .collect();
    if settings.exit_words.is_empty() {
        return Err(HelpdeskError::Catalog("at least one exit word is required".to_string()));
    }

    settings.help_word = settings.help_word.trim().to_lowercase();
    if settings.help_word.is_empty() {
        return Err(HelpdeskError::Catalog("help word must not be empty".to_string()));
    }
    if settings.exit_words.contains(&settings.help_word) {
        return Err(HelpdeskError::Catalog(format!(
            "'{}' cannot be both the help word and an exit word",
            settings.help_word
        )));
    }

    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;

    const MESSAGES: &str = r#"
[messages]
title = "t"
intro = "i"
prompt = "> "
help = "h"
clarify = "c"
escalate = "x"
goodbye = "g"
"#;

    fn doc(extra: &str) -> String {
        format!("{}\n{}", MESSAGES, extra)
    }

    #[test]
    fn test_builtin_catalog_compiles() {
        let catalog = Catalog::builtin().unwrap();
        let names: Vec<&str> = catalog.rules.rules().iter().map(|r| r.name()).collect();
        assert_eq!(
            names,
            vec![
                "Power Issue Rule",
                "Display Issue Rule",
                "Internet Connectivity Rule",
                "Peripheral Device Rule",
                "Performance Issue Rule",
            ]
        );
        assert_eq!(catalog.settings, SessionSettings::default());
        assert_eq!(catalog.messages.prompt, "You: ");
    }

    #[test]
    fn test_session_section_is_optional() {
        let catalog = Catalog::from_toml_str(&doc(
            "[[rule]]\nname = \"A\"\npatterns = ['a']\nresponse = \"r\"\n",
        ))
        .unwrap();
        assert_eq!(catalog.settings.escalate_threshold, DEFAULT_ESCALATE_THRESHOLD);
        assert_eq!(catalog.rules.len(), 1);
    }

    #[test]
    fn test_command_words_are_lowercased() {
        let catalog = Catalog::from_toml_str(&format!(
            "[session]\nexit_words = [\" Bye \", \"\"]\nhelp_word = \"HELP\"\n{}",
            doc("[[rule]]\nname = \"A\"\npatterns = ['a']\nresponse = \"r\"\n")
        ))
        .unwrap();
        assert_eq!(catalog.settings.exit_words, vec!["bye".to_string()]);
        assert_eq!(catalog.settings.help_word, "help");
    }

    #[test]
    fn test_rejects_bad_pattern() {
        let err = Catalog::from_toml_str(&doc(
            "[[rule]]\nname = \"A\"\npatterns = ['(open']\nresponse = \"r\"\n",
        ))
        .unwrap_err();
        assert!(matches!(err, HelpdeskError::Pattern { .. }));
    }

    #[test]
    fn test_rejects_structural_defects() {
        let cases = [
            doc(""),
            doc("[[rule]]\nname = \" \"\npatterns = ['a']\nresponse = \"r\"\n"),
            doc("[[rule]]\nname = \"A\"\npatterns = []\nresponse = \"r\"\n"),
            doc(
                "[[rule]]\nname = \"A\"\npatterns = ['a']\nresponse = \"r\"\n\
                 [[rule]]\nname = \"A\"\npatterns = ['b']\nresponse = \"s\"\n",
            ),
            format!(
                "[session]\nescalate_threshold = 0\n{}",
                doc("[[rule]]\nname = \"A\"\npatterns = ['a']\nresponse = \"r\"\n")
            ),
            format!(
                "[session]\nexit_words = [\"help\"]\n{}",
                doc("[[rule]]\nname = \"A\"\npatterns = ['a']\nresponse = \"r\"\n")
            ),
        ];
        for case in &cases {
            let err = Catalog::from_toml_str(case).unwrap_err();
            assert!(matches!(err, HelpdeskError::Catalog(_)), "accepted: {}", case);
        }
    }

    #[test]
    fn test_rejects_unparseable_toml() {
        let err = Catalog::from_toml_str("this is = = not toml").unwrap_err();
        assert!(matches!(err, HelpdeskError::Catalog(_)));
    }
}
