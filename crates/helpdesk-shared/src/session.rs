//! Conversation session state machine.
//!
//! One `Session` per conversation. It owns the unclear counter and decides,
//! for each input line, whether to exit, show help, answer from a rule, ask
//! for clarification or escalate. Rendering is left to the caller.

use crate::catalog::{Catalog, SessionSettings};
use crate::rules::{Rule, RuleSet};
use tracing::info;

/// Logical conversation state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Ready,
    AwaitingInput,
    Terminated,
}

/// Outcome of handling one input line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reply<'a> {
    Goodbye,
    Help,
    Matched(&'a Rule),
    Clarify,
    Escalate,
}

impl<'a> Reply<'a> {
    /// Short tag used in per-turn log events
    pub fn kind(&self) -> &'static str {
        match self {
            Reply::Goodbye => "goodbye",
            Reply::Help => "help",
            Reply::Matched(_) => "matched",
            Reply::Clarify => "clarify",
            Reply::Escalate => "escalate",
        }
    }
}

/// Classified input line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command<'s> {
    Exit,
    Help,
    Describe(&'s str),
}

pub struct Session<'a> {
    rules: &'a RuleSet,
    settings: &'a SessionSettings,
    state: SessionState,
    unclear_count: u32,
}

impl<'a> Session<'a> {
    pub fn new(rules: &'a RuleSet, settings: &'a SessionSettings) -> Self {
        Self {
            rules,
            settings,
            state: SessionState::Ready,
            unclear_count: 0,
        }
    }

    pub fn from_catalog(catalog: &'a Catalog) -> Self {
        Self::new(&catalog.rules, &catalog.settings)
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn unclear_count(&self) -> u32 {
        self.unclear_count
    }

    pub fn is_terminated(&self) -> bool {
        self.state == SessionState::Terminated
    }

    /// Mark that the prompt is shown and a line is expected
    pub fn await_input(&mut self) {
        if self.state == SessionState::Ready {
            self.state = SessionState::AwaitingInput;
        }
    }

    /// Handle one raw input line
    pub fn handle(&mut self, line: &str) -> Reply<'a> {
        if self.is_terminated() {
            return Reply::Goodbye;
        }

        let reply = match self.classify(line) {
            Command::Exit => {
                self.state = SessionState::Terminated;
                return Reply::Goodbye;
            }
            Command::Help => Reply::Help,
            Command::Describe(text) => self.describe(text),
        };

        self.state = SessionState::Ready;
        reply
    }

    fn classify<'s>(&self, line: &'s str) -> Command<'s> {
        let trimmed = line.trim();
        let lower = trimmed.to_lowercase();

        if self.settings.exit_words.iter().any(|w| *w == lower) {
            Command::Exit
        } else if lower == self.settings.help_word {
            Command::Help
        } else {
            Command::Describe(trimmed)
        }
    }

    fn describe(&mut self, text: &str) -> Reply<'a> {
        let rules: &'a RuleSet = self.rules;
        if let Some(rule) = rules.match_input(text) {
            self.unclear_count = 0;
            return Reply::Matched(rule);
        }

        self.unclear_count += 1;
        if self.unclear_count < self.settings.escalate_threshold {
            Reply::Clarify
        } else {
            info!(misses = self.unclear_count, "escalating after repeated unmatched input");
            self.unclear_count = 0;
            Reply::Escalate
        }
    }
}
