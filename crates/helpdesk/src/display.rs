//! Console output for the helpdesk
//!
//! Every line the user sees goes through here so the conversation keeps one
//! look. Color is applied only when `use_color` is set.

use helpdesk_shared::{Messages, Reply};
use owo_colors::OwoColorize;
use std::io::{self, Write};

const RULE_WIDTH: usize = 50;

pub struct Ui<'a> {
    messages: &'a Messages,
    use_color: bool,
}

impl<'a> Ui<'a> {
    pub fn new(messages: &'a Messages, use_color: bool) -> Self {
        Self { messages, use_color }
    }

    /// Decide color from whether stdout is a terminal
    pub fn auto(messages: &'a Messages) -> Self {
        Self::new(messages, console::Term::stdout().is_term())
    }

    pub fn banner<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let rule = "=".repeat(RULE_WIDTH);
        writeln!(out, "{}", rule)?;
        if self.use_color {
            writeln!(out, "{}", self.messages.title.bold())?;
        } else {
            writeln!(out, "{}", self.messages.title)?;
        }
        writeln!(out, "{}", self.messages.intro)?;
        writeln!(out, "{}", rule)
    }

    /// Print the prompt without a newline and flush
    pub fn prompt<W: Write>(&self, out: &mut W) -> io::Result<()> {
        write!(out, "\n{}", self.messages.prompt)?;
        out.flush()
    }

    pub fn reply<W: Write>(&self, out: &mut W, reply: &Reply<'_>) -> io::Result<()> {
        match reply {
            Reply::Goodbye => writeln!(out, "{} {}", self.system_label(), self.messages.goodbye),
            Reply::Help => {
                writeln!(out, "\n{}", self.label("System Help:"))?;
                writeln!(out, "{}", self.messages.help)
            }
            Reply::Matched(rule) => {
                writeln!(out, "\n{} {}", self.label(&format!("{}:", rule.name())), rule.response())
            }
            Reply::Clarify => writeln!(out, "\n{} {}", self.system_label(), self.messages.clarify),
            Reply::Escalate => {
                let text = if self.use_color {
                    self.messages.escalate.yellow().to_string()
                } else {
                    self.messages.escalate.clone()
                };
                writeln!(out, "\n{} {}", self.system_label(), text)
            }
        }
    }

    fn system_label(&self) -> String {
        self.label("System:")
    }

    fn label(&self, text: &str) -> String {
        if self.use_color {
            text.cyan().bold().to_string()
        } else {
            text.to_string()
        }
    }
}
