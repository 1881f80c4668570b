//! Helpdesk library - exposes the console pieces for integration tests

pub mod display;
pub mod errors;
pub mod logging;
pub mod repl;
