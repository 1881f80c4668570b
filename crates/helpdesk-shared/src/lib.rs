//! Shared types for the helpdesk: catalog, rule matcher and conversation session.

pub mod catalog;
pub mod error;
pub mod normalize;
pub mod rules;
pub mod session;

pub use catalog::{Catalog, Messages, SessionSettings, DEFAULT_ESCALATE_THRESHOLD};
pub use error::HelpdeskError;
pub use rules::{Rule, RuleSet};
pub use session::{Reply, Session, SessionState};
