//! Command implementations for friendship

pub mod demo;
pub mod dispatch;
pub mod query;

use friendship_core::config::BuildReport;
use friendship_core::error::{FriendshipError, Result};
use friendship_core::Person;

use crate::cli::Cli;

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub report: &'a BuildReport,
    pub queries: &'a [(String, String)],
}

impl<'a> CommandContext<'a> {
    /// Resolve a name to a person in the graph
    pub fn person(&self, name: &str) -> Result<&'a Person> {
        self.report
            .graph
            .person(name)
            .ok_or_else(|| FriendshipError::unknown_person(name))
    }
}
