//! Runtime that only reports what it would run

use super::{ContainerRuntime, RuntimeCommand, DEFAULT_RUNTIME};
use crate::error::Result;
use std::path::PathBuf;

/// Logs each command instead of spawning it
#[derive(Debug, Clone)]
pub struct DryRunRuntime {
    program: PathBuf,
}

impl DryRunRuntime {
    /// Create a dry-run runtime that reports commands for `program`
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// The command line that would be run
    pub fn command_line(&self, command: &RuntimeCommand<'_>) -> String {
        format!("{} {}", self.program.display(), command)
    }
}

impl Default for DryRunRuntime {
    fn default() -> Self {
        Self::new(DEFAULT_RUNTIME)
    }
}

impl ContainerRuntime for DryRunRuntime {
    fn execute(&self, command: &RuntimeCommand<'_>) -> Result<()> {
        tracing::info!("[dry-run] {}", self.command_line(command));
        Ok(())
    }
}
