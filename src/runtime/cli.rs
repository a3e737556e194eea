//! Runtime backed by a Docker-compatible CLI

use super::{ContainerRuntime, RuntimeCommand, DEFAULT_RUNTIME};
use crate::error::{Result, RetagError};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

/// Runs commands through an external runtime binary
///
/// The child inherits stdout and stderr, so its progress output goes straight
/// to the console. Each call blocks until the child exits.
#[derive(Debug, Clone)]
pub struct CliRuntime {
    program: PathBuf,
}

impl CliRuntime {
    /// Create a runtime for the given binary (looked up on `PATH` if bare)
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// The binary being invoked
    pub fn program(&self) -> &Path {
        &self.program
    }
}

impl Default for CliRuntime {
    fn default() -> Self {
        Self::new(DEFAULT_RUNTIME)
    }
}

impl ContainerRuntime for CliRuntime {
    fn execute(&self, command: &RuntimeCommand<'_>) -> Result<()> {
        let args = command.args();
        tracing::debug!(
            program = %self.program.display(),
            command = command.name(),
            ?args,
            "Invoking container runtime"
        );

        let status = Command::new(&self.program)
            .args(&args)
            .stdin(Stdio::null())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|source| RetagError::Launch {
                program: self.program.display().to_string(),
                source,
            })?;

        if !status.success() {
            return Err(RetagError::CommandFailed {
                command: format!("{} {}", self.program.display(), command),
                status,
            });
        }

        Ok(())
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use crate::image::ImageSpecifier;

    #[test]
    fn test_default_program() {
        assert_eq!(CliRuntime::default().program(), Path::new("docker"));
    }

    #[test]
    fn test_success_exit() {
        let runtime = CliRuntime::new("true");
        let spec = ImageSpecifier::new("registry.example.com", "web", "v1");

        assert!(runtime.pull(&spec).is_ok());
        assert!(runtime.tag(&spec, &spec.with_tag("v2")).is_ok());
        assert!(runtime.push(&spec).is_ok());
    }

    #[test]
    fn test_non_zero_exit() {
        let runtime = CliRuntime::new("false");
        let spec = ImageSpecifier::new("registry.example.com", "web", "v1");

        match runtime.push(&spec).unwrap_err() {
            RetagError::CommandFailed { command, status } => {
                assert_eq!(command, "false push registry.example.com/web:v1");
                assert_eq!(status.code(), Some(1));
            }
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_launch_failure() {
        let runtime = CliRuntime::new("/nonexistent/retag-runtime");
        let spec = ImageSpecifier::new("registry.example.com", "web", "v1");

        match runtime.pull(&spec).unwrap_err() {
            RetagError::Launch { program, source } => {
                assert_eq!(program, "/nonexistent/retag-runtime");
                assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
            }
            other => panic!("unexpected error: {}", other),
        }
    }
}
