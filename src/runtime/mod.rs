//! Container runtime invocation
//!
//! The pull, tag and push steps are delegated to an external
//! Docker-compatible binary. [`ContainerRuntime`] is the seam the driver
//! talks to; [`CliRuntime`] spawns the binary and [`DryRunRuntime`] only logs
//! what would be run.

pub mod cli;
pub mod dry_run;

pub use cli::CliRuntime;
pub use dry_run::DryRunRuntime;

use crate::error::Result;
use crate::image::ImageSpecifier;

/// Default container runtime binary
pub const DEFAULT_RUNTIME: &str = "docker";

/// A single runtime invocation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuntimeCommand<'a> {
    /// `pull <image>`
    Pull(&'a ImageSpecifier),
    /// `tag -f <source> <target>`
    Tag {
        source: &'a ImageSpecifier,
        target: &'a ImageSpecifier,
    },
    /// `push <image>`
    Push(&'a ImageSpecifier),
}

impl RuntimeCommand<'_> {
    /// Subcommand name
    pub fn name(&self) -> &'static str {
        match self {
            RuntimeCommand::Pull(_) => "pull",
            RuntimeCommand::Tag { .. } => "tag",
            RuntimeCommand::Push(_) => "push",
        }
    }

    /// Arguments passed to the runtime binary, in order
    pub fn args(&self) -> Vec<String> {
        match self {
            RuntimeCommand::Pull(spec) => vec!["pull".to_string(), spec.to_string()],
            // -f overwrites an existing local tag of the same name
            RuntimeCommand::Tag { source, target } => vec![
                "tag".to_string(),
                "-f".to_string(),
                source.to_string(),
                target.to_string(),
            ],
            RuntimeCommand::Push(spec) => vec!["push".to_string(), spec.to_string()],
        }
    }
}

impl std::fmt::Display for RuntimeCommand<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.args().join(" "))
    }
}

/// Something that can run pull, tag and push for an image
pub trait ContainerRuntime {
    /// Run a single command to completion
    fn execute(&self, command: &RuntimeCommand<'_>) -> Result<()>;

    /// Pull an image
    fn pull(&self, spec: &ImageSpecifier) -> Result<()> {
        self.execute(&RuntimeCommand::Pull(spec))
    }

    /// Tag `source` as `target`, replacing any existing `target`
    fn tag(&self, source: &ImageSpecifier, target: &ImageSpecifier) -> Result<()> {
        self.execute(&RuntimeCommand::Tag { source, target })
    }

    /// Push an image
    fn push(&self, spec: &ImageSpecifier) -> Result<()> {
        self.execute(&RuntimeCommand::Push(spec))
    }
}

impl<R: ContainerRuntime + ?Sized> ContainerRuntime for &R {
    fn execute(&self, command: &RuntimeCommand<'_>) -> Result<()> {
        (**self).execute(command)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pull_args() {
        let spec = ImageSpecifier::new("registry.example.com", "web", "v1");
        assert_eq!(
            RuntimeCommand::Pull(&spec).args(),
            ["pull", "registry.example.com/web:v1"]
        );
    }

    #[test]
    fn test_tag_args_force() {
        let source = ImageSpecifier::new("registry.example.com", "web", "v1");
        let target = source.with_tag("prod");
        let command = RuntimeCommand::Tag {
            source: &source,
            target: &target,
        };

        assert_eq!(
            command.args(),
            [
                "tag",
                "-f",
                "registry.example.com/web:v1",
                "registry.example.com/web:prod"
            ]
        );
        assert_eq!(command.name(), "tag");
    }

    #[test]
    fn test_push_display() {
        let spec = ImageSpecifier::new("", "web", "prod");
        assert_eq!(RuntimeCommand::Push(&spec).to_string(), "push /web:prod");
    }
}
