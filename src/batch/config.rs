//! Run configuration

use crate::error::{Result, RetagError};
use crate::image::ImageSpecifier;
use std::path::PathBuf;

/// Settings for one batch run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunConfig {
    /// Path to the image list file
    pub list: PathBuf,
    /// Tag to pull
    pub pull_tag: String,
    /// Tag to apply and push
    pub push_tag: String,
    /// Registry prefix for both references
    pub registry: String,
}

impl RunConfig {
    /// Create a new run config with an empty registry
    pub fn new(list: impl Into<PathBuf>, pull_tag: &str, push_tag: &str) -> Self {
        Self {
            list: list.into(),
            pull_tag: pull_tag.to_string(),
            push_tag: push_tag.to_string(),
            registry: String::new(),
        }
    }

    /// Set the registry
    pub fn registry(mut self, registry: &str) -> Self {
        self.registry = registry.to_string();
        self
    }

    /// Check that every required setting is present
    ///
    /// Settings are checked in flag order and the first missing one is
    /// reported. The registry may be empty.
    pub fn validate(&self) -> Result<()> {
        if self.list.as_os_str().is_empty() {
            return Err(RetagError::MissingFlag("--list"));
        }
        if self.pull_tag.is_empty() {
            return Err(RetagError::MissingFlag("--pull-tag"));
        }
        if self.push_tag.is_empty() {
            return Err(RetagError::MissingFlag("--tag"));
        }
        Ok(())
    }

    /// Reference to pull for `image`
    pub fn pull_spec(&self, image: &str) -> ImageSpecifier {
        ImageSpecifier::new(&self.registry, image, &self.pull_tag)
    }

    /// Reference to push for `image`
    pub fn push_spec(&self, image: &str) -> ImageSpecifier {
        ImageSpecifier::new(&self.registry, image, &self.push_tag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_config() {
        let config = RunConfig::new("images.txt", "rc1", "stable");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_missing_settings_in_flag_order() {
        let err = RunConfig::default().validate().unwrap_err();
        assert_eq!(err.to_string(), "--list must be set");

        let err = RunConfig::new("images.txt", "", "").validate().unwrap_err();
        assert_eq!(err.to_string(), "--pull-tag must be set");

        let err = RunConfig::new("images.txt", "rc1", "").validate().unwrap_err();
        assert_eq!(err.to_string(), "--tag must be set");
    }

    #[test]
    fn test_specs_share_registry() {
        let config = RunConfig::new("images.txt", "rc1", "stable").registry("gcr.io/acme");

        assert_eq!(config.pull_spec("api").to_string(), "gcr.io/acme/api:rc1");
        assert_eq!(config.push_spec("api").to_string(), "gcr.io/acme/api:stable");
    }
}
