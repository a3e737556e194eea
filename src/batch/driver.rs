//! Batch driver
//!
//! Walks every image in the list through pull, tag and push, one image and
//! one step at a time. The first failure aborts the batch; images after it
//! are left untouched.

use super::config::RunConfig;
use crate::error::Result;
use crate::image::ImageList;
use crate::runtime::ContainerRuntime;

/// Pulls, retags and pushes a list of images
pub struct Retagger<R> {
    config: RunConfig,
    runtime: R,
}

impl<R: ContainerRuntime> Retagger<R> {
    /// Create a new retagger
    pub fn new(config: RunConfig, runtime: R) -> Self {
        Self { config, runtime }
    }

    /// Validate the config, load the image list and retag every image
    ///
    /// Returns the number of images retagged.
    pub fn run(&self) -> Result<usize> {
        self.config.validate()?;

        let images = ImageList::read(&self.config.list)?;
        tracing::debug!(
            list = %self.config.list.display(),
            count = images.len(),
            "Loaded image list"
        );

        self.retag_all(&images)
    }

    /// Retag every image in order, stopping at the first failure
    pub fn retag_all(&self, images: &ImageList) -> Result<usize> {
        for image in images {
            self.retag_image(image)?;
        }

        tracing::info!(
            "Retagged {} image(s) from {} to {}",
            images.len(),
            self.config.pull_tag,
            self.config.push_tag
        );
        Ok(images.len())
    }

    /// Pull, tag and push a single image
    pub fn retag_image(&self, image: &str) -> Result<()> {
        if image.is_empty() {
            tracing::warn!("Image list contains a blank entry");
        }

        let pull = self.config.pull_spec(image);
        let push = self.config.push_spec(image);

        tracing::info!("Pulling {}", pull);
        self.runtime.pull(&pull)?;

        tracing::info!("Tagging {} as {}", pull, push);
        self.runtime.tag(&pull, &push)?;

        tracing::info!("Pushing {}", push);
        self.runtime.push(&push)?;

        Ok(())
    }
}
