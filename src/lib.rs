//! retag - batch-retag container images
//!
//! Given a list of image names, a source tag, a destination tag and a
//! registry, retag pulls every image at the source tag, tags it locally under
//! the destination tag and pushes the result. All container work is delegated
//! to a Docker-compatible CLI (`docker` by default):
//!
//! - Image references (`registry/image:tag`)
//! - Image list files (one name per line)
//! - Runtime invocation (`pull`, `tag -f`, `push`)
//! - A sequential driver that stops on the first failure

pub mod batch;
pub mod error;
pub mod image;
pub mod runtime;

pub use error::{Result, RetagError};
