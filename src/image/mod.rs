//! Image module
//!
//! This module provides the image reference type handed to the container
//! runtime and the reader for image list files.

pub mod list;
pub mod specifier;

pub use list::ImageList;
pub use specifier::ImageSpecifier;
