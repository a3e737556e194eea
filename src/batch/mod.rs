//! Batch retagging
//!
//! This module provides the run configuration and the driver that walks an
//! image list through pull, tag and push.

pub mod config;
pub mod driver;

pub use config::RunConfig;
pub use driver::Retagger;
