//! Bulk replacement of icon assets with one source image.
//!
//! [`transform`] holds the image conformance core; the other modules are the
//! pieces the desktop app builds on top of it.

pub mod batch;
pub mod color_mode;
pub mod config;
pub mod dir_watcher;
pub mod i18n;
pub mod palette;
pub mod replacer;
pub mod scanner;
pub mod target_list;
pub mod transform;

pub use color_mode::ColorMode;
pub use transform::{
    transform, transform_bytes, transform_with, ConformedImage, TargetSignature, TransformError,
    TransformOptions,
};
