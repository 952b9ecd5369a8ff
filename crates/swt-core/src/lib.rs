//! Core types, configuration, and errors for Stroke Width Transform (SWT)
//! text detection.
//!
//! This crate provides the foundational types shared by every other swt crate:
//! - Geometry types (points, rays, bounding boxes)
//! - The stroke-width raster and the validated edge/gradient input
//! - Run configuration
//! - Error types

pub mod config;
pub mod errors;
pub mod input;
pub mod raster;
pub mod types;

pub use config::*;
pub use errors::*;
pub use input::*;
pub use raster::*;
pub use types::*;
