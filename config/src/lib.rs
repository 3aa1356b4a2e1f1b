//! # Config Crate
//!
//! Centralized configuration constants for procedural solid generation.
//! Every default dimension, tessellation count, tolerance, and random range
//! is defined here so the mesh crate never scatters literals.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{DEFAULT_CYLINDER_SEGMENTS, MIN_SEGMENTS, NORMALIZE_EPSILON};
//!
//! let requested: Option<u32> = None;
//! let segments = requested.unwrap_or(DEFAULT_CYLINDER_SEGMENTS);
//! assert!(segments >= MIN_SEGMENTS);
//!
//! let length: f64 = 1e-5;
//! assert!(length < NORMALIZE_EPSILON);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **No Dependencies**: Pure values and a validated range snapshot
//! - **Byte-Stable Output**: Formatting precision lives here, not in callers

pub mod constants;

#[cfg(test)]
mod tests;
