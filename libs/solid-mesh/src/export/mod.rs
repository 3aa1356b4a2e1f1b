//! # Export
//!
//! Text formats produced from meshes.

pub mod stl;
