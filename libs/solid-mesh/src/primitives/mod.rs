//! # Primitives
//!
//! Facet generation for the supported solids (box, cylinder, UV sphere).
//! Each builder validates its parameters, then emits a closed, outward
//! wound, flat-shaded mesh centered on the origin with +Y up.

pub mod cube;
pub mod cylinder;
pub mod sphere;

pub use cube::create_cube;
pub use cylinder::create_cylinder;
pub use sphere::create_sphere;
