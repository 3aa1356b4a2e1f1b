//! # Solid Mesh
//!
//! Procedural triangulated solids and their ASCII STL text.
//! Builds flat-shaded box, cylinder and UV-sphere meshes and renders them
//! into the classic `solid / facet / outer loop` exchange format.
//!
//! ## Architecture
//!
//! ```text
//! ShapeParams → primitives (Mesh of Facets) → export::stl (String)
//!                                                   ↓
//!                                stored text → shape::shape_label ("CUBE", ...)
//! ```
//!
//! ## Guarantees
//!
//! - Every primitive is closed: each edge borders exactly two facets
//! - Facets wind counter-clockwise when viewed from outside
//! - Identical parameters always produce byte-identical text
//! - No I/O and no shared state; all functions are safe to call from any thread
//!
//! ## Usage
//!
//! ```rust
//! use solid_mesh::{generate_stl, shape_label, ShapeParams};
//!
//! let text = generate_stl(&ShapeParams::Cube { width: 10.0, height: 10.0, depth: 10.0 })?;
//! assert!(text.starts_with("solid Cube\n"));
//! assert_eq!(shape_label(&text), "CUBE");
//! # Ok::<(), solid_mesh::MeshError>(())
//! ```

pub mod error;
pub mod export;
pub mod mesh;
pub mod primitives;
pub mod random;
pub mod shape;
pub mod vec3;

pub use error::{MeshError, MeshResult};
pub use export::stl::{to_stl_string, write_stl, write_stl_io};
pub use mesh::{Facet, Mesh};
pub use primitives::{create_cube, create_cylinder, create_sphere};
pub use random::{random_params, random_solid_stl, random_solid_stl_with};
pub use shape::{shape_label, shape_label_bytes, ShapeParams, Solid, SolidKind};
pub use vec3::Vec3;

/// Builds the requested primitive and renders it as ASCII STL.
///
/// This is the builder + serializer composition used by callers that only
/// need the stored text.
///
/// # Example
///
/// ```rust
/// use solid_mesh::{generate_stl, ShapeParams, SolidKind};
///
/// let text = generate_stl(&ShapeParams::defaults(SolidKind::Sphere)).unwrap();
/// assert!(text.ends_with("endsolid Sphere\n"));
/// ```
pub fn generate_stl(params: &ShapeParams) -> MeshResult<String> {
    Ok(params.build()?.to_stl())
}
