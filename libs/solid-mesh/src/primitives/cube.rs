//! # Cube Primitive
//!
//! Generates an axis-aligned box centered on the origin.

use crate::error::{require_positive, MeshResult};
use crate::mesh::Mesh;
use crate::vec3::Vec3;

/// Creates a box mesh of `width` (X) × `height` (Y) × `depth` (Z).
///
/// # Arguments
///
/// * `width` - Extent along X
/// * `height` - Extent along Y
/// * `depth` - Extent along Z
///
/// # Returns
///
/// A mesh of 12 facets, two per face. Both triangles of a face share the
/// face's axis-aligned normal, emitted in the order +Z, -Z, +X, -X, +Y, -Y.
///
/// # Example
///
/// ```rust
/// use solid_mesh::primitives::create_cube;
///
/// let mesh = create_cube(10.0, 10.0, 10.0).unwrap();
/// assert_eq!(mesh.facet_count(), 12);
/// ```
pub fn create_cube(width: f64, height: f64, depth: f64) -> MeshResult<Mesh> {
    require_positive("cube width", width)?;
    require_positive("cube height", height)?;
    require_positive("cube depth", depth)?;

    let x = width / 2.0;
    let y = height / 2.0;
    let z = depth / 2.0;

    let mut mesh = Mesh::with_capacity(12);

    // Corners listed counter-clockwise as seen from outside each face

    // Front (+Z)
    mesh.add_quad(
        Vec3::Z,
        [
            Vec3::new(-x, -y, z),
            Vec3::new(x, -y, z),
            Vec3::new(x, y, z),
            Vec3::new(-x, y, z),
        ],
    );

    // Back (-Z)
    mesh.add_quad(
        Vec3::NEG_Z,
        [
            Vec3::new(x, -y, -z),
            Vec3::new(-x, -y, -z),
            Vec3::new(-x, y, -z),
            Vec3::new(x, y, -z),
        ],
    );

    // Right (+X)
    mesh.add_quad(
        Vec3::X,
        [
            Vec3::new(x, -y, z),
            Vec3::new(x, -y, -z),
            Vec3::new(x, y, -z),
            Vec3::new(x, y, z),
        ],
    );

    // Left (-X)
    mesh.add_quad(
        Vec3::NEG_X,
        [
            Vec3::new(-x, -y, -z),
            Vec3::new(-x, -y, z),
            Vec3::new(-x, y, z),
            Vec3::new(-x, y, -z),
        ],
    );

    // Top (+Y)
    mesh.add_quad(
        Vec3::Y,
        [
            Vec3::new(-x, y, z),
            Vec3::new(x, y, z),
            Vec3::new(x, y, -z),
            Vec3::new(-x, y, -z),
        ],
    );

    // Bottom (-Y)
    mesh.add_quad(
        Vec3::NEG_Y,
        [
            Vec3::new(-x, -y, -z),
            Vec3::new(x, -y, -z),
            Vec3::new(x, -y, z),
            Vec3::new(-x, -y, z),
        ],
    );

    tracing::debug!(width, height, depth, facets = mesh.facet_count(), "built cube mesh");
    Ok(mesh)
}
