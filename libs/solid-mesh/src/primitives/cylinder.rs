//! # Cylinder Primitive
//!
//! Generates a capped, faceted cylinder standing on the Y axis.

use std::f64::consts::TAU;

use crate::error::{require_positive, require_segments, MeshResult};
use crate::mesh::Mesh;
use crate::vec3::{on_ring, Vec3};

/// Creates a cylinder mesh centered on the origin.
///
/// # Arguments
///
/// * `radius` - Radius of both caps
/// * `height` - Extent along Y, split evenly above and below the origin
/// * `segments` - Number of radial segments (at least 3)
///
/// # Returns
///
/// A mesh of `4 * segments` facets: two side triangles per segment, then
/// the top fan, then the bottom fan.
///
/// Each side quad uses one normal pointing at the segment's angular
/// midpoint, so the sides are deliberately faceted rather than smooth.
///
/// # Example
///
/// ```rust
/// use solid_mesh::primitives::create_cylinder;
///
/// let mesh = create_cylinder(5.0, 10.0, 32).unwrap();
/// assert_eq!(mesh.facet_count(), 128);
/// ```
pub fn create_cylinder(radius: f64, height: f64, segments: u32) -> MeshResult<Mesh> {
    require_positive("cylinder radius", radius)?;
    require_positive("cylinder height", height)?;
    require_segments("cylinder segments", segments)?;

    let n = segments as usize;
    let top_y = height / 2.0;
    let bottom_y = -top_y;

    // n + 1 angles so that segment i always spans ring[i]..ring[i + 1];
    // the last entry repeats the first and closes the loop
    let angles: Vec<f64> = (0..=n).map(|i| TAU * i as f64 / n as f64).collect();
    let top: Vec<Vec3> = angles.iter().map(|&a| on_ring(radius, a, top_y)).collect();
    let bottom: Vec<Vec3> = angles.iter().map(|&a| on_ring(radius, a, bottom_y)).collect();

    let mut mesh = Mesh::with_capacity(4 * n);

    // Sides
    for i in 0..n {
        let mid = TAU * (i as f64 + 0.5) / n as f64;
        let normal = on_ring(1.0, mid, 0.0);
        mesh.add_quad(normal, [bottom[i], top[i], top[i + 1], bottom[i + 1]]);
    }

    // Top cap
    let top_center = Vec3::new(0.0, top_y, 0.0);
    for i in 0..n {
        mesh.add_triangle(Vec3::Y, top_center, top[i + 1], top[i]);
    }

    // Bottom cap, reversed relative to the top so it faces down
    let bottom_center = Vec3::new(0.0, bottom_y, 0.0);
    for i in 0..n {
        mesh.add_triangle(Vec3::NEG_Y, bottom_center, bottom[i], bottom[i + 1]);
    }

    tracing::debug!(radius, height, segments, facets = mesh.facet_count(), "built cylinder mesh");
    Ok(mesh)
}
