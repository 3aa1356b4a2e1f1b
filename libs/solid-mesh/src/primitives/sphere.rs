//! # Sphere Primitive
//!
//! Generates a UV sphere using latitude/longitude tessellation.

use std::f64::consts::{PI, TAU};

use crate::error::{require_positive, require_segments, MeshError, MeshResult};
use crate::mesh::Mesh;
use crate::vec3::{normalize, spherical};

/// Creates a sphere mesh centered on the origin.
///
/// # Arguments
///
/// * `radius` - The radius of the sphere
/// * `segments` - Number of latitude bands and of longitude bands (at least 3)
///
/// # Returns
///
/// A mesh of `2 * segments²` facets. Every grid cell yields two triangles,
/// including the cells touching the poles whose first triangle collapses to
/// zero area.
///
/// # Algorithm
///
/// - Band `i` spans polar angles `π·i/N .. π·(i+1)/N` measured from +Y
/// - Band `j` spans azimuths `2π·j/N .. 2π·(j+1)/N` from +X toward +Z
/// - Cell corners v1..v4 are (θ1,φ1), (θ1,φ2), (θ2,φ1), (θ2,φ2)
/// - Triangles are (v1, v2, v3) and (v2, v4, v3)
/// - Each triangle's normal is the radial direction at its first vertex,
///   which is the true surface normal there
///
/// # Example
///
/// ```rust
/// use solid_mesh::primitives::create_sphere;
///
/// let mesh = create_sphere(5.0, 16).unwrap();
/// assert_eq!(mesh.facet_count(), 512);
/// ```
pub fn create_sphere(radius: f64, segments: u32) -> MeshResult<Mesh> {
    require_positive("sphere radius", radius)?;
    require_segments("sphere segments", segments)?;

    let n = segments as usize;
    let facet_count = n
        .checked_mul(n)
        .and_then(|cells| cells.checked_mul(2))
        .ok_or_else(|| {
            MeshError::invalid_parameter(format!(
                "sphere segments {segments} yield more facets than fit in memory"
            ))
        })?;
    let mut mesh = Mesh::with_capacity(facet_count);

    for i in 0..n {
        let theta1 = PI * i as f64 / n as f64;
        let theta2 = PI * (i + 1) as f64 / n as f64;

        for j in 0..n {
            let phi1 = TAU * j as f64 / n as f64;
            let phi2 = TAU * (j + 1) as f64 / n as f64;

            let v1 = spherical(radius, theta1, phi1);
            let v2 = spherical(radius, theta1, phi2);
            let v3 = spherical(radius, theta2, phi1);
            let v4 = spherical(radius, theta2, phi2);

            mesh.add_triangle(normalize(v1), v1, v2, v3);
            mesh.add_triangle(normalize(v2), v2, v4, v3);
        }
    }

    tracing::debug!(radius, segments, facets = mesh.facet_count(), "built sphere mesh");
    Ok(mesh)
}
