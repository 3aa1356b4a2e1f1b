//! Thin wrapper around `glam::DVec3` shared by the primitive builders.
//!
//! `glam` already supplies add, subtract, scale, length and cross. The
//! helpers here add the guarded normalization every facet normal goes
//! through, so builders never divide by a near-zero length.

use config::constants::{FALLBACK_NORMAL, NORMALIZE_EPSILON};

pub use glam::DVec3 as Vec3;

/// Direction used when a vector is too short to normalize (+Y).
///
/// # Examples
/// ```
/// use solid_mesh::vec3::{fallback_normal, Vec3};
/// assert_eq!(fallback_normal(), Vec3::Y);
/// ```
pub fn fallback_normal() -> Vec3 {
    Vec3::from_array(FALLBACK_NORMAL)
}

/// Returns `v` scaled to unit length.
///
/// Vectors shorter than `NORMALIZE_EPSILON` yield [`fallback_normal`].
///
/// # Examples
/// ```
/// use solid_mesh::vec3::{normalize, Vec3};
/// assert_eq!(normalize(Vec3::new(0.0, 0.0, 3.0)), Vec3::Z);
/// assert_eq!(normalize(Vec3::ZERO), Vec3::Y);
/// ```
pub fn normalize(v: Vec3) -> Vec3 {
    let length = v.length();
    if length < NORMALIZE_EPSILON {
        fallback_normal()
    } else {
        v / length
    }
}

/// Point on the XZ circle of `radius` at `angle` radians, lifted to height `y`.
///
/// Angle zero lies on +X and increases toward +Z.
pub fn on_ring(radius: f64, angle: f64, y: f64) -> Vec3 {
    Vec3::new(radius * angle.cos(), y, radius * angle.sin())
}

/// Converts sphere coordinates to Cartesian.
///
/// `theta` is the polar angle measured from +Y, `phi` the azimuth in the
/// XZ plane measured from +X toward +Z.
///
/// # Examples
/// ```
/// use solid_mesh::vec3::spherical;
/// let north = spherical(2.0, 0.0, 0.0);
/// assert_eq!(north.y, 2.0);
/// ```
pub fn spherical(radius: f64, theta: f64, phi: f64) -> Vec3 {
    let (sin_theta, cos_theta) = theta.sin_cos();
    Vec3::new(
        radius * sin_theta * phi.cos(),
        radius * cos_theta,
        radius * sin_theta * phi.sin(),
    )
}
