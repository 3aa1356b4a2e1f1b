//! # Mesh Data Structure
//!
//! Flat facet lists: every facet owns its three vertex copies and one
//! normal. There is no shared vertex buffer, so edges shared by two facets
//! are stored twice. This is exactly what ASCII STL needs.

use std::collections::HashMap;

use config::constants::VERTEX_WELD_EPSILON;
use serde::{Deserialize, Serialize};

use crate::vec3::{normalize, Vec3};

/// A single triangle with its flat-shading normal.
///
/// Vertices are stored counter-clockwise as seen from outside the solid.
/// The normal is supplied by the builder and is not recomputed here.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Facet {
    /// Outward facing normal written to the `facet normal` line
    pub normal: Vec3,
    /// Corner positions in winding order
    pub vertices: [Vec3; 3],
}

impl Facet {
    /// Creates a facet from a normal and three corners.
    #[inline]
    pub fn new(normal: Vec3, vertices: [Vec3; 3]) -> Self {
        Self { normal, vertices }
    }

    /// Normal implied by the winding order, `(v1 - v0) × (v2 - v0)` normalized.
    ///
    /// Degenerate facets (zero area) return the fallback direction.
    pub fn geometric_normal(&self) -> Vec3 {
        let [v0, v1, v2] = self.vertices;
        normalize((v1 - v0).cross(v2 - v0))
    }

    /// Twice the facet area.
    pub fn doubled_area(&self) -> f64 {
        let [v0, v1, v2] = self.vertices;
        (v1 - v0).cross(v2 - v0).length()
    }
}

/// An ordered list of facets.
///
/// # Example
///
/// ```rust
/// use solid_mesh::{Facet, Mesh, Vec3};
///
/// let mut mesh = Mesh::new();
/// mesh.push(Facet::new(Vec3::Z, [Vec3::ZERO, Vec3::X, Vec3::Y]));
/// assert_eq!(mesh.facet_count(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Mesh {
    facets: Vec<Facet>,
}

impl Mesh {
    /// Creates an empty mesh.
    pub fn new() -> Self {
        Self { facets: Vec::new() }
    }

    /// Creates a mesh with room for `facet_count` facets.
    pub fn with_capacity(facet_count: usize) -> Self {
        Self {
            facets: Vec::with_capacity(facet_count),
        }
    }

    /// Returns the number of facets.
    #[inline]
    pub fn facet_count(&self) -> usize {
        self.facets.len()
    }

    /// Returns true if the mesh has no facets.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.facets.is_empty()
    }

    /// Appends a facet.
    #[inline]
    pub fn push(&mut self, facet: Facet) {
        self.facets.push(facet);
    }

    /// Appends a triangle with the given normal.
    #[inline]
    pub fn add_triangle(&mut self, normal: Vec3, v0: Vec3, v1: Vec3, v2: Vec3) {
        self.facets.push(Facet::new(normal, [v0, v1, v2]));
    }

    /// Appends a planar quad as two triangles split along the `a`-`c` diagonal.
    ///
    /// Corners must be given counter-clockwise as seen from outside.
    pub fn add_quad(&mut self, normal: Vec3, [a, b, c, d]: [Vec3; 4]) {
        self.add_triangle(normal, a, b, c);
        self.add_triangle(normal, a, c, d);
    }

    /// Returns the facets in emission order.
    #[inline]
    pub fn facets(&self) -> &[Facet] {
        &self.facets
    }

    /// Iterates over the facets.
    pub fn iter(&self) -> std::slice::Iter<'_, Facet> {
        self.facets.iter()
    }

    /// Iterates over every vertex copy, three per facet.
    pub fn vertices(&self) -> impl Iterator<Item = Vec3> + '_ {
        self.facets.iter().flat_map(|f| f.vertices)
    }

    /// Computes the axis-aligned bounding box.
    ///
    /// Returns (min, max) corners; an empty mesh yields (ZERO, ZERO).
    pub fn bounding_box(&self) -> (Vec3, Vec3) {
        let mut points = self.vertices();
        let Some(first) = points.next() else {
            return (Vec3::ZERO, Vec3::ZERO);
        };
        points.fold((first, first), |(min, max), v| (min.min(v), max.max(v)))
    }

    /// Checks that the surface is closed and consistently wound.
    ///
    /// Vertex positions are welded on a `VERTEX_WELD_EPSILON` grid. Every
    /// directed edge `a → b` must then occur as often as `b → a`.
    pub fn is_closed(&self) -> bool {
        let mut edges: HashMap<([i64; 3], [i64; 3]), i64> = HashMap::new();

        for facet in &self.facets {
            let keys = facet.vertices.map(weld_key);
            for i in 0..3 {
                let (a, b) = (keys[i], keys[(i + 1) % 3]);
                if a == b {
                    continue;
                }
                *edges.entry((a, b)).or_insert(0) += 1;
                *edges.entry((b, a)).or_insert(0) -= 1;
            }
        }

        edges.values().all(|&balance| balance == 0)
    }
}

impl<'a> IntoIterator for &'a Mesh {
    type Item = &'a Facet;
    type IntoIter = std::slice::Iter<'a, Facet>;

    fn into_iter(self) -> Self::IntoIter {
        self.facets.iter()
    }
}

impl FromIterator<Facet> for Mesh {
    fn from_iter<I: IntoIterator<Item = Facet>>(iter: I) -> Self {
        Self {
            facets: iter.into_iter().collect(),
        }
    }
}

fn weld_key(v: Vec3) -> [i64; 3] {
    (v / VERTEX_WELD_EPSILON).round().to_array().map(|c| c as i64)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tetrahedron() -> Mesh {
        let o = Vec3::ZERO;
        let (x, y, z) = (Vec3::X, Vec3::Y, Vec3::Z);
        let mut mesh = Mesh::new();
        mesh.add_triangle(Vec3::NEG_Z, o, y, x);
        mesh.add_triangle(Vec3::NEG_Y, o, x, z);
        mesh.add_triangle(Vec3::NEG_X, o, z, y);
        mesh.add_triangle(Vec3::ONE.normalize(), x, y, z);
        mesh
    }

    #[test]
    fn test_mesh_new() {
        let mesh = Mesh::new();
        assert!(mesh.is_empty());
        assert_eq!(mesh.facet_count(), 0);
        assert_eq!(mesh.bounding_box(), (Vec3::ZERO, Vec3::ZERO));
    }

    #[test]
    fn test_add_quad_splits_on_diagonal() {
        let mut mesh = Mesh::with_capacity(2);
        let corners = [
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(1.0, 1.0, 0.0),
            Vec3::new(0.0, 1.0, 0.0),
        ];
        mesh.add_quad(Vec3::Z, corners);
        assert_eq!(mesh.facet_count(), 2);
        assert_eq!(mesh.facets()[0].vertices, [corners[0], corners[1], corners[2]]);
        assert_eq!(mesh.facets()[1].vertices, [corners[0], corners[2], corners[3]]);
        for facet in &mesh {
            assert_eq!(facet.normal, Vec3::Z);
            assert_eq!(facet.geometric_normal(), Vec3::Z);
        }
    }

    #[test]
    fn test_mesh_bounding_box() {
        let mut mesh = Mesh::new();
        mesh.add_triangle(
            Vec3::Z,
            Vec3::new(-1.0, -2.0, -3.0),
            Vec3::new(4.0, 5.0, 6.0),
            Vec3::ZERO,
        );
        let (min, max) = mesh.bounding_box();
        assert_eq!(min, Vec3::new(-1.0, -2.0, -3.0));
        assert_eq!(max, Vec3::new(4.0, 5.0, 6.0));
    }

    #[test]
    fn test_tetrahedron_is_closed() {
        let mesh = tetrahedron();
        assert!(mesh.is_closed());
        for facet in &mesh {
            assert!((facet.geometric_normal() - facet.normal).length() < 1e-12);
        }
    }

    #[test]
    fn test_open_mesh_is_not_closed() {
        let mesh: Mesh = tetrahedron().iter().skip(1).copied().collect();
        assert_eq!(mesh.facet_count(), 3);
        assert!(!mesh.is_closed());
    }

    #[test]
    fn test_flipped_facet_is_not_closed() {
        let mut facets = tetrahedron().facets().to_vec();
        facets[0].vertices.swap(1, 2);
        let mesh: Mesh = facets.into_iter().collect();
        assert!(!mesh.is_closed());
    }

    #[test]
    fn test_degenerate_facet_normal_falls_back() {
        let facet = Facet::new(Vec3::X, [Vec3::ONE, Vec3::ONE, Vec3::ONE]);
        assert_eq!(facet.doubled_area(), 0.0);
        assert_eq!(facet.geometric_normal(), Vec3::Y);
    }
}
