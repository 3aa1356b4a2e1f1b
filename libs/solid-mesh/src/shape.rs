//! # Shapes
//!
//! The closed set of supported solids, their parameters, and recovery of
//! the shape label from previously rendered STL text.

use std::fmt;
use std::io;
use std::str::FromStr;

use config::constants::{
    DEFAULT_CUBE_EDGE, DEFAULT_CYLINDER_HEIGHT, DEFAULT_CYLINDER_RADIUS, DEFAULT_CYLINDER_SEGMENTS,
    DEFAULT_SPHERE_RADIUS, DEFAULT_SPHERE_SEGMENTS, FALLBACK_LABEL,
};
use serde::{Deserialize, Serialize};

use crate::error::{MeshError, MeshResult};
use crate::export::stl;
use crate::mesh::Mesh;
use crate::primitives::{create_cube, create_cylinder, create_sphere};

/// Kind of primitive solid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SolidKind {
    Cube,
    Cylinder,
    Sphere,
}

impl SolidKind {
    /// Every kind, in label-detection priority order.
    pub const ALL: [SolidKind; 3] = [SolidKind::Cube, SolidKind::Cylinder, SolidKind::Sphere];

    /// Name written after `solid` / `endsolid`.
    pub fn name(self) -> &'static str {
        match self {
            SolidKind::Cube => "Cube",
            SolidKind::Cylinder => "Cylinder",
            SolidKind::Sphere => "Sphere",
        }
    }

    /// Display label recovered from stored text.
    pub fn label(self) -> &'static str {
        match self {
            SolidKind::Cube => "CUBE",
            SolidKind::Cylinder => "CYLINDER",
            SolidKind::Sphere => "SPHERE",
        }
    }

    fn header(self) -> &'static str {
        match self {
            SolidKind::Cube => "solid Cube",
            SolidKind::Cylinder => "solid Cylinder",
            SolidKind::Sphere => "solid Sphere",
        }
    }

    /// Finds which kind `text` encodes by scanning for `solid <Name>`.
    ///
    /// The token may appear anywhere. Kinds are tried in [`SolidKind::ALL`]
    /// order and the first one present wins.
    ///
    /// # Example
    ///
    /// ```rust
    /// use solid_mesh::SolidKind;
    ///
    /// assert_eq!(SolidKind::detect("solid Sphere\nendsolid Sphere\n"), Some(SolidKind::Sphere));
    /// assert_eq!(SolidKind::detect("P6 640 480"), None);
    /// ```
    pub fn detect(text: &str) -> Option<SolidKind> {
        Self::ALL.into_iter().find(|kind| text.contains(kind.header()))
    }

    /// Byte-slice variant of [`SolidKind::detect`] for stored payloads that
    /// may not be valid UTF-8.
    pub fn detect_bytes(bytes: &[u8]) -> Option<SolidKind> {
        Self::ALL.into_iter().find(|kind| {
            let needle = kind.header().as_bytes();
            bytes.windows(needle.len()).any(|window| window == needle)
        })
    }
}

impl fmt::Display for SolidKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SolidKind {
    type Err = MeshError;

    /// Parses `cube`, `cylinder` or `sphere`, ignoring ASCII case and
    /// surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| MeshError::unknown_shape(trimmed))
    }
}

/// Returns the label of the solid named in `text`, or `"3D"` if none is.
///
/// Never fails and runs in time linear in the text length.
///
/// # Example
///
/// ```rust
/// use solid_mesh::shape_label;
///
/// assert_eq!(shape_label("solid Cylinder\n"), "CYLINDER");
/// assert_eq!(shape_label("hello"), "3D");
/// ```
pub fn shape_label(text: &str) -> &'static str {
    SolidKind::detect(text).map_or(FALLBACK_LABEL, SolidKind::label)
}

/// Byte-slice variant of [`shape_label`].
pub fn shape_label_bytes(bytes: &[u8]) -> &'static str {
    SolidKind::detect_bytes(bytes).map_or(FALLBACK_LABEL, SolidKind::label)
}

/// Parameters for one primitive.
///
/// Serializes with a `shape` tag, e.g. `{"shape":"sphere","radius":5.0,"segments":16}`.
/// Omitted fields take the documented defaults.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "shape", rename_all = "lowercase")]
pub enum ShapeParams {
    Cube {
        #[serde(default = "default_cube_edge")]
        width: f64,
        #[serde(default = "default_cube_edge")]
        height: f64,
        #[serde(default = "default_cube_edge")]
        depth: f64,
    },
    Cylinder {
        #[serde(default = "default_cylinder_radius")]
        radius: f64,
        #[serde(default = "default_cylinder_height")]
        height: f64,
        #[serde(default = "default_cylinder_segments")]
        segments: u32,
    },
    Sphere {
        #[serde(default = "default_sphere_radius")]
        radius: f64,
        #[serde(default = "default_sphere_segments")]
        segments: u32,
    },
}

fn default_cube_edge() -> f64 {
    DEFAULT_CUBE_EDGE
}

fn default_cylinder_radius() -> f64 {
    DEFAULT_CYLINDER_RADIUS
}

fn default_cylinder_height() -> f64 {
    DEFAULT_CYLINDER_HEIGHT
}

fn default_cylinder_segments() -> u32 {
    DEFAULT_CYLINDER_SEGMENTS
}

fn default_sphere_radius() -> f64 {
    DEFAULT_SPHERE_RADIUS
}

fn default_sphere_segments() -> u32 {
    DEFAULT_SPHERE_SEGMENTS
}

impl ShapeParams {
    /// Default parameters for `kind`.
    pub fn defaults(kind: SolidKind) -> Self {
        match kind {
            SolidKind::Cube => ShapeParams::Cube {
                width: DEFAULT_CUBE_EDGE,
                height: DEFAULT_CUBE_EDGE,
                depth: DEFAULT_CUBE_EDGE,
            },
            SolidKind::Cylinder => ShapeParams::Cylinder {
                radius: DEFAULT_CYLINDER_RADIUS,
                height: DEFAULT_CYLINDER_HEIGHT,
                segments: DEFAULT_CYLINDER_SEGMENTS,
            },
            SolidKind::Sphere => ShapeParams::Sphere {
                radius: DEFAULT_SPHERE_RADIUS,
                segments: DEFAULT_SPHERE_SEGMENTS,
            },
        }
    }

    /// Kind of solid these parameters describe.
    pub fn kind(&self) -> SolidKind {
        match self {
            ShapeParams::Cube { .. } => SolidKind::Cube,
            ShapeParams::Cylinder { .. } => SolidKind::Cylinder,
            ShapeParams::Sphere { .. } => SolidKind::Sphere,
        }
    }

    /// Builds the mesh for these parameters.
    pub fn build(&self) -> MeshResult<Solid> {
        let mesh = match *self {
            ShapeParams::Cube {
                width,
                height,
                depth,
            } => create_cube(width, height, depth)?,
            ShapeParams::Cylinder {
                radius,
                height,
                segments,
            } => create_cylinder(radius, height, segments)?,
            ShapeParams::Sphere { radius, segments } => create_sphere(radius, segments)?,
        };
        Ok(Solid {
            kind: self.kind(),
            mesh,
        })
    }
}

/// A named solid: its kind and the facets that make it up.
#[derive(Debug, Clone, PartialEq)]
pub struct Solid {
    pub kind: SolidKind,
    pub mesh: Mesh,
}

impl Solid {
    /// Name used in the STL header and footer.
    pub fn name(&self) -> &'static str {
        self.kind.name()
    }

    /// Renders the solid as ASCII STL.
    pub fn to_stl(&self) -> String {
        stl::to_stl_string(self.name(), self.mesh.facets())
    }

    /// Streams the solid as ASCII STL into `writer`.
    pub fn write_stl<W: io::Write>(&self, writer: W) -> MeshResult<()> {
        stl::write_stl_io(writer, self.name(), self.mesh.facets())?;
        Ok(())
    }
}
