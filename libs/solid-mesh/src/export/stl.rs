//! # ASCII STL
//!
//! Renders facet lists as ASCII STL:
//!
//! ```text
//! solid <name>
//!   facet normal <nx> <ny> <nz>
//!     outer loop
//!       vertex <x> <y> <z>
//!       vertex <x> <y> <z>
//!       vertex <x> <y> <z>
//!     endloop
//!   endfacet
//! endsolid <name>
//! ```
//!
//! Numbers are fixed-point with `STL_DECIMAL_PLACES` digits and a `.`
//! separator. Rust formatting never consults the locale and never switches
//! to exponent notation for `{:.N}`, so the output is byte-stable. Values
//! that round to zero are written as `0.000000`, never `-0.000000`.

use std::fmt;
use std::io;

use config::constants::STL_DECIMAL_PLACES;

use crate::mesh::Facet;
use crate::vec3::Vec3;

/// Rough upper bound of bytes emitted per facet, used to presize buffers.
const BYTES_PER_FACET: usize = 256;

/// Writes a complete ASCII STL document into `out`.
///
/// Header and footer both use `name` verbatim. Facets are written in the
/// given order.
///
/// # Example
///
/// ```rust
/// use solid_mesh::{write_stl, Facet, Vec3};
///
/// let facet = Facet::new(Vec3::Z, [Vec3::ZERO, Vec3::X, Vec3::Y]);
/// let mut text = String::new();
/// write_stl(&mut text, "Tri", &[facet]).unwrap();
/// assert!(text.contains("      vertex 1.000000 0.000000 0.000000\n"));
/// ```
pub fn write_stl<W: fmt::Write>(out: &mut W, name: &str, facets: &[Facet]) -> fmt::Result {
    writeln!(out, "solid {name}")?;
    for facet in facets {
        write_facet(out, facet)?;
    }
    writeln!(out, "endsolid {name}")
}

/// Renders an ASCII STL document into a single presized `String`.
///
/// # Example
///
/// ```rust
/// use solid_mesh::{create_cube, to_stl_string};
///
/// let mesh = create_cube(10.0, 10.0, 10.0).unwrap();
/// let text = to_stl_string("Cube", mesh.facets());
/// assert!(text.starts_with("solid Cube\n  facet normal 0.000000 0.000000 1.000000\n"));
/// assert!(text.ends_with("endsolid Cube\n"));
/// ```
pub fn to_stl_string(name: &str, facets: &[Facet]) -> String {
    let mut text = String::with_capacity(2 * name.len() + 16 + facets.len() * BYTES_PER_FACET);
    // fmt::Write for String never returns Err
    if let Err(err) = write_stl(&mut text, name, facets) {
        tracing::warn!(solid = name, %err, "stl rendering into a string reported an error");
    }
    tracing::debug!(solid = name, facets = facets.len(), bytes = text.len(), "rendered stl");
    text
}

/// Streams an ASCII STL document into an `io::Write` sink.
///
/// Output is identical to [`to_stl_string`]. Wrap unbuffered sinks such as
/// files in `io::BufWriter`.
pub fn write_stl_io<W: io::Write>(writer: W, name: &str, facets: &[Facet]) -> io::Result<()> {
    let mut adapter = IoAdapter {
        inner: writer,
        error: None,
    };
    match write_stl(&mut adapter, name, facets) {
        Ok(()) => adapter.inner.flush(),
        Err(fmt::Error) => Err(adapter
            .error
            .unwrap_or_else(|| io::Error::other("formatter error"))),
    }
}

fn write_facet<W: fmt::Write>(out: &mut W, facet: &Facet) -> fmt::Result {
    out.write_str("  facet normal ")?;
    write_triple(out, facet.normal)?;
    out.write_str("    outer loop\n")?;
    for vertex in facet.vertices {
        out.write_str("      vertex ")?;
        write_triple(out, vertex)?;
    }
    out.write_str("    endloop\n  endfacet\n")
}

fn write_triple<W: fmt::Write>(out: &mut W, v: Vec3) -> fmt::Result {
    let p = STL_DECIMAL_PLACES;
    let [x, y, z] = v.to_array().map(unsigned_zero);
    writeln!(out, "{x:.p$} {y:.p$} {z:.p$}")
}

/// Maps values that print as zero (including `-0.0` and `sin(π)` residue)
/// to `+0.0` so no `-0.000000` reaches the output.
fn unsigned_zero(value: f64) -> f64 {
    let half_ulp_of_output = 0.5 * 10f64.powi(-(STL_DECIMAL_PLACES as i32));
    if value.abs() < half_ulp_of_output {
        0.0
    } else {
        value
    }
}

/// Bridges `fmt::Write` onto `io::Write`, keeping the first I/O error.
struct IoAdapter<W> {
    inner: W,
    error: Option<io::Error>,
}

impl<W: io::Write> fmt::Write for IoAdapter<W> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.inner.write_all(s.as_bytes()).map_err(|e| {
            self.error = Some(e);
            fmt::Error
        })
    }
}
