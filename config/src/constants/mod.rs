//! # Configuration Constants
//!
//! Centralized constants for solid generation. Tessellation defaults,
//! numeric tolerances, output precision, and the ranges used when
//! synthesizing random fixtures are defined here.
//!
//! ## Categories
//!
//! - **Precision**: Floating-point tolerances
//! - **Defaults**: Dimensions and segment counts used when callers omit them
//! - **Output**: Text formatting and label values
//! - **Random**: Ranges for randomized fixture generation

use std::fmt;

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Length below which a vector is treated as degenerate when normalizing.
///
/// Normalizing such a vector yields [`FALLBACK_NORMAL`] instead of dividing
/// by a near-zero length.
///
/// # Example
///
/// ```rust
/// use config::constants::NORMALIZE_EPSILON;
///
/// let length: f64 = 0.00005;
/// assert!(length < NORMALIZE_EPSILON);
/// ```
pub const NORMALIZE_EPSILON: f64 = 1e-4;

/// Direction returned when a degenerate vector is normalized (+Y).
pub const FALLBACK_NORMAL: [f64; 3] = [0.0, 1.0, 0.0];

/// Quantization step used when comparing vertex positions for equality.
///
/// Coordinates are divided by this value and rounded before being used as
/// map keys, so positions computed along different paths still match.
///
/// # Example
///
/// ```rust
/// use config::constants::VERTEX_WELD_EPSILON;
///
/// let a = (1.0_f64 / VERTEX_WELD_EPSILON).round() as i64;
/// let b = ((1.0_f64 + 1e-12) / VERTEX_WELD_EPSILON).round() as i64;
/// assert_eq!(a, b);
/// ```
pub const VERTEX_WELD_EPSILON: f64 = 1e-9;

// =============================================================================
// DEFAULT CONSTANTS
// =============================================================================

/// Minimum segment count for any curved primitive.
pub const MIN_SEGMENTS: u32 = 3;

/// Default edge length for each axis of a box.
pub const DEFAULT_CUBE_EDGE: f64 = 10.0;

/// Default cylinder radius.
pub const DEFAULT_CYLINDER_RADIUS: f64 = 5.0;

/// Default cylinder height.
pub const DEFAULT_CYLINDER_HEIGHT: f64 = 10.0;

/// Default radial segment count for cylinders.
///
/// # Example
///
/// ```rust
/// use config::constants::DEFAULT_CYLINDER_SEGMENTS;
///
/// // Side, top cap and bottom cap facets
/// assert_eq!(4 * DEFAULT_CYLINDER_SEGMENTS, 128);
/// ```
pub const DEFAULT_CYLINDER_SEGMENTS: u32 = 32;

/// Default sphere radius.
pub const DEFAULT_SPHERE_RADIUS: f64 = 5.0;

/// Default latitude and longitude segment count for spheres.
///
/// # Example
///
/// ```rust
/// use config::constants::DEFAULT_SPHERE_SEGMENTS;
///
/// let n = DEFAULT_SPHERE_SEGMENTS;
/// assert_eq!(2 * n * n, 512);
/// ```
pub const DEFAULT_SPHERE_SEGMENTS: u32 = 16;

// =============================================================================
// OUTPUT CONSTANTS
// =============================================================================

/// Digits written after the decimal point for every STL number.
pub const STL_DECIMAL_PLACES: usize = 6;

/// Label reported when stored text names none of the known primitives.
pub const FALLBACK_LABEL: &str = "3D";

// =============================================================================
// RANDOM FIXTURE CONSTANTS
// =============================================================================

/// Inclusive integer range for each random box edge.
pub const RANDOM_CUBE_EDGE: (u32, u32) = (8, 15);

/// Inclusive range for a random cylinder radius.
pub const RANDOM_CYLINDER_RADIUS: (f64, f64) = (3.0, 6.0);

/// Inclusive range for a random cylinder height.
pub const RANDOM_CYLINDER_HEIGHT: (f64, f64) = (8.0, 15.0);

/// Inclusive range for a random sphere radius.
pub const RANDOM_SPHERE_RADIUS: (f64, f64) = (4.0, 7.0);

/// Segment count used for every random cylinder.
pub const RANDOM_CYLINDER_SEGMENTS: u32 = DEFAULT_CYLINDER_SEGMENTS;

/// Segment count used for every random sphere.
pub const RANDOM_SPHERE_SEGMENTS: u32 = DEFAULT_SPHERE_SEGMENTS;

/// Immutable snapshot of the ranges used to synthesize random solids.
///
/// # Examples
/// ```
/// use config::constants::RandomRanges;
/// let ranges = RandomRanges::default();
/// assert_eq!(ranges.cube_edge, (8, 15));
/// assert_eq!(ranges.sphere_segments, 16);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RandomRanges {
    /// Inclusive integer range applied independently to width, height and depth.
    pub cube_edge: (u32, u32),
    /// Inclusive cylinder radius range.
    pub cylinder_radius: (f64, f64),
    /// Inclusive cylinder height range.
    pub cylinder_height: (f64, f64),
    /// Fixed cylinder segment count.
    pub cylinder_segments: u32,
    /// Inclusive sphere radius range.
    pub sphere_radius: (f64, f64),
    /// Fixed sphere segment count.
    pub sphere_segments: u32,
}

impl RandomRanges {
    /// Builds a range set, rejecting empty, non-positive or non-finite
    /// ranges and segment counts below [`MIN_SEGMENTS`].
    ///
    /// # Examples
    /// ```
    /// use config::constants::RandomRanges;
    /// let ranges = RandomRanges::new((1, 2), (1.0, 2.0), (3.0, 4.0), 8, (1.0, 1.5), 6)
    ///     .expect("valid ranges");
    /// assert_eq!(ranges.cylinder_segments, 8);
    /// assert!(RandomRanges::new((0, 2), (1.0, 2.0), (3.0, 4.0), 8, (1.0, 1.5), 6).is_err());
    /// ```
    pub fn new(
        cube_edge: (u32, u32),
        cylinder_radius: (f64, f64),
        cylinder_height: (f64, f64),
        cylinder_segments: u32,
        sphere_radius: (f64, f64),
        sphere_segments: u32,
    ) -> Result<Self, ConfigError> {
        let ranges = Self {
            cube_edge,
            cylinder_radius,
            cylinder_height,
            cylinder_segments,
            sphere_radius,
            sphere_segments,
        };
        ranges.validate()?;
        Ok(ranges)
    }

    /// Re-checks every range. Fields are public, so values built with a
    /// struct literal must pass through here before they are sampled.
    ///
    /// # Examples
    /// ```
    /// use config::constants::RandomRanges;
    /// let inverted = RandomRanges { cube_edge: (15, 8), ..RandomRanges::default() };
    /// assert!(inverted.validate().is_err());
    /// assert!(RandomRanges::default().validate().is_ok());
    /// ```
    pub fn validate(&self) -> Result<(), ConfigError> {
        let (edge_min, edge_max) = self.cube_edge;
        if edge_min == 0 || edge_min > edge_max {
            return Err(ConfigError::InvalidRange {
                name: "cube_edge",
                min: f64::from(edge_min),
                max: f64::from(edge_max),
            });
        }
        check_range("cylinder_radius", self.cylinder_radius)?;
        check_range("cylinder_height", self.cylinder_height)?;
        check_range("sphere_radius", self.sphere_radius)?;
        if self.cylinder_segments < MIN_SEGMENTS {
            return Err(ConfigError::InvalidSegments(self.cylinder_segments));
        }
        if self.sphere_segments < MIN_SEGMENTS {
            return Err(ConfigError::InvalidSegments(self.sphere_segments));
        }
        Ok(())
    }
}

impl Default for RandomRanges {
    fn default() -> Self {
        Self {
            cube_edge: RANDOM_CUBE_EDGE,
            cylinder_radius: RANDOM_CYLINDER_RADIUS,
            cylinder_height: RANDOM_CYLINDER_HEIGHT,
            cylinder_segments: RANDOM_CYLINDER_SEGMENTS,
            sphere_radius: RANDOM_SPHERE_RADIUS,
            sphere_segments: RANDOM_SPHERE_SEGMENTS,
        }
    }
}

fn check_range(name: &'static str, (min, max): (f64, f64)) -> Result<(), ConfigError> {
    if !min.is_finite() || !max.is_finite() || min <= 0.0 || min > max {
        return Err(ConfigError::InvalidRange { name, min, max });
    }
    Ok(())
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Raised when a range is empty, non-finite, or not strictly positive.
    InvalidRange {
        /// Field the range belongs to.
        name: &'static str,
        /// Lower bound as supplied.
        min: f64,
        /// Upper bound as supplied.
        max: f64,
    },
    /// Raised when the requested segment count is too small to form a polygon.
    InvalidSegments(u32),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidRange { name, min, max } => {
                write!(f, "{name} range must be positive and ordered: [{min}, {max}]")
            }
            ConfigError::InvalidSegments(value) => {
                write!(f, "segments must be >= {MIN_SEGMENTS}: {value}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
