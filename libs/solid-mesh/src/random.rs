//! # Random Solids
//!
//! Synthesizes placeholder STL fixtures: a uniformly chosen primitive with
//! dimensions drawn from [`RandomRanges`]. Output is intentionally not
//! reproducible unless the caller supplies a seeded RNG.

use config::constants::RandomRanges;
use rand::Rng;

use crate::error::MeshResult;
use crate::shape::{ShapeParams, SolidKind};

/// Draws a random kind and parameters within `ranges`.
///
/// Box edges are whole numbers drawn independently per axis. Segment counts
/// are fixed by the ranges. Ranges are validated before any sampling, so an
/// empty or non-finite range is reported as `MeshError::Config`.
pub fn random_params<R: Rng + ?Sized>(
    rng: &mut R,
    ranges: &RandomRanges,
) -> MeshResult<ShapeParams> {
    ranges.validate()?;
    let kind = SolidKind::ALL[rng.random_range(0..SolidKind::ALL.len())];
    let params = match kind {
        SolidKind::Cube => {
            let (min, max) = ranges.cube_edge;
            let mut edge = || f64::from(rng.random_range(min..=max));
            ShapeParams::Cube {
                width: edge(),
                height: edge(),
                depth: edge(),
            }
        }
        SolidKind::Cylinder => ShapeParams::Cylinder {
            radius: sample(rng, ranges.cylinder_radius),
            height: sample(rng, ranges.cylinder_height),
            segments: ranges.cylinder_segments,
        },
        SolidKind::Sphere => ShapeParams::Sphere {
            radius: sample(rng, ranges.sphere_radius),
            segments: ranges.sphere_segments,
        },
    };
    tracing::debug!(?params, "picked random solid");
    Ok(params)
}

/// Builds a random solid with `rng` and returns its STL text.
///
/// # Example
///
/// ```rust
/// use config::constants::RandomRanges;
/// use rand::{rngs::StdRng, SeedableRng};
/// use solid_mesh::{random_solid_stl_with, shape_label};
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let text = random_solid_stl_with(&mut rng, &RandomRanges::default()).unwrap();
/// assert_ne!(shape_label(&text), "3D");
/// ```
pub fn random_solid_stl_with<R: Rng + ?Sized>(
    rng: &mut R,
    ranges: &RandomRanges,
) -> MeshResult<String> {
    Ok(random_params(rng, ranges)?.build()?.to_stl())
}

/// Builds a random solid from the thread RNG and default ranges.
pub fn random_solid_stl() -> MeshResult<String> {
    random_solid_stl_with(&mut rand::rng(), &RandomRanges::default())
}

fn sample<R: Rng + ?Sized>(rng: &mut R, (min, max): (f64, f64)) -> f64 {
    rng.random_range(min..=max)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MeshError;
    use crate::shape::shape_label;
    use config::constants::ConfigError;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    #[test]
    fn test_params_stay_in_range() {
        let ranges = RandomRanges::default();
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..500 {
            match random_params(&mut rng, &ranges).unwrap() {
                ShapeParams::Cube {
                    width,
                    height,
                    depth,
                } => {
                    for edge in [width, height, depth] {
                        assert!((8.0..=15.0).contains(&edge));
                        assert_eq!(edge.fract(), 0.0);
                    }
                }
                ShapeParams::Cylinder {
                    radius,
                    height,
                    segments,
                } => {
                    assert!((3.0..=6.0).contains(&radius));
                    assert!((8.0..=15.0).contains(&height));
                    assert_eq!(segments, 32);
                }
                ShapeParams::Sphere { radius, segments } => {
                    assert!((4.0..=7.0).contains(&radius));
                    assert_eq!(segments, 16);
                }
            }
        }
    }

    #[test]
    fn test_every_kind_is_picked() {
        let ranges = RandomRanges::default();
        let mut rng = StdRng::seed_from_u64(1);
        let kinds: HashSet<SolidKind> = (0..200)
            .map(|_| random_params(&mut rng, &ranges).unwrap().kind())
            .collect();
        assert_eq!(kinds.len(), 3);
    }

    #[test]
    fn test_seeded_output_repeats() {
        let ranges = RandomRanges::default();
        let a = random_solid_stl_with(&mut StdRng::seed_from_u64(9), &ranges).unwrap();
        let b = random_solid_stl_with(&mut StdRng::seed_from_u64(9), &ranges).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_custom_ranges() {
        let ranges = RandomRanges::new((2, 2), (1.0, 1.0), (3.0, 3.0), 5, (2.0, 2.0), 4).unwrap();
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..30 {
            let params = random_params(&mut rng, &ranges).unwrap();
            let expected = match params.kind() {
                SolidKind::Cube => ShapeParams::Cube {
                    width: 2.0,
                    height: 2.0,
                    depth: 2.0,
                },
                SolidKind::Cylinder => ShapeParams::Cylinder {
                    radius: 1.0,
                    height: 3.0,
                    segments: 5,
                },
                SolidKind::Sphere => ShapeParams::Sphere {
                    radius: 2.0,
                    segments: 4,
                },
            };
            assert_eq!(params, expected);
        }
    }

    #[test]
    fn test_inverted_ranges_are_errors_not_panics() {
        let ranges = RandomRanges {
            cube_edge: (15, 8),
            cylinder_radius: (6.0, 3.0),
            sphere_radius: (7.0, 4.0),
            ..RandomRanges::default()
        };
        let mut rng = StdRng::seed_from_u64(5);
        for _ in 0..10 {
            let result = random_solid_stl_with(&mut rng, &ranges);
            assert!(matches!(
                result,
                Err(MeshError::Config(ConfigError::InvalidRange { name: "cube_edge", .. }))
            ));
        }
    }

    #[test]
    fn test_nan_range_is_rejected() {
        let ranges = RandomRanges {
            sphere_radius: (f64::NAN, f64::NAN),
            ..RandomRanges::default()
        };
        let result = random_params(&mut StdRng::seed_from_u64(0), &ranges);
        assert!(matches!(result, Err(MeshError::Config(_))));
    }

    #[test]
    fn test_thread_rng_output_is_labelled() {
        let text = random_solid_stl().unwrap();
        assert!(["CUBE", "CYLINDER", "SPHERE"].contains(&shape_label(&text)));
        assert!(text.starts_with("solid "));
    }
}
