//! # Tests for Config Constants
//!
//! Unit tests verifying the correctness of configuration constants.

use crate::constants::*;

// =============================================================================
// PRECISION TESTS
// =============================================================================

#[test]
fn test_normalize_epsilon_is_positive() {
    assert!(NORMALIZE_EPSILON > 0.0, "NORMALIZE_EPSILON must be positive");
}

#[test]
fn test_weld_epsilon_finer_than_output_precision() {
    // Welding must not merge points the STL text can tell apart
    assert!(VERTEX_WELD_EPSILON < 10f64.powi(-(STL_DECIMAL_PLACES as i32)));
}

#[test]
fn test_fallback_normal_is_unit_y() {
    assert_eq!(FALLBACK_NORMAL, [0.0, 1.0, 0.0]);
}

// =============================================================================
// DEFAULT TESTS
// =============================================================================

#[test]
fn test_default_segments_meet_minimum() {
    assert!(DEFAULT_CYLINDER_SEGMENTS >= MIN_SEGMENTS);
    assert!(DEFAULT_SPHERE_SEGMENTS >= MIN_SEGMENTS);
}

#[test]
fn test_default_dimensions() {
    assert_eq!(DEFAULT_CUBE_EDGE, 10.0);
    assert_eq!(DEFAULT_CYLINDER_SEGMENTS, 32);
    assert_eq!(DEFAULT_SPHERE_SEGMENTS, 16);
}

// =============================================================================
// RANDOM RANGE TESTS
// =============================================================================

#[test]
fn test_random_ranges_are_ordered() {
    assert!(RANDOM_CUBE_EDGE.0 <= RANDOM_CUBE_EDGE.1);
    assert!(RANDOM_CYLINDER_RADIUS.0 <= RANDOM_CYLINDER_RADIUS.1);
    assert!(RANDOM_CYLINDER_HEIGHT.0 <= RANDOM_CYLINDER_HEIGHT.1);
    assert!(RANDOM_SPHERE_RADIUS.0 <= RANDOM_SPHERE_RADIUS.1);
}

#[test]
fn test_fallback_label() {
    assert_eq!(FALLBACK_LABEL, "3D");
}
