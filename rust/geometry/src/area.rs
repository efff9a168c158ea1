// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Ground-projected polygon area
//!
//! Applies the planar shoelace formula to the tangent-plane projection of a
//! section polygon. Winding order does not matter; the result is always the
//! absolute enclosed area.

use roofscope_core::LatLng;

use crate::error::{Error, Result};
use crate::project::{project_to_plane, vertex_mean, ProjectedRing};

/// Enclosed areas below this threshold are treated as degenerate
const DEGENERATE_SQFT: f64 = 1e-6;

/// Computed flat (plan-view) area for one polygon
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlatArea {
    /// Ground-projected area in square feet
    pub sqft: f64,
    /// True when the ring encloses no area (collinear or repeated vertices);
    /// the area is reported as zero and the caller should surface a warning
    pub degenerate: bool,
}

/// Compute the ground-projected area of a polygon in square feet
///
/// The ring must be open (no repeated closing vertex) and contain at least
/// 3 distinct vertices; fewer is a validation error. A ring that encloses no
/// area yields `sqft: 0.0` with the `degenerate` flag set rather than an
/// error, since a measurement under construction may transiently contain one.
///
/// # Errors
///
/// Returns [`Error::TooFewVertices`] for under-sized input and
/// [`Error::NonFiniteCoordinate`] for NaN/infinite vertices.
pub fn flat_area(coordinates: &[LatLng]) -> Result<FlatArea> {
    let distinct = count_distinct(coordinates);
    if distinct < 3 {
        return Err(Error::TooFewVertices(distinct));
    }
    for v in coordinates {
        if !v.lat.is_finite() || !v.lng.is_finite() {
            return Err(Error::NonFiniteCoordinate);
        }
    }

    let ring = project_to_plane(coordinates);
    let sqft = shoelace(&ring);
    if sqft < DEGENERATE_SQFT {
        return Ok(FlatArea {
            sqft: 0.0,
            degenerate: true,
        });
    }
    Ok(FlatArea {
        sqft,
        degenerate: false,
    })
}

/// Centroid for label placement: the arithmetic mean of the vertices
///
/// Not a computational dependency of area or pricing; kept for the drawing
/// collaborator contract.
pub fn centroid(coordinates: &[LatLng]) -> LatLng {
    vertex_mean(coordinates)
}

/// Absolute planar shoelace area of a projected ring
fn shoelace(ring: &ProjectedRing) -> f64 {
    let n = ring.len();
    if n < 3 {
        return 0.0;
    }
    let mut doubled = 0.0;
    for i in 0..n {
        let a = &ring[i];
        let b = &ring[(i + 1) % n];
        doubled += a.x * b.y - b.x * a.y;
    }
    doubled.abs() / 2.0
}

fn count_distinct(coordinates: &[LatLng]) -> usize {
    let mut count = 0;
    for (i, c) in coordinates.iter().enumerate() {
        if !coordinates[..i].contains(c) {
            count += 1;
        }
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::project::offset_feet;
    use approx::assert_relative_eq;

    fn rectangle(width_ft: f64, height_ft: f64) -> Vec<LatLng> {
        let base = LatLng::new(39.7392, -104.9903);
        vec![
            base,
            offset_feet(base, width_ft, 0.0),
            offset_feet(base, width_ft, height_ft),
            offset_feet(base, 0.0, height_ft),
        ]
    }

    #[test]
    fn test_rectangle_area() {
        let area = flat_area(&rectangle(100.0, 100.0)).unwrap();
        assert!(!area.degenerate);
        assert_relative_eq!(area.sqft, 10_000.0, max_relative = 1e-3);
    }

    #[test]
    fn test_rotation_invariance() {
        // Area does not depend on which vertex starts the ring
        let mut coords = rectangle(30.0, 48.0);
        let reference = flat_area(&coords).unwrap().sqft;
        for _ in 0..coords.len() {
            coords.rotate_left(1);
            assert_relative_eq!(flat_area(&coords).unwrap().sqft, reference, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_winding_reversal_same_magnitude() {
        let ccw = rectangle(30.0, 48.0);
        let mut cw = ccw.clone();
        cw.reverse();
        assert_relative_eq!(
            flat_area(&ccw).unwrap().sqft,
            flat_area(&cw).unwrap().sqft,
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_two_vertices_rejected() {
        let base = LatLng::new(39.7392, -104.9903);
        let result = flat_area(&[base, offset_feet(base, 10.0, 0.0)]);
        assert!(matches!(result, Err(Error::TooFewVertices(2))));
    }

    #[test]
    fn test_collinear_is_degenerate_not_error() {
        let base = LatLng::new(39.7392, -104.9903);
        let coords = vec![
            base,
            offset_feet(base, 10.0, 0.0),
            offset_feet(base, 20.0, 0.0),
        ];
        let area = flat_area(&coords).unwrap();
        assert!(area.degenerate);
        assert_eq!(area.sqft, 0.0);
    }

    #[test]
    fn test_non_finite_rejected() {
        let base = LatLng::new(39.7392, -104.9903);
        let coords = vec![
            base,
            offset_feet(base, 10.0, 0.0),
            LatLng::new(f64::NAN, -104.99),
        ];
        assert!(matches!(
            flat_area(&coords),
            Err(Error::NonFiniteCoordinate)
        ));
    }

    #[test]
    fn test_l_shape_area() {
        // 40x30 rectangle with a 20x15 corner notch removed
        let base = LatLng::new(39.7392, -104.9903);
        let coords = vec![
            base,
            offset_feet(base, 40.0, 0.0),
            offset_feet(base, 40.0, 15.0),
            offset_feet(base, 20.0, 15.0),
            offset_feet(base, 20.0, 30.0),
            offset_feet(base, 0.0, 30.0),
        ];
        let area = flat_area(&coords).unwrap();
        assert_relative_eq!(area.sqft, 40.0 * 30.0 - 20.0 * 15.0, max_relative = 1e-3);
    }

    #[test]
    fn test_centroid_is_vertex_mean() {
        let coords = vec![
            LatLng::new(40.0, -105.0),
            LatLng::new(40.0002, -105.0),
            LatLng::new(40.0001, -105.0002),
        ];
        let c = centroid(&coords);
        assert_relative_eq!(c.lat, 40.0001, epsilon = 1e-9);
    }
}
