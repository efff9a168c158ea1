// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Local tangent-plane projection for geographic polygons
//!
//! Degrees of longitude shrink with latitude, so the planar shoelace formula
//! cannot run on raw lat/lng. Each polygon is projected onto a tangent plane
//! centered at its vertex mean: latitude maps to northing directly, longitude
//! is scaled by the cosine of the reference latitude. At parcel scale
//! (well under a kilometer of extent) the projection error is negligible.

use nalgebra::Point2;
use roofscope_core::LatLng;
use smallvec::SmallVec;

/// Mean Earth radius in meters (IUGG R1)
const EARTH_RADIUS_M: f64 = 6_371_008.8;

/// International foot
const METERS_PER_FOOT: f64 = 0.3048;

/// Projected polygon ring; most roof sections have 4-20 vertices
pub type ProjectedRing = SmallVec<[Point2<f64>; 16]>;

/// Project polygon vertices onto a local tangent plane, in feet
///
/// The plane is centered at the arithmetic mean of the vertices; x grows
/// east, y grows north. Returns an empty ring for empty input.
pub fn project_to_plane(coordinates: &[LatLng]) -> ProjectedRing {
    let mut ring = ProjectedRing::new();
    if coordinates.is_empty() {
        return ring;
    }

    let origin = vertex_mean(coordinates);
    let cos_lat = origin.lat.to_radians().cos();
    let feet_per_rad = EARTH_RADIUS_M / METERS_PER_FOOT;

    for v in coordinates {
        let x = (v.lng - origin.lng).to_radians() * cos_lat * feet_per_rad;
        let y = (v.lat - origin.lat).to_radians() * feet_per_rad;
        ring.push(Point2::new(x, y));
    }
    ring
}

/// Arithmetic mean of the vertex coordinates
///
/// Used both as the projection origin and as the label-placement centroid.
pub fn vertex_mean(coordinates: &[LatLng]) -> LatLng {
    if coordinates.is_empty() {
        return LatLng::new(0.0, 0.0);
    }
    let count = coordinates.len() as f64;
    let mut sum = (0.0f64, 0.0f64);
    for v in coordinates {
        sum.0 += v.lat;
        sum.1 += v.lng;
    }
    LatLng::new(sum.0 / count, sum.1 / count)
}

/// Offset a vertex by the given distances in feet (test and tooling helper)
pub fn offset_feet(base: LatLng, east_ft: f64, north_ft: f64) -> LatLng {
    let feet_per_rad = EARTH_RADIUS_M / METERS_PER_FOOT;
    let dlat = (north_ft / feet_per_rad).to_degrees();
    let dlng = (east_ft / (feet_per_rad * base.lat.to_radians().cos())).to_degrees();
    LatLng::new(base.lat + dlat, base.lng + dlng)
}
