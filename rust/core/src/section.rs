// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Roof sections as drawn on satellite imagery
//!
//! A section is one contiguous roof plane traced by the user as a closed
//! polygon of geographic vertices, with a pitch token governing the
//! flat-to-surface area conversion.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::linear::LinearMeasurements;

/// A geographic vertex in WGS84 coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    /// Latitude in degrees (positive north)
    pub lat: f64,
    /// Longitude in degrees (positive east)
    pub lng: f64,
}

impl LatLng {
    /// Create a new vertex
    #[inline]
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// One contiguous roof plane drawn by the user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoofSection {
    /// Opaque identifier, unique within a measurement
    pub id: String,
    /// Display label, defaults to "Section N"
    pub name: String,
    /// Ordered polygon vertices; a repeated closing vertex is tolerated
    pub coordinates: Vec<LatLng>,
    /// Pitch token such as "4/12" or "flat"
    pub pitch: String,
    /// Ground-projected polygon area (computed, never user-entered)
    #[serde(default)]
    pub flat_area_sqft: f64,
    /// Flat area scaled by the pitch multiplier
    #[serde(default)]
    pub adjusted_area_sqft: f64,
    /// Display-only fill color, not used in computation
    #[serde(default)]
    pub color: Option<String>,
    /// Per-edge linear feet supplied by upstream drawing tooling, when available
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linear_ft: Option<LinearMeasurements>,
}

impl RoofSection {
    /// Create a section with the given id and vertices, defaulting the label
    pub fn new(id: impl Into<String>, index: usize, coordinates: Vec<LatLng>) -> Self {
        Self {
            id: id.into(),
            name: format!("Section {}", index + 1),
            coordinates,
            pitch: "4/12".to_string(),
            flat_area_sqft: 0.0,
            adjusted_area_sqft: 0.0,
            color: None,
            linear_ft: None,
        }
    }

    /// Polygon vertices with a repeated closing vertex removed
    ///
    /// Drawing tools disagree on whether the first vertex is repeated at the
    /// end of the ring; computation always works on the open form.
    pub fn normalized_coordinates(&self) -> &[LatLng] {
        let coords = &self.coordinates;
        match (coords.first(), coords.last()) {
            (Some(first), Some(last)) if coords.len() > 1 && first == last => {
                &coords[..coords.len() - 1]
            }
            _ => coords,
        }
    }

    /// Number of distinct vertices in the normalized ring
    pub fn distinct_vertex_count(&self) -> usize {
        let coords = self.normalized_coordinates();
        let mut count = 0;
        for (i, c) in coords.iter().enumerate() {
            if !coords[..i].contains(c) {
                count += 1;
            }
        }
        count
    }

    /// Reject sections that cannot enclose any area
    ///
    /// Fewer than 3 distinct vertices is a hard validation error surfaced
    /// before area computation runs.
    pub fn validate(&self) -> Result<()> {
        let points = self.distinct_vertex_count();
        if points < 3 {
            return Err(Error::PolygonTooSmall {
                section: self.id.clone(),
                points,
            });
        }
        for v in &self.coordinates {
            if !v.lat.is_finite() || !v.lng.is_finite() {
                return Err(Error::NonFiniteValue {
                    field: "coordinates",
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> Vec<LatLng> {
        vec![
            LatLng::new(40.0, -105.0),
            LatLng::new(40.0001, -105.0),
            LatLng::new(40.0001, -105.0001),
            LatLng::new(40.0, -105.0001),
        ]
    }

    #[test]
    fn test_default_name() {
        let section = RoofSection::new("s1", 0, square());
        assert_eq!(section.name, "Section 1");
    }

    #[test]
    fn test_closing_vertex_stripped() {
        let mut coords = square();
        coords.push(coords[0]);
        let section = RoofSection::new("s1", 0, coords);
        assert_eq!(section.normalized_coordinates().len(), 4);
    }

    #[test]
    fn test_open_ring_untouched() {
        let section = RoofSection::new("s1", 0, square());
        assert_eq!(section.normalized_coordinates().len(), 4);
    }

    #[test]
    fn test_validate_rejects_two_points() {
        let section = RoofSection::new(
            "s1",
            0,
            vec![LatLng::new(40.0, -105.0), LatLng::new(40.0001, -105.0)],
        );
        assert!(matches!(
            section.validate(),
            Err(Error::PolygonTooSmall { points: 2, .. })
        ));
    }

    #[test]
    fn test_validate_counts_distinct_vertices() {
        // Three vertices but only two distinct positions
        let a = LatLng::new(40.0, -105.0);
        let b = LatLng::new(40.0001, -105.0);
        let section = RoofSection::new("s1", 0, vec![a, b, a]);
        assert!(section.validate().is_err());
    }

    #[test]
    fn test_validate_accepts_triangle() {
        let section = RoofSection::new(
            "s1",
            0,
            vec![
                LatLng::new(40.0, -105.0),
                LatLng::new(40.0001, -105.0),
                LatLng::new(40.0001, -105.0001),
            ],
        );
        assert!(section.validate().is_ok());
    }

    #[test]
    fn test_serde_round_trip() {
        let section = RoofSection::new("s1", 0, square());
        let json = serde_json::to_string(&section).unwrap();
        let back: RoofSection = serde_json::from_str(&json).unwrap();
        assert_eq!(section, back);
        // Absent linear metadata stays off the wire
        assert!(!json.contains("linear_ft"));
    }
}
