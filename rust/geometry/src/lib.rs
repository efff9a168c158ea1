// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Roofscope Geometry
//!
//! Roof polygon area computation and the pitch/waste adjusters: geographic
//! polygons are projected onto a local tangent plane before the shoelace
//! formula runs, flat areas are scaled by per-section pitch multipliers, and
//! per-section results aggregate into measurement totals with a pitch
//! breakdown in squares.

pub mod area;
pub mod error;
pub mod linear;
pub mod pitch;
pub mod project;
pub mod totals;
pub mod waste;

// Re-export nalgebra types for convenience
pub use nalgebra::{Point2, Vector2};

pub use area::{centroid, flat_area, FlatArea};
pub use error::{Error, Result};
pub use linear::derive_linear;
pub use pitch::{adjust_section, pitch_multiplier};
pub use project::{offset_feet, project_to_plane, vertex_mean};
pub use totals::{aggregate, RoofTotals, SQFT_PER_SQUARE};
pub use waste::{waste_table, WasteTier, RECOMMENDED_WASTE_PERCENT, WASTE_TIERS};
