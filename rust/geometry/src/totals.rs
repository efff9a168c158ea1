// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Aggregation of per-section areas into measurement totals
//!
//! Totals are reported in square feet; the pitch breakdown is reported in
//! squares, the roofing unit of 100 square feet.

use roofscope_core::RoofSection;
use rustc_hash::FxHashMap;

/// Square feet per roofing square
pub const SQFT_PER_SQUARE: f64 = 100.0;

/// Aggregated area totals across all sections of a measurement
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RoofTotals {
    /// Sum of ground-projected section areas, square feet
    pub total_flat_sqft: f64,
    /// Sum of pitch-adjusted section areas, square feet
    pub total_adjusted_sqft: f64,
    /// Pitch token mapped to aggregated adjusted squares for that pitch
    pub pitch_breakdown: FxHashMap<String, f64>,
}

impl RoofTotals {
    /// Total adjusted area expressed in squares
    #[inline]
    pub fn total_squares(&self) -> f64 {
        self.total_adjusted_sqft / SQFT_PER_SQUARE
    }
}

/// Sum flat and adjusted areas across sections and build the pitch breakdown
///
/// Each section contributes `adjusted_area_sqft / 100` squares to its pitch
/// token's breakdown entry, so the breakdown values sum to the adjusted
/// total divided by 100 (within floating-point tolerance).
pub fn aggregate(sections: &[RoofSection]) -> RoofTotals {
    let mut totals = RoofTotals::default();
    for section in sections {
        totals.total_flat_sqft += section.flat_area_sqft;
        totals.total_adjusted_sqft += section.adjusted_area_sqft;
        *totals
            .pitch_breakdown
            .entry(section.pitch.clone())
            .or_insert(0.0) += section.adjusted_area_sqft / SQFT_PER_SQUARE;
    }
    totals
}
