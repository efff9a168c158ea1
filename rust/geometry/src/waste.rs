// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Waste-factor planning table
//!
//! Cutting, overlap and handling loss are planned as a percentage on top of
//! the measured roof area. The tier list is fixed; 12% is the tier shown
//! with emphasis in estimating views.

use serde::Serialize;

/// Fixed waste-factor tiers, in percent
pub const WASTE_TIERS: [u32; 5] = [5, 10, 12, 15, 20];

/// The tier estimators are steered toward by default
pub const RECOMMENDED_WASTE_PERCENT: u32 = 12;

/// One row of the waste planning table
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WasteTier {
    /// Waste percentage for this row
    pub percent: u32,
    /// Squares to order at this waste factor
    pub squares: f64,
    /// Area to order at this waste factor, square feet
    pub area_sqft: f64,
    /// True for the emphasized default tier
    pub recommended: bool,
}

/// Scale totals by each waste tier
///
/// Pure multiplication by `1 + percent/100`; values are left unrounded for
/// the display layer to format.
pub fn waste_table(total_squares: f64, total_area_sqft: f64) -> Vec<WasteTier> {
    WASTE_TIERS
        .iter()
        .map(|&percent| {
            let factor = 1.0 + f64::from(percent) / 100.0;
            WasteTier {
                percent,
                squares: total_squares * factor,
                area_sqft: total_area_sqft * factor,
                recommended: percent == RECOMMENDED_WASTE_PERCENT,
            }
        })
        .collect()
}
