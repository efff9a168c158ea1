// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Pitch multipliers converting flat area to true roof surface area
//!
//! Pitch is expressed as rise over a 12-inch run ("6/12"). The multiplier is
//! the sloped length per horizontal foot, `sqrt(rise^2 + run^2) / run`.

use roofscope_core::RoofSection;

/// Multiplier for a pitch token
///
/// `"X/12"` maps to `sqrt(X^2 + 144) / 12`; fractional rises are accepted.
/// `"flat"`, empty, and unrecognized tokens map to `1.0`. Total function:
/// no token is an error.
#[inline]
pub fn pitch_multiplier(token: &str) -> f64 {
    let token = token.trim();
    if token.is_empty() || token.eq_ignore_ascii_case("flat") {
        return 1.0;
    }
    let Some((rise_str, run_str)) = token.split_once('/') else {
        return 1.0;
    };
    let (Ok(rise), Ok(run)) = (rise_str.trim().parse::<f64>(), run_str.trim().parse::<f64>())
    else {
        return 1.0;
    };
    if !rise.is_finite() || !run.is_finite() || rise < 0.0 || run <= 0.0 {
        return 1.0;
    }
    (rise * rise + run * run).sqrt() / run
}

/// Set a section's adjusted area from its flat area and pitch token
///
/// The multiplier is always >= 1.0, so `adjusted_area_sqft` never drops
/// below `flat_area_sqft`.
pub fn adjust_section(section: &mut RoofSection) {
    section.adjusted_area_sqft = section.flat_area_sqft * pitch_multiplier(&section.pitch);
}
