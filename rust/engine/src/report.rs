// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Flattened report summary for the PDF/report collaborator
//!
//! The report layer consumes plain numbers only; currency and unit
//! formatting stay on the presentation side. Squares are rounded to two
//! decimals here, the one display-step rounding the report carries.

use std::collections::BTreeMap;

use roofscope_core::{LinearMeasurements, Measurement};
use roofscope_geometry::{waste_table, WasteTier, SQFT_PER_SQUARE};
use roofscope_pricing::PricingResult;
use serde::Serialize;

/// Everything a rendered report needs, flattened to plain numbers
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportSummary {
    pub property_address: String,
    pub total_sqft: f64,
    pub total_adjusted_sqft: f64,
    /// Adjusted area in squares, rounded to two decimals
    pub total_squares: f64,
    /// Resolved per-category linear feet (overrides folded in)
    pub linear: LinearMeasurements,
    /// Pitch token mapped to squares, in sorted token order
    pub pitch_breakdown: BTreeMap<String, f64>,
    /// Material planning rows across the fixed waste tiers
    pub waste_table: Vec<WasteTier>,
    /// Priced estimate, when one has been computed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pricing: Option<PricingResult>,
}

impl ReportSummary {
    /// Flatten a recomputed measurement into report form
    pub fn build(measurement: &Measurement, pricing: Option<PricingResult>) -> Self {
        let total_squares = measurement.total_adjusted_sqft / SQFT_PER_SQUARE;
        let pitch_breakdown = measurement
            .pitch_breakdown
            .iter()
            .map(|(pitch, squares)| (pitch.clone(), round_squares(*squares)))
            .collect();

        Self {
            property_address: measurement.property_address.clone(),
            total_sqft: measurement.total_sqft,
            total_adjusted_sqft: measurement.total_adjusted_sqft,
            total_squares: round_squares(total_squares),
            linear: measurement.linear,
            pitch_breakdown,
            waste_table: waste_table(total_squares, measurement.total_adjusted_sqft),
            pricing,
        }
    }
}

fn round_squares(squares: f64) -> f64 {
    (squares * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn measurement() -> Measurement {
        let mut m = Measurement::new("12 Oak St");
        m.total_sqft = 2000.0;
        m.total_adjusted_sqft = 2236.068;
        m.pitch_breakdown.insert("6/12".into(), 22.36068);
        m.linear.eaves_ft = 120.0;
        m.linear.ridges_ft = 40.0;
        m
    }

    #[test]
    fn test_flattening() {
        let summary = ReportSummary::build(&measurement(), None);
        assert_eq!(summary.property_address, "12 Oak St");
        assert_eq!(summary.total_sqft, 2000.0);
        assert_eq!(summary.total_squares, 22.36);
        assert_eq!(summary.pitch_breakdown["6/12"], 22.36);
        assert_eq!(summary.linear.eaves_ft, 120.0);
        assert!(summary.pricing.is_none());
    }

    #[test]
    fn test_waste_rows_scale_unrounded_totals() {
        let summary = ReportSummary::build(&measurement(), None);
        assert_eq!(summary.waste_table.len(), 5);
        let recommended = summary.waste_table.iter().find(|t| t.recommended).unwrap();
        assert_relative_eq!(recommended.area_sqft, 2236.068 * 1.12, max_relative = 1e-9);
    }

    #[test]
    fn test_serializes_plain_numbers() {
        let summary = ReportSummary::build(&measurement(), None);
        let json = serde_json::to_value(&summary).unwrap();
        assert!(json["total_adjusted_sqft"].is_number());
        assert!(json["pitch_breakdown"]["6/12"].is_number());
        // No pricing key when no estimate was computed
        assert!(json.get("pricing").is_none());
    }
}
