// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Cost estimation
//!
//! The computation chain runs at full f64 precision; rounding to whole
//! currency units happens only in [`PricingResult::rounded`] at the display
//! boundary, so intermediate rounding error never compounds.

use roofscope_core::{CostLine, MaterialOption};
use serde::Serialize;

use crate::error::{Error, Result};
use crate::policy::PricingPolicy;

/// A computed estimate with its full breakdown
///
/// All values are plain numbers; currency formatting belongs to the
/// presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct PricingResult {
    pub material_subtotal: f64,
    pub labor_subtotal: f64,
    pub waste_amount: f64,
    pub additional_total: f64,
    pub subtotal: f64,
    pub discount_amount: f64,
    pub total: f64,
    pub low_estimate: f64,
    pub high_estimate: f64,
}

impl PricingResult {
    /// Round every line to the nearest whole currency unit for display
    pub fn rounded(&self) -> PricingResult {
        PricingResult {
            material_subtotal: self.material_subtotal.round(),
            labor_subtotal: self.labor_subtotal.round(),
            waste_amount: self.waste_amount.round(),
            additional_total: self.additional_total.round(),
            subtotal: self.subtotal.round(),
            discount_amount: self.discount_amount.round(),
            total: self.total.round(),
            low_estimate: self.low_estimate.round(),
            high_estimate: self.high_estimate.round(),
        }
    }
}

/// Compute a bounded cost estimate for an adjusted roof area
///
/// Stateless and idempotent: identical inputs always produce identical
/// output. An area of zero or less yields an all-zero result rather than an
/// error, since a measurement may legitimately have no sections yet.
///
/// # Errors
///
/// Negative or non-finite rates, percentages or line-item amounts are
/// rejected before the computation runs.
pub fn estimate(
    area_sqft: f64,
    material: &MaterialOption,
    policy: &PricingPolicy,
    labor_rate: Option<f64>,
    waste_percent: f64,
    additional_costs: &[CostLine],
    discount_percent: f64,
) -> Result<PricingResult> {
    let labor_rate = labor_rate.unwrap_or(policy.default_labor_rate);
    validate_inputs(material, labor_rate, waste_percent, additional_costs, discount_percent)?;

    if !area_sqft.is_finite() {
        return Err(Error::NonFiniteInput { field: "area_sqft" });
    }
    if area_sqft <= 0.0 {
        return Ok(PricingResult::default());
    }

    let labor_multiplier = if policy.apply_labor_multiplier {
        material.labor_multiplier
    } else {
        1.0
    };

    let material_subtotal = area_sqft * material.price_per_sq_ft;
    let labor_subtotal = area_sqft * labor_rate * labor_multiplier;
    let waste_amount = (material_subtotal + labor_subtotal) * (waste_percent / 100.0);
    let additional_total: f64 = additional_costs.iter().map(|c| c.amount).sum();
    let subtotal = material_subtotal + labor_subtotal + waste_amount + additional_total;
    let discount_amount = subtotal * (discount_percent / 100.0);
    let total = subtotal - discount_amount;

    Ok(PricingResult {
        material_subtotal,
        labor_subtotal,
        waste_amount,
        additional_total,
        subtotal,
        discount_amount,
        total,
        low_estimate: total * policy.low_bound,
        high_estimate: total * policy.high_bound,
    })
}

fn validate_inputs(
    material: &MaterialOption,
    labor_rate: f64,
    waste_percent: f64,
    additional_costs: &[CostLine],
    discount_percent: f64,
) -> Result<()> {
    check("material.pricePerSqFt", material.price_per_sq_ft)?;
    if material.labor_multiplier < 0.0 {
        return Err(Error::InvalidMaterial(material.name.clone()));
    }
    check("labor_rate", labor_rate)?;
    check("waste_percent", waste_percent)?;
    check("discount_percent", discount_percent)?;
    for line in additional_costs {
        check("additional_costs.amount", line.amount)?;
    }
    Ok(())
}

fn check(field: &'static str, value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(Error::NonFiniteInput { field });
    }
    if value < 0.0 {
        return Err(Error::NegativeInput { field, value });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use roofscope_core::MaterialCategory;

    fn shingles() -> MaterialOption {
        MaterialOption::new(
            "Architectural Shingles",
            4.5,
            1.0,
            MaterialCategory::Standard,
            "Dimensional asphalt shingles",
            "30 years",
        )
    }

    #[test]
    fn test_reference_scenario_detailed_policy() {
        // 2000 sqft at $4.50 material, $3.00 labor, 12% waste, no extras
        let result = estimate(
            2000.0,
            &shingles(),
            &PricingPolicy::detailed(),
            Some(3.0),
            12.0,
            &[],
            0.0,
        )
        .unwrap();

        assert_eq!(result.material_subtotal, 9000.0);
        assert_eq!(result.labor_subtotal, 6000.0);
        assert_eq!(result.waste_amount, 1800.0);
        assert_eq!(result.subtotal, 16_800.0);
        assert_eq!(result.discount_amount, 0.0);
        assert_eq!(result.total, 16_800.0);
        // Detailed policy bounds: 0.85 / 1.15
        assert_eq!(result.low_estimate, 14_280.0);
        assert_eq!(result.high_estimate, 19_320.0);
    }

    #[test]
    fn test_quick_policy_bounds_and_flat_labor() {
        let mut material = shingles();
        material.labor_multiplier = 1.5;
        let result = estimate(
            2000.0,
            &material,
            &PricingPolicy::quick(),
            None,
            12.0,
            &[],
            0.0,
        )
        .unwrap();

        // Flat labor: multiplier ignored, default $3.00 rate used
        assert_eq!(result.labor_subtotal, 6000.0);
        assert_eq!(result.low_estimate, result.total * 0.90);
        assert_eq!(result.high_estimate, result.total * 1.10);
    }

    #[test]
    fn test_labor_multiplier_applied_under_detailed_policy() {
        let mut material = shingles();
        material.labor_multiplier = 2.0;
        let result = estimate(
            1000.0,
            &material,
            &PricingPolicy::detailed(),
            Some(3.0),
            0.0,
            &[],
            0.0,
        )
        .unwrap();
        assert_eq!(result.labor_subtotal, 6000.0);
    }

    #[test]
    fn test_additional_costs_and_discount() {
        let extras = vec![
            CostLine {
                name: "Skylight flashing".into(),
                amount: 450.0,
            },
            CostLine {
                name: "Chimney cricket".into(),
                amount: 350.0,
            },
        ];
        let result = estimate(
            2000.0,
            &shingles(),
            &PricingPolicy::detailed(),
            Some(3.0),
            12.0,
            &extras,
            10.0,
        )
        .unwrap();

        assert_eq!(result.additional_total, 800.0);
        assert_eq!(result.subtotal, 17_600.0);
        assert_eq!(result.discount_amount, 1760.0);
        assert_eq!(result.total, 15_840.0);
    }

    #[test]
    fn test_zero_area_yields_zero_estimate() {
        let result = estimate(
            0.0,
            &shingles(),
            &PricingPolicy::detailed(),
            Some(3.0),
            12.0,
            &[],
            5.0,
        )
        .unwrap();
        assert_eq!(result, PricingResult::default());
        assert_eq!(result.total, 0.0);
    }

    #[test]
    fn test_negative_rate_rejected() {
        let result = estimate(
            2000.0,
            &shingles(),
            &PricingPolicy::detailed(),
            Some(-3.0),
            12.0,
            &[],
            0.0,
        );
        assert!(matches!(
            result,
            Err(Error::NegativeInput {
                field: "labor_rate",
                ..
            })
        ));
    }

    #[test]
    fn test_negative_discount_rejected() {
        let result = estimate(
            2000.0,
            &shingles(),
            &PricingPolicy::detailed(),
            Some(3.0),
            12.0,
            &[],
            -5.0,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_idempotent() {
        let run = || {
            estimate(
                1742.5,
                &shingles(),
                &PricingPolicy::detailed(),
                Some(3.25),
                12.0,
                &[],
                2.5,
            )
            .unwrap()
        };
        assert_eq!(run(), run());
    }

    #[test]
    fn test_result_serializes_plain_numbers() {
        let result = estimate(
            2000.0,
            &shingles(),
            &PricingPolicy::detailed(),
            Some(3.0),
            12.0,
            &[],
            0.0,
        )
        .unwrap();
        let json = serde_json::to_value(result).unwrap();
        assert_eq!(json["total"], 16_800.0);
        assert_eq!(json["low_estimate"], 14_280.0);
    }

    #[test]
    fn test_rounding_only_at_display_step() {
        let result = estimate(
            1001.0,
            &shingles(),
            &PricingPolicy::detailed(),
            Some(3.33),
            12.0,
            &[],
            0.0,
        )
        .unwrap();
        // Raw result keeps full precision
        assert_ne!(result.total, result.total.round());
        let display = result.rounded();
        assert_eq!(display.total, result.total.round());
        assert_eq!(display.low_estimate, result.low_estimate.round());
    }
}
