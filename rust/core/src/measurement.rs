// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The measurement aggregate root
//!
//! A measurement owns everything computed for one property: the drawn
//! sections, derived totals, linear measurements with manual overrides, and
//! estimator pricing edits. Persistence is full-snapshot: every save sends a
//! complete, internally consistent document, never a partial patch.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::linear::{LinearMeasurements, ManualOverride};
use crate::section::RoofSection;

/// An additional line item on a priced estimate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostLine {
    /// Label, e.g. "Skylight flashing"
    pub name: String,
    /// Amount in whole currency units
    pub amount: f64,
}

/// Estimator pricing edits stored alongside the measurement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingOverride {
    /// Material cost per square foot
    pub material_rate: f64,
    /// Base labor cost per square foot
    pub labor_rate: f64,
    /// Waste factor percentage applied to material + labor
    pub waste_percent: f64,
    /// Extra line items added to the subtotal
    #[serde(default)]
    pub additional_costs: Vec<CostLine>,
    /// Discount percentage applied to the subtotal
    #[serde(default)]
    pub discount_percent: f64,
    /// Resulting total as last computed
    #[serde(default)]
    pub total: f64,
}

impl PricingOverride {
    /// Reject negative rates, percentages and line-item amounts
    pub fn validate(&self) -> Result<()> {
        check_non_negative("material_rate", self.material_rate)?;
        check_non_negative("labor_rate", self.labor_rate)?;
        check_non_negative("waste_percent", self.waste_percent)?;
        check_non_negative("discount_percent", self.discount_percent)?;
        for line in &self.additional_costs {
            check_non_negative("additional_costs.amount", line.amount)?;
        }
        Ok(())
    }
}

fn check_non_negative(field: &'static str, value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(Error::NonFiniteValue { field });
    }
    if value < 0.0 {
        return Err(Error::NegativeValue { field, value });
    }
    Ok(())
}

/// Aggregate roof measurement for one property
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Measurement {
    /// Street address the sections were traced over
    #[serde(default)]
    pub property_address: String,
    /// Roof planes drawn by the user
    #[serde(default)]
    pub sections: Vec<RoofSection>,
    /// Stored linear measurements (the denormalized read model; overrides
    /// already folded in at save time)
    #[serde(default)]
    pub linear: LinearMeasurements,
    /// Sparse operator overrides, retained so reset-to-auto is lossless
    #[serde(default)]
    pub manual_overrides: ManualOverride,
    /// Ground-projected area total across sections, square feet
    #[serde(default)]
    pub total_sqft: f64,
    /// Pitch-adjusted area total across sections, square feet
    #[serde(default)]
    pub total_adjusted_sqft: f64,
    /// Pitch token mapped to aggregated squares (adjusted area / 100)
    #[serde(default)]
    pub pitch_breakdown: FxHashMap<String, f64>,
    /// Estimator pricing edits, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pricing_override: Option<PricingOverride>,
    /// Quoted amount presented to the customer
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quote_amount: Option<f64>,
    /// Monotonic quote revision counter
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quote_version: Option<u32>,
}

impl Measurement {
    /// Create an empty measurement for an address
    pub fn new(property_address: impl Into<String>) -> Self {
        Self {
            property_address: property_address.into(),
            ..Default::default()
        }
    }

    /// Validate every section polygon and check id uniqueness
    pub fn validate(&self) -> Result<()> {
        for (i, section) in self.sections.iter().enumerate() {
            if self.sections[..i].iter().any(|s| s.id == section.id) {
                return Err(Error::DuplicateSectionId(section.id.clone()));
            }
            section.validate()?;
        }
        if let Some(pricing) = &self.pricing_override {
            pricing.validate()?;
        }
        Ok(())
    }
}
