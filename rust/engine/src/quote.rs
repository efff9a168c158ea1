// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Quote assembly from estimator pricing edits
//!
//! An estimator's pricing edits live on the measurement as a
//! [`PricingOverride`]; pricing a measurement runs the calculator over the
//! adjusted area with those edits (or catalog defaults), writes the result
//! back, and bumps the quote revision.

use roofscope_core::{MaterialOption, Measurement};
use roofscope_pricing::{estimate, PricingPolicy, PricingResult};
use tracing::info;

use crate::error::Result;

/// Waste percentage used when the estimator has not chosen one
pub const DEFAULT_WASTE_PERCENT: f64 = 12.0;

/// Price a measurement and record the quote on the document
///
/// The material rate, labor rate, waste, additional costs and discount come
/// from the measurement's [`PricingOverride`] when present, otherwise from
/// the catalog material and policy defaults. Writes `pricing_override.total`,
/// `quote_amount` and an incremented `quote_version` back onto the
/// measurement so the next save persists a consistent snapshot.
pub fn price_measurement(
    measurement: &mut Measurement,
    material: &MaterialOption,
    policy: &PricingPolicy,
) -> Result<PricingResult> {
    let area = measurement.total_adjusted_sqft;

    let result = match &measurement.pricing_override {
        Some(edits) => {
            edits.validate()?;
            let mut priced_material = material.clone();
            priced_material.price_per_sq_ft = edits.material_rate;
            estimate(
                area,
                &priced_material,
                policy,
                Some(edits.labor_rate),
                edits.waste_percent,
                &edits.additional_costs,
                edits.discount_percent,
            )?
        }
        None => estimate(
            area,
            material,
            policy,
            None,
            DEFAULT_WASTE_PERCENT,
            &[],
            0.0,
        )?,
    };

    if let Some(edits) = &mut measurement.pricing_override {
        edits.total = result.total;
    }
    measurement.quote_amount = Some(result.total);
    measurement.quote_version = Some(measurement.quote_version.unwrap_or(0) + 1);

    info!(
        address = %measurement.property_address,
        total = result.total,
        version = measurement.quote_version.unwrap_or(0),
        "quote recorded"
    );
    Ok(result)
}
