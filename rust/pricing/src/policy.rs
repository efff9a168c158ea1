// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Pricing policy configuration
//!
//! The estimating screens historically disagreed on two points: the low/high
//! bound multipliers around a point estimate (0.85/1.15 on the detailed
//! screen, 0.90/1.10 on the quick-quote screen) and whether the material's
//! labor multiplier scales the labor rate. Both choices live here as one
//! explicit configuration instead of forked formulas.

use serde::{Deserialize, Serialize};

/// Configuration for estimate bounds and labor treatment
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricingPolicy {
    /// Multiplier producing the low end of the estimate range
    pub low_bound: f64,
    /// Multiplier producing the high end of the estimate range
    pub high_bound: f64,
    /// Whether the material's labor multiplier scales the labor rate
    pub apply_labor_multiplier: bool,
    /// Labor rate per square foot used when the caller supplies none
    pub default_labor_rate: f64,
}

impl PricingPolicy {
    /// Detailed-estimate policy: 0.85/1.15 bounds, labor multiplier applied
    ///
    /// This is the default because it is the path the material catalog is
    /// attached to, making the per-material labor multiplier meaningful.
    pub const fn detailed() -> Self {
        Self {
            low_bound: 0.85,
            high_bound: 1.15,
            apply_labor_multiplier: true,
            default_labor_rate: 3.0,
        }
    }

    /// Quick-quote policy: 0.90/1.10 bounds, flat labor rate
    pub const fn quick() -> Self {
        Self {
            low_bound: 0.90,
            high_bound: 1.10,
            apply_labor_multiplier: false,
            default_labor_rate: 3.0,
        }
    }
}

impl Default for PricingPolicy {
    fn default() -> Self {
        Self::detailed()
    }
}
