// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Material catalog entries and design preferences
//!
//! Catalog entries are static reference data injected into the pricing
//! calculator; they are not persisted per measurement unless selected.

use serde::{Deserialize, Serialize};

/// Price tier for a roofing material
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MaterialCategory {
    Economy,
    Standard,
    Premium,
    Luxury,
}

/// A roofing material catalog entry
///
/// Serialized camelCase to match the catalog wire contract
/// (`pricePerSqFt`, `laborMultiplier`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaterialOption {
    /// Display name, e.g. "Architectural Shingles"
    pub name: String,
    /// Material cost per square foot of adjusted roof area
    pub price_per_sq_ft: f64,
    /// Scale applied to the base labor rate for harder installs
    pub labor_multiplier: f64,
    /// Price tier
    pub category: MaterialCategory,
    /// Short marketing description
    pub description: String,
    /// Manufacturer warranty, e.g. "30 years"
    pub warranty: String,
}

impl MaterialOption {
    /// Create a catalog entry
    pub fn new(
        name: impl Into<String>,
        price_per_sq_ft: f64,
        labor_multiplier: f64,
        category: MaterialCategory,
        description: impl Into<String>,
        warranty: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            price_per_sq_ft,
            labor_multiplier,
            category,
            description: description.into(),
            warranty: warranty.into(),
        }
    }
}

/// A saved visualization choice passed explicitly to rendering collaborators
///
/// The selection travels as a value from caller to renderer; it is never
/// read from ambient session state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignPreference {
    /// Selected material name
    pub material: String,
    /// Fill color as "#rrggbb"
    pub color_hex: String,
    /// Overlay opacity in [0, 1]
    pub opacity: f64,
}
