// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Linear roof measurements by edge category
//!
//! Eaves, rakes, ridges, hips, valleys, steps and walls each take different
//! trim and flashing material, so their lengths are tracked per category.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Named categories of roof edge and intersection lines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LinearCategory {
    Eaves,
    Rakes,
    Ridges,
    Hips,
    Valleys,
    Steps,
    Walls,
}

impl LinearCategory {
    /// All categories in display order
    pub const ALL: [LinearCategory; 7] = [
        LinearCategory::Eaves,
        LinearCategory::Rakes,
        LinearCategory::Ridges,
        LinearCategory::Hips,
        LinearCategory::Valleys,
        LinearCategory::Steps,
        LinearCategory::Walls,
    ];

    /// Stored field name for this category (e.g. "eaves_ft")
    pub fn field_name(self) -> &'static str {
        match self {
            LinearCategory::Eaves => "eaves_ft",
            LinearCategory::Rakes => "rakes_ft",
            LinearCategory::Ridges => "ridges_ft",
            LinearCategory::Hips => "hips_ft",
            LinearCategory::Valleys => "valleys_ft",
            LinearCategory::Steps => "steps_ft",
            LinearCategory::Walls => "walls_ft",
        }
    }
}

/// Aggregate linear feet per edge category
///
/// All values are non-negative and independently zero-able; a flat roof may
/// legitimately have zero ridges, hips and valleys.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct LinearMeasurements {
    #[serde(default)]
    pub eaves_ft: f64,
    #[serde(default)]
    pub rakes_ft: f64,
    #[serde(default)]
    pub ridges_ft: f64,
    #[serde(default)]
    pub hips_ft: f64,
    #[serde(default)]
    pub valleys_ft: f64,
    #[serde(default)]
    pub steps_ft: f64,
    #[serde(default)]
    pub walls_ft: f64,
}

impl LinearMeasurements {
    /// Length for a single category
    #[inline]
    pub fn get(&self, category: LinearCategory) -> f64 {
        match category {
            LinearCategory::Eaves => self.eaves_ft,
            LinearCategory::Rakes => self.rakes_ft,
            LinearCategory::Ridges => self.ridges_ft,
            LinearCategory::Hips => self.hips_ft,
            LinearCategory::Valleys => self.valleys_ft,
            LinearCategory::Steps => self.steps_ft,
            LinearCategory::Walls => self.walls_ft,
        }
    }

    /// Set the length for a single category
    #[inline]
    pub fn set(&mut self, category: LinearCategory, value: f64) {
        match category {
            LinearCategory::Eaves => self.eaves_ft = value,
            LinearCategory::Rakes => self.rakes_ft = value,
            LinearCategory::Ridges => self.ridges_ft = value,
            LinearCategory::Hips => self.hips_ft = value,
            LinearCategory::Valleys => self.valleys_ft = value,
            LinearCategory::Steps => self.steps_ft = value,
            LinearCategory::Walls => self.walls_ft = value,
        }
    }

    /// Element-wise sum, used when combining per-section metadata
    pub fn add(&mut self, other: &LinearMeasurements) {
        for category in LinearCategory::ALL {
            self.set(category, self.get(category) + other.get(category));
        }
    }
}

/// Sparse operator-entered values superseding derived linear measurements
///
/// Absent keys fall back to the derived value. Overrides never mutate the
/// computed fields, so clearing them is lossless.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ManualOverride {
    entries: FxHashMap<LinearCategory, f64>,
}

impl ManualOverride {
    /// Empty override set
    pub fn new() -> Self {
        Self::default()
    }

    /// Override for a category, if one was entered
    #[inline]
    pub fn get(&self, category: LinearCategory) -> Option<f64> {
        self.entries.get(&category).copied()
    }

    /// Enter or replace an override
    pub fn set(&mut self, category: LinearCategory, value: f64) {
        self.entries.insert(category, value);
    }

    /// Remove a single override, falling back to the derived value
    pub fn clear(&mut self, category: LinearCategory) {
        self.entries.remove(&category);
    }

    /// True when no overrides are active
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of active overrides
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Override value if present, otherwise the computed value
    #[inline]
    pub fn effective(&self, category: LinearCategory, computed: &LinearMeasurements) -> f64 {
        self.get(category).unwrap_or_else(|| computed.get(category))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_set_round_trip() {
        let mut linear = LinearMeasurements::default();
        for (i, category) in LinearCategory::ALL.iter().enumerate() {
            linear.set(*category, i as f64 * 10.0);
        }
        assert_eq!(linear.eaves_ft, 0.0);
        assert_eq!(linear.rakes_ft, 10.0);
        assert_eq!(linear.walls_ft, 60.0);
    }

    #[test]
    fn test_add_element_wise() {
        let mut a = LinearMeasurements {
            eaves_ft: 40.0,
            ridges_ft: 20.0,
            ..Default::default()
        };
        let b = LinearMeasurements {
            eaves_ft: 10.0,
            valleys_ft: 5.0,
            ..Default::default()
        };
        a.add(&b);
        assert_eq!(a.eaves_ft, 50.0);
        assert_eq!(a.ridges_ft, 20.0);
        assert_eq!(a.valleys_ft, 5.0);
    }

    #[test]
    fn test_override_precedence() {
        let computed = LinearMeasurements {
            eaves_ft: 42.0,
            ..Default::default()
        };
        let mut overrides = ManualOverride::new();
        assert_eq!(overrides.effective(LinearCategory::Eaves, &computed), 42.0);

        overrides.set(LinearCategory::Eaves, 50.0);
        assert_eq!(overrides.effective(LinearCategory::Eaves, &computed), 50.0);
        // Computed value untouched by the override
        assert_eq!(computed.eaves_ft, 42.0);

        overrides.clear(LinearCategory::Eaves);
        assert_eq!(overrides.effective(LinearCategory::Eaves, &computed), 42.0);
    }

    #[test]
    fn test_override_absent_category_falls_back_to_zero() {
        let computed = LinearMeasurements::default();
        let overrides = ManualOverride::new();
        assert_eq!(overrides.effective(LinearCategory::Hips, &computed), 0.0);
    }

    #[test]
    fn test_category_serde_names() {
        let json = serde_json::to_string(&LinearCategory::Eaves).unwrap();
        assert_eq!(json, "\"eaves\"");
    }
}
