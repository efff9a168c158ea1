// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Manual override merge
//!
//! Linear measurements live as two models: the computed values derived from
//! section metadata (the write model) and the resolved values shown to
//! collaborators (the read model). Operators override single categories;
//! saving writes both the sparse override map and the resolved flattened
//! fields so stored documents stay self-describing, and resetting clears
//! overrides without touching computed values.

use roofscope_core::{LinearCategory, LinearMeasurements, ManualOverride, Measurement};

use crate::error::{Error, Result};

/// Computed linear measurements paired with their active overrides
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LinearView {
    /// Values derived from geometry/section metadata; never mutated by
    /// override operations
    pub computed: LinearMeasurements,
    /// Sparse operator-entered values
    pub overrides: ManualOverride,
}

impl LinearView {
    /// Build a view over computed values with no overrides active
    pub fn new(computed: LinearMeasurements) -> Self {
        Self {
            computed,
            overrides: ManualOverride::new(),
        }
    }

    /// Rebuild the view from a stored measurement
    ///
    /// The stored flattened fields hold resolved values, so the computed
    /// side is re-derived by the caller (from section metadata) rather than
    /// read back; only the override map is taken from the document.
    pub fn from_measurement(measurement: &Measurement, computed: LinearMeasurements) -> Self {
        Self {
            computed,
            overrides: measurement.manual_overrides.clone(),
        }
    }

    /// Effective value for one category: override, else computed, else zero
    #[inline]
    pub fn effective(&self, category: LinearCategory) -> f64 {
        self.overrides.effective(category, &self.computed)
    }

    /// Enter an override for a category
    ///
    /// # Errors
    ///
    /// Negative and non-finite lengths are rejected.
    pub fn set_override(&mut self, category: LinearCategory, value: f64) -> Result<()> {
        if !value.is_finite() {
            return Err(Error::NegativeOverride {
                field: category.field_name(),
                value,
            });
        }
        if value < 0.0 {
            return Err(Error::NegativeOverride {
                field: category.field_name(),
                value,
            });
        }
        self.overrides.set(category, value);
        Ok(())
    }

    /// Clear every override, restoring the computed values losslessly
    pub fn reset(&mut self) {
        self.overrides = ManualOverride::new();
    }

    /// The denormalized read model: every category resolved
    pub fn resolved(&self) -> LinearMeasurements {
        let mut resolved = LinearMeasurements::default();
        for category in LinearCategory::ALL {
            resolved.set(category, self.effective(category));
        }
        resolved
    }

    /// Write both models into a measurement
    ///
    /// Persists the sparse override map and the resolved flattened fields
    /// together; they are kept in sync on every write so the two views never
    /// diverge in storage.
    pub fn save_to(&self, measurement: &mut Measurement) {
        measurement.manual_overrides = self.overrides.clone();
        measurement.linear = self.resolved();
    }
}
