// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Full-document recompute
//!
//! Re-drawing sections, changing a pitch, or editing overrides all funnel
//! through [`recompute`]: it rebuilds every derived field on the measurement
//! so the document written back to storage is always a complete, internally
//! consistent snapshot. Persistence is last-write-wins at the storage layer;
//! nothing here implements merging.

use roofscope_core::Measurement;
use roofscope_geometry::{adjust_section, aggregate, derive_linear, flat_area};
use tracing::{debug, warn};

use crate::error::Result;
use crate::overrides::LinearView;

/// What a recompute pass found, beyond the fields updated in place
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RecomputeSummary {
    /// Sections whose polygons enclosed no area; they contribute zero and
    /// should be surfaced as validation warnings by the UI collaborator
    pub degenerate_sections: Vec<String>,
    /// Number of sections processed
    pub section_count: usize,
}

/// Rebuild all derived fields on a measurement from its drawn sections
///
/// Validates every section polygon, recomputes flat and pitch-adjusted
/// areas, refreshes the totals and pitch breakdown, re-derives linear
/// measurements and folds active manual overrides back into the stored
/// flattened fields. After this returns, the measurement is a consistent
/// snapshot ready for a full-document save.
///
/// # Errors
///
/// Fails on malformed polygons (fewer than 3 distinct vertices, non-finite
/// coordinates), duplicate section ids, or negative pricing inputs.
pub fn recompute(measurement: &mut Measurement) -> Result<RecomputeSummary> {
    measurement.validate()?;

    let mut summary = RecomputeSummary {
        section_count: measurement.sections.len(),
        ..Default::default()
    };

    for section in &mut measurement.sections {
        let area = flat_area(section.normalized_coordinates())?;
        if area.degenerate {
            warn!(section = %section.id, "section polygon encloses no area");
            summary.degenerate_sections.push(section.id.clone());
        }
        section.flat_area_sqft = area.sqft;
        adjust_section(section);
    }

    let totals = aggregate(&measurement.sections);
    measurement.total_sqft = totals.total_flat_sqft;
    measurement.total_adjusted_sqft = totals.total_adjusted_sqft;
    measurement.pitch_breakdown = totals.pitch_breakdown;

    // Fold overrides over the freshly derived values; stored flattened
    // fields and the override map are written together
    let computed = derive_linear(&measurement.sections);
    let view = LinearView::from_measurement(measurement, computed);
    view.save_to(measurement);

    debug!(
        sections = summary.section_count,
        total_sqft = measurement.total_sqft,
        total_adjusted_sqft = measurement.total_adjusted_sqft,
        "measurement recomputed"
    );
    Ok(summary)
}
