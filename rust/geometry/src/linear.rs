// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Derivation of linear measurements from section metadata
//!
//! Users draw polygons, not labeled edges, so eave/ridge/valley
//! classification is not inferred from raw polygon shape. Lengths come from
//! upstream drawing tooling when it supplies per-section metadata, and are
//! otherwise left at zero for manual entry.

use roofscope_core::{LinearMeasurements, RoofSection};

/// Sum per-section linear metadata into measurement-level totals
///
/// Sections without metadata contribute nothing; when no section carries
/// metadata the result is all zeros, to be filled by manual entry.
pub fn derive_linear(sections: &[RoofSection]) -> LinearMeasurements {
    let mut totals = LinearMeasurements::default();
    for section in sections {
        if let Some(linear) = &section.linear_ft {
            totals.add(linear);
        }
    }
    totals
}
