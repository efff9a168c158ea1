// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Default material catalog
//!
//! Injectable reference data for the estimate calculator. Consumers may load
//! their own catalog; this table only provides the stock options.

use roofscope_core::{MaterialCategory, MaterialOption};

/// Build the stock 13-entry material catalog
pub fn default_catalog() -> Vec<MaterialOption> {
    vec![
        MaterialOption::new(
            "3-Tab Asphalt Shingles",
            3.5,
            1.0,
            MaterialCategory::Economy,
            "Budget-friendly single-layer asphalt shingles",
            "20 years",
        ),
        MaterialOption::new(
            "Rolled Roofing",
            2.5,
            0.8,
            MaterialCategory::Economy,
            "Mineral-surfaced roll for low-slope utility roofs",
            "10 years",
        ),
        MaterialOption::new(
            "TPO Membrane",
            4.0,
            1.1,
            MaterialCategory::Economy,
            "Heat-welded single-ply membrane for flat roofs",
            "20 years",
        ),
        MaterialOption::new(
            "Architectural Shingles",
            4.5,
            1.0,
            MaterialCategory::Standard,
            "Dimensional asphalt shingles, the most common choice",
            "30 years",
        ),
        MaterialOption::new(
            "EPDM Rubber",
            4.75,
            1.1,
            MaterialCategory::Standard,
            "Fully-adhered rubber membrane for flat and low-slope roofs",
            "25 years",
        ),
        MaterialOption::new(
            "Corrugated Metal",
            5.5,
            1.2,
            MaterialCategory::Standard,
            "Exposed-fastener metal panels",
            "30 years",
        ),
        MaterialOption::new(
            "Stone-Coated Steel",
            7.5,
            1.3,
            MaterialCategory::Premium,
            "Steel panels with a stone-granule finish",
            "50 years",
        ),
        MaterialOption::new(
            "Standing Seam Metal",
            9.0,
            1.4,
            MaterialCategory::Premium,
            "Concealed-fastener metal panels",
            "50 years",
        ),
        MaterialOption::new(
            "Cedar Shake",
            8.5,
            1.5,
            MaterialCategory::Premium,
            "Hand-split natural wood shakes",
            "30 years",
        ),
        MaterialOption::new(
            "Synthetic Slate",
            9.5,
            1.3,
            MaterialCategory::Premium,
            "Composite tiles with the look of slate at lower weight",
            "50 years",
        ),
        MaterialOption::new(
            "Concrete Tile",
            10.0,
            1.6,
            MaterialCategory::Luxury,
            "Molded concrete tiles in slate and shake profiles",
            "50 years",
        ),
        MaterialOption::new(
            "Clay Tile",
            12.0,
            1.8,
            MaterialCategory::Luxury,
            "Kiln-fired clay barrel tiles",
            "75 years",
        ),
        MaterialOption::new(
            "Natural Slate",
            16.0,
            2.0,
            MaterialCategory::Luxury,
            "Quarried slate, the longest-lived roof available",
            "75+ years",
        ),
    ]
}

/// Look up a catalog entry by display name
pub fn find_material<'a>(catalog: &'a [MaterialOption], name: &str) -> Option<&'a MaterialOption> {
    catalog.iter().find(|m| m.name == name)
}
