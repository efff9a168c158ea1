// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use thiserror::Error;

/// Result type for engine operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by the recompute and save pipeline
#[derive(Error, Debug)]
pub enum Error {
    #[error("Document validation failed: {0}")]
    Validation(#[from] roofscope_core::Error),

    #[error("Geometry error: {0}")]
    Geometry(#[from] roofscope_geometry::Error),

    #[error("Pricing error: {0}")]
    Pricing(#[from] roofscope_pricing::Error),

    #[error("{field} must be non-negative, got {value}")]
    NegativeOverride { field: &'static str, value: f64 },
}
