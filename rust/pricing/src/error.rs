// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use thiserror::Error;

/// Result type for pricing operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during estimate input validation
///
/// The estimate computation itself is pure and total; everything here is
/// rejected before it runs.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("{field} must be non-negative, got {value}")]
    NegativeInput { field: &'static str, value: f64 },

    #[error("{field} must be a finite number")]
    NonFiniteInput { field: &'static str },

    #[error("Material '{0}' has a labor multiplier below zero")]
    InvalidMaterial(String),
}
