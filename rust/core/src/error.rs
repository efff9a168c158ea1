// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use thiserror::Error;

/// Result type for document model operations
pub type Result<T> = std::result::Result<T, Error>;

/// Validation errors for measurement documents
///
/// All failures here are synchronous input rejections. Nothing in the
/// document model performs I/O or retries.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Section '{section}' has {points} distinct vertices, need at least 3")]
    PolygonTooSmall { section: String, points: usize },

    #[error("{field} must be non-negative, got {value}")]
    NegativeValue { field: &'static str, value: f64 },

    #[error("{field} must be a finite number")]
    NonFiniteValue { field: &'static str },

    #[error("Duplicate section id '{0}' in measurement")]
    DuplicateSectionId(String),
}
