// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Roofscope Engine
//!
//! Orchestration over the core/geometry/pricing crates: the full-document
//! [`recompute`] pipeline, manual-override merging via [`LinearView`],
//! quote assembly, and [`ReportSummary`] flattening for the report
//! collaborator. All operations are synchronous and pure apart from
//! `tracing` instrumentation; persistence and rendering belong to external
//! collaborators consuming the complete Measurement snapshot.

pub mod error;
pub mod overrides;
pub mod quote;
pub mod recompute;
pub mod report;

pub use error::{Error, Result};
pub use overrides::LinearView;
pub use quote::{price_measurement, DEFAULT_WASTE_PERCENT};
pub use recompute::{recompute, RecomputeSummary};
pub use report::ReportSummary;
