// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # Roofscope Core
//!
//! Document model for the roofscope roof measurement and estimating engine.
//!
//! This crate defines the JSON-serializable shapes exchanged with the
//! drawing, persistence and report collaborators:
//!
//! - **[`RoofSection`]**: a user-traced roof plane with geographic vertices
//!   and a pitch token
//! - **[`LinearMeasurements`] / [`ManualOverride`]**: per-category edge
//!   lengths with sparse operator overrides
//! - **[`Measurement`]**: the aggregate root persisted as a full snapshot
//! - **[`MaterialOption`]**: static catalog reference data for pricing
//!
//! All computation over these types lives in the `roofscope-geometry`,
//! `roofscope-pricing` and `roofscope-engine` crates; this crate only
//! validates input and carries data.

pub mod error;
pub mod linear;
pub mod material;
pub mod measurement;
pub mod section;

pub use error::{Error, Result};
pub use linear::{LinearCategory, LinearMeasurements, ManualOverride};
pub use material::{DesignPreference, MaterialCategory, MaterialOption};
pub use measurement::{CostLine, Measurement, PricingOverride};
pub use section::{LatLng, RoofSection};
