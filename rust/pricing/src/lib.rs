// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Roofscope Pricing
//!
//! Cost estimation over pitch-adjusted roof area: an injectable material
//! catalog, a single configurable [`PricingPolicy`] covering both the
//! detailed and quick-quote estimate flows, and a pure, idempotent
//! [`estimate`] function producing a point estimate with a bounded range.

pub mod catalog;
pub mod error;
pub mod estimate;
pub mod policy;

pub use catalog::{default_catalog, find_material};
pub use error::{Error, Result};
pub use estimate::{estimate, PricingResult};
pub use policy::PricingPolicy;
