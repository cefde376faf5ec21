//! Courier domain models.
//!
//! Provides the core data types for representing a delivery batch
//! and its solution:
//!
//! | Type | Role |
//! |------|------|
//! | `Package` | One parcel: weight, distance, optional offer code |
//! | `Offer` | A discount rule: percent + distance/weight ranges |
//! | `Vehicle` | A fleet member with an available-after time |
//! | `FleetConfig` | Fleet parameters passed explicitly at call time |
//! | `Shipment` | One vehicle round trip carrying selected packages |
//! | `DeliveryPlan` | A complete set of shipments + delivery times |
//! | `DeliveryResult` | Per-package cost/discount/time output |
//!
//! # Numeric Representation
//! All weights, distances, money amounts, and simulated times use
//! `rust_decimal::Decimal`. Monetary and time outputs are rounded to
//! 2 decimal places with [`round2`].

mod offer;
mod package;
mod plan;
mod result;
mod shipment;
mod vehicle;

pub use offer::{Offer, OfferRange};
pub use package::Package;
pub use plan::DeliveryPlan;
pub use result::DeliveryResult;
pub use shipment::Shipment;
pub use vehicle::{FleetConfig, Vehicle};

use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds a monetary or time value to 2 decimal places.
///
/// Uses round-half-away-from-zero (`123.455` → `123.46`), matching the
/// behavior documented for discount, cost, and delivery-time outputs.
pub fn round2(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}
