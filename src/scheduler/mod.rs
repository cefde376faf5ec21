//! Shipment packing and fleet scheduling.
//!
//! The two halves of the delivery-time computation:
//!
//! - [`ShipmentPacker`]: picks the best feasible package subset for one
//!   trip (bounded subset-selection knapsack).
//! - [`FleetScheduler`]: simulates vehicle round trips over the batch,
//!   dispatching packed shipments to the next available vehicle and
//!   recording per-package delivery times.

mod fleet;
mod packer;

pub use fleet::FleetScheduler;
pub use packer::ShipmentPacker;

use rust_decimal::Decimal;
use thiserror::Error;

/// Errors surfaced by a scheduling run.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScheduleError {
    /// A package can never be loaded: alone it already exceeds the
    /// fleet's maximum carriable weight, so no amount of waiting helps.
    #[error(
        "package '{id}' weighs {weight} which exceeds the maximum carriable weight {max_weight}"
    )]
    UnschedulablePackage {
        /// Offending package id.
        id: String,
        /// Its weight.
        weight: Decimal,
        /// The fleet's per-trip weight capacity.
        max_weight: Decimal,
    },
}
