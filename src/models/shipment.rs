//! Shipment model.
//!
//! A shipment is one vehicle round trip: the selected packages, the
//! departure time, the one-way travel time to the farthest destination,
//! and the return time. The packer produces an unassigned shipment
//! (vehicle 0, zero times); the fleet scheduler assigns and times it.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::Package;

/// One vehicle round trip carrying a subset of the batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shipment {
    /// Assigned vehicle id; 0 until the scheduler assigns one
    /// (fleet ids start at 1).
    pub vehicle_id: u32,
    /// Carried packages. After assignment, ordered by distance
    /// ascending (delivery order: closest first).
    pub packages: Vec<Package>,
    /// Simulated departure time from the depot.
    pub departure_time: Decimal,
    /// One-way travel time to the farthest destination in the trip.
    pub travel_time: Decimal,
    /// Time the vehicle is back at the depot:
    /// `departure_time + 2 * travel_time`.
    pub return_time: Decimal,
}

impl Shipment {
    /// Creates an unassigned shipment around the selected packages.
    pub fn new(packages: Vec<Package>) -> Self {
        Self {
            vehicle_id: 0,
            packages,
            departure_time: Decimal::ZERO,
            travel_time: Decimal::ZERO,
            return_time: Decimal::ZERO,
        }
    }

    /// Total carried weight.
    pub fn total_weight(&self) -> Decimal {
        self.packages.iter().map(|p| p.weight).sum()
    }

    /// Farthest single-package distance in the trip.
    pub fn max_distance(&self) -> Decimal {
        self.packages
            .iter()
            .map(|p| p.distance)
            .max()
            .unwrap_or(Decimal::ZERO)
    }

    /// Number of carried packages.
    pub fn package_count(&self) -> usize {
        self.packages.len()
    }

    /// Whether the shipment carries the given package.
    pub fn carries(&self, package_id: &str) -> bool {
        self.packages.iter().any(|p| p.id == package_id)
    }
}
