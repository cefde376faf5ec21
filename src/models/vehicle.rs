//! Vehicle and fleet configuration models.
//!
//! A vehicle carries only its id and the simulated time after which it
//! can take the next shipment. Fleet parameters are an explicit value
//! passed into the scheduler at call time; there is no process-wide
//! fleet state.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A delivery vehicle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vehicle {
    /// Stable identifier, assigned `1..=N` for a fleet of N.
    pub id: u32,
    /// Simulated time after which the vehicle can be dispatched again.
    pub available_after: Decimal,
}

impl Vehicle {
    /// Creates a vehicle available from time zero.
    pub fn new(id: u32) -> Self {
        Self {
            id,
            available_after: Decimal::ZERO,
        }
    }

    /// Whether the vehicle can be dispatched at the given time.
    pub fn is_available_at(&self, time: Decimal) -> bool {
        self.available_after <= time
    }
}

/// Fleet parameters for a scheduling run.
///
/// The scheduler assumes these were validated by the caller: the parser
/// rejects non-positive values before this type is constructed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FleetConfig {
    /// Number of vehicles in the fleet.
    pub vehicle_count: u32,
    /// Vehicle speed in km/h, applied to every leg.
    pub max_speed: Decimal,
    /// Maximum total weight a vehicle carries on one trip.
    pub max_carriable_weight: Decimal,
}

impl FleetConfig {
    /// Creates a fleet configuration.
    pub fn new(vehicle_count: u32, max_speed: Decimal, max_carriable_weight: Decimal) -> Self {
        Self {
            vehicle_count,
            max_speed,
            max_carriable_weight,
        }
    }

    /// Builds the initial fleet: vehicles `1..=N`, all available at t=0.
    pub fn build_fleet(&self) -> Vec<Vehicle> {
        (1..=self.vehicle_count).map(Vehicle::new).collect()
    }
}
