//! Fleet scheduling: round-trip simulation over a vehicle fleet.
//!
//! # Algorithm
//!
//! Discrete-event loop over simulated time, starting at t=0:
//!
//! 1. **Dispatch**: every vehicle free at the current time (ordered by
//!    availability, then id) gets the packer's best shipment from the
//!    remaining pool. Shipments deliver closest-first; the vehicle is
//!    busy until it has driven to the farthest destination and back.
//! 2. **Advance**: with packages left and no vehicle free, jump to the
//!    earliest available-after time.
//! 3. Terminate when the pool is empty.
//!
//! Per-package delivery times are rounded to 2 decimal places when
//! recorded; the running leg total stays unrounded, so later packages
//! on the same trip do not accumulate rounding error.

use rust_decimal::Decimal;
use tracing::debug;

use crate::models::{round2, DeliveryPlan, FleetConfig, Package, Vehicle};

use super::{ScheduleError, ShipmentPacker};

/// Simulates vehicle round trips to derive per-package delivery times.
#[derive(Debug, Clone, Default)]
pub struct FleetScheduler {
    packer: ShipmentPacker,
}

impl FleetScheduler {
    /// Creates a scheduler with the default packer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the shipment packer.
    pub fn with_packer(mut self, packer: ShipmentPacker) -> Self {
        self.packer = packer;
        self
    }

    /// Schedules the batch across the fleet.
    ///
    /// Preconditions (enforced by the parser, assumed here): positive
    /// vehicle count, speed, capacity, package weights and distances.
    ///
    /// # Errors
    ///
    /// [`ScheduleError::UnschedulablePackage`] if packages remain that
    /// can never be loaded (each alone exceeds the fleet capacity).
    pub fn schedule(
        &self,
        packages: &[Package],
        config: &FleetConfig,
    ) -> Result<DeliveryPlan, ScheduleError> {
        let mut plan = DeliveryPlan::new();
        if packages.is_empty() {
            return Ok(plan);
        }

        // Offer heavier, closer packages to the packer first. The
        // packer's own criteria dominate; this ordering settles full
        // ties deterministically.
        let mut remaining: Vec<Package> = packages.to_vec();
        remaining.sort_by(|a, b| {
            b.weight
                .cmp(&a.weight)
                .then_with(|| a.distance.cmp(&b.distance))
        });

        let mut vehicles = config.build_fleet();
        let mut now = Decimal::ZERO;

        while !remaining.is_empty() {
            let mut free: Vec<usize> = (0..vehicles.len())
                .filter(|&i| vehicles[i].is_available_at(now))
                .collect();
            free.sort_by_key(|&i| (vehicles[i].available_after, vehicles[i].id));

            if free.is_empty() {
                now = Self::next_available(&vehicles);
                continue;
            }

            for vi in free {
                if remaining.is_empty() {
                    break;
                }

                let Some(mut shipment) =
                    self.packer.pack(&remaining, config.max_carriable_weight)
                else {
                    // Nothing left fits even alone; waiting cannot help.
                    return Err(Self::unschedulable(&remaining, config));
                };

                shipment.vehicle_id = vehicles[vi].id;
                shipment.departure_time = now;
                // Deliver closest destination first.
                shipment.packages.sort_by(|a, b| a.distance.cmp(&b.distance));

                let mut elapsed = now;
                let mut previous_distance = Decimal::ZERO;
                for package in &shipment.packages {
                    elapsed += (package.distance - previous_distance) / config.max_speed;
                    plan.record_delivery(&package.id, round2(elapsed));
                    previous_distance = package.distance;
                }

                shipment.travel_time = shipment.max_distance() / config.max_speed;
                shipment.return_time = now + Decimal::TWO * shipment.travel_time;
                vehicles[vi].available_after = shipment.return_time;

                debug!(
                    vehicle = shipment.vehicle_id,
                    packages = shipment.package_count(),
                    departure = %shipment.departure_time,
                    back_at = %shipment.return_time,
                    "dispatched shipment"
                );

                remaining.retain(|p| !shipment.carries(&p.id));
                plan.add_shipment(shipment);
            }

            if !remaining.is_empty() {
                now = Self::next_available(&vehicles);
            }
        }

        Ok(plan)
    }

    fn next_available(vehicles: &[Vehicle]) -> Decimal {
        vehicles
            .iter()
            .map(|v| v.available_after)
            .min()
            .unwrap_or(Decimal::ZERO)
    }

    fn unschedulable(remaining: &[Package], config: &FleetConfig) -> ScheduleError {
        // The lightest leftover is the proof: even it exceeds capacity.
        let lightest = remaining
            .iter()
            .min_by(|a, b| a.weight.cmp(&b.weight))
            .cloned()
            .unwrap_or_else(|| Package::new("", Decimal::ZERO, Decimal::ZERO));
        ScheduleError::UnschedulablePackage {
            id: lightest.id,
            weight: lightest.weight,
            max_weight: config.max_carriable_weight,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn pkg(id: &str, weight: Decimal, distance: Decimal) -> Package {
        Package::new(id, weight, distance)
    }

    fn sample_batch() -> Vec<Package> {
        vec![
            pkg("PKG1", dec!(50), dec!(30)),
            pkg("PKG2", dec!(75), dec!(125)),
            pkg("PKG3", dec!(175), dec!(100)),
            pkg("PKG4", dec!(110), dec!(60)),
            pkg("PKG5", dec!(155), dec!(95)),
        ]
    }

    fn sample_config() -> FleetConfig {
        FleetConfig::new(2, dec!(70), dec!(200))
    }

    #[test]
    fn test_sample_batch_delivery_times() {
        let plan = FleetScheduler::new()
            .schedule(&sample_batch(), &sample_config())
            .unwrap();

        // Trip 1 (vehicle 1): PKG2+PKG4, closest first.
        assert_eq!(plan.delivery_time("PKG4"), Some(dec!(0.86)));
        assert_eq!(plan.delivery_time("PKG2"), Some(dec!(1.79)));
        // Trip 2 (vehicle 2): PKG3 alone.
        assert_eq!(plan.delivery_time("PKG3"), Some(dec!(1.43)));
        // Vehicle 2 returns at 2.86 and takes PKG5.
        assert_eq!(plan.delivery_time("PKG5"), Some(dec!(4.21)));
        // Vehicle 1 returns at 3.57 and takes PKG1.
        assert_eq!(plan.delivery_time("PKG1"), Some(dec!(4.00)));
    }

    #[test]
    fn test_every_package_in_exactly_one_shipment() {
        let batch = sample_batch();
        let plan = FleetScheduler::new()
            .schedule(&batch, &sample_config())
            .unwrap();

        assert_eq!(plan.package_count(), batch.len());
        for package in &batch {
            let carriers = plan
                .shipments
                .iter()
                .filter(|s| s.carries(&package.id))
                .count();
            assert_eq!(carriers, 1, "{} must ship exactly once", package.id);
        }
    }

    #[test]
    fn test_no_shipment_exceeds_capacity() {
        let config = sample_config();
        let plan = FleetScheduler::new()
            .schedule(&sample_batch(), &config)
            .unwrap();

        for shipment in &plan.shipments {
            assert!(shipment.total_weight() <= config.max_carriable_weight);
        }
    }

    #[test]
    fn test_delivery_time_not_before_departure() {
        let plan = FleetScheduler::new()
            .schedule(&sample_batch(), &sample_config())
            .unwrap();

        for shipment in &plan.shipments {
            for package in &shipment.packages {
                let time = plan.delivery_time(&package.id).unwrap();
                assert!(
                    time >= shipment.departure_time,
                    "{} delivered at {} before departure {}",
                    package.id,
                    time,
                    shipment.departure_time
                );
            }
        }
    }

    #[test]
    fn test_round_trip_accounting() {
        let plan = FleetScheduler::new()
            .schedule(&sample_batch(), &sample_config())
            .unwrap();

        for shipment in &plan.shipments {
            assert_eq!(
                shipment.return_time,
                shipment.departure_time + Decimal::TWO * shipment.travel_time
            );
            // Packages are in delivery order: distance ascending.
            let distances: Vec<Decimal> =
                shipment.packages.iter().map(|p| p.distance).collect();
            let mut sorted = distances.clone();
            sorted.sort();
            assert_eq!(distances, sorted);
        }
    }

    #[test]
    fn test_single_vehicle_serializes_trips() {
        let config = FleetConfig::new(1, dec!(70), dec!(200));
        let plan = FleetScheduler::new()
            .schedule(&sample_batch(), &config)
            .unwrap();

        // One vehicle: shipments must not overlap in time.
        let mut previous_return = Decimal::ZERO;
        for shipment in &plan.shipments {
            assert_eq!(shipment.vehicle_id, 1);
            assert!(shipment.departure_time >= previous_return);
            previous_return = shipment.return_time;
        }
        assert_eq!(plan.package_count(), 5);
    }

    #[test]
    fn test_overweight_package_is_unschedulable() {
        let batch = vec![
            pkg("PKG1", dec!(50), dec!(30)),
            pkg("TOOBIG", dec!(250), dec!(40)),
        ];
        let err = FleetScheduler::new()
            .schedule(&batch, &sample_config())
            .unwrap_err();

        assert_eq!(
            err,
            ScheduleError::UnschedulablePackage {
                id: "TOOBIG".into(),
                weight: dec!(250),
                max_weight: dec!(200),
            }
        );
    }

    #[test]
    fn test_empty_batch_yields_empty_plan() {
        let plan = FleetScheduler::new()
            .schedule(&[], &sample_config())
            .unwrap();
        assert_eq!(plan.shipment_count(), 0);
        assert_eq!(plan.package_count(), 0);
    }

    #[test]
    fn test_vehicles_alternate_deterministically() {
        let plan = FleetScheduler::new()
            .schedule(&sample_batch(), &sample_config())
            .unwrap();

        // First dispatch round at t=0 uses vehicles in id order.
        assert_eq!(plan.shipments[0].vehicle_id, 1);
        assert_eq!(plan.shipments[1].vehicle_id, 2);
        assert_eq!(plan.shipments[0].departure_time, dec!(0));
        assert_eq!(plan.shipments[1].departure_time, dec!(0));
    }
}
