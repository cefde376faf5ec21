//! Batch orchestration.
//!
//! Sequences the cost calculator and the fleet scheduler over a full
//! package batch. Output order always matches input order, regardless
//! of the order in which shipments were dispatched.

use tracing::debug;

use crate::models::{DeliveryResult, FleetConfig, Package};
use crate::pricing::CostCalculator;
use crate::scheduler::{FleetScheduler, ScheduleError};

/// Processes a batch of packages in either mode.
#[derive(Debug, Clone)]
pub struct PackageProcessor {
    calculator: CostCalculator,
    scheduler: FleetScheduler,
}

impl PackageProcessor {
    /// Creates a processor around a cost calculator, with the default
    /// fleet scheduler.
    pub fn new(calculator: CostCalculator) -> Self {
        Self {
            calculator,
            scheduler: FleetScheduler::new(),
        }
    }

    /// Sets the fleet scheduler.
    pub fn with_scheduler(mut self, scheduler: FleetScheduler) -> Self {
        self.scheduler = scheduler;
        self
    }

    /// Cost-only mode: prices every package; delivery times stay zero.
    pub fn process_costs(&self, packages: &[Package]) -> Vec<DeliveryResult> {
        packages.iter().map(|p| self.calculator.cost(p)).collect()
    }

    /// Cost + time mode: prices every package, then runs the fleet
    /// simulation and fills in the estimated delivery times.
    pub fn process_with_times(
        &self,
        packages: &[Package],
        config: &FleetConfig,
    ) -> Result<Vec<DeliveryResult>, ScheduleError> {
        let mut results = self.process_costs(packages);
        let plan = self.scheduler.schedule(packages, config)?;
        debug!(
            packages = packages.len(),
            shipments = plan.shipment_count(),
            makespan = %plan.makespan(),
            "scheduling complete"
        );

        for result in &mut results {
            if let Some(time) = plan.delivery_time(&result.package_id) {
                result.estimated_delivery_time = time;
            }
        }
        Ok(results)
    }
}
