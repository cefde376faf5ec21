//! Delivery plan (solution) model.
//!
//! A plan is the fleet scheduler's output: the ordered list of shipments
//! it dispatched plus a per-package delivery-time lookup.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::Shipment;

/// A complete scheduling solution for one batch.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeliveryPlan {
    /// Dispatched shipments, in dispatch order.
    pub shipments: Vec<Shipment>,
    /// Package id → delivery time (rounded to 2 decimal places).
    pub delivery_times: HashMap<String, Decimal>,
}

impl DeliveryPlan {
    /// Creates an empty plan.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a dispatched shipment.
    pub fn add_shipment(&mut self, shipment: Shipment) {
        self.shipments.push(shipment);
    }

    /// Records a package's delivery time.
    pub fn record_delivery(&mut self, package_id: impl Into<String>, time: Decimal) {
        self.delivery_times.insert(package_id.into(), time);
    }

    /// Delivery time for a package, if it was scheduled.
    pub fn delivery_time(&self, package_id: &str) -> Option<Decimal> {
        self.delivery_times.get(package_id).copied()
    }

    /// The shipment carrying a package, if any.
    pub fn shipment_for(&self, package_id: &str) -> Option<&Shipment> {
        self.shipments.iter().find(|s| s.carries(package_id))
    }

    /// Number of dispatched shipments.
    pub fn shipment_count(&self) -> usize {
        self.shipments.len()
    }

    /// Number of delivered packages.
    pub fn package_count(&self) -> usize {
        self.delivery_times.len()
    }

    /// Latest return time across all shipments (zero for an empty plan).
    pub fn makespan(&self) -> Decimal {
        self.shipments
            .iter()
            .map(|s| s.return_time)
            .max()
            .unwrap_or(Decimal::ZERO)
    }
}
