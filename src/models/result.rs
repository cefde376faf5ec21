//! Per-package output model.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The priced (and optionally timed) outcome for one package.
///
/// All monetary fields and the delivery time are rounded to 2 decimal
/// places. `estimated_delivery_time` stays zero in cost-only runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeliveryResult {
    /// Package identifier.
    pub package_id: String,
    /// Discount amount applied.
    pub discount: Decimal,
    /// Final cost after discount.
    pub total_cost: Decimal,
    /// Cost before the discount was applied.
    pub cost_before_discount: Decimal,
    /// Absolute delivery time in hours from the start of the run.
    pub estimated_delivery_time: Decimal,
}

impl DeliveryResult {
    /// Creates a cost-only result (delivery time zero).
    pub fn new(
        package_id: impl Into<String>,
        discount: Decimal,
        total_cost: Decimal,
        cost_before_discount: Decimal,
    ) -> Self {
        Self {
            package_id: package_id.into(),
            discount,
            total_cost,
            cost_before_discount,
            estimated_delivery_time: Decimal::ZERO,
        }
    }

    /// Sets the estimated delivery time.
    pub fn with_delivery_time(mut self, time: Decimal) -> Self {
        self.estimated_delivery_time = time;
        self
    }
}
