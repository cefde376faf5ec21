//! Delivery cost calculation.
//!
//! # Cost Formula
//!
//! ```text
//! cost  = base_cost + weight * weight_rate + distance * distance_rate
//! total = cost - discount(offer, distance, weight, cost)
//! ```
//!
//! The rate coefficients are policy values carried in [`Tariff`] rather
//! than hard-coded, with the standard rates (10 per kg, 5 per km) as
//! the default.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::models::{round2, DeliveryResult, Package};
use crate::offers::OfferCatalog;

/// Cost coefficients for the linear delivery tariff.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tariff {
    /// Cost per kg of package weight.
    pub weight_rate: Decimal,
    /// Cost per km of delivery distance.
    pub distance_rate: Decimal,
}

impl Default for Tariff {
    fn default() -> Self {
        Self {
            weight_rate: dec!(10),
            distance_rate: dec!(5),
        }
    }
}

impl Tariff {
    /// Creates a tariff with explicit rates.
    pub fn new(weight_rate: Decimal, distance_rate: Decimal) -> Self {
        Self {
            weight_rate,
            distance_rate,
        }
    }
}

/// Computes per-package delivery cost and discount.
///
/// Stateless apart from its collaborators; calling it twice on the same
/// package yields identical results.
#[derive(Debug, Clone)]
pub struct CostCalculator {
    catalog: OfferCatalog,
    tariff: Tariff,
}

impl CostCalculator {
    /// Creates a calculator over the given offer catalog with the
    /// default tariff.
    pub fn new(catalog: OfferCatalog) -> Self {
        Self {
            catalog,
            tariff: Tariff::default(),
        }
    }

    /// Sets the tariff.
    pub fn with_tariff(mut self, tariff: Tariff) -> Self {
        self.tariff = tariff;
        self
    }

    /// Prices one package. The delivery-time field of the result stays
    /// zero; the fleet scheduler fills it in when timing is requested.
    pub fn cost(&self, package: &Package) -> DeliveryResult {
        let cost = package.base_cost
            + package.weight * self.tariff.weight_rate
            + package.distance * self.tariff.distance_rate;

        let code = package.offer_code.as_deref().unwrap_or("");
        let discount = self
            .catalog
            .discount(code, package.distance, package.weight, cost);

        DeliveryResult::new(
            &package.id,
            round2(discount),
            round2(cost - discount),
            round2(cost),
        )
    }
}
