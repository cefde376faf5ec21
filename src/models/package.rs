//! Package model.
//!
//! A package is the unit of delivery work: a weight, a destination
//! distance from the depot, and an optional promotional offer code.
//! Packages are immutable once constructed.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A package to be priced and delivered.
///
/// Distance is a single scalar (depot → destination), not a route.
/// The base delivery cost is carried per package; in the current input
/// format it is shared across the whole batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Package {
    /// Unique package identifier.
    pub id: String,
    /// Weight in kg (positive).
    pub weight: Decimal,
    /// Distance from depot to destination in km (positive).
    pub distance: Decimal,
    /// Promotional offer code, if any. `None` and unregistered codes
    /// both yield zero discount.
    pub offer_code: Option<String>,
    /// Base delivery cost component (positive).
    pub base_cost: Decimal,
}

impl Package {
    /// Creates a new package with the given id, weight, and distance.
    pub fn new(id: impl Into<String>, weight: Decimal, distance: Decimal) -> Self {
        Self {
            id: id.into(),
            weight,
            distance,
            offer_code: None,
            base_cost: Decimal::ZERO,
        }
    }

    /// Sets the offer code.
    pub fn with_offer_code(mut self, code: impl Into<String>) -> Self {
        self.offer_code = Some(code.into());
        self
    }

    /// Sets the base delivery cost.
    pub fn with_base_cost(mut self, base_cost: Decimal) -> Self {
        self.base_cost = base_cost;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_package_builder() {
        let pkg = Package::new("PKG1", dec!(5), dec!(5))
            .with_offer_code("OFR001")
            .with_base_cost(dec!(100));

        assert_eq!(pkg.id, "PKG1");
        assert_eq!(pkg.weight, dec!(5));
        assert_eq!(pkg.distance, dec!(5));
        assert_eq!(pkg.offer_code.as_deref(), Some("OFR001"));
        assert_eq!(pkg.base_cost, dec!(100));
    }

    #[test]
    fn test_package_without_offer() {
        let pkg = Package::new("PKG2", dec!(15), dec!(5));
        assert!(pkg.offer_code.is_none());
        assert_eq!(pkg.base_cost, Decimal::ZERO);
    }

    #[test]
    fn test_package_serde_round_trip() {
        let pkg = Package::new("PKG3", dec!(10), dec!(100))
            .with_offer_code("OFR003")
            .with_base_cost(dec!(100));
        let json = serde_json::to_string(&pkg).unwrap();
        let back: Package = serde_json::from_str(&json).unwrap();
        assert_eq!(back, pkg);
    }
}
