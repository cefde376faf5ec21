//! Offer (discount rule) model.
//!
//! An offer maps a code to a discount percentage, applicable only when
//! a package's distance and weight both fall inside inclusive ranges.
//! Lookup and eligibility logic lives in [`crate::offers::OfferCatalog`];
//! this module is the pure data shape.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// An inclusive `[min, max]` applicability range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OfferRange {
    /// Lower bound (inclusive).
    pub min: Decimal,
    /// Upper bound (inclusive).
    pub max: Decimal,
}

impl OfferRange {
    /// Creates a range from `min` to `max`, both inclusive.
    pub fn new(min: Decimal, max: Decimal) -> Self {
        Self { min, max }
    }

    /// An empty `[0, 0]` range, used by placeholder offers.
    pub fn zero() -> Self {
        Self {
            min: Decimal::ZERO,
            max: Decimal::ZERO,
        }
    }

    /// Whether `value` falls inside the range.
    pub fn contains(&self, value: Decimal) -> bool {
        value >= self.min && value <= self.max
    }

    /// Whether both bounds are zero.
    pub fn is_zero(&self) -> bool {
        self.min.is_zero() && self.max.is_zero()
    }
}

/// A promotional offer rule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Offer {
    /// Offer code (stored normalized: trimmed, uppercase).
    pub code: String,
    /// Discount percentage (0-100). Zero means the offer never applies.
    pub discount_percent: Decimal,
    /// Eligible destination distances.
    pub distance_range: OfferRange,
    /// Eligible package weights.
    pub weight_range: OfferRange,
}

impl Offer {
    /// Creates an offer with zero ranges (a placeholder entry until
    /// ranges are set).
    pub fn new(code: impl Into<String>, discount_percent: Decimal) -> Self {
        Self {
            code: code.into(),
            discount_percent,
            distance_range: OfferRange::zero(),
            weight_range: OfferRange::zero(),
        }
    }

    /// Sets the eligible distance range (inclusive).
    pub fn with_distance_range(mut self, min: Decimal, max: Decimal) -> Self {
        self.distance_range = OfferRange::new(min, max);
        self
    }

    /// Sets the eligible weight range (inclusive).
    pub fn with_weight_range(mut self, min: Decimal, max: Decimal) -> Self {
        self.weight_range = OfferRange::new(min, max);
        self
    }

    /// Whether a package with the given distance and weight is eligible.
    ///
    /// Placeholder offers (zero percent or all-zero ranges) are never
    /// applicable.
    pub fn applies_to(&self, distance: Decimal, weight: Decimal) -> bool {
        if self.discount_percent.is_zero() {
            return false;
        }
        if self.distance_range.is_zero() && self.weight_range.is_zero() {
            return false;
        }
        self.distance_range.contains(distance) && self.weight_range.contains(weight)
    }
}
