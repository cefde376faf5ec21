//! Offer catalog: registration, eligibility, and discount lookup.
//!
//! The catalog is a read-only rule table after construction and safe to
//! share across calls. Code matching is whitespace-trimmed and
//! case-insensitive; unregistered, blank, and placeholder codes yield
//! zero discount.

use std::collections::HashMap;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::models::{round2, Offer};

/// Lookup table of promotional offers.
#[derive(Debug, Clone, Default)]
pub struct OfferCatalog {
    offers: HashMap<String, Offer>,
}

impl OfferCatalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates the catalog with the standard rule table.
    ///
    /// The table deliberately includes misspelled registrations
    /// (`OFFR002` alongside `OFR002`) and zero placeholders (`OFFR08`,
    /// `OFFR0008`, `NA`, blank); both appear in production input data
    /// and are treated as intentional entries.
    pub fn with_defaults() -> Self {
        let mut catalog = Self::new();

        catalog.add(
            Offer::new("OFR001", dec!(10))
                .with_distance_range(dec!(0), dec!(199))
                .with_weight_range(dec!(70), dec!(200)),
        );
        catalog.add(
            Offer::new("OFR002", dec!(7))
                .with_distance_range(dec!(50), dec!(150))
                .with_weight_range(dec!(100), dec!(250)),
        );
        catalog.add(
            Offer::new("OFFR002", dec!(7))
                .with_distance_range(dec!(50), dec!(150))
                .with_weight_range(dec!(100), dec!(250)),
        );
        catalog.add(
            Offer::new("OFR003", dec!(5))
                .with_distance_range(dec!(50), dec!(250))
                .with_weight_range(dec!(10), dec!(150)),
        );
        catalog.add(Offer::new("OFFR08", Decimal::ZERO));
        catalog.add(Offer::new("OFFR0008", Decimal::ZERO));
        catalog.add(Offer::new("NA", Decimal::ZERO));
        catalog.add(Offer::new("", Decimal::ZERO));

        catalog
    }

    /// Registers an offer, replacing any entry under the same
    /// normalized code.
    pub fn add(&mut self, mut offer: Offer) {
        let code = normalize(&offer.code);
        offer.code = code.clone();
        self.offers.insert(code, offer);
    }

    /// Looks up an offer by normalized code.
    pub fn get(&self, code: &str) -> Option<&Offer> {
        self.offers.get(&normalize(code))
    }

    /// Number of registered offers.
    pub fn len(&self) -> usize {
        self.offers.len()
    }

    /// Whether the catalog has no offers.
    pub fn is_empty(&self) -> bool {
        self.offers.is_empty()
    }

    /// Whether `code` names a registered offer applicable to the given
    /// distance and weight.
    pub fn is_valid(&self, code: &str, distance: Decimal, weight: Decimal) -> bool {
        if code.trim().is_empty() {
            return false;
        }
        match self.get(code) {
            Some(offer) => offer.applies_to(distance, weight),
            None => false,
        }
    }

    /// Discount amount for a delivery cost under the given offer code.
    ///
    /// Returns zero for inapplicable codes; otherwise
    /// `cost * percent / 100`, rounded to 2 decimal places.
    pub fn discount(&self, code: &str, distance: Decimal, weight: Decimal, cost: Decimal) -> Decimal {
        if code.trim().is_empty() {
            return Decimal::ZERO;
        }
        match self.get(code) {
            Some(offer) if offer.applies_to(distance, weight) => {
                round2(cost * offer.discount_percent / dec!(100))
            }
            _ => Decimal::ZERO,
        }
    }
}

fn normalize(code: &str) -> String {
    code.trim().to_uppercase()
}
