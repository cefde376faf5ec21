//! Shipment packing: best-subset selection for one trip.
//!
//! # Selection Criteria
//!
//! Among subsets whose total weight fits the vehicle, prefer in strict
//! lexicographic order:
//!
//! 1. more packages,
//! 2. higher total weight,
//! 3. smaller maximum single-package distance (the trip returns sooner).
//!
//! # Complexity
//!
//! Subset enumeration is combinatorial, so the explored subset size is
//! capped (default 4, matching typical vehicle capacity vs. package
//! weights). Sizes are tried from the cap downward and the search stops
//! at the first size with any feasible subset, which makes criterion 1
//! implicit. This bound keeps a batch run tractable but is a known
//! scalability limit for much larger pools.

use itertools::Itertools;
use rust_decimal::Decimal;

use crate::models::{Package, Shipment};

/// Default cap on the number of packages explored per shipment.
pub const DEFAULT_MAX_SUBSET_SIZE: usize = 4;

/// Selects the best feasible package subset for a single trip.
#[derive(Debug, Clone)]
pub struct ShipmentPacker {
    max_subset_size: usize,
}

impl Default for ShipmentPacker {
    fn default() -> Self {
        Self::new()
    }
}

impl ShipmentPacker {
    /// Creates a packer with the default subset-size cap.
    pub fn new() -> Self {
        Self {
            max_subset_size: DEFAULT_MAX_SUBSET_SIZE,
        }
    }

    /// Overrides the subset-size cap (must be at least 1).
    pub fn with_max_subset_size(mut self, max_subset_size: usize) -> Self {
        self.max_subset_size = max_subset_size.max(1);
        self
    }

    /// Picks the best subset of `pool` with total weight ≤ `max_weight`.
    ///
    /// Returns an unassigned [`Shipment`] (no vehicle, no times), or
    /// `None` if no single package fits on its own.
    ///
    /// Ties on all three criteria resolve to the earliest subset in
    /// lexicographic index order over `pool`, so the caller's pool
    /// ordering is the final, deterministic tie-break.
    pub fn pack(&self, pool: &[Package], max_weight: Decimal) -> Option<Shipment> {
        if pool.is_empty() {
            return None;
        }

        let largest = self.max_subset_size.min(pool.len());
        for size in (1..=largest).rev() {
            if let Some(indices) = self.best_subset_of_size(pool, max_weight, size) {
                let packages = indices.iter().map(|&i| pool[i].clone()).collect();
                return Some(Shipment::new(packages));
            }
        }

        None
    }

    /// Best feasible subset of exactly `size` packages, by criteria 2-3.
    fn best_subset_of_size(
        &self,
        pool: &[Package],
        max_weight: Decimal,
        size: usize,
    ) -> Option<Vec<usize>> {
        let mut best: Option<Vec<usize>> = None;
        let mut best_weight = Decimal::ZERO;
        let mut best_max_distance = Decimal::MAX;

        for combo in (0..pool.len()).combinations(size) {
            let total_weight: Decimal = combo.iter().map(|&i| pool[i].weight).sum();
            if total_weight > max_weight {
                continue;
            }

            let max_distance = combo
                .iter()
                .map(|&i| pool[i].distance)
                .max()
                .unwrap_or(Decimal::ZERO);

            let better = match best {
                None => true,
                Some(_) => {
                    total_weight > best_weight
                        || (total_weight == best_weight && max_distance < best_max_distance)
                }
            };
            if better {
                best_weight = total_weight;
                best_max_distance = max_distance;
                best = Some(combo);
            }
        }

        best
    }
}
