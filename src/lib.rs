//! Courier delivery cost and time estimation.
//!
//! A single-shot batch calculator: given a batch of packages, pricing
//! rules, promotional offers, and a vehicle fleet, it computes each
//! package's delivery cost (with discount) and, optionally, its
//! estimated delivery time.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Package`, `Offer`, `Vehicle`,
//!   `FleetConfig`, `Shipment`, `DeliveryPlan`, `DeliveryResult`
//! - **`offers`**: The offer rule table (eligibility + discount lookup)
//! - **`pricing`**: Linear cost tariff and per-package cost calculation
//! - **`scheduler`**: The core algorithm — shipment packing (bounded
//!   subset-selection knapsack) and fleet round-trip simulation
//! - **`processor`**: Batch orchestration over both modes
//! - **`parser`**: Text input parsing for the two batch formats
//! - **`validation`**: Batch integrity checks (duplicate ids, packages
//!   no vehicle can carry)
//!
//! # Example
//!
//! ```
//! use courier_service::models::{FleetConfig, Package};
//! use courier_service::offers::OfferCatalog;
//! use courier_service::pricing::CostCalculator;
//! use courier_service::processor::PackageProcessor;
//! use rust_decimal_macros::dec;
//!
//! let packages = vec![
//!     Package::new("PKG1", dec!(50), dec!(30))
//!         .with_offer_code("OFR001")
//!         .with_base_cost(dec!(100)),
//!     Package::new("PKG2", dec!(75), dec!(125))
//!         .with_base_cost(dec!(100)),
//! ];
//! let config = FleetConfig::new(2, dec!(70), dec!(200));
//!
//! let processor = PackageProcessor::new(CostCalculator::new(OfferCatalog::with_defaults()));
//! let results = processor.process_with_times(&packages, &config).unwrap();
//!
//! assert_eq!(results[0].total_cost, dec!(750));
//! assert!(results.iter().all(|r| r.estimated_delivery_time > dec!(0)));
//! ```
//!
//! # Concurrency
//!
//! The whole computation is synchronous and single-threaded. The offer
//! catalog is read-only after construction; every scheduling run works
//! on private copies of the vehicle and package state, so independent
//! runs can share one catalog safely.

pub mod models;
pub mod offers;
pub mod parser;
pub mod pricing;
pub mod processor;
pub mod scheduler;
pub mod validation;
