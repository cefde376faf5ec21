//! Batch integrity checks.
//!
//! Structural checks on an already-parsed batch, run before pricing or
//! scheduling. The parser guarantees well-formed positive values; this
//! layer catches cross-package problems:
//! - duplicate package ids
//! - packages that exceed the fleet's per-trip capacity (reported here
//!   as a listable precheck; the scheduler independently surfaces the
//!   same condition as an error)

use std::collections::HashSet;

use crate::models::{FleetConfig, Package};

/// Validation outcome: `Ok(())` or every detected issue.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A batch integrity error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of batch integrity errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two packages share the same id.
    DuplicatePackageId,
    /// A package alone outweighs the fleet capacity.
    ExceedsFleetCapacity,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Checks a batch for duplicate package ids.
pub fn validate_batch(packages: &[Package]) -> ValidationResult {
    let errors = duplicate_id_errors(packages);
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Checks a batch against a fleet: duplicate ids plus packages that can
/// never be carried.
pub fn validate_for_scheduling(packages: &[Package], config: &FleetConfig) -> ValidationResult {
    let mut errors = duplicate_id_errors(packages);

    for package in packages {
        if package.weight > config.max_carriable_weight {
            errors.push(ValidationError::new(
                ValidationErrorKind::ExceedsFleetCapacity,
                format!(
                    "package '{}' weighs {} which exceeds the maximum carriable weight {}",
                    package.id, package.weight, config.max_carriable_weight
                ),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn duplicate_id_errors(packages: &[Package]) -> Vec<ValidationError> {
    let mut seen = HashSet::new();
    let mut errors = Vec::new();
    for package in packages {
        if !seen.insert(package.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicatePackageId,
                format!("duplicate package id: {}", package.id),
            ));
        }
    }
    errors
}
