//! Input parsing for the two batch formats.
//!
//! # Formats
//!
//! Cost-only:
//!
//! ```text
//! base_cost n  id1 weight1 distance1 offer1  ...  idN weightN distanceN offerN
//! ```
//!
//! Cost + time appends the fleet section:
//!
//! ```text
//! ... vehicle_count max_speed max_carriable_weight
//! ```
//!
//! Tokens may be separated by any whitespace, including newlines. All
//! rejections are a single "invalid input" error kind carrying a
//! human-readable message.

use rust_decimal::Decimal;
use thiserror::Error;

use crate::models::{FleetConfig, Package};

/// Invalid input, with a description of what was wrong.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid input: {0}")]
pub struct ParseError(pub String);

impl ParseError {
    fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

/// Tokens per package record: id, weight, distance, offer code.
const PACKAGE_TOKENS: usize = 4;
/// Tokens in the trailing fleet section.
const FLEET_TOKENS: usize = 3;

/// Parses a cost-only batch.
pub fn parse_cost_input(input: &str) -> Result<Vec<Package>, ParseError> {
    let tokens: Vec<&str> = input.split_whitespace().collect();
    let (packages, consumed) = parse_batch(&tokens)?;
    if tokens.len() > consumed {
        return Err(ParseError::new(format!(
            "unexpected trailing tokens after {} packages",
            packages.len()
        )));
    }
    Ok(packages)
}

/// Parses a cost + time batch, including the fleet section.
pub fn parse_time_input(input: &str) -> Result<(Vec<Package>, FleetConfig), ParseError> {
    let tokens: Vec<&str> = input.split_whitespace().collect();
    let (packages, consumed) = parse_batch(&tokens)?;

    if tokens.len() < consumed + FLEET_TOKENS {
        return Err(ParseError::new(
            "missing fleet section: expected vehicle count, max speed, and max carriable weight",
        ));
    }
    if tokens.len() > consumed + FLEET_TOKENS {
        return Err(ParseError::new(
            "unexpected trailing tokens after the fleet section",
        ));
    }

    let vehicle_count: u32 = tokens[consumed]
        .parse()
        .map_err(|_| ParseError::new(format!("invalid vehicle count '{}'", tokens[consumed])))?;
    if vehicle_count == 0 {
        return Err(ParseError::new("vehicle count must be positive"));
    }
    let max_speed = parse_positive(tokens[consumed + 1], "max speed")?;
    let max_weight = parse_positive(tokens[consumed + 2], "max carriable weight")?;

    Ok((
        packages,
        FleetConfig::new(vehicle_count, max_speed, max_weight),
    ))
}

/// Parses `base_cost n` and the n package records. Returns the packages
/// and the number of tokens consumed.
fn parse_batch(tokens: &[&str]) -> Result<(Vec<Package>, usize), ParseError> {
    if tokens.len() < 2 {
        return Err(ParseError::new(
            "input must contain at least the base delivery cost and the number of packages",
        ));
    }

    let base_cost = parse_positive(tokens[0], "base delivery cost")?;
    let count: usize = tokens[1]
        .parse()
        .map_err(|_| ParseError::new(format!("invalid package count '{}'", tokens[1])))?;

    let consumed = 2 + count * PACKAGE_TOKENS;
    if tokens.len() < consumed {
        return Err(ParseError::new(format!(
            "expected {} tokens for {} packages but got {}",
            consumed,
            count,
            tokens.len()
        )));
    }

    let mut packages = Vec::with_capacity(count);
    for i in 0..count {
        let record = &tokens[2 + i * PACKAGE_TOKENS..2 + (i + 1) * PACKAGE_TOKENS];
        let package = parse_package(record, base_cost)
            .map_err(|e| ParseError::new(format!("package {}: {}", i + 1, e.0)))?;
        packages.push(package);
    }

    Ok((packages, consumed))
}

fn parse_package(record: &[&str], base_cost: Decimal) -> Result<Package, ParseError> {
    let id = record[0].trim();
    if id.is_empty() {
        return Err(ParseError::new("package id must not be blank"));
    }
    let weight = parse_positive(record[1], "weight")?;
    let distance = parse_positive(record[2], "distance")?;

    Ok(Package::new(id, weight, distance)
        .with_offer_code(record[3])
        .with_base_cost(base_cost))
}

fn parse_positive(token: &str, field: &str) -> Result<Decimal, ParseError> {
    let value: Decimal = token
        .parse()
        .map_err(|_| ParseError::new(format!("invalid {field} '{token}'")))?;
    if value <= Decimal::ZERO {
        return Err(ParseError::new(format!("{field} must be positive")));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_parse_cost_input() {
        let input = "100 3 PKG1 5 5 OFR001 PKG2 15 5 OFR002 PKG3 10 100 OFR003";
        let packages = parse_cost_input(input).unwrap();

        assert_eq!(packages.len(), 3);
        assert_eq!(packages[0].id, "PKG1");
        assert_eq!(packages[0].weight, dec!(5));
        assert_eq!(packages[0].distance, dec!(5));
        assert_eq!(packages[0].offer_code.as_deref(), Some("OFR001"));
        assert_eq!(packages[0].base_cost, dec!(100));
        assert_eq!(packages[2].id, "PKG3");
        assert_eq!(packages[2].distance, dec!(100));
    }

    #[test]
    fn test_parse_time_input() {
        let input = "100 5 PKG1 50 30 OFR001 PKG2 75 125 OFFR08 PKG3 175 100 OFR003 \
                     PKG4 110 60 OFFR002 PKG5 155 95 NA 2 70 200";
        let (packages, config) = parse_time_input(input).unwrap();

        assert_eq!(packages.len(), 5);
        assert_eq!(packages[4].offer_code.as_deref(), Some("NA"));
        assert_eq!(config.vehicle_count, 2);
        assert_eq!(config.max_speed, dec!(70));
        assert_eq!(config.max_carriable_weight, dec!(200));
    }

    #[test]
    fn test_parse_spans_lines() {
        let input = "100 2\nPKG1 5 5 OFR001\nPKG2 15 5 OFR002\n";
        let packages = parse_cost_input(input).unwrap();
        assert_eq!(packages.len(), 2);
    }

    #[test]
    fn test_empty_input_rejected() {
        assert!(parse_cost_input("").is_err());
        assert!(parse_cost_input("   \n  ").is_err());
        assert!(parse_time_input("").is_err());
    }

    #[test]
    fn test_malformed_numbers_rejected() {
        let err = parse_cost_input("abc 1 PKG1 5 5 NA").unwrap_err();
        assert!(err.0.contains("base delivery cost"));

        let err = parse_cost_input("100 x PKG1 5 5 NA").unwrap_err();
        assert!(err.0.contains("package count"));

        let err = parse_cost_input("100 1 PKG1 5kg 5 NA").unwrap_err();
        assert!(err.0.contains("weight"));
    }

    #[test]
    fn test_negative_count_rejected() {
        assert!(parse_cost_input("100 -1").is_err());
    }

    #[test]
    fn test_non_positive_package_values_rejected() {
        let err = parse_cost_input("100 1 PKG1 -5 5 NA").unwrap_err();
        assert!(err.0.contains("weight must be positive"));

        let err = parse_cost_input("100 1 PKG1 5 0 NA").unwrap_err();
        assert!(err.0.contains("distance must be positive"));
    }

    #[test]
    fn test_short_package_list_rejected() {
        let err = parse_cost_input("100 2 PKG1 5 5 OFR001").unwrap_err();
        assert!(err.0.contains("expected 10 tokens"));
    }

    #[test]
    fn test_error_names_offending_package() {
        let err = parse_cost_input("100 2 PKG1 5 5 OFR001 PKG2 bad 5 NA").unwrap_err();
        assert!(err.0.contains("package 2"), "{err}");
    }

    #[test]
    fn test_fleet_section_required() {
        let err = parse_time_input("100 1 PKG1 5 5 NA").unwrap_err();
        assert!(err.0.contains("fleet section"));
    }

    #[test]
    fn test_non_positive_fleet_values_rejected() {
        assert!(parse_time_input("100 1 PKG1 5 5 NA 0 70 200").is_err());
        assert!(parse_time_input("100 1 PKG1 5 5 NA -2 70 200").is_err());
        assert!(parse_time_input("100 1 PKG1 5 5 NA 2 0 200").is_err());
        assert!(parse_time_input("100 1 PKG1 5 5 NA 2 70 -200").is_err());
    }

    #[test]
    fn test_trailing_tokens_rejected() {
        assert!(parse_cost_input("100 1 PKG1 5 5 NA extra").is_err());
        assert!(parse_time_input("100 1 PKG1 5 5 NA 2 70 200 extra").is_err());
    }

    #[test]
    fn test_error_display_is_single_kind() {
        let err = parse_cost_input("").unwrap_err();
        assert!(err.to_string().starts_with("invalid input: "));
    }
}
