//! Input validation helpers
//!
//! Centralized limits and the checks every catalog form goes through.

use crate::catalog::CatalogError;

// ── Limits ──────────────────────────────────────────────────────────

/// Category and dish names
pub const MAX_NAME_LEN: usize = 200;

/// Maximum allowed dish price (whole currency units)
pub const MAX_PRICE: f64 = 1_000_000.0;

// ── Validation helpers ──────────────────────────────────────────────

/// Trim a required name and check it is non-empty and within the length limit.
pub fn validate_name(value: &str) -> Result<String, CatalogError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(CatalogError::MissingName);
    }
    let len = trimmed.chars().count();
    if len > MAX_NAME_LEN {
        return Err(CatalogError::NameTooLong {
            len,
            max: MAX_NAME_LEN,
        });
    }
    Ok(trimmed.to_string())
}

/// A price must be finite, strictly positive and below [`MAX_PRICE`].
pub fn validate_price(price: f64) -> Result<f64, CatalogError> {
    if !price.is_finite() || price <= 0.0 || price > MAX_PRICE {
        return Err(CatalogError::InvalidPrice(price.to_string()));
    }
    Ok(price)
}

/// Parse a price typed into a form field.
pub fn parse_price(input: &str) -> Result<f64, CatalogError> {
    let trimmed = input.trim();
    let price: f64 = trimmed
        .parse()
        .map_err(|_| CatalogError::InvalidPrice(trimmed.to_string()))?;
    validate_price(price)
}

/// An icon reference is required but opaque; only emptiness is checked.
pub fn validate_icon(icon: Option<&str>) -> Result<String, CatalogError> {
    match icon.map(str::trim) {
        Some(icon) if !icon.is_empty() => Ok(icon.to_string()),
        _ => Err(CatalogError::MissingIcon),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_name() {
        assert_eq!(validate_name("  Samosa ").unwrap(), "Samosa");
        assert_eq!(validate_name(""), Err(CatalogError::MissingName));
        assert_eq!(validate_name("   "), Err(CatalogError::MissingName));

        let long = "x".repeat(MAX_NAME_LEN + 1);
        assert!(matches!(
            validate_name(&long),
            Err(CatalogError::NameTooLong { .. })
        ));
    }

    #[test]
    fn test_validate_price() {
        assert_eq!(validate_price(40.0), Ok(40.0));
        assert!(validate_price(0.0).is_err());
        assert!(validate_price(-10.0).is_err());
        assert!(validate_price(f64::NAN).is_err());
        assert!(validate_price(f64::INFINITY).is_err());
        assert!(validate_price(MAX_PRICE + 1.0).is_err());
    }

    #[test]
    fn test_parse_price() {
        assert_eq!(parse_price("250"), Ok(250.0));
        assert_eq!(parse_price(" 12.5 "), Ok(12.5));
        assert_eq!(
            parse_price("abc"),
            Err(CatalogError::InvalidPrice("abc".into()))
        );
        assert!(parse_price("").is_err());
        assert!(parse_price("-5").is_err());
    }

    #[test]
    fn test_validate_icon() {
        assert_eq!(validate_icon(Some("starters")).unwrap(), "starters");
        assert_eq!(validate_icon(None), Err(CatalogError::MissingIcon));
        assert_eq!(validate_icon(Some("")), Err(CatalogError::MissingIcon));
    }
}
