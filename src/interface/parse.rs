use std::str::FromStr;

use crate::error::{BaseError, Result};

/// Convert user text for `field`, falling back to `default` when it is blank.
///
/// Single pass: malformed text is reported as `InputConversion`, never retried.
pub fn parse_field<T: FromStr>(field: &str, text: &str, default: Option<T>) -> Result<T> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return default.ok_or_else(|| BaseError::InputConversion {
            field: field.to_string(),
            value: String::new(),
        });
    }

    trimmed.parse().map_err(|_| BaseError::InputConversion {
        field: field.to_string(),
        value: trimmed.to_string(),
    })
}

/// Like [`parse_field`] for `f64`, but rejects `NaN` and infinities.
pub fn parse_finite(field: &str, text: &str, default: Option<f64>) -> Result<f64> {
    let value: f64 = parse_field(field, text, default)?;
    if !value.is_finite() {
        return Err(BaseError::InvalidInput(format!("{} must be finite", field)));
    }
    Ok(value)
}

/// Parse a strictly positive number of grams.
pub fn parse_positive_mass(field: &str, text: &str) -> Result<f64> {
    let value = parse_finite(field, text, None)?;
    if value <= 0.0 {
        return Err(BaseError::InvalidInput(format!(
            "{} must be greater than zero",
            field
        )));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_uses_default() {
        let value: f64 = parse_field("fat percentage", "   ", Some(12.0)).unwrap();
        assert_eq!(value, 12.0);
    }

    #[test]
    fn test_parses_trimmed_text() {
        let value: f64 = parse_field("milk fat percentage", " 3.25 ", Some(3.5)).unwrap();
        assert_eq!(value, 3.25);

        let count: u32 = parse_field("egg yolks", "4", Some(0)).unwrap();
        assert_eq!(count, 4);
    }

    #[test]
    fn test_bad_text_is_conversion_error() {
        let result: Result<f64> = parse_field("sugar percentage", "twenty", Some(20.0));
        match result {
            Err(BaseError::InputConversion { field, value }) => {
                assert_eq!(field, "sugar percentage");
                assert_eq!(value, "twenty");
            }
            other => panic!("expected conversion error, got {:?}", other),
        }
    }

    #[test]
    fn test_fractional_yolk_count_rejected() {
        let result: Result<u32> = parse_field("egg yolks", "2.5", Some(0));
        assert!(matches!(result, Err(BaseError::InputConversion { .. })));
    }

    #[test]
    fn test_required_field_without_default() {
        let result: Result<f64> = parse_field("total mass", "", None);
        assert!(matches!(result, Err(BaseError::InputConversion { .. })));
    }

    #[test]
    fn test_finite_rejects_nan_and_infinity() {
        for text in ["NaN", "inf", "-inf", "infinity"] {
            assert!(
                matches!(
                    parse_finite("fat percentage", text, Some(12.0)),
                    Err(BaseError::InvalidInput(_))
                ),
                "accepted {}",
                text
            );
        }
        assert_eq!(parse_finite("fat percentage", "", Some(12.0)).unwrap(), 12.0);
        assert_eq!(parse_finite("fat percentage", "14.5", Some(12.0)).unwrap(), 14.5);
    }

    #[test]
    fn test_positive_mass_rejects_infinity() {
        assert!(matches!(
            parse_positive_mass("total mass", "inf"),
            Err(BaseError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_positive_mass() {
        assert_eq!(parse_positive_mass("total mass", "1000").unwrap(), 1000.0);
        assert!(matches!(
            parse_positive_mass("total mass", "0"),
            Err(BaseError::InvalidInput(_))
        ));
        assert!(matches!(
            parse_positive_mass("total mass", "-3"),
            Err(BaseError::InvalidInput(_))
        ));
    }
}
