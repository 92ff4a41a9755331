//! Numeric input parsing and money formatting.

use crate::errors::{AppError, AppResult};

/// Parse a decimal quantity typed by the user.
///
/// Accepts both `12.5` and `12,5`, since Brazilian keyboards produce the
/// comma. Anything that does not parse to a finite number is a typed
/// error, so a malformed value can never flow into a derived total.
pub fn parse_decimal(field: &'static str, raw: &str) -> AppResult<f64> {
    let s = raw.trim();
    if s.is_empty() {
        return Err(AppError::EmptyField(field));
    }

    s.replace(',', ".")
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| AppError::InvalidNumber(format!("{field}: '{raw}'")))
}

/// Require a non-empty free-text field, trimmed.
pub fn require_text(field: &'static str, raw: &str) -> AppResult<String> {
    let s = raw.trim();
    if s.is_empty() {
        Err(AppError::EmptyField(field))
    } else {
        Ok(s.to_string())
    }
}

/// Format a monetary amount with two decimals, e.g. `R$ 102.50`.
pub fn format_money(symbol: &str, value: f64) -> String {
    format!("{} {:.2}", symbol, value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_dot_and_comma_decimals() {
        assert_eq!(parse_decimal("hours", "2.5").expect("dot"), 2.5);
        assert_eq!(parse_decimal("hours", "2,5").expect("comma"), 2.5);
        assert_eq!(parse_decimal("hours", " 3 ").expect("trim"), 3.0);
    }

    #[test]
    fn rejects_empty_and_garbage() {
        assert!(matches!(
            parse_decimal("hours", "   "),
            Err(AppError::EmptyField("hours"))
        ));
        assert!(matches!(
            parse_decimal("rate", "abc"),
            Err(AppError::InvalidNumber(_))
        ));
        // "NaN" parses as f64 but must not reach a derived total.
        assert!(matches!(
            parse_decimal("rate", "NaN"),
            Err(AppError::InvalidNumber(_))
        ));
    }

    #[test]
    fn money_is_rendered_with_two_decimals() {
        assert_eq!(format_money("R$", 102.5), "R$ 102.50");
        assert_eq!(format_money("R$", 30.0), "R$ 30.00");
    }
}
