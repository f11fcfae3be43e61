//! Input validation shared by every reducer.
//!
//! # Invariants
//! - Validation runs before an entity is constructed; a rejected input never
//!   produces a partial entity.

use once_cell::sync::Lazy;
use regex::Regex;
use std::error::Error;
use std::fmt::{Display, Formatter};

static CURRENCY_CODE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Z]{3}$").expect("valid currency code regex"));
static TIME_LABEL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([01]\d|2[0-3]):[0-5]\d$").expect("valid time label regex"));

/// Rejected user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Text field is empty after trim.
    BlankField(&'static str),
    /// Amount text is not a finite, non-negative number.
    InvalidAmount(String),
    /// Currency code is not three uppercase ASCII letters.
    InvalidCurrency(String),
    /// Time-of-day label is not `HH:MM`.
    InvalidTimeLabel(String),
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BlankField(field) => write!(f, "{field} must not be blank"),
            Self::InvalidAmount(raw) => write!(f, "invalid amount: `{raw}`"),
            Self::InvalidCurrency(raw) => write!(f, "invalid currency code: `{raw}`"),
            Self::InvalidTimeLabel(raw) => write!(f, "invalid time label: `{raw}`"),
        }
    }
}

impl Error for ValidationError {}

/// Trims `value` and rejects it when nothing is left.
pub fn require_text(field: &'static str, value: &str) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::BlankField(field));
    }
    Ok(trimmed.to_string())
}

/// Parses free-form amount text into currency units.
pub fn parse_amount(raw: &str) -> Result<f64, ValidationError> {
    let trimmed = raw.trim();
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() && value >= 0.0 => Ok(value),
        _ => Err(ValidationError::InvalidAmount(trimmed.to_string())),
    }
}

/// Normalizes a currency code to uppercase and checks its shape.
pub fn normalize_currency(raw: &str) -> Result<String, ValidationError> {
    let normalized = raw.trim().to_ascii_uppercase();
    if !CURRENCY_CODE_RE.is_match(&normalized) {
        return Err(ValidationError::InvalidCurrency(raw.trim().to_string()));
    }
    Ok(normalized)
}

/// Validates an optional `HH:MM` label; blank input maps to `None`.
pub fn normalize_time_label(raw: Option<&str>) -> Result<Option<String>, ValidationError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(None),
        Some(label) if TIME_LABEL_RE.is_match(label) => Ok(Some(label.to_string())),
        Some(label) => Err(ValidationError::InvalidTimeLabel(label.to_string())),
    }
}

/// Trims optional free text; blank input maps to `None`.
pub fn optional_text(raw: Option<&str>) -> Option<String> {
    raw.map(str::trim)
        .filter(|value| !value.is_empty())
        .map(ToString::to_string)
}

#[cfg(test)]
mod tests {
    use super::{
        normalize_currency, normalize_time_label, parse_amount, require_text, ValidationError,
    };

    #[test]
    fn require_text_trims_and_rejects_blank() {
        assert_eq!(require_text("text", "  walk  ").unwrap(), "walk");
        assert_eq!(
            require_text("text", " \n ").unwrap_err(),
            ValidationError::BlankField("text")
        );
    }

    #[test]
    fn parse_amount_rejects_non_numeric_and_negative() {
        assert_eq!(parse_amount(" 12.50 ").unwrap(), 12.5);
        assert!(parse_amount("abc").is_err());
        assert!(parse_amount("").is_err());
        assert!(parse_amount("-3").is_err());
        assert!(parse_amount("inf").is_err());
        assert!(parse_amount("NaN").is_err());
    }

    #[test]
    fn currency_codes_are_uppercased() {
        assert_eq!(normalize_currency("eur").unwrap(), "EUR");
        assert!(normalize_currency("EURO").is_err());
    }

    #[test]
    fn time_labels_accept_hh_mm() {
        assert_eq!(
            normalize_time_label(Some("09:45")).unwrap().as_deref(),
            Some("09:45")
        );
        assert_eq!(normalize_time_label(Some("  ")).unwrap(), None);
        assert!(normalize_time_label(Some("25:00")).is_err());
    }
}
