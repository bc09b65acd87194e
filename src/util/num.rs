use rust_decimal::{
    Decimal,
    prelude::{FromPrimitive, ToPrimitive},
};

use crate::error::SemanticError;

/// Parses a numeric literal into a `Decimal`.
///
/// Plain (`42`, `-3.25`) and scientific (`1.5e3`) notation are accepted.
/// Literals that do not fit the decimal type exactly are reported instead of
/// being rounded, and a literal with a nonzero digit never becomes zero.
///
/// # Errors
/// Returns `SemanticError::MalformedNumber` if `text` is not a representable
/// decimal.
///
/// # Example
/// ```
/// use lct::{error::SemanticError, util::num::parse_decimal};
/// use rust_decimal::Decimal;
///
/// assert_eq!(parse_decimal("1.5e3", 1).unwrap(), Decimal::from(1500));
/// assert_eq!(parse_decimal("0.000", 1).unwrap(), Decimal::ZERO);
///
/// let err = parse_decimal("1e400", 7).unwrap_err();
/// assert!(matches!(err, SemanticError::MalformedNumber { line: 7, .. }));
///
/// // Too small for the decimal type in either notation.
/// assert!(parse_decimal("0.00000000000000000000000000000001", 1).is_err());
/// assert!(parse_decimal("1e-32", 1).is_err());
/// ```
pub fn parse_decimal(text: &str, line: usize) -> Result<Decimal, SemanticError> {
    let malformed = || SemanticError::MalformedNumber { text: text.to_string(),
                                                        line };

    let (parsed, mantissa) = match text.split_once(['e', 'E']) {
        Some((mantissa, _)) => (Decimal::from_scientific(text), mantissa),
        None => (Decimal::from_str_exact(text), text),
    };
    let value = parsed.map_err(|_| malformed())?;

    // Rounding must not turn a nonzero literal into zero.
    if value.is_zero() && mantissa.bytes().any(|b| matches!(b, b'1'..=b'9')) {
        return Err(malformed());
    }

    Ok(value)
}

/// Converts a `Decimal` to the nearest `f64`.
#[must_use]
pub fn decimal_to_f64(value: Decimal) -> f64 {
    // Every decimal is within f64 range, only precision is lost.
    value.to_f64().unwrap_or(f64::NAN)
}

/// Converts an `f64` back to a `Decimal`.
///
/// Returns `None` for non-finite values and for magnitudes outside the decimal
/// range.
#[must_use]
pub fn f64_to_decimal(value: f64) -> Option<Decimal> {
    if !value.is_finite() {
        return None;
    }
    Decimal::from_f64(value)
}

/// Returns the canonical minimal form of a number.
///
/// Trailing fractional zeros are dropped and negative zero becomes zero, so
/// `2.50` renders as `2.5` and `-0.0` as `0`.
///
/// # Example
/// ```
/// use lct::util::num::canonical;
/// use rust_decimal::Decimal;
///
/// assert_eq!(canonical(Decimal::new(250, 2)).to_string(), "2.5");
/// assert_eq!(canonical(Decimal::new(-0, 1)).to_string(), "0");
/// ```
#[must_use]
pub fn canonical(value: Decimal) -> Decimal {
    if value.is_zero() {
        return Decimal::ZERO;
    }
    value.normalize()
}
