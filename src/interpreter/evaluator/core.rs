use std::collections::HashMap;

use rust_decimal::Decimal;

use crate::error::EvaluationError;

/// Result type used by the arithmetic evaluator.
pub type EvalResult<T> = Result<T, EvaluationError>;

/// Variable bindings for one evaluation: iteration variable name to value.
pub type Bindings = HashMap<String, Decimal>;

/// Looks up `name` in `bindings`.
///
/// Unbound variables evaluate to zero. This applies to arithmetic and
/// predicates alike.
///
/// # Example
/// ```
/// use lct::interpreter::evaluator::core::{Bindings, resolve};
/// use rust_decimal::Decimal;
///
/// let mut bindings = Bindings::new();
/// bindings.insert("n".to_string(), Decimal::from(4));
///
/// assert_eq!(resolve("n", &bindings), Decimal::from(4));
/// assert_eq!(resolve("m", &bindings), Decimal::ZERO);
/// ```
#[must_use]
pub fn resolve(name: &str, bindings: &Bindings) -> Decimal {
    bindings.get(name).copied().unwrap_or(Decimal::ZERO)
}
