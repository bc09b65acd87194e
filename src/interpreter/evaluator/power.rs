use rust_decimal::Decimal;

use crate::{
    ast::Expr,
    error::EvaluationError,
    interpreter::evaluator::core::EvalResult,
    util::num::{decimal_to_f64, f64_to_decimal},
};

/// Evaluates an exponentiation operation.
///
/// Both operands are converted to `f64`, raised with `powf`, and the result is
/// converted back. Results are therefore accurate to about fifteen significant
/// digits rather than the full decimal precision.
///
/// # Errors
/// - `EvaluationError::DivisionByZero` if zero is raised to a negative power.
/// - `EvaluationError::UndefinedPower` if the result is not a real number,
///   e.g. `(-8) ^ 0.5`.
/// - `EvaluationError::Overflow` if the result is infinite or outside the
///   decimal range.
///
/// # Example
/// ```
/// use lct::{ast::Expr, interpreter::evaluator::power::eval_pow};
/// use rust_decimal::Decimal;
///
/// let expr = Expr::Literal { value: Decimal::ZERO,
///                            line:  1, };
/// let result = eval_pow(Decimal::from(2), Decimal::from(10), &expr, 1).unwrap();
/// assert_eq!(result, Decimal::from(1024));
///
/// assert!(eval_pow(Decimal::ZERO, Decimal::NEGATIVE_ONE, &expr, 1).is_err());
/// ```
pub fn eval_pow(base: Decimal, exponent: Decimal, expr: &Expr, line: usize) -> EvalResult<Decimal> {
    if base.is_zero() && exponent.is_sign_negative() && !exponent.is_zero() {
        return Err(EvaluationError::DivisionByZero { expression: expr.to_string(),
                                                     line });
    }

    let result = decimal_to_f64(base).powf(decimal_to_f64(exponent));

    if result.is_nan() {
        return Err(EvaluationError::UndefinedPower { expression: expr.to_string(),
                                                     line });
    }

    f64_to_decimal(result).ok_or_else(|| EvaluationError::Overflow { expression: expr.to_string(),
                                                                     line })
}
