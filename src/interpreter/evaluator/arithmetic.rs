use rust_decimal::Decimal;

use crate::{
    ast::{BinaryOperator, Expr},
    error::EvaluationError,
    interpreter::evaluator::{
        core::{Bindings, EvalResult, resolve},
        power::eval_pow,
    },
};

/// Evaluates an arithmetic expression under `bindings`.
///
/// The left operand of a binary operation is evaluated before the right one.
/// Groups forward to their inner expression and unbound variables are zero.
///
/// # Errors
/// - `EvaluationError::DivisionByZero` when a divisor evaluates to zero.
/// - `EvaluationError::Overflow` when a result leaves the decimal range.
/// - `EvaluationError::UndefinedPower` for powers without a real result.
///
/// # Example
/// ```
/// use lct::{
///     ast::{BinaryOperator, Expr},
///     interpreter::evaluator::{arithmetic::evaluate, core::Bindings},
/// };
/// use rust_decimal::Decimal;
///
/// // x + 1, with x unbound
/// let expr = Expr::BinaryOp { left:  Box::new(Expr::Variable { name: "x".into(),
///                                                              line: 1, }),
///                             op:    BinaryOperator::Add,
///                             right: Box::new(Expr::Literal { value: Decimal::ONE,
///                                                             line:  1, }),
///                             line:  1, };
///
/// assert_eq!(evaluate(&expr, &Bindings::new()).unwrap(), Decimal::ONE);
/// ```
pub fn evaluate(expr: &Expr, bindings: &Bindings) -> EvalResult<Decimal> {
    match expr {
        Expr::Literal { value, .. } => Ok(*value),
        Expr::Variable { name, .. } => Ok(resolve(name, bindings)),
        Expr::Negate { expr, .. } => Ok(-evaluate(expr, bindings)?),
        Expr::Group { expr, .. } => evaluate(expr, bindings),
        Expr::BinaryOp { left, op, right, line } => {
            let left = evaluate(left, bindings)?;
            let right = evaluate(right, bindings)?;
            eval_binary(*op, left, right, expr, *line)
        },
    }
}

/// Applies `op` to two evaluated operands.
///
/// `expr` is the operation being evaluated and only serves error reporting.
pub fn eval_binary(op: BinaryOperator,
                   left: Decimal,
                   right: Decimal,
                   expr: &Expr,
                   line: usize)
                   -> EvalResult<Decimal> {
    let overflow = || EvaluationError::Overflow { expression: expr.to_string(),
                                                  line };

    match op {
        BinaryOperator::Add => left.checked_add(right).ok_or_else(overflow),
        BinaryOperator::Sub => left.checked_sub(right).ok_or_else(overflow),
        BinaryOperator::Mul => left.checked_mul(right).ok_or_else(overflow),
        BinaryOperator::Div => {
            if right.is_zero() {
                return Err(EvaluationError::DivisionByZero { expression: expr.to_string(),
                                                             line });
            }
            left.checked_div(right).ok_or_else(overflow)
        },
        BinaryOperator::Pow => eval_pow(left, right, expr, line),
    }
}
