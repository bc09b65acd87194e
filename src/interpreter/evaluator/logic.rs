use crate::{
    ast::{ComparisonKind, LogicOperation},
    error::SemanticError,
    interpreter::evaluator::core::{Bindings, resolve},
};

/// Evaluates an ordered set of predicates under `bindings`.
///
/// The result is the logical AND of all predicates; evaluation stops at the
/// first one that fails. An empty set is `true`.
///
/// # Errors
/// Returns `SemanticError::UndefinedComparison` if any predicate has no
/// comparison kind, whether or not an earlier predicate already failed.
///
/// # Example
/// ```
/// use lct::{
///     ast::{ComparisonKind, LogicOperation},
///     interpreter::evaluator::{core::Bindings, logic::evaluate},
/// };
/// use rust_decimal::Decimal;
///
/// let above_two = LogicOperation { operand:   "n".into(),
///                                  kind:      ComparisonKind::GreaterThan,
///                                  threshold: Decimal::from(2),
///                                  line:      1, };
///
/// let mut bindings = Bindings::new();
/// bindings.insert("n".into(), Decimal::from(3));
/// assert!(evaluate(&[above_two.clone()], &bindings).unwrap());
///
/// // Unbound operands are zero.
/// assert!(!evaluate(&[above_two], &Bindings::new()).unwrap());
/// ```
pub fn evaluate(predicates: &[LogicOperation], bindings: &Bindings) -> Result<bool, SemanticError> {
    ensure_defined(predicates)?;

    for predicate in predicates {
        if !eval_predicate(predicate, bindings)? {
            return Ok(false);
        }
    }
    Ok(true)
}

/// Evaluates a single predicate.
///
/// # Errors
/// Returns `SemanticError::UndefinedComparison` for `ComparisonKind::Undefined`.
pub fn eval_predicate(predicate: &LogicOperation, bindings: &Bindings) -> Result<bool, SemanticError> {
    let value = resolve(&predicate.operand, bindings);
    let threshold = predicate.threshold;

    Ok(match predicate.kind {
        ComparisonKind::Equal => value == threshold,
        ComparisonKind::GreaterThan => value > threshold,
        ComparisonKind::GreaterOrEqual => value >= threshold,
        ComparisonKind::LessThan => value < threshold,
        ComparisonKind::LessOrEqual => value <= threshold,
        ComparisonKind::Undefined => {
            return Err(SemanticError::UndefinedComparison { operand: predicate.operand.clone(),
                                                            line:    predicate.line, });
        },
    })
}

/// Checks that every predicate has a comparison kind.
///
/// # Errors
/// Returns `SemanticError::UndefinedComparison` for the first predicate whose
/// kind is `ComparisonKind::Undefined`.
pub fn ensure_defined(predicates: &[LogicOperation]) -> Result<(), SemanticError> {
    match predicates.iter().find(|p| p.kind == ComparisonKind::Undefined) {
        Some(predicate) => {
            Err(SemanticError::UndefinedComparison { operand: predicate.operand.clone(),
                                                     line:    predicate.line, })
        },
        None => Ok(()),
    }
}
