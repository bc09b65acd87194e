/// Shared evaluation types and variable resolution.
pub mod core;

/// Arithmetic expression evaluation.
///
/// Evaluates an expression tree under a variable binding using checked
/// decimal arithmetic.
pub mod arithmetic;

/// Exponentiation.
///
/// Computed through an `f64` intermediate, the one place precision is traded
/// for range.
pub mod power;

/// Predicate evaluation.
///
/// Applies an ordered set of comparisons to a variable binding and combines
/// them with logical AND.
pub mod logic;

/// List comprehension iteration.
///
/// Resolves source bindings, walks every combination of their values, and
/// collects the transformed values that pass the predicates.
pub mod comprehension;
