/// Represents numeric failures raised while evaluating an expression.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EvaluationError {
    /// Attempted division by zero.
    #[error("Error on line {line}: Division by zero in '{expression}'.")]
    DivisionByZero {
        /// The division sub-expression.
        expression: String,
        /// The source line where the error occurred.
        line:       usize,
    },
    /// The result does not fit the decimal type.
    #[error("Error on line {line}: Numeric overflow while computing '{expression}'.")]
    Overflow {
        /// The sub-expression that overflowed.
        expression: String,
        /// The source line where the error occurred.
        line:       usize,
    },
    /// Exponentiation produced a value with no decimal representation, such as
    /// a fractional power of a negative number.
    #[error("Error on line {line}: '{expression}' has no real result.")]
    UndefinedPower {
        /// The power sub-expression.
        expression: String,
        /// The source line where the error occurred.
        line:       usize,
    },
}

impl EvaluationError {
    /// Gets the line number from `self`.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::DivisionByZero { line, .. }
            | Self::Overflow { line, .. }
            | Self::UndefinedPower { line, .. } => *line,
        }
    }
}
