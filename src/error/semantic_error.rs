use rust_decimal::Decimal;

/// Represents statements that are well formed but cannot be evaluated.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SemanticError {
    /// A predicate carried no relational operator.
    #[error("Error on line {line}: Predicate on '{operand}' has no comparison operator.")]
    UndefinedComparison {
        /// The variable the predicate tests.
        operand: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// A comprehension has no transform expression.
    #[error("Error on line {line}: Comprehension '{result}' is missing its transform expression.")]
    MissingTransform {
        /// Name of the list the comprehension would have produced.
        result: String,
        /// The source line where the error occurred.
        line:   usize,
    },
    /// A numeric literal does not fit the decimal type.
    #[error("Error on line {line}: Malformed numeric literal '{text}'.")]
    MalformedNumber {
        /// The literal as written.
        text: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// A source binding refers to a list that has not been defined.
    #[error("Error on line {line}: Unknown list '{name}'.")]
    UnknownList {
        /// The name that was looked up.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// A text element cannot be bound to a numeric iteration variable.
    #[error("Error on line {line}: Element '{element}' of list '{list}' is not a number.")]
    NonNumericElement {
        /// The source list holding the element.
        list:    String,
        /// The rendered element.
        element: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// Two source bindings of one comprehension use the same variable.
    #[error("Error on line {line}: Variable '{name}' is bound more than once.")]
    DuplicateVariable {
        /// The repeated variable name.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// A range endpoint lies outside the configured range limits.
    #[error("Error on line {line}: Range bound {bound} lies outside the limits {lower}..{upper}.")]
    RangeOutOfBounds {
        /// The endpoint as written.
        bound: String,
        /// Lowest permitted endpoint.
        lower: Decimal,
        /// Highest permitted endpoint.
        upper: Decimal,
        /// The source line where the error occurred.
        line:  usize,
    },
}

impl SemanticError {
    /// Gets the line number from `self`.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::UndefinedComparison { line, .. }
            | Self::MissingTransform { line, .. }
            | Self::MalformedNumber { line, .. }
            | Self::UnknownList { line, .. }
            | Self::NonNumericElement { line, .. }
            | Self::DuplicateVariable { line, .. }
            | Self::RangeOutOfBounds { line, .. } => *line,
        }
    }
}
