/// Syntax errors.
///
/// Raised by the lexer and parser when a line of input does not conform to
/// the grammar. No statement is built, so the session is unaffected.
pub mod syntax_error;
/// Semantic errors.
///
/// Raised for statements that parse but cannot be evaluated: an undefined
/// comparison, a comprehension without a transform, a numeric literal that does
/// not fit the decimal type, or a source list that does not exist.
pub mod semantic_error;
/// Evaluation errors.
///
/// Runtime numeric failures from the arithmetic evaluator, such as division by
/// zero or overflow of the decimal type.
pub mod evaluation_error;

pub use evaluation_error::EvaluationError;
pub use semantic_error::SemanticError;
pub use syntax_error::SyntaxError;

/// Any failure that can abort a statement.
///
/// Every variant leaves the list store exactly as it was before the statement
/// started.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The input did not match the grammar.
    #[error(transparent)]
    Syntax(#[from] SyntaxError),
    /// The statement is well formed but cannot be evaluated.
    #[error(transparent)]
    Semantic(#[from] SemanticError),
    /// A numeric failure occurred while evaluating an expression.
    #[error(transparent)]
    Evaluation(#[from] EvaluationError),
}

impl Error {
    /// Gets the source line the error was reported on.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::Syntax(e) => e.line(),
            Self::Semantic(e) => e.line(),
            Self::Evaluation(e) => e.line(),
        }
    }
}

/// Result of executing a statement.
pub type LctResult<T> = Result<T, Error>;
