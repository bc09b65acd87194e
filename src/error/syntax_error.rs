/// Represents all errors that can occur during lexing or parsing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SyntaxError {
    /// Found an unexpected token while parsing.
    #[error("Error on line {line}: Unexpected token: {token}.")]
    UnexpectedToken {
        /// Description of the token encountered.
        token: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// Reached the end of the statement unexpectedly.
    #[error("Error on line {line}: Unexpected end of input.")]
    UnexpectedEndOfInput {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Found extra tokens after the statement was complete.
    #[error("Error on line {line}: Extra tokens after statement: {token}.")]
    UnexpectedTrailingTokens {
        /// The first extra token.
        token: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// The lexer could not classify a piece of input.
    #[error("Error on line {line}: Unrecognized input '{text}'.")]
    UnrecognizedInput {
        /// The offending slice of source text.
        text: String,
        /// The source line where the error occurred.
        line: usize,
    },
}

impl SyntaxError {
    /// Gets the line number from `self`.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::UnexpectedToken { line, .. }
            | Self::UnexpectedEndOfInput { line }
            | Self::UnexpectedTrailingTokens { line, .. }
            | Self::UnrecognizedInput { line, .. } => *line,
        }
    }
}
