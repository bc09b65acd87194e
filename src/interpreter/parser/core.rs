use std::iter::Peekable;

use logos::Logos;

use crate::{
    error::SyntaxError,
    interpreter::{
        lexer::{LexerExtras, Token},
        parser::{binary::parse_additive, statement::parse_statement},
    },
    syntax::{ArithNode, Node},
};

pub type ParseResult<T> = Result<T, SyntaxError>;

/// Splits `source` into tokens paired with their line numbers.
///
/// Counting starts at `line`, so a statement read from the middle of a script
/// reports errors against its real position.
///
/// # Errors
/// Returns `SyntaxError::UnrecognizedInput` for any character sequence the
/// lexer cannot classify.
pub fn tokenize(source: &str, line: usize) -> ParseResult<Vec<(Token, usize)>> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer_with_extras(source, LexerExtras { line });

    while let Some(token) = lexer.next() {
        if let Ok(tok) = token {
            tokens.push((tok, lexer.extras.line));
        } else {
            return Err(SyntaxError::UnrecognizedInput { text: lexer.slice().to_string(),
                                                        line: lexer.extras.line, });
        }
    }

    Ok(tokens)
}

/// Parses one statement.
///
/// Returns `Ok(None)` when the input holds no tokens at all (a blank line or a
/// comment). Any token left over after a complete statement is an error.
///
/// # Example
/// ```
/// use lct::{interpreter::parser::core::parse, syntax::Node};
///
/// let node = parse("show", 1).unwrap();
/// assert_eq!(node, Some(Node::Show { line: 1 }));
///
/// assert_eq!(parse("// nothing here", 1).unwrap(), None);
/// assert!(parse("show show", 1).is_err());
/// ```
pub fn parse(source: &str, line: usize) -> ParseResult<Option<Node>> {
    let tokens = tokenize(source, line)?;
    if tokens.is_empty() {
        return Ok(None);
    }

    let mut iter = tokens.iter().peekable();
    let node = parse_statement(&mut iter, line)?;

    if let Some((token, line)) = iter.next() {
        return Err(SyntaxError::UnexpectedTrailingTokens { token: format!("{token:?}"),
                                                           line:  *line, });
    }

    Ok(Some(node))
}

/// Parses a full arithmetic expression.
///
/// Grammar: `expression := additive`
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<ArithNode>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    parse_additive(tokens, line)
}
