use std::iter::Peekable;

use crate::{
    interpreter::{
        lexer::Token,
        parser::{binary::parse_exponent, core::ParseResult},
    },
    syntax::ArithNode,
};

/// Parses a negation or an exponent expression.
///
/// Negation is right-associative, so `--x` is `-(-x)`, and binds looser than
/// `^`: `-2 ^ 2` parses as `-(2 ^ 2)`.
///
/// Grammar:
/// ```text
///     unary := "-" unary
///            | exponent
/// ```
///
/// # Example
/// ```
/// use lct::{interpreter::parser::core::parse, syntax::{ArithNode, Node}};
///
/// let Some(Node::Comprehension { transform: Some(transform), .. }) =
///     parse("R = [-n | n in [1]]", 1).unwrap()
/// else {
///     panic!("expected a comprehension");
/// };
/// assert!(matches!(transform, ArithNode::Negate { .. }));
/// ```
pub fn parse_unary<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<ArithNode>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    if let Some((Token::Minus, minus_line)) = tokens.peek() {
        let minus_line = *minus_line;
        tokens.next();
        let operand = parse_unary(tokens, line)?;
        return Ok(ArithNode::Negate { operand: Box::new(operand),
                                      line:    minus_line, });
    }

    parse_exponent(tokens, line)
}
