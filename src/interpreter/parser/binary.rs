use std::iter::Peekable;

use crate::{
    error::SyntaxError,
    interpreter::{
        lexer::Token,
        parser::{
            core::ParseResult,
            unary::parse_unary,
            utils::{expect, parse_number},
        },
    },
    syntax::{ArithNode, ArithToken},
};

/// Parses addition and subtraction expressions.
///
/// Handles left-associative binary operators: `+` and `-`.
///
/// The rule is: `additive := multiplicative (("+" | "-") multiplicative)*`
pub fn parse_additive<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<ArithNode>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut left = parse_multiplicative(tokens, line)?;
    while let Some((token, op_line)) = tokens.peek()
          && let Some(op) = token_to_arith_operator(token)
          && matches!(op, ArithToken::Add | ArithToken::Sub)
    {
        let op_line = *op_line;
        tokens.next();
        let right = parse_multiplicative(tokens, line)?;
        left = ArithNode::Binary { left: Box::new(left),
                                   op,
                                   right: Box::new(right),
                                   line: op_line };
    }
    Ok(left)
}

/// Parses multiplication-level expressions.
///
/// Handles left-associative operators `*` and `/`.
///
/// The rule is: `multiplicative := unary (("*" | "/") unary)*`
pub fn parse_multiplicative<'a, I>(tokens: &mut Peekable<I>,
                                   line: usize)
                                   -> ParseResult<ArithNode>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut left = parse_unary(tokens, line)?;
    while let Some((token, op_line)) = tokens.peek()
          && let Some(op) = token_to_arith_operator(token)
          && matches!(op, ArithToken::Mul | ArithToken::Div)
    {
        let op_line = *op_line;
        tokens.next();
        let right = parse_unary(tokens, line)?;
        left = ArithNode::Binary { left: Box::new(left),
                                   op,
                                   right: Box::new(right),
                                   line: op_line };
    }
    Ok(left)
}

/// Parses exponentiation expressions.
///
/// Exponentiation is right-associative: `a ^ b ^ c` parses as `a ^ (b ^ c)`.
/// It binds tighter than a leading minus on its base, so `-2 ^ 2` is `-(2 ^ 2)`,
/// while the exponent may carry its own sign (`2 ^ -1`).
///
/// The rule is: `exponent := atom ("^" unary)?`
pub fn parse_exponent<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<ArithNode>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let base = parse_atom(tokens, line)?;
    if let Some((Token::Caret, op_line)) = tokens.peek() {
        let op_line = *op_line;
        tokens.next();
        let exponent = parse_unary(tokens, line)?;
        return Ok(ArithNode::Binary { left:  Box::new(base),
                                      op:    ArithToken::Pow,
                                      right: Box::new(exponent),
                                      line:  op_line, });
    }
    Ok(base)
}

/// Parses a literal, a variable or a parenthesized expression.
///
/// The rule is: `atom := NUMBER | IDENT | "(" additive ")"`
fn parse_atom<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<ArithNode>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    match tokens.peek() {
        Some((Token::Number(_), atom_line)) => {
            let atom_line = *atom_line;
            let text = parse_number(tokens, line)?;
            Ok(ArithNode::Number { text,
                                   line: atom_line })
        },
        Some((Token::Identifier(name), atom_line)) => {
            let node = ArithNode::Variable { name: name.clone(),
                                             line: *atom_line, };
            tokens.next();
            Ok(node)
        },
        Some((Token::LParen, atom_line)) => {
            let atom_line = *atom_line;
            tokens.next();
            let inner = parse_additive(tokens, line)?;
            expect(tokens, &Token::RParen, line)?;
            Ok(ArithNode::Parenthesized { inner: Box::new(inner),
                                          line:  atom_line, })
        },
        Some((tok, atom_line)) => {
            Err(SyntaxError::UnexpectedToken { token: format!("Expected expression, found {tok:?}"),
                                               line:  *atom_line, })
        },
        None => Err(SyntaxError::UnexpectedEndOfInput { line }),
    }
}

/// Maps a token to its corresponding arithmetic operator.
///
/// # Example
/// ```
/// use lct::{
///     interpreter::{lexer::Token, parser::binary::token_to_arith_operator},
///     syntax::ArithToken,
/// };
///
/// assert_eq!(token_to_arith_operator(&Token::Caret), Some(ArithToken::Pow));
/// assert_eq!(token_to_arith_operator(&Token::Comma), None);
/// ```
#[must_use]
pub const fn token_to_arith_operator(token: &Token) -> Option<ArithToken> {
    match token {
        Token::Plus => Some(ArithToken::Add),
        Token::Minus => Some(ArithToken::Sub),
        Token::Star => Some(ArithToken::Mul),
        Token::Slash => Some(ArithToken::Div),
        Token::Caret => Some(ArithToken::Pow),
        _ => None,
    }
}
