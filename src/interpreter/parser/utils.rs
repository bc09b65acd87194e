use std::iter::Peekable;

use crate::{
    error::SyntaxError,
    interpreter::{lexer::Token, parser::core::ParseResult},
};

/// Parses a comma-separated list of items until a closing token.
///
/// Shared by manual list literals and predicate lists. An immediately
/// encountered closing token produces an empty list. The closing token is
/// consumed.
///
/// Grammar (simplified): `list := item ("," item)*`
pub(in crate::interpreter::parser) fn parse_comma_separated<'a, I, T>(
    tokens: &mut Peekable<I>,
    parse_item: impl Fn(&mut Peekable<I>) -> ParseResult<T>,
    closing: &Token,
    line: usize)
    -> ParseResult<Vec<T>>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut items = Vec::new();
    if let Some((tok, _)) = tokens.peek()
       && tok == closing
    {
        tokens.next();

        return Ok(items);
    }
    loop {
        items.push(parse_item(tokens)?);
        match tokens.next() {
            Some((Token::Comma, _)) => {},
            Some((tok, _)) if tok == closing => break,
            Some((tok, line)) => {
                return Err(SyntaxError::UnexpectedToken { token: format!("Expected ',' or {closing:?}, found {tok:?}"),
                                                          line:  *line, });
            },
            None => return Err(SyntaxError::UnexpectedEndOfInput { line }),
        }
    }
    Ok(items)
}

/// Parses a plain identifier and returns its name.
pub(in crate::interpreter::parser) fn parse_identifier<'a, I>(tokens: &mut Peekable<I>,
                                                              line: usize)
                                                              -> ParseResult<String>
    where I: Iterator<Item = &'a (Token, usize)>
{
    match tokens.next() {
        Some((Token::Identifier(s), _)) => Ok(s.clone()),
        Some((tok, line)) => {
            Err(SyntaxError::UnexpectedToken { token: format!("Expected identifier, found {tok:?}"),
                                               line:  *line, })
        },
        None => Err(SyntaxError::UnexpectedEndOfInput { line }),
    }
}

/// Consumes the next token, which must equal `expected`.
pub(in crate::interpreter::parser) fn expect<'a, I>(tokens: &mut Peekable<I>,
                                                    expected: &Token,
                                                    line: usize)
                                                    -> ParseResult<()>
    where I: Iterator<Item = &'a (Token, usize)>
{
    match tokens.next() {
        Some((tok, _)) if tok == expected => Ok(()),
        Some((tok, line)) => {
            Err(SyntaxError::UnexpectedToken { token: format!("Expected {expected:?}, found {tok:?}"),
                                               line:  *line, })
        },
        None => Err(SyntaxError::UnexpectedEndOfInput { line }),
    }
}

/// Parses a numeric literal with an optional leading `-` and returns its text.
///
/// Grammar: `number := "-"? NUMBER`
pub(in crate::interpreter::parser) fn parse_number<'a, I>(tokens: &mut Peekable<I>,
                                                          line: usize)
                                                          -> ParseResult<String>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let negative = if let Some((Token::Minus, _)) = tokens.peek() {
        tokens.next();
        true
    } else {
        false
    };

    match tokens.next() {
        Some((Token::Number(text), _)) if negative => Ok(format!("-{text}")),
        Some((Token::Number(text), _)) => Ok(text.clone()),
        Some((tok, line)) => {
            Err(SyntaxError::UnexpectedToken { token: format!("Expected number, found {tok:?}"),
                                               line:  *line, })
        },
        None => Err(SyntaxError::UnexpectedEndOfInput { line }),
    }
}

/// Returns `true` if the next tokens start a numeric literal.
pub(in crate::interpreter::parser) fn starts_number<'a, I>(tokens: &mut Peekable<I>) -> bool
    where I: Iterator<Item = &'a (Token, usize)>
{
    matches!(tokens.peek(), Some((Token::Number(_) | Token::Minus, _)))
}
