use std::iter::Peekable;

use crate::{
    error::SyntaxError,
    interpreter::{
        lexer::Token,
        parser::{
            core::{ParseResult, parse_expression},
            list::{parse_binding, parse_list_clause, parse_predicate},
            utils::{expect, parse_comma_separated, parse_identifier},
        },
    },
    syntax::{BindingClause, Node},
};

/// Parses a single statement.
///
/// A statement may be one of:
/// - `show`.
/// - a list comprehension, `R = [transform | bindings | predicates]`.
/// - one or more comma-separated list definitions.
///
/// A bracketed right-hand side containing a top-level `|` is a comprehension;
/// any other form is parsed as definitions.
///
/// # Parameters
/// - `tokens`: Token iterator containing `(Token, line)` pairs.
/// - `line`: Line the statement starts on, used for end-of-input errors.
pub fn parse_statement<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Node>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    if let Some((Token::Show, show_line)) = tokens.peek() {
        let show_line = *show_line;
        tokens.next();
        return Ok(Node::Show { line: show_line });
    }

    if is_comprehension(tokens) {
        return parse_comprehension(tokens, line);
    }

    parse_definitions(tokens, line)
}

/// Looks ahead for `IDENT = [ ... | ... ]` without consuming input.
fn is_comprehension<'a, I>(tokens: &Peekable<I>) -> bool
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut lookahead = tokens.clone();
    if !matches!(lookahead.next(), Some((Token::Identifier(_), _)))
       || !matches!(lookahead.next(), Some((Token::Equals, _)))
       || !matches!(lookahead.next(), Some((Token::LBracket, _)))
    {
        return false;
    }

    let mut depth = 1usize;
    for (token, _) in lookahead {
        match token {
            Token::LBracket => depth += 1,
            Token::RBracket => {
                depth -= 1;
                if depth == 0 {
                    return false;
                }
            },
            Token::Pipe if depth == 1 => return true,
            _ => {},
        }
    }
    false
}

/// Parses `clause ("," clause)*`.
fn parse_definitions<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Node>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut clauses = vec![parse_list_clause(tokens, line)?];
    while let Some((Token::Comma, _)) = tokens.peek() {
        tokens.next();
        clauses.push(parse_list_clause(tokens, line)?);
    }

    Ok(Node::Definitions { clauses, line })
}

/// Parses a list comprehension.
///
/// Grammar:
/// ```text
/// comprehension := IDENT "=" "[" arith? "|" binding ("," binding)*
///                  ("|" predicate ("," predicate)*)? "]"
/// ```
///
/// The transform may be omitted syntactically; the statement builder rejects
/// such a comprehension.
///
/// # Example
/// ```
/// use lct::{interpreter::parser::core::parse, syntax::Node};
///
/// let Some(Node::Comprehension { result, bindings, predicates, .. }) =
///     parse("R = [n * 10 | n in N | n > 2]", 1).unwrap()
/// else {
///     panic!("expected a comprehension");
/// };
/// assert_eq!(result, "R");
/// assert_eq!(bindings.len(), 1);
/// assert_eq!(predicates.len(), 1);
/// ```
fn parse_comprehension<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Node>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let result = parse_identifier(tokens, line)?;
    expect(tokens, &Token::Equals, line)?;
    expect(tokens, &Token::LBracket, line)?;

    let transform = if let Some((Token::Pipe, _)) = tokens.peek() {
        None
    } else {
        Some(parse_expression(tokens, line)?)
    };
    expect(tokens, &Token::Pipe, line)?;

    let bindings = parse_bindings(tokens, line)?;

    let predicates = match tokens.next() {
        Some((Token::Pipe, _)) => {
            parse_comma_separated(tokens, |t| parse_predicate(t, line), &Token::RBracket, line)?
        },
        Some((Token::RBracket, _)) => Vec::new(),
        Some((tok, tok_line)) => {
            return Err(SyntaxError::UnexpectedToken { token: format!("Expected '|' or ']', found {tok:?}"),
                                                      line:  *tok_line, });
        },
        None => return Err(SyntaxError::UnexpectedEndOfInput { line }),
    };

    Ok(Node::Comprehension { result,
                             transform,
                             bindings,
                             predicates,
                             line })
}

/// Parses `binding ("," binding)*`, stopping before `|` or `]`.
///
/// No bindings at all is accepted; such a comprehension produces an empty list.
fn parse_bindings<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Vec<BindingClause>>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut bindings = Vec::new();
    if matches!(tokens.peek(), Some((Token::Pipe | Token::RBracket, _))) {
        return Ok(bindings);
    }

    loop {
        bindings.push(parse_binding(tokens, line)?);
        match tokens.peek() {
            Some((Token::Comma, _)) => {
                tokens.next();
            },
            _ => break,
        }
    }
    Ok(bindings)
}
