use std::iter::Peekable;

use crate::{
    error::SyntaxError,
    interpreter::{
        lexer::Token,
        parser::{
            core::ParseResult,
            utils::{expect, parse_comma_separated, parse_identifier, parse_number, starts_number},
        },
    },
    syntax::{
        BindingClause, BindingSource, ElementsNode, ListClause, LiteralNode, PredicateNode,
        RelationToken,
    },
};

/// Parses a list clause of the form `NAME = elements`.
pub fn parse_list_clause<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<ListClause>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let name = parse_identifier(tokens, line)?;
    expect(tokens, &Token::Equals, line)?;
    let elements = parse_elements(tokens, line)?;

    Ok(ListClause { name, elements })
}

/// Parses the elements of a list: a bracketed literal list or a range.
///
/// Grammar:
/// ```text
/// elements := "[" (literal ("," literal)*)? "]"
///           | number ".." number
///           | number ".."
///           | ".." number
/// ```
///
/// # Example
/// ```
/// use lct::{
///     interpreter::parser::core::parse,
///     syntax::{ElementsNode, Node},
/// };
///
/// let Some(Node::Definitions { clauses, .. }) = parse("A = 3..", 1).unwrap() else {
///     panic!("expected a definition");
/// };
/// assert_eq!(clauses[0].elements, ElementsNode::LeftLimited { from: "3".into() });
/// ```
pub fn parse_elements<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<ElementsNode>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    match tokens.peek() {
        Some((Token::LBracket, _)) => {
            tokens.next();
            let literals =
                parse_comma_separated(tokens, |t| parse_literal(t, line), &Token::RBracket, line)?;
            Ok(ElementsNode::Manual(literals))
        },
        Some((Token::DotDot, _)) => {
            tokens.next();
            let to = parse_number(tokens, line)?;
            Ok(ElementsNode::RightLimited { to })
        },
        Some(_) => {
            let from = parse_number(tokens, line)?;
            expect(tokens, &Token::DotDot, line)?;
            if starts_number(tokens) {
                let to = parse_number(tokens, line)?;
                Ok(ElementsNode::Bounded { from, to })
            } else {
                Ok(ElementsNode::LeftLimited { from })
            }
        },
        None => Err(SyntaxError::UnexpectedEndOfInput { line }),
    }
}

/// Parses one element of a manual list.
///
/// Numbers stay numbers; bare words and quoted strings become text.
fn parse_literal<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<LiteralNode>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    if starts_number(tokens) {
        return parse_number(tokens, line).map(LiteralNode::Number);
    }

    match tokens.next() {
        Some((Token::Identifier(text) | Token::Str(text), _)) => Ok(LiteralNode::Text(text.clone())),
        Some((tok, line)) => {
            Err(SyntaxError::UnexpectedToken { token: format!("Expected list element, found {tok:?}"),
                                               line:  *line, })
        },
        None => Err(SyntaxError::UnexpectedEndOfInput { line }),
    }
}

/// Parses a source binding of the form `var in SOURCE`.
///
/// The source is either the name of a stored list or inline elements.
pub fn parse_binding<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<BindingClause>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let variable = parse_identifier(tokens, line)?;
    expect(tokens, &Token::In, line)?;

    let source = if let Some((Token::Identifier(_), _)) = tokens.peek() {
        BindingSource::List(parse_identifier(tokens, line)?)
    } else {
        BindingSource::Elements(parse_elements(tokens, line)?)
    };

    Ok(BindingClause { variable, source })
}

/// Parses a predicate of the form `operand relop threshold`.
///
/// A missing relational token is not a syntax error: the node is produced
/// with `relation: None` and rejected when the statement is evaluated.
pub fn parse_predicate<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<PredicateNode>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let operand = parse_identifier(tokens, line)?;

    let relation = match tokens.peek() {
        Some((Token::EqualEqual | Token::Equals, _)) => Some(RelationToken::Eq),
        Some((Token::Greater, _)) => Some(RelationToken::Gt),
        Some((Token::GreaterEqual, _)) => Some(RelationToken::Gte),
        Some((Token::Less, _)) => Some(RelationToken::Lt),
        Some((Token::LessEqual, _)) => Some(RelationToken::Lte),
        _ => None,
    };
    if relation.is_some() {
        tokens.next();
    }

    let threshold = parse_number(tokens, line)?;

    Ok(PredicateNode { operand,
                       relation,
                       threshold })
}
