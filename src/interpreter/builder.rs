use rust_decimal::Decimal;

use crate::{
    ast::{BinaryOperator, ComparisonKind, Expr, ListComprehension, LogicOperation, Statement},
    config::RangeLimits,
    error::{EvaluationError, SemanticError},
    interpreter::value::{core::Value, list::List},
    syntax::{
        ArithNode, ArithToken, BindingClause, BindingSource, ElementsNode, ListClause, LiteralNode,
        Node, PredicateNode, RelationToken,
    },
    util::num::parse_decimal,
};

/// Result type used by the statement builder.
pub type BuildResult<T> = Result<T, crate::error::Error>;

/// Converts syntax nodes into typed statements.
///
/// The builder owns the range limits used to expand open ranges, and is
/// otherwise stateless: it never looks at the list store.
#[derive(Debug, Clone, Copy, Default)]
pub struct StatementBuilder {
    limits: RangeLimits,
}

impl StatementBuilder {
    /// Creates a builder that expands open ranges with `limits`.
    #[must_use]
    pub const fn new(limits: RangeLimits) -> Self {
        Self { limits }
    }

    /// Builds the statement for `node`.
    ///
    /// # Errors
    /// - `SemanticError::MalformedNumber` for numeric literals that do not fit
    ///   the decimal type.
    /// - `SemanticError::MissingTransform` for a comprehension without a
    ///   transform expression.
    /// - `SemanticError::RangeOutOfBounds` for a range endpoint outside the
    ///   range limits.
    /// - `EvaluationError::Overflow` if a range cannot be stepped.
    ///
    /// # Example
    /// ```
    /// use lct::{
    ///     ast::Statement,
    ///     interpreter::{builder::StatementBuilder, parser::core::parse},
    /// };
    ///
    /// let node = parse("B = 1..5", 1).unwrap().unwrap();
    /// let Statement::Definitions(lists) = StatementBuilder::default().build(&node).unwrap() else {
    ///     panic!("expected definitions");
    /// };
    /// assert_eq!(lists[0].to_string(), "B = [1,2,3,4,5]");
    /// ```
    pub fn build(&self, node: &Node) -> BuildResult<Statement> {
        match node {
            Node::Definitions { clauses, line } => {
                let lists = clauses.iter()
                                   .map(|clause| self.build_list(clause, *line))
                                   .collect::<BuildResult<Vec<_>>>()?;
                Ok(Statement::Definitions(lists))
            },
            Node::Show { .. } => Ok(Statement::Show { parameters: Vec::new() }),
            Node::Comprehension { result,
                                  transform,
                                  bindings,
                                  predicates,
                                  line, } => {
                let comprehension =
                    self.build_comprehension(result, transform.as_ref(), bindings, predicates, *line)?;
                Ok(Statement::Comprehension(comprehension))
            },
        }
    }

    fn build_list(&self, clause: &ListClause, line: usize) -> BuildResult<List> {
        let elements = self.build_elements(&clause.elements, line)?;
        Ok(List::new(clause.name.clone(), elements))
    }

    /// Expands a literal list or a range into values.
    ///
    /// Ranges are inclusive and step by one from their start, so a fractional
    /// start keeps its fraction (`1.5..4` gives `1.5,2.5,3.5`). A range whose
    /// start lies above its end is empty. Every endpoint written in a range
    /// must lie within the range limits.
    ///
    /// # Example
    /// ```
    /// use lct::{
    ///     config::RangeLimits, interpreter::builder::StatementBuilder, syntax::ElementsNode,
    /// };
    ///
    /// let builder = StatementBuilder::new(RangeLimits::new(-10, 10).unwrap());
    /// let inside = ElementsNode::Bounded { from: "9".into(),
    ///                                      to:   "10".into(), };
    /// let outside = ElementsNode::Bounded { from: "0".into(),
    ///                                       to:   "1e9".into(), };
    ///
    /// assert_eq!(builder.build_elements(&inside, 1).unwrap().len(), 2);
    /// assert!(builder.build_elements(&outside, 1).is_err());
    /// ```
    pub fn build_elements(&self, elements: &ElementsNode, line: usize) -> BuildResult<Vec<Value>> {
        match elements {
            ElementsNode::Manual(literals) => {
                literals.iter().map(|literal| build_literal(literal, line)).collect()
            },
            ElementsNode::Bounded { from, to } => {
                expand_range(self.range_bound(from, line)?, self.range_bound(to, line)?, line)
            },
            ElementsNode::LeftLimited { from } => {
                expand_range(self.range_bound(from, line)?, self.limits.upper(), line)
            },
            ElementsNode::RightLimited { to } => {
                expand_range(self.limits.lower(), self.range_bound(to, line)?, line)
            },
        }
    }

    /// Parses a range endpoint and checks it against the range limits.
    fn range_bound(&self, text: &str, line: usize) -> Result<Decimal, SemanticError> {
        let bound = parse_decimal(text, line)?;
        if bound < self.limits.lower() || bound > self.limits.upper() {
            return Err(SemanticError::RangeOutOfBounds { bound: text.to_string(),
                                                         lower: self.limits.lower(),
                                                         upper: self.limits.upper(),
                                                         line });
        }
        Ok(bound)
    }

    fn build_comprehension(&self,
                           result: &str,
                           transform: Option<&ArithNode>,
                           bindings: &[BindingClause],
                           predicates: &[PredicateNode],
                           line: usize)
                           -> BuildResult<ListComprehension> {
        let transform = transform.ok_or_else(|| SemanticError::MissingTransform { result:
                                                                                      result.to_string(),
                                                                                  line })?;

        let source_bindings = bindings.iter()
                                      .map(|binding| self.build_binding(binding, line))
                                      .collect::<BuildResult<Vec<_>>>()?;

        let predicates = predicates.iter()
                                   .map(|predicate| build_logic_operation(predicate, line))
                                   .collect::<Result<Vec<_>, _>>()?;

        Ok(ListComprehension { source_bindings,
                               transform: build_expr(transform)?,
                               predicates,
                               result_name: result.to_string(),
                               line })
    }

    fn build_binding(&self, binding: &BindingClause, line: usize) -> BuildResult<List> {
        match &binding.source {
            BindingSource::List(name) => Ok(List::referring_to(binding.variable.clone(), name.clone())),
            BindingSource::Elements(elements) => {
                Ok(List::new(binding.variable.clone(), self.build_elements(elements, line)?))
            },
        }
    }
}

fn build_literal(literal: &LiteralNode, line: usize) -> BuildResult<Value> {
    match literal {
        LiteralNode::Number(text) => Ok(Value::Number(parse_decimal(text, line)?)),
        LiteralNode::Text(text) => Ok(Value::Text(text.clone())),
    }
}

/// Produces `from, from + 1, ...` up to and including `to`.
fn expand_range(from: Decimal, to: Decimal, line: usize) -> BuildResult<Vec<Value>> {
    let mut elements = Vec::new();
    let mut current = from;
    while current <= to {
        elements.push(Value::Number(current));
        current = current.checked_add(Decimal::ONE)
                         .ok_or_else(|| EvaluationError::Overflow { expression:
                                                                        format!("{from}..{to}"),
                                                                    line })?;
    }
    Ok(elements)
}

/// Converts a parsed predicate into a [`LogicOperation`].
///
/// A predicate without a relational token becomes `ComparisonKind::Undefined`;
/// it is rejected when evaluated, not here.
pub fn build_logic_operation(predicate: &PredicateNode,
                             line: usize)
                             -> Result<LogicOperation, SemanticError> {
    let kind = match predicate.relation {
        Some(RelationToken::Eq) => ComparisonKind::Equal,
        Some(RelationToken::Gt) => ComparisonKind::GreaterThan,
        Some(RelationToken::Gte) => ComparisonKind::GreaterOrEqual,
        Some(RelationToken::Lt) => ComparisonKind::LessThan,
        Some(RelationToken::Lte) => ComparisonKind::LessOrEqual,
        None => ComparisonKind::Undefined,
    };

    Ok(LogicOperation { operand: predicate.operand.clone(),
                        kind,
                        threshold: parse_decimal(&predicate.threshold, line)?,
                        line })
}

/// Converts a parsed arithmetic tree into an [`Expr`].
///
/// # Errors
/// Returns `SemanticError::MalformedNumber` for literals that do not fit the
/// decimal type.
pub fn build_expr(node: &ArithNode) -> Result<Expr, SemanticError> {
    Ok(match node {
        ArithNode::Number { text, line } => Expr::Literal { value: parse_decimal(text, *line)?,
                                                            line:  *line, },
        ArithNode::Variable { name, line } => Expr::Variable { name: name.clone(),
                                                               line: *line, },
        ArithNode::Binary { left, op, right, line } => {
            Expr::BinaryOp { left:  Box::new(build_expr(left)?),
                             op:    match op {
                                 ArithToken::Add => BinaryOperator::Add,
                                 ArithToken::Sub => BinaryOperator::Sub,
                                 ArithToken::Mul => BinaryOperator::Mul,
                                 ArithToken::Div => BinaryOperator::Div,
                                 ArithToken::Pow => BinaryOperator::Pow,
                             },
                             right: Box::new(build_expr(right)?),
                             line:  *line, }
        },
        ArithNode::Negate { operand, line } => Expr::Negate { expr: Box::new(build_expr(operand)?),
                                                              line: *line, },
        ArithNode::Parenthesized { inner, line } => Expr::Group { expr: Box::new(build_expr(inner)?),
                                                                  line: *line, },
    })
}
