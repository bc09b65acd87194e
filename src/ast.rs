use std::fmt;

use rust_decimal::Decimal;

use crate::{interpreter::value::list::List, util::num::canonical};

/// An arithmetic expression tree.
///
/// Built by the statement builder from a parsed [`crate::syntax::ArithNode`],
/// with every literal already converted to a `Decimal`. Evaluated by
/// [`crate::interpreter::evaluator::arithmetic::evaluate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// A numeric literal.
    Literal {
        /// The constant value.
        value: Decimal,
        /// Line number in the source code.
        line:  usize,
    },
    /// Reference to a bound variable by name.
    Variable {
        /// Name of the variable.
        name: String,
        /// Line number in the source code.
        line: usize,
    },
    /// A binary operation.
    BinaryOp {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand.
        right: Box<Self>,
        /// Line number in the source code.
        line:  usize,
    },
    /// Arithmetic negation.
    Negate {
        /// The negated expression.
        expr: Box<Self>,
        /// Line number in the source code.
        line: usize,
    },
    /// A parenthesized expression.
    Group {
        /// The inner expression.
        expr: Box<Self>,
        /// Line number in the source code.
        line: usize,
    },
}

impl Expr {
    /// Gets the line number from `self`.
    /// ## Example
    /// ```
    /// use lct::ast::Expr;
    ///
    /// let expr = Expr::Variable { name: "x".to_string(),
    ///                             line: 5, };
    ///
    /// assert_eq!(expr.line_number(), 5);
    /// ```
    #[must_use]
    pub const fn line_number(&self) -> usize {
        match self {
            Self::Literal { line, .. }
            | Self::Variable { line, .. }
            | Self::BinaryOp { line, .. }
            | Self::Negate { line, .. }
            | Self::Group { line, .. } => *line,
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal { value, .. } => write!(f, "{}", canonical(*value)),
            Self::Variable { name, .. } => write!(f, "{name}"),
            Self::BinaryOp { left, op, right, .. } => write!(f, "{left} {op} {right}"),
            Self::Negate { expr, .. } => write!(f, "-{expr}"),
            Self::Group { expr, .. } => write!(f, "({expr})"),
        }
    }
}

/// Represents a binary arithmetic operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Exponentiation (`^`)
    Pow,
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let operator = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Pow => "^",
        };
        write!(f, "{operator}")
    }
}

/// The comparison a predicate performs.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ComparisonKind {
    /// `==`
    Equal,
    /// `>`
    GreaterThan,
    /// `>=`
    GreaterOrEqual,
    /// `<`
    LessThan,
    /// `<=`
    LessOrEqual,
    /// No relational token was present. Evaluating it is an error.
    Undefined,
}

impl fmt::Display for ComparisonKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let operator = match self {
            Self::Equal => "==",
            Self::GreaterThan => ">",
            Self::GreaterOrEqual => ">=",
            Self::LessThan => "<",
            Self::LessOrEqual => "<=",
            Self::Undefined => "?",
        };
        write!(f, "{operator}")
    }
}

/// A single comparison predicate, such as `n > 2`.
///
/// `operand` names a bound iteration variable, not a list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogicOperation {
    /// The variable being tested.
    pub operand:   String,
    /// The comparison to perform.
    pub kind:      ComparisonKind,
    /// The value the variable is compared against.
    pub threshold: Decimal,
    /// Line number in the source code.
    pub line:      usize,
}

/// A derived-list definition.
///
/// Each source binding is a [`List`] whose `name` is the iteration variable.
/// Its values are its own elements when it has any, otherwise the elements of
/// the stored list named by its `reference`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListComprehension {
    /// Source bindings, in declaration order.
    pub source_bindings: Vec<List>,
    /// Expression producing each output element.
    pub transform:       Expr,
    /// Predicates combined with logical AND.
    pub predicates:      Vec<LogicOperation>,
    /// Name the result is registered under.
    pub result_name:     String,
    /// Line number in the source code.
    pub line:            usize,
}

/// Represents a top-level statement.
///
/// Exactly one kind of work is carried per statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    /// Lists to merge into the store, in source order.
    Definitions(Vec<List>),
    /// Render every stored list.
    Show {
        /// Reserved for filtering. Always empty.
        parameters: Vec<String>,
    },
    /// Derive a new list.
    Comprehension(ListComprehension),
}
