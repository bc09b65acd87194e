//! Node kinds produced by the parser.
//!
//! The syntax tree mirrors the grammar productions and keeps every numeric
//! literal as the text the user wrote. Turning that text into numbers, and
//! rejecting what does not fit, is left to the statement builder.

/// A parsed statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// `A = [1,2,3], B = 1..5`
    Definitions {
        /// The list clauses, in source order.
        clauses: Vec<ListClause>,
        /// Line number in the source code.
        line:    usize,
    },
    /// `show`
    Show {
        /// Line number in the source code.
        line: usize,
    },
    /// `R = [n * 10 | n in N | n > 2]`
    Comprehension {
        /// Name the result is stored under.
        result:     String,
        /// The transform expression, if one was written.
        transform:  Option<ArithNode>,
        /// Source bindings, in declaration order.
        bindings:   Vec<BindingClause>,
        /// Predicates, in source order.
        predicates: Vec<PredicateNode>,
        /// Line number in the source code.
        line:       usize,
    },
}

/// `NAME = elements`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListClause {
    /// The list name.
    pub name:     String,
    /// The elements or range on the right-hand side.
    pub elements: ElementsNode,
}

/// The right-hand side of a list clause.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ElementsNode {
    /// `[1, two, "three"]`
    Manual(Vec<LiteralNode>),
    /// `from..to`
    Bounded {
        /// Lower bound literal.
        from: String,
        /// Upper bound literal.
        to:   String,
    },
    /// `from..`
    LeftLimited {
        /// Lower bound literal.
        from: String,
    },
    /// `..to`
    RightLimited {
        /// Upper bound literal.
        to: String,
    },
}

/// An element of a manual list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LiteralNode {
    /// A numeric literal, possibly with a leading `-`.
    Number(String),
    /// A bare word or quoted string.
    Text(String),
}

/// `var in SOURCE`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BindingClause {
    /// The iteration variable.
    pub variable: String,
    /// Where the variable's values come from.
    pub source:   BindingSource,
}

/// The source of a binding clause.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BindingSource {
    /// A stored list, by name.
    List(String),
    /// Inline elements.
    Elements(ElementsNode),
}

/// `operand relop threshold`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PredicateNode {
    /// The variable being tested.
    pub operand:   String,
    /// The relational token, when one was present.
    pub relation:  Option<RelationToken>,
    /// The threshold literal.
    pub threshold: String,
}

/// Relational tokens accepted in predicates.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum RelationToken {
    /// `==` or `=`
    Eq,
    /// `>`
    Gt,
    /// `>=`
    Gte,
    /// `<`
    Lt,
    /// `<=`
    Lte,
}

/// Arithmetic operator tokens.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ArithToken {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
    /// `^`
    Pow,
}

/// An arithmetic expression as parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArithNode {
    /// A numeric literal.
    Number {
        /// The literal text.
        text: String,
        /// Line number in the source code.
        line: usize,
    },
    /// A variable reference.
    Variable {
        /// The variable name.
        name: String,
        /// Line number in the source code.
        line: usize,
    },
    /// `left op right`
    Binary {
        /// Left operand.
        left:  Box<Self>,
        /// The operator token.
        op:    ArithToken,
        /// Right operand.
        right: Box<Self>,
        /// Line number in the source code.
        line:  usize,
    },
    /// `- operand`
    Negate {
        /// The negated expression.
        operand: Box<Self>,
        /// Line number in the source code.
        line:    usize,
    },
    /// `( inner )`
    Parenthesized {
        /// The grouped expression.
        inner: Box<Self>,
        /// Line number in the source code.
        line:  usize,
    },
}

impl Node {
    /// Gets the line number from `self`.
    #[must_use]
    pub const fn line_number(&self) -> usize {
        match self {
            Self::Definitions { line, .. }
            | Self::Show { line }
            | Self::Comprehension { line, .. } => *line,
        }
    }
}
