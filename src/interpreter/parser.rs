/// Entry points: tokenizing a line and parsing it into a syntax node.
pub mod core;
/// Arithmetic expressions, parsed by precedence climbing.
pub mod binary;
/// List clauses, ranges, literals, source bindings and predicates.
pub mod list;
/// Prefix negation.
pub mod unary;
/// Statement forms: `show`, definitions and comprehensions.
pub mod statement;
/// Helpers shared by the other parser modules.
pub mod utils;
