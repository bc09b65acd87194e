/// The statement builder turns syntax nodes into typed statements.
///
/// It converts numeric literal text into decimals, expands ranges into their
/// elements, and shapes comprehension bindings and predicates. It never reads
/// or writes the list store.
///
/// # Responsibilities
/// - Produces exactly one statement variant per syntax node.
/// - Rejects malformed numbers and comprehensions without a transform.
/// - Applies the configured range limits to open ranges.
pub mod builder;
/// The execution environment runs statements against a session store.
///
/// The environment owns the list store, drives each line through parsing,
/// building and evaluation, and only mutates the store once every fallible
/// step has succeeded.
pub mod environment;
/// The evaluator module computes values from typed statements.
///
/// It holds the arithmetic and logic evaluators used for individual
/// expressions and predicates, and the comprehension engine that combines them
/// to derive new lists.
///
/// # Responsibilities
/// - Evaluates arithmetic over exact decimals, reporting numeric failures.
/// - Evaluates predicate sets as a logical AND.
/// - Iterates comprehension bindings and collects the produced elements.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads the raw source text and produces a stream of tokens: numeric
/// and quoted literals, identifiers, keywords, operators and delimiters, each
/// paired with the line it appeared on.
pub mod lexer;
/// The parser module builds the syntax tree from tokens.
///
/// A recursive-descent parser over a peekable token stream. One call parses one
/// statement and rejects anything left over.
pub mod parser;
/// Output sinks for `show` statements.
pub mod sink;
/// The value module defines list elements, lists and the list store.
pub mod value;
