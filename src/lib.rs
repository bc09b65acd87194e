//! # lct
//!
//! lct is an interpreter for named lists and list comprehensions written in
//! Rust. A session accumulates lists defined literally or as ranges, derives
//! new lists by filtering and transforming existing ones, and prints the whole
//! collection on request.
//!
//! ```text
//! N = [1,2,3,4,5]
//! R = [n * 10 | n in N | n > 2]
//! show
//! ```

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    config::Config,
    error::LctResult,
    interpreter::{environment::Environment, sink::CaptureSink},
};

/// Defines the typed statement model.
///
/// This module declares the arithmetic expression tree, predicates, list
/// comprehensions and the `Statement` enum the execution environment
/// dispatches on. Every numeric literal has already been converted to a
/// decimal by the time a value of these types exists.
///
/// # Responsibilities
/// - Defines expression, predicate and statement types.
/// - Attaches source lines to expressions and predicates for error reporting.
pub mod ast;
/// Session configuration.
///
/// Holds the bounds substituted for the open side of a range. Built by the
/// command line front end and handed to the environment.
pub mod config;
/// Provides unified error types for parsing, building and evaluation.
///
/// This module defines all errors that can abort a statement. Each carries the
/// line it was raised on, and none of them is ever downgraded to a default
/// value.
///
/// # Responsibilities
/// - Defines error enums for each phase (syntax, semantics, evaluation).
/// - Wraps them in a single top-level `Error` returned by the environment.
pub mod error;
/// Orchestrates the entire process of statement execution.
///
/// This module ties together lexing, parsing, statement building, evaluation
/// and the list store to provide a complete interactive session.
///
/// # Responsibilities
/// - Coordinates the lexer, parser, builder and evaluators.
/// - Owns the session store and guarantees failed statements leave it intact.
/// - Delivers `show` output through an output sink.
pub mod interpreter;
/// The syntax tree produced by the parser.
pub mod syntax;
/// General utilities for numeric conversion.
///
/// # Responsibilities
/// - Parse numeric literal text into decimals without silent defaults.
/// - Convert between decimals and `f64` where exponentiation requires it.
/// - Produce the canonical textual form of a number.
pub mod util;

/// Runs a whole script and returns everything it printed.
///
/// Each line is one statement. Execution stops at the first failing line.
///
/// # Errors
/// Returns the error of the first failing statement.
///
/// # Examples
/// ```
/// use lct::{config::Config, run_script};
///
/// let output = run_script("A = [1,2,3]\nshow", Config::default()).unwrap();
/// assert_eq!(output, "A = [1,2,3]\n");
///
/// // A predicate without a comparison is rejected.
/// let source = "N = 1..3\nR = [n | n in N | n 2]";
/// assert!(run_script(source, Config::default()).is_err());
/// ```
pub fn run_script(source: &str, config: Config) -> LctResult<String> {
    let mut environment = Environment::with_config(config);
    let mut sink = CaptureSink::new();

    environment.execute_script(source, &mut sink)?;

    Ok(sink.joined())
}
