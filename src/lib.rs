//! # calc
//!
//! calc is an interactive calculator for floating-point expressions.
//! It parses `;`-terminated statements into syntax trees and evaluates them
//! against a variable environment that lives as long as the session, with
//! support for assignment and a fixed set of mathematical builtins.

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

use crate::interpreter::session::{Outcome, Session};

/// Defines the structure of parsed code.
///
/// This module declares the `Expr` and `Statement` enums that represent the
/// syntactic structure of the input as a tree. The AST is built by the parser
/// and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines one variant per expression kind; each node owns its children.
/// - Attaches source lines to AST nodes for error reporting.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised during lexing, parsing,
/// or evaluating a statement. Each carries the line it occurred on.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Implements `Display` and `std::error::Error` for reporting.
pub mod error;
/// Orchestrates the entire process of statement execution.
///
/// This module ties together lexing, parsing, evaluation and the session that
/// drives them statement by statement.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser and evaluator.
/// - Provides entry points for parsing and evaluating user input.
/// - Recovers from malformed statements.
pub mod interpreter;
/// The interactive read-eval-print loop.
///
/// Reads lines from any `BufRead`, executes complete statements as they
/// arrive and writes values and errors to separate streams.
pub mod repl;

/// Evaluates `source` in a fresh session and returns the last value printed.
///
/// Execution stops at `quit`. The first failing statement is returned as the
/// error.
///
/// # Examples
/// ```
/// use calc::get_result;
///
/// assert_eq!(get_result("x = 2; pow(x, 10);").unwrap(), Some(1024.0));
/// assert_eq!(get_result("").unwrap(), None);
///
/// // 'y' was never assigned.
/// assert!(get_result("y + 1;").is_err());
/// ```
pub fn get_result(source: &str) -> Result<Option<f64>, error::Error> {
    let mut session = Session::new();
    let mut result = None;

    for outcome in session.run(source) {
        match outcome? {
            Outcome::Value(value) => result = Some(value),
            Outcome::Quit => break,
        }
    }

    Ok(result)
}
