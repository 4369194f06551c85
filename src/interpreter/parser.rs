/// Core expression parsing.
///
/// Defines the parse result type and the `expression` entry point of the
/// grammar.
pub mod core;

/// Unary and primary expression parsing.
///
/// Handles prefix signs, numbers, parenthesized groups, variables and builtin
/// calls.
pub mod unary;

/// Binary operator parsing.
///
/// Implements the additive and multiplicative precedence levels and the
/// right-associative assignment above them.
pub mod binary;

/// Utility functions for the parser.
///
/// Provides helpers for comma-separated lists and argument lists.
pub mod utils;

/// Statement parsing.
///
/// Parses one `;`-terminated statement, recognizes `quit`, and resynchronizes
/// the token stream after an error.
pub mod statement;
