/// Binary operator evaluation logic.
///
/// Applies `+`, `-`, `*` and `/` to two values with IEEE-754 semantics.
pub mod binary;

/// Unary operator evaluation logic.
///
/// Implements arithmetic negation and the identity `+`.
pub mod unary;

/// Core evaluation logic and context management.
///
/// Contains the main evaluation engine and the variable environment.
pub mod core;

/// Function evaluation.
///
/// Holds the builtin table and evaluates calls into it.
pub mod function;
