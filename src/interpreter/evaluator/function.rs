/// The builtin function table.
///
/// Contains the fixed set of mathematical functions callable from
/// expressions, each tagged with its arity.
pub mod builtin;

/// Builtin call evaluation.
///
/// Evaluates the argument expressions of a call and applies the builtin to
/// the resulting values.
pub mod core;
