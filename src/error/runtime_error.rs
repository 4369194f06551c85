#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during evaluation.
///
/// Arithmetic never fails: division by zero and domain errors of the builtins
/// produce infinities or NaN as IEEE-754 prescribes.
pub enum RuntimeError {
    /// Tried to read a variable that was never assigned.
    UnknownVariable {
        /// The name of the variable.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// A builtin received a different number of values than its arity.
    ArgumentCountMismatch {
        /// The builtin being called.
        name:     String,
        /// The arity of the builtin.
        expected: usize,
        /// The number of values supplied.
        found:    usize,
        /// The source line where the error occurred.
        line:     usize,
    },
}

impl RuntimeError {
    /// Gets the line on which the error was raised.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::UnknownVariable { line, .. } | Self::ArgumentCountMismatch { line, .. } => *line,
        }
    }
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownVariable { name, line } => {
                write!(f, "Error on line {line}: Unknown variable '{name}'.")
            },
            Self::ArgumentCountMismatch { name,
                                          expected,
                                          found,
                                          line, } => write!(f,
                                                            "Error on line {line}: Function '{name}' takes {expected} argument(s) but received {found}."),
        }
    }
}

impl std::error::Error for RuntimeError {}
