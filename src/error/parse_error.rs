#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during lexing or parsing.
pub enum ParseError {
    /// The lexer met a character that cannot start any token.
    InvalidCharacter {
        /// The offending text.
        text: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Found an unexpected token where an expression was required.
    UnexpectedToken {
        /// The token encountered.
        token: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// Reached the end of input in the middle of an expression.
    UnexpectedEndOfInput {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A builtin name was not followed by `(`.
    ExpectedOpeningParen {
        /// The builtin that required an argument list.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// A closing parenthesis `)` was expected but not found.
    ExpectedClosingParen {
        /// The source line where the error occurred.
        line: usize,
    },
    /// The left-hand side of `=` was not a plain variable.
    InvalidAssignmentTarget {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A builtin was called with the wrong number of arguments.
    ArgumentCountMismatch {
        /// The builtin being called.
        name:     String,
        /// The arity of the builtin.
        expected: usize,
        /// The number of arguments supplied.
        found:    usize,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// Found extra tokens after the expression, before the terminator.
    UnexpectedTrailingTokens {
        /// The extra/unexpected token.
        token: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// Tried to use a reserved identifier as a value.
    IdentifierReserved {
        /// The reserved identifier name.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
}

impl ParseError {
    /// Gets the line on which the error was detected.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::InvalidCharacter { line, .. }
            | Self::UnexpectedToken { line, .. }
            | Self::UnexpectedEndOfInput { line }
            | Self::ExpectedOpeningParen { line, .. }
            | Self::ExpectedClosingParen { line }
            | Self::InvalidAssignmentTarget { line }
            | Self::ArgumentCountMismatch { line, .. }
            | Self::UnexpectedTrailingTokens { line, .. }
            | Self::IdentifierReserved { line, .. } => *line,
        }
    }

    /// Fills in `line` for an end-of-input error raised where no token was
    /// left to take a line number from.
    #[must_use]
    pub fn or_line(self, line: usize) -> Self {
        match self {
            Self::UnexpectedEndOfInput { line: 0 } => Self::UnexpectedEndOfInput { line },
            other => other,
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidCharacter { text, line } => {
                write!(f, "Error on line {line}: Invalid character '{text}'.")
            },

            Self::UnexpectedToken { token, line } => {
                write!(f, "Error on line {line}: Unexpected token: {token}.")
            },

            Self::UnexpectedEndOfInput { line } => {
                write!(f, "Error on line {line}: Unexpected end of input.")
            },

            Self::ExpectedOpeningParen { name, line } => write!(f,
                                                                "Error on line {line}: Expected '(' after function '{name}'."),

            Self::ExpectedClosingParen { line } => write!(f,
                                                          "Error on line {line}: Expected closing parenthesis ')' but none found."),

            Self::InvalidAssignmentTarget { line } => write!(f,
                                                             "Error on line {line}: Only a variable can be assigned to."),

            Self::ArgumentCountMismatch { name,
                                          expected,
                                          found,
                                          line, } => write!(f,
                                                            "Error on line {line}: Function '{name}' takes {expected} argument(s) but {found} were given."),

            Self::UnexpectedTrailingTokens { token, line } => write!(f,
                                                                     "Error on line {line}: Extra tokens after expression. Check your input: {token}"),

            Self::IdentifierReserved { name, line } => {
                write!(f, "Error on line {line}: Identifier {name} is reserved.")
            },
        }
    }
}

impl std::error::Error for ParseError {}
