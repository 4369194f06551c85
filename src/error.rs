/// Parsing errors.
///
/// Defines all error types that can occur during lexing and parsing of source
/// code: unrecognized characters, unexpected tokens, missing parentheses,
/// invalid assignment targets and wrong builtin arity.
pub mod parse_error;
/// Runtime errors.
///
/// Contains the error types that can be raised while evaluating a parsed
/// expression, such as reading an unassigned variable.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

/// Any failure of a single statement.
///
/// Neither kind is fatal to a session; the statement is abandoned and the
/// next one is read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The statement could not be lexed or parsed.
    Parse(ParseError),
    /// The statement parsed but could not be evaluated.
    Runtime(RuntimeError),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(e) => write!(f, "{e}"),
            Self::Runtime(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(e) => Some(e),
            Self::Runtime(e) => Some(e),
        }
    }
}

impl From<ParseError> for Error {
    fn from(e: ParseError) -> Self {
        Self::Parse(e)
    }
}

impl From<RuntimeError> for Error {
    fn from(e: RuntimeError) -> Self {
        Self::Runtime(e)
    }
}
