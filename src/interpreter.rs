/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator traverses the AST, performs the arithmetic, calls builtins
/// and reads and writes the variable environment.
///
/// # Responsibilities
/// - Evaluates every AST node kind with one exhaustive match.
/// - Owns the variable environment (`Context`).
/// - Reports runtime errors such as unknown variables.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads the raw source text and produces a stream of tokens:
/// numbers, identifiers, operators and punctuation. This is the first stage
/// of interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with source lines.
/// - Skips whitespace and comments.
/// - Marks unrecognized characters so the parser can reject them.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser processes the token stream produced by the lexer and constructs
/// an AST for each statement.
///
/// # Responsibilities
/// - Converts tokens into AST nodes following operator precedence.
/// - Resolves builtin calls and checks their arity.
/// - Validates assignment targets and statement terminators.
pub mod parser;
/// Statement-by-statement execution with error recovery.
///
/// A session owns one variable environment and feeds it every statement it
/// is given, resynchronizing after malformed ones.
pub mod session;
