use logos::Logos;

/// The identifier that ends an interactive session when it forms a statement
/// on its own.
pub const QUIT: &str = "quit";

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens of the calculator language.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(extras = LexerExtras)]
pub enum Token {
    /// Numeric literal tokens, such as `42`, `3.14`, `.5`, `2.` or `2.1e-10`.
    #[regex(r"[0-9]+\.[0-9]*([eE][+-]?[0-9]+)?", parse_number)]
    #[regex(r"\.[0-9]+([eE][+-]?[0-9]+)?", parse_number)]
    #[regex(r"[0-9]+([eE][+-]?[0-9]+)?", parse_number)]
    Number(f64),
    /// Identifier tokens; variable or builtin names such as `x` or `sqrt`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// `// Comments.`
    #[regex(r"//[^\n\r]*", logos::skip, allow_greedy = true)]
    Comment,
    /// ```text
    /// /* Multi line comments. */
    /// ```
    #[regex(r"/\*([^*]|\*+[^*/])*\*+/", |lex| {
        let comment      = lex.slice();
        let newlines     = comment.chars().filter(|&c| c == '\n').count();
        lex.extras.line += newlines;
        logos::Skip
    })]
    MultiLineComment,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `,`
    #[token(",")]
    Comma,
    /// `=`
    #[token("=")]
    Equals,
    /// `;` terminates a statement.
    #[token(";")]
    Semicolon,
    /// A character that cannot start any token. The parser rejects it.
    #[regex(r"[^0-9a-zA-Z_.+\-*/(),=; \t\f\r\n]", |lex| lex.slice().to_string())]
    Unknown(String),
    /// Newlines only advance the line counter.
    #[token("\n", |lex| {
        lex.extras.line += 1;
        logos::Skip
    })]
    NewLine,
    /// Spaces, tabs, feeds and carriage returns.
    #[regex(r"[ \t\f\r]+", logos::skip)]
    Ignored,
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Identifier(name) | Self::Unknown(name) => write!(f, "{name}"),
            Self::Plus => write!(f, "+"),
            Self::Minus => write!(f, "-"),
            Self::Star => write!(f, "*"),
            Self::Slash => write!(f, "/"),
            Self::LParen => write!(f, "("),
            Self::RParen => write!(f, ")"),
            Self::Comma => write!(f, ","),
            Self::Equals => write!(f, "="),
            Self::Semicolon => write!(f, ";"),
            Self::Comment | Self::MultiLineComment => write!(f, "comment"),
            Self::NewLine => write!(f, "newline"),
            Self::Ignored => write!(f, "whitespace"),
        }
    }
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number for error reporting and diagnostics.
#[derive(Default)]
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line: usize,
}

/// Parses a numeric literal from the current token slice.
///
/// # Returns
/// - `Some(f64)`: The parsed value if successful.
/// - `None`: If the token slice is not a valid float.
fn parse_number(lex: &logos::Lexer<Token>) -> Option<f64> {
    lex.slice().parse().ok()
}

/// Converts source text into `(Token, line)` pairs.
///
/// Lines are counted from `first_line`, so a caller feeding input in chunks
/// keeps line numbers continuous. Input the lexer cannot match becomes
/// [`Token::Unknown`] instead of aborting, which lets the parser report it in
/// the context of its statement.
///
/// # Example
/// ```
/// use calc::interpreter::lexer::{Token, tokenize};
///
/// let tokens = tokenize("x = 2;", 1);
/// assert_eq!(tokens[0], (Token::Identifier("x".to_string()), 1));
/// assert_eq!(tokens[2], (Token::Number(2.0), 1));
/// assert_eq!(tokens.len(), 4);
/// ```
#[must_use]
pub fn tokenize(source: &str, first_line: usize) -> Vec<(Token, usize)> {
    let mut lexer = Token::lexer_with_extras(source, LexerExtras { line: first_line });
    let mut tokens = Vec::new();

    while let Some(token) = lexer.next() {
        let token = token.unwrap_or_else(|()| Token::Unknown(lexer.slice().to_string()));
        tokens.push((token, lexer.extras.line));
    }

    tracing::trace!(count = tokens.len(), first_line, "tokenized input");
    tokens
}

/// Returns the byte length of the longest prefix of `source` that ends with a
/// statement terminator, or `None` if no `;` has been typed yet.
///
/// Semicolons inside comments do not count. An unterminated `/*` hides
/// everything after it, since the comment may still be closed on a later
/// line.
#[must_use]
pub fn complete_prefix_len(source: &str) -> Option<usize> {
    let mut lexer = Token::lexer(source);
    let mut end = None;

    while let Some(token) = lexer.next() {
        match token {
            Ok(Token::Semicolon) => end = Some(lexer.span().end),
            Ok(Token::Slash) if lexer.remainder().starts_with('*') => break,
            Err(()) if lexer.slice().starts_with("/*") => break,
            _ => {},
        }
    }

    end
}

/// Tests whether `source` consists of nothing but the `quit` command, without
/// a terminating `;`.
#[must_use]
pub fn is_quit_command(source: &str) -> bool {
    let mut lexer = Token::lexer(source);

    matches!(lexer.next(), Some(Ok(Token::Identifier(ref name))) if name == QUIT)
    && lexer.next().is_none()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn kinds(source: &str) -> Vec<Token> {
        tokenize(source, 1).into_iter().map(|(token, _)| token).collect()
    }

    #[test]
    fn numbers_in_every_notation() {
        assert_eq!(kinds("42 3.25 .5 2. 1e3 2.5E-2"),
                   vec![Token::Number(42.0),
                        Token::Number(3.25),
                        Token::Number(0.5),
                        Token::Number(2.0),
                        Token::Number(1000.0),
                        Token::Number(0.025)]);
    }

    #[test]
    fn identifiers_and_punctuation() {
        assert_eq!(kinds("alpha_1 = pow(x, 2);"),
                   vec![Token::Identifier("alpha_1".to_string()),
                        Token::Equals,
                        Token::Identifier("pow".to_string()),
                        Token::LParen,
                        Token::Identifier("x".to_string()),
                        Token::Comma,
                        Token::Number(2.0),
                        Token::RParen,
                        Token::Semicolon]);
    }

    #[test]
    fn operators_are_single_characters() {
        assert_eq!(kinds("+-*/"),
                   vec![Token::Plus, Token::Minus, Token::Star, Token::Slash]);
    }

    #[test]
    fn comments_are_skipped_and_lines_counted() {
        let tokens = tokenize("1 // one\n/* two\nthree */ 2;\n3", 1);
        assert_eq!(tokens,
                   vec![(Token::Number(1.0), 1),
                        (Token::Number(2.0), 3),
                        (Token::Semicolon, 3),
                        (Token::Number(3.0), 4)]);
    }

    #[test]
    fn first_line_offsets_numbering() {
        let tokens = tokenize("\nx", 10);
        assert_eq!(tokens, vec![(Token::Identifier("x".to_string()), 11)]);
    }

    #[test]
    fn unrecognized_characters_become_unknown_tokens() {
        assert_eq!(kinds("1 $ 2"),
                   vec![Token::Number(1.0), Token::Unknown("$".to_string()), Token::Number(2.0)]);
        assert_eq!(kinds("."), vec![Token::Unknown(".".to_string())]);
    }

    #[test]
    fn complete_prefix_ends_after_last_semicolon() {
        assert_eq!(complete_prefix_len("1 + 2"), None);
        assert_eq!(complete_prefix_len("1; 2; 3"), Some(5));
        assert_eq!(complete_prefix_len("1 // ;"), None);
    }

    #[test]
    fn open_block_comment_hides_later_semicolons() {
        assert_eq!(complete_prefix_len("1 + /* ;\n"), None);
        assert_eq!(complete_prefix_len("2; 1 + /* ; */ 3; /* ;"), Some(17));
        assert_eq!(complete_prefix_len("1 + /* ;\n */ 2;\n"), Some(15));
    }

    #[test]
    fn quit_command_must_stand_alone() {
        assert!(is_quit_command("quit\n"));
        assert!(is_quit_command("  quit "));
        assert!(!is_quit_command("quit + 1"));
        assert!(!is_quit_command("quitter"));
        assert!(!is_quit_command(""));
    }
}
