use std::iter::Peekable;

use crate::{
    ast::Statement,
    error::ParseError,
    interpreter::{
        lexer::{QUIT, Token},
        parser::core::{ParseResult, parse_expression},
    },
};

/// Parses a single statement.
///
/// A statement is either:
/// - the bare command `quit`, or
/// - an expression.
///
/// Both must be followed by `;` or by the end of the token stream. The
/// terminator is consumed.
///
/// The statement's source line is taken from its first token. When input
/// runs out mid-expression, the error carries the line of the last token.
///
/// # Parameters
/// - `tokens`: Token iterator containing `(Token, line)` pairs.
///
/// # Returns
/// A parsed [`Statement`] node.
///
/// # Errors
/// Any error of the expression grammar, or `UnexpectedTrailingTokens` when
/// the expression is followed by something other than the terminator. On
/// error the stream is left where parsing stopped; use [`skip_statement`] to
/// resynchronize.
///
/// # Example
/// ```
/// use calc::{
///     ast::Statement,
///     interpreter::{lexer::tokenize, parser::statement::parse_statement},
/// };
///
/// let tokens = tokenize("quit;", 1);
/// let statement = parse_statement(&mut tokens.iter().peekable()).unwrap();
/// assert_eq!(statement, Statement::Quit { line: 1 });
/// ```
pub fn parse_statement<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let line = tokens.peek().map_or(0, |(_, l)| *l);

    if is_quit(tokens) {
        tokens.next();
        tokens.next_if(|(token, _)| *token == Token::Semicolon);
        return Ok(Statement::Quit { line });
    }

    let lookahead = tokens.clone();
    let expr = parse_expression(tokens).map_err(|e| {
                                           e.or_line(lookahead.last().map_or(line, |(_, l)| *l))
                                       })?;
    expect_terminator(tokens)?;

    Ok(Statement::Expression { expr, line })
}

/// Advances past the end of the current statement.
///
/// Consumes tokens up to and including the next `;`, or to the end of the
/// stream, so that parsing can resume at the following statement.
pub fn skip_statement<'a, I>(tokens: &mut Peekable<I>)
    where I: Iterator<Item = &'a (Token, usize)>
{
    for (token, _) in tokens.by_ref() {
        if *token == Token::Semicolon {
            break;
        }
    }
}

/// Checks, without consuming anything, whether the next statement is the
/// `quit` command.
fn is_quit<'a, I>(tokens: &Peekable<I>) -> bool
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut lookahead = tokens.clone();

    matches!(lookahead.next(), Some((Token::Identifier(name), _)) if name == QUIT)
    && matches!(lookahead.next(), None | Some((Token::Semicolon, _)))
}

/// Consumes the `;` that ends a statement.
///
/// The end of the stream also ends a statement.
fn expect_terminator<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<()>
    where I: Iterator<Item = &'a (Token, usize)>
{
    match tokens.peek() {
        Some((Token::Semicolon, _)) => {
            tokens.next();
            Ok(())
        },
        Some((Token::Unknown(text), line)) => Err(ParseError::InvalidCharacter { text: text.clone(),
                                                                                 line: *line, }),
        Some((tok, line)) => Err(ParseError::UnexpectedTrailingTokens { token: tok.to_string(),
                                                                         line:  *line, }),
        None => Ok(()),
    }
}
