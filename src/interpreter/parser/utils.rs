use std::iter::Peekable;

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::core::{ParseResult, parse_expression},
    },
};

/// Parses a comma-separated list of items until a closing token.
///
/// It repeatedly calls `parse_item` to parse one element, expecting either:
///
/// - a comma, to continue the list, or
/// - the specified closing token, to end it.
///
/// An immediately encountered closing token produces an empty list.
///
/// Grammar (simplified): `list := item ("," item)*`
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the first item or closing token.
/// - `parse_item`: Function used to parse each list element.
/// - `closing`: The token that terminates the list (e.g. `)`).
/// - `line`: Line of the opening token, reported if input runs out.
///
/// # Returns
/// A vector of parsed items.
///
/// # Errors
/// Returns a `ParseError` if:
/// - an item fails to parse,
/// - an unexpected token is encountered,
/// - the stream ends before the closing token.
pub(in crate::interpreter::parser) fn parse_comma_separated<'a, I, T>(
    tokens: &mut Peekable<I>,
    parse_item: impl Fn(&mut Peekable<I>) -> ParseResult<T>,
    closing: &Token,
    line: usize)
    -> Result<Vec<T>, ParseError>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut items = Vec::new();
    if let Some((tok, _)) = tokens.peek()
       && tok == closing
    {
        tokens.next();

        return Ok(items);
    }
    loop {
        items.push(parse_item(tokens)?);
        match tokens.peek() {
            Some((Token::Comma, _)) => {
                tokens.next();
            },
            Some((tok, _)) if tok == closing => {
                tokens.next();
                break;
            },
            Some((Token::Unknown(text), line)) => {
                return Err(ParseError::InvalidCharacter { text: text.clone(),
                                                          line: *line, });
            },
            Some((tok, line)) => {
                return Err(ParseError::UnexpectedToken { token: format!("Expected ',' or '{closing}', found '{tok}'"),
                                                         line:  *line, });
            },
            None => return Err(ParseError::UnexpectedEndOfInput { line }),
        }
    }
    Ok(items)
}

/// Parses the parenthesized argument list of a builtin call.
///
/// Grammar: `arguments := "(" (expression ("," expression)*)? ")"`
///
/// # Parameters
/// - `tokens`: Token iterator positioned just after the function name.
/// - `name`: The function name, for error messages.
/// - `line`: Line of the function name.
///
/// # Returns
/// The argument expressions in call order.
///
/// # Errors
/// `ExpectedOpeningParen` if the list does not start with `(`; otherwise any
/// error of [`parse_comma_separated`].
pub(in crate::interpreter::parser) fn parse_arguments<'a, I>(tokens: &mut Peekable<I>,
                                                             name: &str,
                                                             line: usize)
                                                             -> ParseResult<Vec<Expr>>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    match tokens.peek() {
        Some((Token::LParen, _)) => {
            tokens.next();
        },
        Some((Token::Unknown(text), line)) => {
            return Err(ParseError::InvalidCharacter { text: text.clone(),
                                                      line: *line, });
        },
        Some((_, line)) => {
            return Err(ParseError::ExpectedOpeningParen { name: name.to_string(),
                                                          line: *line, });
        },
        None => {
            return Err(ParseError::ExpectedOpeningParen { name: name.to_string(),
                                                          line });
        },
    }

    parse_comma_separated(tokens, parse_expression, &Token::RParen, line)
}
