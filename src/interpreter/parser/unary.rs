use std::iter::Peekable;

use crate::{
    ast::{Expr, UnaryOperator},
    error::ParseError,
    interpreter::{
        evaluator::function::builtin,
        lexer::{QUIT, Token},
        parser::{
            core::{ParseResult, parse_expression},
            utils::parse_arguments,
        },
    },
};

/// Parses a unary expression.
///
/// Supports the prefix operators `-` (negation) and `+` (identity).
///
/// Unary operators are right-associative and may be stacked, so `--x` is
/// `-(-x)` and `+-x` is `+(-x)`.
///
/// If no unary operator is present, the function delegates to
/// [`parse_primary`].
///
/// Grammar:
/// ```text
///     unary := ("-" | "+") unary
///            | primary
/// ```
/// # Parameters
/// - `tokens`: Token iterator with lookahead.
///
/// # Returns
/// An [`Expr::UnaryOp`] or a primary expression.
pub(crate) fn parse_unary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    if let Some((Token::Minus, line)) = tokens.peek() {
        tokens.next();
        let expr = parse_unary(tokens)?;
        Ok(Expr::UnaryOp { op:   UnaryOperator::Negate,
                           expr: Box::new(expr),
                           line: *line, })
    } else if let Some((Token::Plus, line)) = tokens.peek() {
        tokens.next();
        let expr = parse_unary(tokens)?;
        Ok(Expr::UnaryOp { op:   UnaryOperator::Plus,
                           expr: Box::new(expr),
                           line: *line, })
    } else {
        parse_primary(tokens)
    }
}

/// Parses a primary (atomic) expression.
///
/// Primary expressions form the base of the expression grammar:
/// - numeric literals
/// - variables
/// - builtin function calls
/// - parenthesized expressions
///
/// This function does not handle unary operators.
///
/// Grammar:
/// ```text
///     primary := NUMBER
///              | identifier_or_function
///              | "(" expression ")"
/// ```
/// # Parameters
/// - `tokens`: Token iterator positioned at the start of a primary expression.
///
/// # Returns
/// The parsed primary [`Expr`] or a `ParseError` on failure.
///
/// # Errors
/// The offending token is only peeked, never consumed, so the caller can
/// resynchronize on it.
pub(crate) fn parse_primary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let peeked = tokens.peek()
                       .ok_or(ParseError::UnexpectedEndOfInput { line: 0 })?;

    match peeked {
        (Token::Number(value), line) => {
            let literal = Expr::Literal { value: *value,
                                          line:  *line, };
            tokens.next();
            Ok(literal)
        },
        (Token::LParen, _) => parse_grouping(tokens),
        (Token::Identifier(_), _) => parse_identifier_or_function(tokens),
        (Token::Unknown(text), line) => Err(ParseError::InvalidCharacter { text: text.clone(),
                                                                           line: *line, }),
        (tok, line) => Err(ParseError::UnexpectedToken { token: format!("'{tok}'"),
                                                         line:  *line, }),
    }
}

/// Parses a parenthesized expression.
///
/// Grammar: `grouping := "(" expression ")"`
///
/// # Errors
/// `ExpectedClosingParen` if the group is not closed, or `InvalidCharacter`
/// if an unrecognized character stands where `)` should. The token found
/// instead is left in the stream.
fn parse_grouping<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let line = tokens.next().map_or(0, |(_, line)| *line);
    let expr = parse_expression(tokens)?;

    match tokens.peek() {
        Some((Token::RParen, _)) => {
            tokens.next();
            Ok(expr)
        },
        Some((Token::Unknown(text), line)) => Err(ParseError::InvalidCharacter { text: text.clone(),
                                                                                 line: *line, }),
        Some((_, line)) => Err(ParseError::ExpectedClosingParen { line: *line }),
        None => Err(ParseError::ExpectedClosingParen { line }),
    }
}

/// Parses an identifier as either a builtin call or a variable reference.
///
/// If the identifier names a builtin it must be followed by a parenthesized
/// argument list whose length matches the builtin's arity. Any other
/// identifier is a variable reference; a `(` after it is left for the caller,
/// where it usually surfaces as trailing tokens.
///
/// # Errors
/// - `IdentifierReserved` for `quit` used inside an expression.
/// - `ExpectedOpeningParen` when a builtin has no argument list.
/// - `ArgumentCountMismatch` when the argument count differs from the arity.
fn parse_identifier_or_function<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let (name, line) = match tokens.next() {
        Some((Token::Identifier(name), line)) => (name, *line),
        Some((tok, line)) => {
            return Err(ParseError::UnexpectedToken { token: format!("Expected identifier, found '{tok}'"),
                                                     line:  *line, });
        },
        None => return Err(ParseError::UnexpectedEndOfInput { line: 0 }),
    };

    if name == QUIT {
        return Err(ParseError::IdentifierReserved { name: name.clone(),
                                                    line });
    }

    let Some(function) = builtin::lookup(name) else {
        return Ok(Expr::Variable { name: name.clone(),
                                   line });
    };

    let arguments = parse_arguments(tokens, function.name, line)?;
    if arguments.len() != function.arity() {
        return Err(ParseError::ArgumentCountMismatch { name: name.clone(),
                                                       expected: function.arity(),
                                                       found: arguments.len(),
                                                       line });
    }

    Ok(Expr::FunctionCall { function,
                            arguments,
                            line })
}
