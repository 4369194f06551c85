use std::iter::Peekable;

use tracing::debug;

use crate::{
    ast::Statement,
    error::Error,
    interpreter::{
        evaluator::core::Context,
        lexer::{Token, tokenize},
        parser::statement::{parse_statement, skip_statement},
    },
};

/// What a successfully executed statement produced.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Outcome {
    /// The value of an expression statement.
    Value(f64),
    /// The `quit` command was read.
    Quit,
}

/// The result of executing one statement.
pub type StatementResult = Result<Outcome, Error>;

/// A long-lived evaluation session.
///
/// Variables assigned by one call to [`Session::run`] remain visible to later
/// calls. Line numbers continue across calls as well, so input can be fed in
/// arbitrary chunks.
#[derive(Debug)]
pub struct Session {
    context: Context,
    line:    usize,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    /// Creates a session with an empty environment, starting at line 1.
    #[must_use]
    pub fn new() -> Self {
        Self { context: Context::new(),
               line:    1, }
    }

    /// The variable environment of this session.
    #[must_use]
    pub const fn context(&self) -> &Context {
        &self.context
    }

    /// Executes every statement in `source`.
    ///
    /// Returns one result per statement, in order. A statement that fails to
    /// parse is skipped up to and including its `;`, and execution resumes
    /// with the next one. Execution stops after a `quit`.
    ///
    /// # Example
    /// ```
    /// use calc::interpreter::session::{Outcome, Session};
    ///
    /// let mut session = Session::new();
    /// let results = session.run("x = 3; 1 +; x * x;");
    ///
    /// assert_eq!(results[0], Ok(Outcome::Value(3.0)));
    /// assert!(results[1].is_err());
    /// assert_eq!(results[2], Ok(Outcome::Value(9.0)));
    /// ```
    pub fn run(&mut self, source: &str) -> Vec<StatementResult> {
        let tokens = tokenize(source, self.line);
        self.line += source.matches('\n').count();

        let mut iter = tokens.iter().peekable();
        let mut results = Vec::new();

        while iter.peek().is_some() {
            let result = self.run_statement(&mut iter);
            let quit = matches!(result, Ok(Outcome::Quit));
            results.push(result);
            if quit {
                break;
            }
        }

        results
    }

    /// Parses and evaluates the next statement of `tokens`.
    fn run_statement<'a, I>(&mut self, tokens: &mut Peekable<I>) -> StatementResult
        where I: Iterator<Item = &'a (Token, usize)> + Clone
    {
        let statement = match parse_statement(tokens) {
            Ok(statement) => statement,
            Err(e) => {
                debug!(line = e.line(), error = %e, "parse failed, skipping to the next statement");
                skip_statement(tokens);
                return Err(e.into());
            },
        };

        match statement {
            Statement::Quit { line } => {
                debug!(line, "quit");
                Ok(Outcome::Quit)
            },
            Statement::Expression { expr, line } => match self.context.eval(&expr) {
                Ok(value) => {
                    debug!(line, value, "evaluated statement");
                    Ok(Outcome::Value(value))
                },
                Err(e) => {
                    debug!(line = e.line(), error = %e, "evaluation failed");
                    Err(e.into())
                },
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ParseError, RuntimeError};

    fn values(results: &[StatementResult]) -> Vec<Option<f64>> {
        results.iter()
               .map(|r| match r {
                   Ok(Outcome::Value(v)) => Some(*v),
                   _ => None,
               })
               .collect()
    }

    #[test]
    fn variables_persist_across_runs() {
        let mut session = Session::new();
        assert_eq!(session.run("x = 3;"), vec![Ok(Outcome::Value(3.0))]);
        assert_eq!(session.run("x * x;"), vec![Ok(Outcome::Value(9.0))]);
        assert_eq!(session.context().get_variable("x"), Some(3.0));
    }

    #[test]
    fn unbound_variable_aborts_only_its_statement() {
        let mut session = Session::new();
        let results = session.run("y + 1; 2;");
        assert_eq!(results[0],
                   Err(Error::Runtime(RuntimeError::UnknownVariable { name: "y".to_string(),
                                                                      line: 1, })));
        assert_eq!(results[1], Ok(Outcome::Value(2.0)));
        assert!(session.context().is_empty());
    }

    #[test]
    fn parse_error_resynchronizes_at_semicolon() {
        let mut session = Session::new();
        let results = session.run("1 + * 2 3; 4 + 5;");
        assert_eq!(results.len(), 2);
        assert!(matches!(results[0], Err(Error::Parse(_))));
        assert_eq!(results[1], Ok(Outcome::Value(9.0)));
    }

    #[test]
    fn trailing_tokens_do_not_leak_into_next_statement() {
        let mut session = Session::new();
        let results = session.run("f(1, 2); 7;");
        assert_eq!(results.len(), 2);
        assert_eq!(results[1], Ok(Outcome::Value(7.0)));
    }

    #[test]
    fn empty_statement_is_an_error() {
        let mut session = Session::new();
        let results = session.run(";1;");
        assert_eq!(values(&results), vec![None, Some(1.0)]);
    }

    #[test]
    fn quit_stops_execution() {
        let mut session = Session::new();
        let results = session.run("1; quit; x = 2;");
        assert_eq!(results, vec![Ok(Outcome::Value(1.0)), Ok(Outcome::Quit)]);
        assert_eq!(session.context().get_variable("x"), None);
    }

    #[test]
    fn final_statement_may_omit_semicolon() {
        let mut session = Session::new();
        assert_eq!(values(&session.run("1; 2 * 3")), vec![Some(1.0), Some(6.0)]);
    }

    #[test]
    fn line_numbers_continue_between_runs() {
        let mut session = Session::new();
        session.run("1;\n2;\n");
        let results = session.run("nope;");
        assert_eq!(results,
                   vec![Err(Error::Runtime(RuntimeError::UnknownVariable { name:
                                                                               "nope".to_string(),
                                                                           line: 3, }))]);
    }

    #[test]
    fn invalid_character_is_a_statement_error() {
        let mut session = Session::new();
        let results = session.run("2 # 3; 5;");
        assert_eq!(results[0],
                   Err(Error::Parse(ParseError::InvalidCharacter { text: "#".to_string(),
                                                                    line: 1, })));
        assert_eq!(results[1], Ok(Outcome::Value(5.0)));

        let results = session.run("#;");
        assert_eq!(results,
                   vec![Err(Error::Parse(ParseError::InvalidCharacter { text: "#".to_string(),
                                                                        line: 1, }))]);
    }

    #[test]
    fn division_by_zero_is_not_an_error() {
        let mut session = Session::new();
        let results = session.run("1 / 0; -1 / 0;");
        assert_eq!(values(&results), vec![Some(f64::INFINITY), Some(f64::NEG_INFINITY)]);
    }
}
