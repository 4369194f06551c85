use std::io::{self, BufRead, Write};

use crate::interpreter::{
    lexer::{complete_prefix_len, is_quit_command},
    session::{Outcome, Session, StatementResult},
};

/// Shown when a new statement is expected.
pub const PROMPT: &str = "Calc> ";
/// Shown while a statement is still missing its `;`.
pub const CONTINUATION_PROMPT: &str = "....> ";

/// Totals of a batch of printed statement results.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    /// How many statements failed.
    pub failures: usize,
    /// Whether a `quit` was among the results.
    pub quit:     bool,
}

/// Writes each value to `output` and each error to `errors`, one per line.
///
/// # Errors
/// Propagates write failures.
pub fn print_results<W: Write, E: Write>(results: &[StatementResult],
                                         output: &mut W,
                                         errors: &mut E)
                                         -> io::Result<Summary> {
    let mut summary = Summary::default();

    for result in results {
        match result {
            Ok(Outcome::Value(value)) => writeln!(output, "{value}")?,
            Ok(Outcome::Quit) => summary.quit = true,
            Err(e) => {
                summary.failures += 1;
                writeln!(errors, "{e}")?;
            },
        }
    }

    Ok(summary)
}

/// A line-oriented read-eval-print loop.
///
/// Input is read a line at a time. Statements may span lines; everything up
/// to the last `;` typed so far is executed as soon as the line is complete,
/// and the remainder is kept for the next line. A bare `quit` ends the loop
/// even without a `;`, also when it follows complete statements on its line.
pub struct Repl<R, W, E> {
    input:       R,
    output:      W,
    errors:      E,
    session:     Session,
    show_prompt: bool,
}

impl<R: BufRead, W: Write, E: Write> Repl<R, W, E> {
    /// Creates a loop with a fresh session.
    pub fn new(input: R, output: W, errors: E, show_prompt: bool) -> Self {
        Self { input,
               output,
               errors,
               session: Session::new(),
               show_prompt }
    }

    /// Runs until `quit` or end of input.
    ///
    /// A statement left unterminated at end of input is still executed.
    ///
    /// # Errors
    /// Propagates I/O failures of the underlying handles. Errors in the
    /// statements themselves are printed and never end the loop.
    pub fn run(&mut self) -> io::Result<Summary> {
        let mut total = Summary::default();
        let mut pending = String::new();

        loop {
            self.prompt(pending.trim().is_empty())?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                if !pending.trim().is_empty() {
                    let summary = self.execute(&pending)?;
                    total.failures += summary.failures;
                    total.quit |= summary.quit;
                }
                return Ok(total);
            }
            pending.push_str(&line);

            if let Some(end) = complete_prefix_len(&pending) {
                let rest = pending.split_off(end);
                let summary = self.execute(&pending)?;
                total.failures += summary.failures;
                pending = rest;

                if summary.quit || is_quit_command(&pending) {
                    total.quit = true;
                    return Ok(total);
                }
            } else if is_quit_command(&pending) {
                total.quit = true;
                return Ok(total);
            }
        }
    }

    fn prompt(&mut self, fresh: bool) -> io::Result<()> {
        if self.show_prompt {
            let prompt = if fresh { PROMPT } else { CONTINUATION_PROMPT };
            write!(self.output, "{prompt}")?;
            self.output.flush()?;
        }
        Ok(())
    }

    fn execute(&mut self, source: &str) -> io::Result<Summary> {
        let results = self.session.run(source);
        print_results(&results, &mut self.output, &mut self.errors)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use pretty_assertions::assert_eq;

    use super::*;

    fn repl(input: &str, show_prompt: bool) -> (String, String, Summary) {
        let mut output = Vec::new();
        let mut errors = Vec::new();
        let summary = Repl::new(Cursor::new(input), &mut output, &mut errors, show_prompt).run()
                                                                                         .unwrap();
        (String::from_utf8(output).unwrap(), String::from_utf8(errors).unwrap(), summary)
    }

    #[test]
    fn prints_one_value_per_statement() {
        let (out, err, summary) = repl("2 + 3 * 4;\n(2 + 3) * 4;\n", false);
        assert_eq!(out, "14\n20\n");
        assert_eq!(err, "");
        assert_eq!(summary, Summary::default());
    }

    #[test]
    fn statements_may_span_lines() {
        let (out, _, _) = repl("1 +\n2\n;\n", false);
        assert_eq!(out, "3\n");
    }

    #[test]
    fn several_statements_on_one_line() {
        let (out, _, _) = repl("x = 2; x * 5; x + 1\n;", false);
        assert_eq!(out, "2\n10\n3\n");
    }

    #[test]
    fn errors_go_to_the_error_stream_and_loop_continues() {
        let (out, err, summary) = repl("y + 1;\n1 + 2 = 3;\n7;\n", false);
        assert_eq!(out, "7\n");
        assert_eq!(err,
                   "Error on line 1: Unknown variable 'y'.\nError on line 2: Only a variable can be assigned to.\n");
        assert_eq!(summary.failures, 2);
    }

    #[test]
    fn quit_ends_the_loop() {
        let (out, _, summary) = repl("1;\nquit;\n2;\n", false);
        assert_eq!(out, "1\n");
        assert!(summary.quit);
    }

    #[test]
    fn bare_quit_line_ends_the_loop() {
        let (out, _, summary) = repl("quit\n2;\n", false);
        assert_eq!(out, "");
        assert!(summary.quit);
    }

    #[test]
    fn unterminated_statement_runs_at_end_of_input() {
        let (out, _, summary) = repl("4 * 4", false);
        assert_eq!(out, "16\n");
        assert!(!summary.quit);
    }

    #[test]
    fn prompts_are_written_to_output() {
        let (out, _, _) = repl("1 +\n1;\n", true);
        assert_eq!(out, "Calc> ....> 2\nCalc> ");
    }

    #[test]
    fn bare_quit_after_statements_on_the_same_line() {
        let (out, err, summary) = repl("1; quit\n2;\n", false);
        assert_eq!(out, "1\n");
        assert_eq!(err, "");
        assert!(summary.quit);
    }

    #[test]
    fn block_comment_may_span_lines() {
        let (out, err, _) = repl("1 + /* ;\n */ 2;\n3;\n", false);
        assert_eq!(out, "3\n3\n");
        assert_eq!(err, "");
    }
}
