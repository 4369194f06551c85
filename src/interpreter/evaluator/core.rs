use std::collections::HashMap;

use crate::{ast::Expr, error::RuntimeError};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Stores the runtime evaluation context.
///
/// This struct is the variable environment: a mapping from variable name to
/// the value most recently assigned to it. Entries are only created or
/// overwritten by evaluating an assignment and are never removed.
///
/// ## Usage
///
/// `Context` is created once per session and reused for every statement, so
/// variables persist from one statement to the next. Separate sessions own
/// separate contexts.
#[derive(Debug, Default, Clone)]
pub struct Context {
    variables: HashMap<String, f64>,
}

impl Context {
    /// Creates a new evaluation context with no variables.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Evaluates an expression and returns the resulting value.
    ///
    /// This is the main entry point for expression evaluation. Operands are
    /// evaluated left to right; assignments write to the context as they are
    /// reached, even if a later part of the expression fails.
    ///
    /// # Example
    /// ```
    /// use calc::{
    ///     ast::{BinaryOperator, Expr},
    ///     interpreter::evaluator::core::Context,
    /// };
    ///
    /// let mut ctx = Context::new();
    /// let expr = Expr::BinaryOp { left:  Box::new(Expr::Literal { value: 2.0,
    ///                                                            line:  1, }),
    ///                             op:    BinaryOperator::Add,
    ///                             right: Box::new(Expr::Literal { value: 3.0,
    ///                                                            line:  1, }),
    ///                             line:  1, };
    ///
    /// assert_eq!(ctx.eval(&expr).unwrap(), 5.0);
    /// ```
    ///
    /// # Errors
    /// `UnknownVariable` when a referenced variable was never assigned.
    pub fn eval(&mut self, expr: &Expr) -> EvalResult<f64> {
        match expr {
            Expr::Literal { value, .. } => Ok(*value),
            Expr::Variable { name, line } => self.eval_variable(name, *line),
            Expr::Assignment { name, value, .. } => {
                let value = self.eval(value)?;
                self.set_variable(name, value);
                Ok(value)
            },
            Expr::UnaryOp { op, expr, .. } => Ok(Self::eval_unary(*op, self.eval(expr)?)),
            Expr::BinaryOp { left, op, right, .. } => {
                let left = self.eval(left)?;
                let right = self.eval(right)?;
                Ok(Self::eval_binary(*op, left, right))
            },
            Expr::FunctionCall { function,
                                 arguments,
                                 line, } => self.eval_function_call(function, arguments, *line),
        }
    }

    /// Resolves a variable reference.
    ///
    /// # Errors
    /// `UnknownVariable` if `name` has no value yet.
    pub fn eval_variable(&self, name: &str, line: usize) -> EvalResult<f64> {
        self.get_variable(name)
            .ok_or_else(|| RuntimeError::UnknownVariable { name: name.to_string(),
                                                           line })
    }

    /// Looks up the current value of a variable.
    #[must_use]
    pub fn get_variable(&self, name: &str) -> Option<f64> {
        self.variables.get(name).copied()
    }

    /// Binds `name` to `value`, replacing any previous value.
    pub fn set_variable(&mut self, name: &str, value: f64) {
        tracing::trace!(name, value, "assign");
        self.variables.insert(name.to_string(), value);
    }

    /// The number of variables that have been assigned.
    #[must_use]
    pub fn len(&self) -> usize {
        self.variables.len()
    }

    /// Whether no variable has been assigned yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        ast::{BinaryOperator, UnaryOperator},
        interpreter::evaluator::function::builtin::lookup,
    };

    fn num(value: f64) -> Expr {
        Expr::Literal { value, line: 1 }
    }

    fn var(name: &str) -> Expr {
        Expr::Variable { name: name.to_string(),
                         line: 1, }
    }

    fn assign(name: &str, value: Expr) -> Expr {
        Expr::Assignment { name:  name.to_string(),
                           value: Box::new(value),
                           line:  1, }
    }

    fn binary(left: Expr, op: BinaryOperator, right: Expr) -> Expr {
        Expr::BinaryOp { left: Box::new(left),
                         op,
                         right: Box::new(right),
                         line: 1 }
    }

    #[test]
    fn literal_and_unary() {
        let mut ctx = Context::new();
        let expr = Expr::UnaryOp { op:   UnaryOperator::Negate,
                                   expr: Box::new(Expr::UnaryOp { op:   UnaryOperator::Negate,
                                                                  expr: Box::new(num(5.0)),
                                                                  line: 1, }),
                                   line: 1, };
        assert_eq!(ctx.eval(&expr).unwrap(), 5.0);
    }

    #[test]
    fn assignment_stores_and_returns_value() {
        let mut ctx = Context::new();
        assert_eq!(ctx.eval(&assign("x", num(3.0))).unwrap(), 3.0);
        assert_eq!(ctx.get_variable("x"), Some(3.0));
        assert_eq!(ctx.eval(&binary(var("x"), BinaryOperator::Mul, var("x"))).unwrap(), 9.0);

        ctx.eval(&assign("x", num(4.0))).unwrap();
        assert_eq!(ctx.get_variable("x"), Some(4.0));
        assert_eq!(ctx.len(), 1);
    }

    #[test]
    fn variables_are_case_sensitive() {
        let mut ctx = Context::new();
        ctx.set_variable("x", 1.0);
        assert!(ctx.eval(&var("X")).is_err());
    }

    #[test]
    fn unknown_variable_leaves_context_untouched() {
        let mut ctx = Context::new();
        let err = ctx.eval(&binary(var("y"), BinaryOperator::Add, num(1.0)))
                     .unwrap_err();
        assert_eq!(err,
                   RuntimeError::UnknownVariable { name: "y".to_string(),
                                                   line: 1, });
        assert!(ctx.is_empty());
    }

    #[test]
    fn failed_assignment_does_not_bind() {
        let mut ctx = Context::new();
        assert!(ctx.eval(&assign("x", var("missing"))).is_err());
        assert_eq!(ctx.get_variable("x"), None);
    }

    #[test]
    fn left_operand_is_evaluated_first() {
        let mut ctx = Context::new();
        let expr = binary(assign("a", num(2.0)), BinaryOperator::Mul, var("a"));
        assert_eq!(ctx.eval(&expr).unwrap(), 4.0);

        // The left side's assignment survives the failure on the right.
        let expr = binary(assign("b", num(1.0)), BinaryOperator::Add, var("nope"));
        assert!(ctx.eval(&expr).is_err());
        assert_eq!(ctx.get_variable("b"), Some(1.0));
    }

    #[test]
    fn function_call_evaluates_arguments() {
        let mut ctx = Context::new();
        ctx.set_variable("x", 10.0);
        let expr = Expr::FunctionCall { function:  lookup("pow").unwrap(),
                                        arguments: vec![num(2.0), var("x")],
                                        line:      1, };
        assert_eq!(ctx.eval(&expr).unwrap(), 1024.0);
    }

    #[test]
    fn hand_built_call_with_wrong_arity_fails() {
        let mut ctx = Context::new();
        let expr = Expr::FunctionCall { function:  lookup("sqrt").unwrap(),
                                        arguments: vec![num(4.0), num(5.0)],
                                        line:      3, };
        assert_eq!(ctx.eval(&expr).unwrap_err(),
                   RuntimeError::ArgumentCountMismatch { name:     "sqrt".to_string(),
                                                         expected: 1,
                                                         found:    2,
                                                         line:     3, });
    }
}
