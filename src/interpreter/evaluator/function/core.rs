use crate::{
    ast::Expr,
    interpreter::evaluator::{
        core::{Context, EvalResult},
        function::builtin::Builtin,
    },
};

impl Context {
    /// Evaluates a builtin call.
    ///
    /// Arguments are evaluated left to right, so assignments nested inside
    /// them take effect in that order, then the builtin is applied to the
    /// resulting values.
    ///
    /// # Parameters
    /// - `function`: The resolved builtin.
    /// - `arguments`: Argument expressions.
    /// - `line`: Line number for error reporting.
    ///
    /// # Returns
    /// The function result or the first error raised by an argument.
    pub(crate) fn eval_function_call(&mut self,
                                     function: &Builtin,
                                     arguments: &[Expr],
                                     line: usize)
                                     -> EvalResult<f64> {
        let arg_vals = arguments.iter()
                                .map(|arg| self.eval(arg))
                                .collect::<EvalResult<Vec<_>>>()?;

        function.call(&arg_vals, line)
    }
}
