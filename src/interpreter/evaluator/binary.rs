use crate::{ast::BinaryOperator, interpreter::evaluator::core::Context};

impl Context {
    /// Evaluates a binary arithmetic operation.
    ///
    /// Division by zero is not an error: it yields an infinity, or NaN for
    /// `0 / 0`.
    ///
    /// # Example
    /// ```
    /// use calc::{ast::BinaryOperator, interpreter::evaluator::core::Context};
    ///
    /// assert_eq!(Context::eval_binary(BinaryOperator::Mul, 1.5, 2.0), 3.0);
    /// assert_eq!(Context::eval_binary(BinaryOperator::Div, 1.0, 0.0), f64::INFINITY);
    /// ```
    #[must_use]
    pub fn eval_binary(op: BinaryOperator, left: f64, right: f64) -> f64 {
        match op {
            BinaryOperator::Add => left + right,
            BinaryOperator::Sub => left - right,
            BinaryOperator::Mul => left * right,
            BinaryOperator::Div => left / right,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arithmetic() {
        assert_eq!(Context::eval_binary(BinaryOperator::Add, 2.0, 3.0), 5.0);
        assert_eq!(Context::eval_binary(BinaryOperator::Sub, 2.0, 3.0), -1.0);
        assert_eq!(Context::eval_binary(BinaryOperator::Mul, 2.0, 3.0), 6.0);
        assert_eq!(Context::eval_binary(BinaryOperator::Div, 3.0, 2.0), 1.5);
    }

    #[test]
    fn division_by_zero_follows_ieee() {
        assert_eq!(Context::eval_binary(BinaryOperator::Div, -1.0, 0.0), f64::NEG_INFINITY);
        assert!(Context::eval_binary(BinaryOperator::Div, 0.0, 0.0).is_nan());
    }
}
