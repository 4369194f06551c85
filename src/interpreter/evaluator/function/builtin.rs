use crate::{error::RuntimeError, interpreter::evaluator::core::EvalResult};

/// The native implementation behind a builtin, tagged by arity.
#[derive(Debug, Clone, Copy)]
pub enum BuiltinFn {
    /// A function of one argument, such as `sin`.
    Unary(fn(f64) -> f64),
    /// A function of two arguments, such as `atan2`.
    Binary(fn(f64, f64) -> f64),
}

/// A named entry of the builtin table.
#[derive(Debug)]
pub struct Builtin {
    /// The name used to call the builtin. Matching is case-sensitive.
    pub name:     &'static str,
    /// The implementation.
    pub function: BuiltinFn,
}

impl PartialEq for Builtin {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

/// Defines builtin functions by generating a lookup table and a name list.
///
/// Each entry provides a string name and the arity-tagged implementation.
///
/// The macro produces:
/// - `BUILTIN_TABLE` (static table for lookup),
/// - `BUILTIN_FUNCTIONS` (public list of builtin names).
macro_rules! builtin_functions {
    (
        $(
            $name:literal => $kind:ident($func:expr)
        ),* $(,)?
    ) => {
        static BUILTIN_TABLE: &[Builtin] = &[
            $(
                Builtin { name: $name, function: BuiltinFn::$kind($func) },
            )*
        ];
        /// Names of every builtin, in table order.
        pub const BUILTIN_FUNCTIONS: &[&str] = &[
            $($name,)*
        ];
    };
}

builtin_functions! {
    "sqrt"  => Unary(f64::sqrt),
    "sin"   => Unary(f64::sin),
    "cos"   => Unary(f64::cos),
    "tan"   => Unary(f64::tan),
    "sinh"  => Unary(f64::sinh),
    "cosh"  => Unary(f64::cosh),
    "tanh"  => Unary(f64::tanh),
    "asin"  => Unary(f64::asin),
    "acos"  => Unary(f64::acos),
    "atan"  => Unary(f64::atan),
    "atan2" => Binary(f64::atan2),
    "exp"   => Unary(f64::exp),
    "pow"   => Binary(f64::powf),
    "log"   => Unary(f64::ln),
    "log10" => Unary(f64::log10),
    "log2"  => Unary(f64::log2),
}

/// Finds the builtin called `name`.
///
/// # Example
/// ```
/// use calc::interpreter::evaluator::function::builtin::lookup;
///
/// assert_eq!(lookup("atan2").map(|b| b.arity()), Some(2));
/// assert!(lookup("Sqrt").is_none());
/// ```
#[must_use]
pub fn lookup(name: &str) -> Option<&'static Builtin> {
    BUILTIN_TABLE.iter().find(|b| b.name == name)
}

impl Builtin {
    /// The number of arguments the builtin accepts.
    #[must_use]
    pub const fn arity(&self) -> usize {
        match self.function {
            BuiltinFn::Unary(_) => 1,
            BuiltinFn::Binary(_) => 2,
        }
    }

    /// Applies the builtin to already evaluated arguments.
    ///
    /// # Parameters
    /// - `args`: Argument values in call order.
    /// - `line`: Line number for error reporting.
    ///
    /// # Errors
    /// `ArgumentCountMismatch` if `args` does not match the arity. The parser
    /// rejects such calls, so this only guards hand-built trees.
    pub fn call(&self, args: &[f64], line: usize) -> EvalResult<f64> {
        match (self.function, args) {
            (BuiltinFn::Unary(f), &[x]) => Ok(f(x)),
            (BuiltinFn::Binary(f), &[x, y]) => Ok(f(x, y)),
            _ => Err(RuntimeError::ArgumentCountMismatch { name:     self.name.to_string(),
                                                           expected: self.arity(),
                                                           found:    args.len(),
                                                           line, }),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};

    use super::*;

    fn apply(name: &str, args: &[f64]) -> f64 {
        lookup(name).unwrap().call(args, 1).unwrap()
    }

    #[test]
    fn table_has_every_builtin_once() {
        assert_eq!(BUILTIN_FUNCTIONS.len(), 16);
        for name in BUILTIN_FUNCTIONS {
            assert_eq!(BUILTIN_FUNCTIONS.iter().filter(|n| *n == name).count(), 1);
            assert!(lookup(name).is_some());
        }
    }

    #[test]
    fn arities() {
        for name in ["sqrt", "sin", "cos", "tan", "sinh", "cosh", "tanh", "asin", "acos",
                     "atan", "exp", "log", "log10", "log2"]
        {
            assert_eq!(lookup(name).unwrap().arity(), 1, "{name}");
        }
        assert_eq!(lookup("atan2").unwrap().arity(), 2);
        assert_eq!(lookup("pow").unwrap().arity(), 2);
    }

    #[test]
    fn lookup_is_case_sensitive() {
        assert!(lookup("SIN").is_none());
        assert!(lookup("ln").is_none());
    }

    #[test]
    fn functions_compute_the_standard_results() {
        assert_eq!(apply("sqrt", &[9.0]), 3.0);
        assert_eq!(apply("pow", &[2.0, 10.0]), 1024.0);
        assert_eq!(apply("log", &[1.0]), 0.0);
        assert_eq!(apply("log10", &[1000.0]), 3.0);
        assert_eq!(apply("log2", &[8.0]), 3.0);
        assert_eq!(apply("exp", &[0.0]), 1.0);
        assert_eq!(apply("sin", &[0.0]), 0.0);
        assert_eq!(apply("cos", &[0.0]), 1.0);
        assert!((apply("atan", &[1.0]) - FRAC_PI_4).abs() < 1e-15);
        assert!((apply("asin", &[1.0]) - FRAC_PI_2).abs() < 1e-15);
        assert!((apply("acos", &[-1.0]) - PI).abs() < 1e-15);
        assert!((apply("atan2", &[1.0, -1.0]) - 3.0 * FRAC_PI_4).abs() < 1e-15);
    }

    #[test]
    fn domain_errors_follow_ieee() {
        assert!(apply("sqrt", &[-1.0]).is_nan());
        assert!(apply("asin", &[2.0]).is_nan());
        assert_eq!(apply("log", &[0.0]), f64::NEG_INFINITY);
    }

    #[test]
    fn call_rejects_wrong_value_count() {
        let err = lookup("pow").unwrap().call(&[1.0], 7).unwrap_err();
        assert_eq!(err,
                   RuntimeError::ArgumentCountMismatch { name:     "pow".to_string(),
                                                         expected: 2,
                                                         found:    1,
                                                         line:     7, });
    }
}
