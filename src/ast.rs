use crate::interpreter::evaluator::function::builtin::Builtin;

/// An abstract syntax tree (AST) node representing an expression.
///
/// Every node exclusively owns its children, so a parsed expression is always
/// a tree. Each variant carries the line it started on for error reporting.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A numeric literal.
    Literal {
        /// The constant value.
        value: f64,
        /// Line number in the source code.
        line:  usize,
    },
    /// Reference to a variable by name.
    Variable {
        /// Name of the variable. Lookup is case-sensitive.
        name: String,
        /// Line number in the source code.
        line: usize,
    },
    /// Stores the value of `value` under `name` and yields it.
    Assignment {
        /// Name of the variable being written.
        name:  String,
        /// The expression whose value is stored.
        value: Box<Self>,
        /// Line number in the source code.
        line:  usize,
    },
    /// A unary operation (`-x` or `+x`).
    UnaryOp {
        /// The unary operator to apply.
        op:   UnaryOperator,
        /// The operand expression.
        expr: Box<Self>,
        /// Line number in the source code.
        line: usize,
    },
    /// A binary arithmetic operation.
    BinaryOp {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand.
        right: Box<Self>,
        /// Line number in the source code.
        line:  usize,
    },
    /// Call of a builtin function (e.g. `atan2(y, x)`).
    ///
    /// The parser guarantees `arguments.len() == function.arity()`.
    FunctionCall {
        /// The resolved builtin.
        function:  &'static Builtin,
        /// Arguments to the function, evaluated left to right.
        arguments: Vec<Self>,
        /// Line number in the source code.
        line:      usize,
    },
}

/// Represents a top-level statement.
///
/// Statements are the `;`-terminated units read from the input.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// A standalone expression evaluated for its result.
    Expression {
        /// The expression to evaluate.
        expr: Expr,
        /// Line number in the source code.
        line: usize,
    },
    /// The `quit` command. Nothing is evaluated.
    Quit {
        /// Line number in the source code.
        line: usize,
    },
}

/// Represents a binary arithmetic operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
}

/// Represents a unary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Arithmetic negation (e.g. `-x`).
    Negate,
    /// Identity (e.g. `+x`).
    Plus,
}
