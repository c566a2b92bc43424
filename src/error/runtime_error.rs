use std::fmt;

use crate::ast::{BinaryOperator, UnaryOperator};

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during evaluation.
///
/// Runtime errors are ordinary values in the language: the first one produced
/// anywhere in a compound expression becomes the result of the whole
/// evaluation. They propagate through every enclosing construct up to the
/// program boundary and are never caught by language code.
///
/// The [`fmt::Display`] form is the user-facing inspection string, e.g.
/// `Error: type mismatch: INTEGER + BOOLEAN`.
pub enum RuntimeError {
    /// A binary operator was applied to operands of different types.
    TypeMismatch {
        /// Type name of the left operand.
        left:  &'static str,
        /// The operator.
        op:    BinaryOperator,
        /// Type name of the right operand.
        right: &'static str,
    },
    /// A binary operator was applied to same-typed operands that do not
    /// support it.
    UnknownBinaryOperator {
        /// Type name of the left operand.
        left:  &'static str,
        /// The operator.
        op:    BinaryOperator,
        /// Type name of the right operand.
        right: &'static str,
    },
    /// A unary operator was applied to an operand that does not support it.
    UnknownUnaryOperator {
        /// The operator.
        op:      UnaryOperator,
        /// Type name of the operand.
        operand: &'static str,
    },
    /// A name resolved neither in the environment chain nor in the builtin
    /// registry.
    IdentifierNotFound {
        /// The unresolved name.
        name: String,
    },
    /// Something other than a function or builtin was called.
    NotAFunction {
        /// Type name of the called value.
        type_name: &'static str,
    },
    /// A call supplied the wrong number of arguments.
    ArgumentCountMismatch {
        /// How many arguments were supplied.
        got:  usize,
        /// How many the callee expects.
        want: usize,
    },
    /// A builtin received an argument of an unsupported type.
    UnsupportedArgument {
        /// The builtin's name.
        function:  &'static str,
        /// Type name of the offending argument.
        type_name: &'static str,
    },
    /// A value that is not hashable was used as a hash key.
    UnusableHashKey {
        /// Type name of the offending key.
        type_name: &'static str,
    },
    /// The index operator was applied to a value that does not support it.
    IndexNotSupported {
        /// Type name of the indexed value.
        type_name: &'static str,
    },
    /// Attempted division or modulo by zero.
    DivisionByZero,
}

impl fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TypeMismatch { left, op, right } => {
                write!(f, "Error: type mismatch: {left} {op} {right}")
            },
            Self::UnknownBinaryOperator { left, op, right } => {
                write!(f, "Error: unknown operator: {left} {op} {right}")
            },
            Self::UnknownUnaryOperator { op, operand } => {
                write!(f, "Error: unknown operator: {op}{operand}")
            },
            Self::IdentifierNotFound { name } => {
                write!(f, "Error: identifier not found: {name}")
            },
            Self::NotAFunction { type_name } => write!(f, "Error: not a function: {type_name}"),
            Self::ArgumentCountMismatch { got, want } => {
                write!(f, "Error: wrong number of arguments. got={got}, want={want}")
            },
            Self::UnsupportedArgument { function, type_name } => write!(f,
                                                                        "Error: argument to `{function}` not supported, got {type_name}"),
            Self::UnusableHashKey { type_name } => {
                write!(f, "Error: unusable as hash key: {type_name}")
            },
            Self::IndexNotSupported { type_name } => {
                write!(f, "Error: index operator not supported: {type_name}")
            },
            Self::DivisionByZero => write!(f, "Error: division by zero"),
        }
    }
}

impl std::error::Error for RuntimeError {}
