use std::{collections::HashMap, fmt, rc::Rc};

use crate::{
    ast::{Block, Literal},
    error::RuntimeError,
    interpreter::{
        environment::Env,
        evaluator::{builtin::Builtin, core::EvalResult},
        value::hash_key::HashKey,
    },
};

/// Represents a runtime value in the interpreter.
///
/// This enum models all the types that can appear in expressions, bindings,
/// function returns, and conditions. Compound values share their payload
/// behind an `Rc`, so cloning a value never copies an array, hash, or
/// function body.
///
/// The [`fmt::Display`] impl renders the user-facing inspection form: `null`
/// for null, raw characters for strings, `[1, 2]` for arrays, and so on.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A 64-bit signed integer.
    Integer(i64),
    /// A boolean value (`true` or `false`).
    /// Produced by comparison operators (`<`, `==`, `!=`, etc.) and logical
    /// negation, and consumed by `if` conditions.
    Boolean(bool),
    /// The absence of a value. Produced by `if` expressions without a taken
    /// branch and by out-of-range array or hash lookups.
    Null,
    /// An immutable string of bytes.
    String(String),
    /// An array of values of any mix of types.
    Array(Rc<Vec<Self>>),
    /// A hash mapping derived keys to key/value pairs. The original key value
    /// is kept alongside each entry so the hash can render itself.
    Hash(Rc<HashMap<HashKey, HashPair>>),
    /// A user-defined function together with its captured environment.
    Function(Rc<Function>),
    /// A built-in function provided by the interpreter.
    Builtin(Builtin),
    /// An early-exit marker produced by `return`. It carries the returned
    /// value through enclosing blocks and is unwrapped at the first function
    /// call or program boundary it reaches.
    Return(Box<Self>),
}

/// A user-defined function value.
///
/// The function captures the environment it was defined in, not the caller's
/// environment. Names in the body resolve against that captured scope
/// extended with the call's parameter bindings, which is what makes closures
/// work.
#[derive(Clone)]
pub struct Function {
    /// Parameter names, in declaration order.
    pub parameters: Vec<String>,
    /// The function body.
    pub body:       Block,
    /// The environment captured at the definition site.
    pub env:        Env,
}

/// One entry of a hash: the key as written plus its value.
#[derive(Debug, Clone, PartialEq)]
pub struct HashPair {
    /// The original key value.
    pub key:   Value,
    /// The stored value.
    pub value: Value,
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Boolean(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::String(v.to_string())
    }
}

impl From<Vec<Self>> for Value {
    fn from(v: Vec<Self>) -> Self {
        Self::Array(Rc::new(v))
    }
}

impl From<&Literal> for Value {
    fn from(literal: &Literal) -> Self {
        match literal {
            Literal::Integer(n) => Self::Integer(*n),
            Literal::Boolean(b) => Self::Boolean(*b),
            Literal::String(s) => Self::String(s.clone()),
        }
    }
}

impl Value {
    /// Returns the user-facing name of this value's type.
    ///
    /// These names appear verbatim in runtime error messages, e.g.
    /// `type mismatch: INTEGER + BOOLEAN`.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Integer(_) => "INTEGER",
            Self::Boolean(_) => "BOOLEAN",
            Self::Null => "NULL",
            Self::String(_) => "STRING",
            Self::Array(_) => "ARRAY",
            Self::Hash(_) => "HASH",
            Self::Function(_) => "FUNCTION",
            Self::Builtin(_) => "BUILTIN",
            Self::Return(_) => "RETURN",
        }
    }

    /// Reports whether the value counts as true in a condition.
    ///
    /// Only `false` and `null` are falsey; every other value, including `0`
    /// and the empty string, is truthy.
    ///
    /// # Example
    /// ```
    /// use monkey::interpreter::value::core::Value;
    ///
    /// assert!(Value::Integer(0).is_truthy());
    /// assert!(Value::String(String::new()).is_truthy());
    /// assert!(!Value::Boolean(false).is_truthy());
    /// assert!(!Value::Null.is_truthy());
    /// ```
    #[must_use]
    pub const fn is_truthy(&self) -> bool {
        !matches!(self, Self::Boolean(false) | Self::Null)
    }

    /// Derives the hash key for this value.
    ///
    /// Only integers, booleans, and strings are hashable.
    ///
    /// # Errors
    /// Returns [`RuntimeError::UnusableHashKey`] for any other kind of value.
    pub fn hash_key(&self) -> EvalResult<HashKey> {
        match self {
            Self::Integer(n) => Ok(HashKey::integer(*n)),
            Self::Boolean(b) => Ok(HashKey::boolean(*b)),
            Self::String(s) => Ok(HashKey::string(s)),
            other => Err(RuntimeError::UnusableHashKey { type_name: other.type_name() }),
        }
    }
}

impl PartialEq for Function {
    fn eq(&self, other: &Self) -> bool {
        self.parameters == other.parameters
        && self.body == other.body
        && Rc::ptr_eq(&self.env, &other.env)
    }
}

impl fmt::Debug for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // The captured environment may reach this function again, so it is
        // deliberately left out of the debug output.
        f.debug_struct("Function")
         .field("parameters", &self.parameters)
         .field("body", &self.body)
         .finish_non_exhaustive()
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Boolean(b) => write!(f, "{b}"),
            Self::Null => write!(f, "null"),
            Self::String(s) => write!(f, "{s}"),
            Self::Array(elements) => {
                let elements = elements.iter()
                                       .map(ToString::to_string)
                                       .collect::<Vec<_>>()
                                       .join(", ");
                write!(f, "[{elements}]")
            },
            Self::Hash(pairs) => {
                let pairs = pairs.values()
                                 .map(|pair| format!("{}: {}", pair.key, pair.value))
                                 .collect::<Vec<_>>()
                                 .join(", ");
                write!(f, "{{{pairs}}}")
            },
            Self::Function(function) => {
                write!(f,
                       "fn({}) {{\n{}\n}}",
                       function.parameters.join(", "),
                       function.body)
            },
            Self::Builtin(_) => write!(f, "builtin function"),
            Self::Return(value) => write!(f, "{value}"),
        }
    }
}
