use std::rc::Rc;

use crate::{
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::core::Value},
};

/// Type alias for builtin function handlers.
///
/// A builtin receives the slice of already-evaluated argument values and
/// returns a value or a runtime error.
pub type BuiltinFn = fn(&[Value]) -> EvalResult<Value>;

/// A built-in function provided by the interpreter.
///
/// Builtins are resolved as a fallback during identifier lookup, so language
/// code can shadow them with its own bindings. Each entry carries its
/// expected arity; the count is checked before the handler runs.
#[derive(Debug, Clone, Copy)]
pub struct Builtin {
    name:  &'static str,
    arity: usize,
    func:  BuiltinFn,
}

impl Builtin {
    /// The name the builtin is registered under.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Invokes the builtin with the given arguments.
    ///
    /// # Errors
    /// Returns an argument-count error when the arity does not match, or
    /// whatever error the handler itself produces.
    pub fn call(&self, args: &[Value]) -> EvalResult<Value> {
        if args.len() != self.arity {
            return Err(RuntimeError::ArgumentCountMismatch { got:  args.len(),
                                                             want: self.arity, });
        }
        (self.func)(args)
    }
}

impl PartialEq for Builtin {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

/// Defines the builtin registry.
///
/// Each entry provides a name, an expected argument count, and the handler
/// implementing the builtin. The macro produces the static lookup table and
/// the public list of builtin names.
macro_rules! builtin_functions {
    (
        $(
            $name:literal => {
                arity: $arity:expr,
                func: $func:expr $(,)?
            }
        ),* $(,)?
    ) => {
        static BUILTIN_TABLE: &[Builtin] = &[
            $(
                Builtin { name: $name, arity: $arity, func: $func },
            )*
        ];
        /// The names of all registered builtins, in registration order.
        pub const BUILTIN_NAMES: &[&str] = &[
            $($name,)*
        ];
    };
}

builtin_functions! {
    "len"   => { arity: 1, func: len },
    "first" => { arity: 1, func: first },
    "last"  => { arity: 1, func: last },
    "rest"  => { arity: 1, func: rest },
    "push"  => { arity: 2, func: push },
}

/// Finds a builtin by name.
///
/// # Example
/// ```
/// use monkey::interpreter::{evaluator::builtin, value::core::Value};
///
/// let len = builtin::lookup("len").unwrap();
/// assert_eq!(len.call(&[Value::from("hello")]).unwrap(), Value::Integer(5));
///
/// assert!(builtin::lookup("missing").is_none());
/// ```
#[must_use]
pub fn lookup(name: &str) -> Option<Builtin> {
    BUILTIN_TABLE.iter().find(|builtin| builtin.name == name).copied()
}

/// `len(x)`: byte length of a string, element count of an array, and 0 for
/// `null`.
fn len(args: &[Value]) -> EvalResult<Value> {
    match &args[0] {
        Value::String(s) => Ok(Value::Integer(s.len() as i64)),
        Value::Array(elements) => Ok(Value::Integer(elements.len() as i64)),
        Value::Null => Ok(Value::Integer(0)),
        other => Err(RuntimeError::UnsupportedArgument { function:  "len",
                                                         type_name: other.type_name(), }),
    }
}

/// `first(a)`: the first element of an array, or `null` when it is empty.
fn first(args: &[Value]) -> EvalResult<Value> {
    match &args[0] {
        Value::Array(elements) => Ok(elements.first().cloned().unwrap_or(Value::Null)),
        other => Err(RuntimeError::UnsupportedArgument { function:  "first",
                                                         type_name: other.type_name(), }),
    }
}

/// `last(a)`: the last element of an array, or `null` when it is empty.
fn last(args: &[Value]) -> EvalResult<Value> {
    match &args[0] {
        Value::Array(elements) => Ok(elements.last().cloned().unwrap_or(Value::Null)),
        other => Err(RuntimeError::UnsupportedArgument { function:  "last",
                                                         type_name: other.type_name(), }),
    }
}

/// `rest(a)`: a new array of everything but the first element, or `null`
/// when the array is empty. The original array is unchanged.
fn rest(args: &[Value]) -> EvalResult<Value> {
    match &args[0] {
        Value::Array(elements) => {
            if elements.is_empty() {
                return Ok(Value::Null);
            }
            Ok(Value::Array(Rc::new(elements[1..].to_vec())))
        },
        other => Err(RuntimeError::UnsupportedArgument { function:  "rest",
                                                         type_name: other.type_name(), }),
    }
}

/// `push(a, x)`: a new array with `x` appended. The original array is
/// unchanged.
fn push(args: &[Value]) -> EvalResult<Value> {
    match &args[0] {
        Value::Array(elements) => {
            let mut extended = elements.as_ref().clone();
            extended.push(args[1].clone());
            Ok(Value::Array(Rc::new(extended)))
        },
        other => Err(RuntimeError::UnsupportedArgument { function:  "push",
                                                         type_name: other.type_name(), }),
    }
}
