use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::core::Value},
};

/// Evaluates a binary operation over two evaluated operands.
///
/// Dispatch, in order:
/// - two integers support the full operator set;
/// - two strings support `+` (concatenation) only;
/// - two booleans, or two nulls, support `==` and `!=`;
/// - operands of different types are a type mismatch;
/// - anything else is an unknown operator for that type.
///
/// # Errors
/// Type mismatches, unsupported operators, and division or modulo by zero.
///
/// # Example
/// ```
/// use monkey::{
///     ast::BinaryOperator,
///     interpreter::{evaluator::binary::eval_binary, value::core::Value},
/// };
///
/// let v = eval_binary(BinaryOperator::Mul, &Value::Integer(6), &Value::Integer(7)).unwrap();
/// assert_eq!(v, Value::Integer(42));
///
/// let e = eval_binary(BinaryOperator::Add, &Value::Integer(5), &Value::Boolean(true));
/// assert_eq!(e.unwrap_err().to_string(), "Error: type mismatch: INTEGER + BOOLEAN");
/// ```
pub fn eval_binary(op: BinaryOperator, left: &Value, right: &Value) -> EvalResult<Value> {
    use BinaryOperator::{Equal, NotEqual};

    match (left, right) {
        (Value::Integer(l), Value::Integer(r)) => eval_integer_binary(op, *l, *r),
        (Value::String(l), Value::String(r)) => eval_string_binary(op, l, r),
        (Value::Boolean(l), Value::Boolean(r)) if matches!(op, Equal | NotEqual) => {
            Ok(Value::Boolean(match op {
                                  Equal => l == r,
                                  _ => l != r,
                              }))
        },
        (Value::Null, Value::Null) if matches!(op, Equal | NotEqual) => {
            Ok(Value::Boolean(op == Equal))
        },
        _ if left.type_name() != right.type_name() => {
            Err(RuntimeError::TypeMismatch { left: left.type_name(),
                                             op,
                                             right: right.type_name() })
        },
        _ => Err(RuntimeError::UnknownBinaryOperator { left: left.type_name(),
                                                       op,
                                                       right: right.type_name() }),
    }
}

/// Integer arithmetic and comparison.
///
/// Arithmetic wraps on overflow, mirroring two's-complement host semantics.
/// Division and modulo by zero are rejected explicitly.
fn eval_integer_binary(op: BinaryOperator, left: i64, right: i64) -> EvalResult<Value> {
    use BinaryOperator::{
        Add, Div, Equal, Greater, GreaterEqual, Less, LessEqual, Mod, Mul, NotEqual, Sub,
    };

    let value = match op {
        Add => Value::Integer(left.wrapping_add(right)),
        Sub => Value::Integer(left.wrapping_sub(right)),
        Mul => Value::Integer(left.wrapping_mul(right)),
        Div => {
            if right == 0 {
                return Err(RuntimeError::DivisionByZero);
            }
            Value::Integer(left.wrapping_div(right))
        },
        Mod => {
            if right == 0 {
                return Err(RuntimeError::DivisionByZero);
            }
            Value::Integer(left.wrapping_rem(right))
        },
        Less => Value::Boolean(left < right),
        Greater => Value::Boolean(left > right),
        LessEqual => Value::Boolean(left <= right),
        GreaterEqual => Value::Boolean(left >= right),
        Equal => Value::Boolean(left == right),
        NotEqual => Value::Boolean(left != right),
    };

    Ok(value)
}

/// String operations. Only concatenation is defined.
fn eval_string_binary(op: BinaryOperator, left: &str, right: &str) -> EvalResult<Value> {
    match op {
        BinaryOperator::Add => Ok(Value::String(format!("{left}{right}"))),
        _ => Err(RuntimeError::UnknownBinaryOperator { left: "STRING",
                                                       op,
                                                       right: "STRING" }),
    }
}
