use crate::{
    ast::UnaryOperator,
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::core::Value},
};

/// Evaluates a unary operation on a value.
///
/// Supported operators:
/// - `Not`: truthiness negation. `!true` is `false`, `!null` is `true`, and
///   any other value negates to `false`.
/// - `Negate`: integer negation with two's-complement wrapping.
///
/// # Errors
/// Negating a non-integer produces an unknown-operator error.
///
/// # Example
/// ```
/// use monkey::{
///     ast::UnaryOperator,
///     interpreter::{evaluator::unary::eval_unary, value::core::Value},
/// };
///
/// let v = eval_unary(UnaryOperator::Negate, &Value::Integer(5)).unwrap();
/// assert_eq!(v, Value::Integer(-5));
///
/// let v = eval_unary(UnaryOperator::Not, &Value::Null).unwrap();
/// assert_eq!(v, Value::Boolean(true));
/// ```
pub fn eval_unary(op: UnaryOperator, value: &Value) -> EvalResult<Value> {
    match op {
        UnaryOperator::Not => Ok(Value::Boolean(!value.is_truthy())),
        UnaryOperator::Negate => match value {
            Value::Integer(n) => Ok(Value::Integer(n.wrapping_neg())),
            other => Err(RuntimeError::UnknownUnaryOperator { op,
                                                              operand: other.type_name() }),
        },
    }
}
