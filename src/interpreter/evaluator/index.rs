use crate::{
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::core::Value},
};

/// Evaluates an indexing operation over two evaluated operands.
///
/// - Array indexed by integer: the element at that position, or `null` when
///   the index is negative or past the end.
/// - Hash indexed by a hashable key: the stored value, or `null` on a miss.
///   A non-hashable key is an error.
/// - Indexing any other value is an error.
///
/// # Errors
/// Unusable hash keys and unsupported index targets.
///
/// # Example
/// ```
/// use monkey::interpreter::{evaluator::index::eval_index, value::core::Value};
///
/// let array = Value::from(vec![Value::Integer(10), Value::Integer(20)]);
///
/// assert_eq!(eval_index(&array, &Value::Integer(1)).unwrap(), Value::Integer(20));
/// assert_eq!(eval_index(&array, &Value::Integer(9)).unwrap(), Value::Null);
/// ```
pub fn eval_index(left: &Value, index: &Value) -> EvalResult<Value> {
    match (left, index) {
        (Value::Array(elements), Value::Integer(i)) => {
            let element = usize::try_from(*i).ok().and_then(|i| elements.get(i));
            Ok(element.cloned().unwrap_or(Value::Null))
        },
        (Value::Hash(pairs), key) => {
            let hash_key = key.hash_key()?;
            Ok(pairs.get(&hash_key)
                    .map_or(Value::Null, |pair| pair.value.clone()))
        },
        (other, _) => Err(RuntimeError::IndexNotSupported { type_name: other.type_name() }),
    }
}
