use crate::{
    error::RuntimeError,
    interpreter::{
        environment::Environment,
        evaluator::core::{EvalResult, eval_block},
        value::core::Value,
    },
};

/// Applies a callee to already-evaluated arguments.
///
/// For a user-defined function, a fresh environment enclosed by the
/// function's captured scope is created and each parameter is bound to the
/// corresponding argument; the body then runs as a block. A `return` marker
/// coming out of the body is unwrapped here, so it never escapes the call.
///
/// Builtins are invoked directly with the argument slice.
///
/// # Errors
/// - Calling anything that is neither a function nor a builtin.
/// - An argument count that does not match the callee's parameter count.
/// - Any error produced by the function body or the builtin.
///
/// # Example
/// ```
/// use monkey::interpreter::{evaluator::{builtin, function::apply_function}, value::core::Value};
///
/// let len = Value::Builtin(builtin::lookup("len").unwrap());
/// let result = apply_function(len, vec![Value::from("hello")]).unwrap();
///
/// assert_eq!(result, Value::Integer(5));
/// ```
pub fn apply_function(callee: Value, arguments: Vec<Value>) -> EvalResult<Value> {
    match callee {
        Value::Function(function) => {
            if arguments.len() != function.parameters.len() {
                return Err(RuntimeError::ArgumentCountMismatch { got:  arguments.len(),
                                                                 want:
                                                                     function.parameters.len(), });
            }

            let env = Environment::new_enclosed(&function.env);
            for (parameter, argument) in function.parameters.iter().zip(arguments) {
                env.borrow_mut().set(parameter.clone(), argument);
            }

            let result = eval_block(&function.body, &env)?;
            Ok(match result {
                   Value::Return(value) => *value,
                   other => other,
               })
        },
        Value::Builtin(builtin) => builtin.call(&arguments),
        other => Err(RuntimeError::NotAFunction { type_name: other.type_name() }),
    }
}
