use std::{collections::HashMap, rc::Rc};

use crate::{
    ast::{Block, Expr, Program, Statement},
    error::RuntimeError,
    interpreter::{
        environment::Env,
        evaluator::{binary, builtin, function, index, unary},
        value::core::{Function, HashPair, Value},
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// [`RuntimeError`] describing the failure. Errors short-circuit: the first
/// one produced anywhere inside a compound evaluation becomes the result of
/// the whole evaluation.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Evaluates a whole program in the given environment.
///
/// Statements run in order. A `return` reaching the top level ends the
/// program with the returned value; otherwise the result is the value of the
/// last statement, or `null` for an empty program.
///
/// # Errors
/// Returns the first [`RuntimeError`] produced by any statement.
///
/// # Example
/// ```
/// use monkey::interpreter::{
///     environment::Environment,
///     evaluator::core::eval_program,
///     lexer::Lexer,
///     parser::core::Parser,
/// };
///
/// let mut parser = Parser::new(Lexer::new("let double = fn(x) { x * 2 }; double(21)"));
/// let program = parser.parse_program();
/// assert!(parser.errors().is_empty());
///
/// let result = eval_program(&program, &Environment::new()).unwrap();
/// assert_eq!(result.to_string(), "42");
/// ```
pub fn eval_program(program: &Program, env: &Env) -> EvalResult<Value> {
    let mut result = Value::Null;

    for statement in &program.statements {
        result = eval_statement(statement, env)?;

        if let Value::Return(value) = result {
            return Ok(*value);
        }
    }

    Ok(result)
}

/// Evaluates the statements of a block.
///
/// Unlike [`eval_program`], a `return` marker is passed through unwrapped, so
/// it keeps propagating through arbitrarily nested blocks until a function
/// call or program boundary unwraps it.
pub(crate) fn eval_block(block: &Block, env: &Env) -> EvalResult<Value> {
    let mut result = Value::Null;

    for statement in &block.statements {
        result = eval_statement(statement, env)?;

        if matches!(result, Value::Return(_)) {
            return Ok(result);
        }
    }

    Ok(result)
}

fn eval_statement(statement: &Statement, env: &Env) -> EvalResult<Value> {
    match statement {
        Statement::Let { name, value } => {
            let value = eval_expression(value, env)?;
            env.borrow_mut().set(name.clone(), value.clone());
            Ok(value)
        },
        Statement::Return { value } => {
            let value = match value {
                Some(expr) => eval_expression(expr, env)?,
                None => Value::Null,
            };
            Ok(Value::Return(Box::new(value)))
        },
        Statement::Expression { expr } => eval_expression(expr, env),
    }
}

fn eval_expression(expr: &Expr, env: &Env) -> EvalResult<Value> {
    match expr {
        Expr::Literal(literal) => Ok(Value::from(literal)),
        Expr::Variable(name) => eval_variable(name, env),
        Expr::UnaryOp { op, expr } => {
            let value = eval_expression(expr, env)?;
            unary::eval_unary(*op, &value)
        },
        Expr::BinaryOp { left, op, right } => {
            let left = eval_expression(left, env)?;
            let right = eval_expression(right, env)?;
            binary::eval_binary(*op, &left, &right)
        },
        Expr::IfExpr { condition,
                       then_branch,
                       else_branch, } => {
            eval_if_expression(condition, then_branch, else_branch.as_ref(), env)
        },
        Expr::FunctionLiteral { parameters, body } => {
            Ok(Value::Function(Rc::new(Function { parameters: parameters.clone(),
                                                  body:       body.clone(),
                                                  env:        Rc::clone(env), })))
        },
        Expr::FunctionCall { function, arguments } => {
            let callee = eval_expression(function, env)?;
            let arguments = eval_expressions(arguments, env)?;
            function::apply_function(callee, arguments)
        },
        Expr::ArrayLiteral { elements } => {
            let elements = eval_expressions(elements, env)?;
            Ok(Value::Array(Rc::new(elements)))
        },
        Expr::Index { left, index } => {
            let left = eval_expression(left, env)?;
            let index = eval_expression(index, env)?;
            index::eval_index(&left, &index)
        },
        Expr::HashLiteral { pairs } => eval_hash_literal(pairs, env),
    }
}

/// Resolves a name against the environment chain, falling back to the
/// builtin registry.
fn eval_variable(name: &str, env: &Env) -> EvalResult<Value> {
    if let Some(value) = env.borrow().get(name) {
        return Ok(value);
    }
    if let Some(builtin) = builtin::lookup(name) {
        return Ok(Value::Builtin(builtin));
    }

    Err(RuntimeError::IdentifierNotFound { name: name.to_string() })
}

fn eval_if_expression(condition: &Expr,
                      then_branch: &Block,
                      else_branch: Option<&Block>,
                      env: &Env)
                      -> EvalResult<Value> {
    let condition = eval_expression(condition, env)?;

    if condition.is_truthy() {
        eval_block(then_branch, env)
    } else if let Some(alternative) = else_branch {
        eval_block(alternative, env)
    } else {
        Ok(Value::Null)
    }
}

/// Evaluates a list of expressions left to right, stopping at the first
/// error. Used for call arguments and array elements.
fn eval_expressions(exprs: &[Expr], env: &Env) -> EvalResult<Vec<Value>> {
    exprs.iter().map(|expr| eval_expression(expr, env)).collect()
}

fn eval_hash_literal(pairs: &[(Expr, Expr)], env: &Env) -> EvalResult<Value> {
    let mut hash = HashMap::new();

    for (key_expr, value_expr) in pairs {
        let key = eval_expression(key_expr, env)?;
        let hash_key = key.hash_key()?;
        let value = eval_expression(value_expr, env)?;
        hash.insert(hash_key, HashPair { key, value });
    }

    Ok(Value::Hash(Rc::new(hash)))
}
