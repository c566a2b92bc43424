//! # monkey
//!
//! monkey is a tree-walking interpreter for the Monkey programming language,
//! a small dynamically-typed scripting language with first-class functions,
//! closures, arrays, and hashes. Source text is lexed into tokens, parsed
//! into an AST by a precedence-climbing parser, and evaluated against a
//! lexically-scoped environment.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    error::ParseErrors,
    interpreter::{environment::Environment, evaluator::core::eval_program, lexer::Lexer,
                  parser::core::Parser},
};

/// Defines the structure of parsed code.
///
/// This module declares the `Expr` and `Statement` enums and related types
/// that represent the syntactic structure of source code as a tree. The AST
/// is built by the parser and traversed by the evaluator, and every node has
/// a deterministic string rendering.
///
/// # Responsibilities
/// - Defines expression and statement types for all language constructs.
/// - Defines the unary and binary operator enums.
/// - Renders nodes back to canonical source text.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised while parsing or
/// evaluating code. Parse errors are collected and reported together;
/// runtime errors short-circuit evaluation and render in the user-facing
/// `Error: ...` form.
///
/// # Responsibilities
/// - Defines error enums for parse-time and run-time failures.
/// - Pins the exact user-facing message formats.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation, value
/// representations, environments, and builtins to provide a complete runtime
/// for source code evaluation.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator, and values.
/// - Provides entry points for parsing and evaluating user code.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// The interactive read-eval-print loop.
///
/// Reads lines from the terminal, drives each through the pipeline against a
/// persistent environment, and prints results or collected parse errors.
pub mod repl;

/// Parses and evaluates a complete source text in a fresh environment.
///
/// All statements run in order against a single top-level environment. With
/// `print_result` set, the value of the last statement is printed in its
/// inspection form after the program finishes.
///
/// # Errors
/// Returns the collected parse errors if the source does not parse, or the
/// first runtime error the evaluation produces.
///
/// # Examples
/// ```
/// use monkey::get_result;
///
/// // Simple program: evaluates cleanly.
/// let res = get_result("let total = 2 + 2; total", false);
/// assert!(res.is_ok());
///
/// // Example with an intentional error (unknown binding).
/// let res = get_result("let y = x + 1", false); // 'x' is not defined
/// assert!(res.is_err());
/// ```
pub fn get_result(source: &str, print_result: bool) -> Result<(), Box<dyn std::error::Error>> {
    let mut parser = Parser::new(Lexer::new(source));
    let program = parser.parse_program();

    if !parser.errors().is_empty() {
        return Err(Box::new(ParseErrors::new(parser.into_errors())));
    }

    let env = Environment::new();
    let result = eval_program(&program, &env)?;

    if print_result {
        println!("{result}");
    }

    Ok(())
}
