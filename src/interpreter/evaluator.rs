/// Core evaluation logic.
///
/// Contains the main tree-walking dispatch for programs, statements, blocks,
/// and expressions, plus identifier resolution and the early-return and error
/// propagation rules.
pub mod core;

/// Unary operator evaluation.
///
/// Handles the two prefix operators: logical NOT over truthiness and integer
/// negation.
pub mod unary;

/// Binary operator evaluation.
///
/// Implements evaluation for all infix operations over evaluated operand
/// pairs: integer arithmetic and comparison, string concatenation, and
/// boolean/null equality.
pub mod binary;

/// Index operator evaluation.
///
/// Implements array indexing by integer and hash lookup by hashable key.
pub mod index;

/// Function call evaluation.
///
/// Handles calls to user-defined functions (closure environments, parameter
/// binding, return unwrapping) and to builtins.
pub mod function;

/// Built-in functions.
///
/// Defines the fixed builtin registry and the implementations of `len`,
/// `first`, `last`, `rest`, and `push`.
pub mod builtin;
