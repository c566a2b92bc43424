/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads the raw source text and produces a stream of tokens, each
/// corresponding to a meaningful language element such as an integer,
/// identifier, operator, delimiter, or keyword. This is the first stage of
/// interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into kind-plus-literal tokens.
/// - Resolves keywords against the identifier rule.
/// - Emits `ILLEGAL` tokens for unrecognized characters instead of failing.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser processes the token stream produced by the lexer and constructs
/// an AST representing the syntactic structure of statements and expressions.
/// Operator precedence is resolved by precedence climbing with per-token
/// prefix and infix rules.
///
/// # Responsibilities
/// - Converts tokens into structured AST nodes (expressions, statements).
/// - Resolves operator precedence and associativity.
/// - Collects descriptive errors and recovers instead of aborting.
pub mod parser;
/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator walks the AST, evaluates expressions and statements against
/// an environment, applies functions and builtins, and propagates early
/// returns and runtime errors to the appropriate boundary. It is the core
/// execution engine of the interpreter.
///
/// # Responsibilities
/// - Evaluates AST nodes, performing all supported operations.
/// - Implements closure calls, builtins, and control flow.
/// - Reports runtime errors such as type mismatches or division by zero.
pub mod evaluator;
/// The value module defines the runtime data types for evaluation.
///
/// This module declares all the value types used during execution: integers,
/// booleans, null, strings, arrays, hashes, functions, and builtins. It also
/// provides hash key derivation, truthiness, type names, and the user-facing
/// rendering of values.
///
/// # Responsibilities
/// - Defines the `Value` enum and all supported value variants.
/// - Derives structural hash keys for hashable values.
/// - Renders values in their inspection form.
pub mod value;
/// The environment module implements lexical scoping.
///
/// An environment maps names to values and optionally links to an enclosing
/// environment. Lookups walk outward through the chain; bindings always write
/// to the innermost scope. Function values keep their defining environment
/// alive by holding a shared handle to it.
pub mod environment;
