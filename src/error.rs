/// Parsing errors.
///
/// Defines all error types that can occur while turning source text into an
/// AST. Parse errors include unexpected tokens, missing prefix rules, and
/// invalid literals. The parser collects these instead of aborting, so a
/// single parse can surface several of them.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation. Runtime
/// errors include type mismatches, unknown operators, unresolved identifiers,
/// bad call targets, and division by zero.
pub mod runtime_error;

pub use parse_error::{ParseError, ParseErrors};
pub use runtime_error::RuntimeError;
