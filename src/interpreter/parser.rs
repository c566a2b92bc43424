/// Core parsing logic and parser state.
///
/// Contains the two-cursor [`Parser`] itself, the top-level program loop,
/// statement dispatch, and block parsing.
///
/// [`Parser`]: core::Parser
pub mod core;

/// Expression parsing.
///
/// Implements the Pratt half of the parser: prefix rules for every token
/// kind that can begin an expression, and infix rules for binary operators,
/// calls, and indexing, driven by the precedence ladder.
pub mod expression;

/// The operator-precedence ladder.
///
/// Maps token kinds to precedence levels, from `==`/`!=` at the bottom up to
/// indexing at the top.
pub mod precedence;
