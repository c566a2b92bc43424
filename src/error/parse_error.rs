use std::fmt;

use crate::interpreter::lexer::TokenKind;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents a single error encountered while parsing.
///
/// The parser never aborts on a violated expectation; it records one of these
/// and resumes at the next statement. All errors collected during a parse are
/// reported together once [`parse_program`] returns.
///
/// [`parse_program`]: crate::interpreter::parser::core::Parser::parse_program
pub enum ParseError {
    /// The token after the current one was not the expected kind.
    UnexpectedToken {
        /// The kind the grammar called for.
        expected: TokenKind,
        /// The kind actually found.
        got:      TokenKind,
    },
    /// A token kind with no prefix rule appeared in expression position.
    NoPrefixRule {
        /// The offending token kind.
        kind: TokenKind,
    },
    /// An integer literal could not be represented as an `i64`.
    InvalidIntegerLiteral {
        /// The literal text as written in the source.
        literal: String,
    },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnexpectedToken { expected, got } => {
                write!(f, "expected next token to be {expected}, got {got}")
            },
            Self::NoPrefixRule { kind } => write!(f, "no prefix parse function for {kind}"),
            Self::InvalidIntegerLiteral { literal } => {
                write!(f, "could not parse {literal} as integer")
            },
        }
    }
}

impl std::error::Error for ParseError {}

/// Every parse error collected from a single program, as one reportable unit.
///
/// Returned by entry points that parse a whole source text at once, where the
/// caller wants either a program or the complete list of what was wrong with
/// it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseErrors(Vec<ParseError>);

impl ParseErrors {
    /// Wraps the errors collected by a parser.
    #[must_use]
    pub fn new(errors: Vec<ParseError>) -> Self {
        Self(errors)
    }

    /// The individual errors, in the order they were recorded.
    #[must_use]
    pub fn errors(&self) -> &[ParseError] {
        &self.0
    }
}

impl fmt::Display for ParseErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "parser errors:")?;
        for error in &self.0 {
            writeln!(f, "\t{error}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ParseErrors {}
