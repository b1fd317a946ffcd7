//! The closed set of errors an evaluation can produce.
//!
//! Every error is pure data: it carries the original input text, a 1-based
//! start position, and a width, so callers can point at the exact offending
//! substring. Errors propagate unchanged to the caller; no stage retries.

use crate::ast::UnitName;
use crate::token::{Token, TokenKind};
use std::fmt;
use thiserror::Error;

/// The token kinds a parser position would have accepted, rendered like
/// `'+', '-', 'in'` in error messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpectedKinds(Vec<TokenKind>);

impl fmt::Display for ExpectedKinds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<String> = self.0.iter().map(|kind| kind.to_string()).collect();
        write!(f, "{}", names.join(", "))
    }
}

impl From<&[TokenKind]> for ExpectedKinds {
    fn from(kinds: &[TokenKind]) -> Self {
        Self(kinds.to_vec())
    }
}

/// An error in the user's input, from any stage of the pipeline.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum InputError {
    /// The parser read a token kind outside the expected set.
    #[error("got '{found}', but expected {expected}")]
    UnexpectedToken {
        input: String,
        found: String,
        expected: ExpectedKinds,
        position: usize,
        width: usize,
    },

    /// The parser needed another token but the input ended.
    #[error("reached end of input, but expected {expected}")]
    UnexpectedEndOfInput {
        input: String,
        expected: ExpectedKinds,
        position: usize,
    },

    /// The token source failed: a lexical error, or a read past the end.
    #[error("{message}")]
    TokenStream {
        input: String,
        message: String,
        position: usize,
        width: usize,
    },

    /// A `Number` token's text does not parse as a numeric literal.
    #[error("'{number}' is not a valid number")]
    InvalidNumber {
        input: String,
        number: String,
        position: usize,
        width: usize,
    },

    /// A unit name the catalog does not recognize.
    #[error("'{name}' is not a known measurement unit")]
    InvalidUnits {
        input: String,
        name: String,
        position: usize,
        width: usize,
    },

    /// An operator token with no arithmetic operation behind it (`*`, `/`).
    #[error("'{operator}' is not a supported operation")]
    InvalidOperator {
        input: String,
        operator: String,
        position: usize,
        width: usize,
    },

    /// Two known units of different dimensions, like miles and pounds.
    #[error("cannot convert from {from} to {to}")]
    InvalidUnitConversion {
        input: String,
        from: String,
        to: String,
        position: usize,
        width: usize,
    },
}

impl InputError {
    pub(crate) fn unexpected_token(input: &str, token: &Token, expected: &[TokenKind]) -> Self {
        InputError::UnexpectedToken {
            input: input.into(),
            found: token.text.clone(),
            expected: expected.into(),
            position: token.position,
            width: token.width(),
        }
    }

    pub(crate) fn unexpected_eof(input: &str, token: &Token, expected: &[TokenKind]) -> Self {
        InputError::UnexpectedEndOfInput {
            input: input.into(),
            expected: expected.into(),
            position: token.position,
        }
    }

    pub(crate) fn token_stream(input: &str, message: impl Into<String>, position: usize) -> Self {
        InputError::TokenStream {
            input: input.into(),
            message: message.into(),
            position,
            width: 1,
        }
    }

    pub(crate) fn invalid_number(input: &str, token: &Token) -> Self {
        InputError::InvalidNumber {
            input: input.into(),
            number: token.text.clone(),
            position: token.position,
            width: token.width(),
        }
    }

    pub(crate) fn invalid_units(input: &str, unit: &UnitName) -> Self {
        InputError::InvalidUnits {
            input: input.into(),
            name: unit.name.clone(),
            position: unit.position,
            width: unit.width(),
        }
    }

    pub(crate) fn invalid_operator(input: &str, token: &Token) -> Self {
        InputError::InvalidOperator {
            input: input.into(),
            operator: token.text.clone(),
            position: token.position,
            width: token.width(),
        }
    }

    pub(crate) fn invalid_unit_conversion(input: &str, from: &UnitName, to: &UnitName) -> Self {
        InputError::InvalidUnitConversion {
            input: input.into(),
            from: from.name.clone(),
            to: to.name.clone(),
            position: from.position,
            width: from.width(),
        }
    }

    /// The original input text the error occurred in.
    pub fn input(&self) -> &str {
        match self {
            InputError::UnexpectedToken { input, .. }
            | InputError::UnexpectedEndOfInput { input, .. }
            | InputError::TokenStream { input, .. }
            | InputError::InvalidNumber { input, .. }
            | InputError::InvalidUnits { input, .. }
            | InputError::InvalidOperator { input, .. }
            | InputError::InvalidUnitConversion { input, .. } => input,
        }
    }

    /// The 1-based position of the offending substring.
    pub fn position(&self) -> usize {
        match self {
            InputError::UnexpectedToken { position, .. }
            | InputError::UnexpectedEndOfInput { position, .. }
            | InputError::TokenStream { position, .. }
            | InputError::InvalidNumber { position, .. }
            | InputError::InvalidUnits { position, .. }
            | InputError::InvalidOperator { position, .. }
            | InputError::InvalidUnitConversion { position, .. } => *position,
        }
    }

    /// The width of the offending substring in characters.
    pub fn width(&self) -> usize {
        match self {
            InputError::UnexpectedEndOfInput { .. } => 1,
            InputError::UnexpectedToken { width, .. }
            | InputError::TokenStream { width, .. }
            | InputError::InvalidNumber { width, .. }
            | InputError::InvalidUnits { width, .. }
            | InputError::InvalidOperator { width, .. }
            | InputError::InvalidUnitConversion { width, .. } => *width,
        }
    }

    /// Renders a caret diagnostic pointing at the offending input:
    ///
    /// ```text
    /// error: 'googles' is not a known measurement unit at position 4
    ///   |
    ///   | 32 googles
    ///   |    ^^^^^^^
    /// ```
    pub fn render(&self) -> String {
        let input = self.input().trim_end_matches('\n');
        let marker = format!(
            "{}{}",
            " ".repeat(self.position().saturating_sub(1)),
            "^".repeat(self.width())
        );
        format!(
            "error: {} at position {}\n  |\n  | {}\n  | {}",
            self,
            self.position(),
            input,
            marker
        )
    }
}
