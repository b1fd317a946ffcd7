//! Recursive-descent parser for quantity expressions.
//!
//! Grammar:
//!
//! ```text
//! expression := value (addop value)* (convert)?
//! value      := NUMBER UNITS
//! addop      := '+' | '-'
//! convert    := 'in' UNITS
//! ```
//!
//! One token of lookahead, supplied by the stream's push-back slot. Chains
//! of operators are left-associative: `a - b + c` parses as `(a - b) + c`.
//! A conversion clause is legal once, at the very end of the expression.

use crate::ast::{Expression, UnitName};
use crate::error::InputError;
use crate::lexer::Scanner;
use crate::stream::TokenStream;
use crate::token::{Token, TokenKind};

pub struct Parser<'a> {
    input: &'a str,
    stream: TokenStream,
}

impl<'a> Parser<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            stream: TokenStream::new(Scanner::new(input)),
        }
    }

    /// Parses the whole input into a single expression tree.
    pub fn parse(&mut self) -> Result<Expression, InputError> {
        let mut expression = self.parse_value()?;
        loop {
            match self.peek_kind()? {
                TokenKind::Plus => {
                    self.next_token()?;
                    let right = self.parse_value()?;
                    expression = Expression::addition(expression, right);
                }
                TokenKind::Minus => {
                    self.next_token()?;
                    let right = self.parse_value()?;
                    expression = Expression::subtraction(expression, right);
                }
                TokenKind::In => {
                    self.next_token()?;
                    let target = self.expect_units()?;
                    self.expect(TokenKind::Eof)?;
                    return Ok(Expression::conversion(expression, target));
                }
                TokenKind::Eof => {
                    self.next_token()?;
                    return Ok(expression);
                }
                TokenKind::Multiply | TokenKind::Divide => {
                    let token = self.next_token()?;
                    return Err(InputError::invalid_operator(self.input, &token));
                }
                _ => {
                    let token = self.next_token()?;
                    return Err(InputError::unexpected_token(
                        self.input,
                        &token,
                        &[TokenKind::Plus, TokenKind::Minus, TokenKind::In],
                    ));
                }
            }
        }
    }

    /// Parses a literal quantity like `23 pounds`.
    fn parse_value(&mut self) -> Result<Expression, InputError> {
        let number = self.expect(TokenKind::Number)?;
        let value = parse_number(&number.text)
            .ok_or_else(|| InputError::invalid_number(self.input, &number))?;
        let unit = self.expect_units()?;
        Ok(Expression::value(value, unit))
    }

    fn expect_units(&mut self) -> Result<UnitName, InputError> {
        let token = self.expect(TokenKind::Units)?;
        Ok(UnitName::new(token.text, token.position))
    }

    /// Reads a token of the given kind, or fails naming what was expected.
    fn expect(&mut self, kind: TokenKind) -> Result<Token, InputError> {
        let token = self.next_token()?;
        if token.kind == kind {
            Ok(token)
        } else if token.kind == TokenKind::Eof {
            Err(InputError::unexpected_eof(self.input, &token, &[kind]))
        } else {
            Err(InputError::unexpected_token(self.input, &token, &[kind]))
        }
    }

    /// Reads the next token, surfacing token-source failures as input errors.
    fn next_token(&mut self) -> Result<Token, InputError> {
        let token = self
            .stream
            .read()
            .map_err(|err| InputError::token_stream(self.input, err.to_string(), 1))?;
        if token.kind == TokenKind::Error {
            return Err(InputError::token_stream(
                self.input,
                token.text,
                token.position,
            ));
        }
        Ok(token)
    }

    /// One-token lookahead: reads the next token's kind, then pushes the
    /// token back.
    fn peek_kind(&mut self) -> Result<TokenKind, InputError> {
        let token = self.next_token()?;
        let kind = token.kind;
        self.stream.unread(token);
        Ok(kind)
    }
}

/// Converts a `Number` token's text to a float: grouping commas are
/// stripped, `0x`/`0X` literals (optionally signed) parse as hexadecimal,
/// everything else goes through `f64` parsing.
fn parse_number(text: &str) -> Option<f64> {
    let digits: String = text.chars().filter(|c| *c != ',').collect();
    let (sign, magnitude) = match digits.strip_prefix('-') {
        Some(rest) => (-1.0, rest),
        None => (1.0, digits.strip_prefix('+').unwrap_or(digits.as_str())),
    };
    if let Some(hex) = magnitude
        .strip_prefix("0x")
        .or_else(|| magnitude.strip_prefix("0X"))
    {
        return u64::from_str_radix(hex, 16).ok().map(|v| sign * v as f64);
    }
    digits.parse::<f64>().ok()
}
