//! The token source connecting the scanner to the parser.

use crate::lexer::Scanner;
use crate::token::Token;
use thiserror::Error;

/// Error returned when reading past the end of the token stream.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("no more tokens; the token stream is closed")]
pub struct StreamClosed;

/// Pull-based token source with a one-token push-back slot.
///
/// Tokens arrive in scan order, exactly once. The stream closes after the
/// terminal token (`Eof` or `Error`); reading past it is an error. The
/// push-back slot gives the parser its single token of lookahead.
pub struct TokenStream {
    scanner: Scanner,
    unread: Option<Token>,
}

impl TokenStream {
    pub fn new(scanner: Scanner) -> Self {
        Self {
            scanner,
            unread: None,
        }
    }

    /// Reads the next token, preferring a pushed-back one.
    pub fn read(&mut self) -> Result<Token, StreamClosed> {
        if let Some(token) = self.unread.take() {
            return Ok(token);
        }
        self.scanner.next_token().ok_or(StreamClosed)
    }

    /// Pushes a token back; the next [`read`](Self::read) returns it again.
    /// The slot holds exactly one token.
    pub fn unread(&mut self, token: Token) {
        debug_assert!(self.unread.is_none(), "push-back slot already occupied");
        self.unread = Some(token);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::TokenKind;

    #[test]
    fn test_tokens_arrive_in_scan_order() {
        let mut stream = TokenStream::new(Scanner::new("2 + 2"));
        assert_eq!(stream.read().unwrap().kind, TokenKind::Number);
        assert_eq!(stream.read().unwrap().kind, TokenKind::Plus);
        assert_eq!(stream.read().unwrap().kind, TokenKind::Number);
        assert_eq!(stream.read().unwrap().kind, TokenKind::Eof);
    }

    #[test]
    fn test_reading_past_the_terminal_token_fails() {
        let mut stream = TokenStream::new(Scanner::new("2"));
        while stream.read().map(|t| !t.is_terminal()).unwrap_or(false) {}
        assert_eq!(stream.read(), Err(StreamClosed));
    }

    #[test]
    fn test_unread_returns_the_token_once_more() {
        let mut stream = TokenStream::new(Scanner::new("2 oz"));
        let token = stream.read().unwrap();
        stream.unread(token.clone());
        assert_eq!(stream.read().unwrap(), token);
        assert_eq!(stream.read().unwrap().kind, TokenKind::Units);
    }
}
