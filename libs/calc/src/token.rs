//! Token types produced by the scanner.

use std::fmt;

/// The kind of a scanned token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// The scanner hit a lexical error; the token text is the message.
    Error,
    /// End of input.
    Eof,
    Plus,
    Minus,
    Multiply,
    Divide,
    /// The conversion keyword, as in `23 lbs in kg`.
    In,
    /// A numeric literal like `23` or `-1.5e3`.
    Number,
    /// A unit of measure like `kg` or `fluid ounces`.
    Units,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenKind::Error => "error",
            TokenKind::Eof => "end of input",
            TokenKind::Plus => "'+'",
            TokenKind::Minus => "'-'",
            TokenKind::Multiply => "'*'",
            TokenKind::Divide => "'/'",
            TokenKind::In => "'in'",
            TokenKind::Number => "number",
            TokenKind::Units => "units",
        };
        write!(f, "{name}")
    }
}

/// A token, annotated with the 1-based character offset of its first
/// character in the original input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub position: usize,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>, position: usize) -> Self {
        Self {
            kind,
            text: text.into(),
            position,
        }
    }

    pub fn eof(position: usize) -> Self {
        Self::new(TokenKind::Eof, "", position)
    }

    pub fn error(message: impl Into<String>, position: usize) -> Self {
        Self::new(TokenKind::Error, message, position)
    }

    /// Width of the token in characters, for diagnostics. Never zero.
    pub fn width(&self) -> usize {
        self.text.chars().count().max(1)
    }

    /// A terminal token ends the stream; nothing is scanned after it.
    pub fn is_terminal(&self) -> bool {
        matches!(self.kind, TokenKind::Eof | TokenKind::Error)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TokenKind::Error => write!(f, "ERR[{}]", self.text),
            TokenKind::Eof => write!(f, "EOF"),
            TokenKind::Number => write!(f, "NUM[{}]", self.text),
            TokenKind::Units => write!(f, "UNI[{}]", self.text),
            TokenKind::Plus | TokenKind::Minus | TokenKind::Multiply | TokenKind::Divide => {
                write!(f, "SYM[{}]", self.text)
            }
            TokenKind::In => write!(f, "TOK[{}]", self.text),
        }
    }
}
