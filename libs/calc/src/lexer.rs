//! Lexical scanner for quantity expressions.
//!
//! Converts an input string like `2 kg + 2000g in grams` into a stream of
//! [`Token`]s. The scanner is a state machine: each state encodes what it
//! expects to see next (a number, a unit name, the `in` keyword, an operator,
//! or the end of input). On the first rule violation it emits a single
//! `Error` token carrying the message and the position of the offending run,
//! then stops.

use crate::token::{Token, TokenKind};

const DECIMAL_DIGITS: [char; 11] = ['0', '1', '2', '3', '4', '5', '6', '7', '8', '9', ','];
const HEX_DIGITS: [char; 22] = [
    '0', '1', '2', '3', '4', '5', '6', '7', '8', '9', 'A', 'B', 'C', 'D', 'E', 'F', 'a', 'b', 'c',
    'd', 'e', 'f',
];
const EXPONENT_DIGITS: [char; 10] = ['0', '1', '2', '3', '4', '5', '6', '7', '8', '9'];

/// What the scanner expects to produce next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// Initial state, and the state entered after an operator.
    Number,
    /// After a number, or after the `in` keyword.
    Units,
    /// After a unit run that is followed by the `in` keyword.
    In,
    /// After a unit run with no `in`: an operator or the end of input.
    Symbol,
    /// Only whitespace may remain.
    Eof,
    /// A terminal token was emitted; the scanner is exhausted.
    Done,
}

/// The scanner.
pub struct Scanner {
    chars: Vec<char>,
    /// 0-based index into `chars`; emitted token positions are 1-based.
    position: usize,
    state: State,
}

impl Scanner {
    pub fn new(input: &str) -> Self {
        Self {
            chars: input.chars().collect(),
            position: 0,
            state: State::Number,
        }
    }

    /// Produces the next token. Returns `None` once the terminal `Eof` or
    /// `Error` token has been delivered.
    pub fn next_token(&mut self) -> Option<Token> {
        loop {
            match self.state {
                State::Number => return Some(self.scan_number()),
                State::Units => return Some(self.scan_units()),
                State::In => return Some(self.scan_in()),
                State::Symbol => match self.scan_symbol() {
                    Some(token) => return Some(token),
                    // end of input: deferred to the Eof state
                    None => continue,
                },
                State::Eof => return Some(self.scan_eof()),
                State::Done => return None,
            }
        }
    }

    // --- cursor primitives ---

    fn current_char(&self) -> Option<char> {
        self.chars.get(self.position).copied()
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.position + 1).copied()
    }

    fn advance(&mut self) {
        if self.position < self.chars.len() {
            self.position += 1;
        }
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.current_char(), Some(c) if c.is_whitespace()) {
            self.advance();
        }
    }

    /// Consumes the next character if it is one of `valid`.
    fn accept(&mut self, valid: &[char]) -> bool {
        match self.current_char() {
            Some(c) if valid.contains(&c) => {
                self.advance();
                true
            }
            _ => false,
        }
    }

    /// Consumes a run of characters from `valid`, returning how many.
    fn accept_run(&mut self, valid: &[char]) -> usize {
        let mut count = 0;
        while self.accept(valid) {
            count += 1;
        }
        count
    }

    /// Consumes a run of letters and digits, for names like `mmH2O`.
    fn accept_alphanumeric_run(&mut self) -> usize {
        let mut count = 0;
        while matches!(self.current_char(), Some(c) if c.is_alphanumeric()) {
            self.advance();
            count += 1;
        }
        count
    }

    /// The text scanned since `start`, with embedded spaces stripped
    /// (`"- 22"` becomes `"-22"`).
    fn text(&self, start: usize) -> String {
        self.chars[start..self.position]
            .iter()
            .filter(|c| **c != ' ')
            .collect()
    }

    /// Emits the terminal `Error` token: consumes one more character so the
    /// message shows the offending run, e.g. `expected number, but got ',2'`.
    fn error_token(&mut self, expectation: &str, start: usize) -> Token {
        self.advance();
        let got = self.text(start);
        self.state = State::Done;
        Token::error(format!("expected {expectation}, but got '{got}'"), start + 1)
    }

    // --- states ---

    fn scan_number(&mut self) -> Token {
        self.skip_whitespace();
        let start = self.position;

        // optional sign; whitespace between sign and digits is stripped
        self.accept(&['+', '-']);
        self.accept_run(&[' ']);

        // decimal digits with grouping commas, or hexadecimal after 0x/0X
        let lead_zero = self.accept(&['0']);
        let hex = lead_zero && self.accept(&['x', 'X']);
        let digits: &[char] = if hex { &HEX_DIGITS } else { &DECIMAL_DIGITS };

        // a leading comma is not a number
        if !hex && self.accept(&[',']) {
            return self.error_token("number", start);
        }

        let count = self.accept_run(digits);
        if count == 0 && (hex || !lead_zero) {
            return self.error_token("number", start);
        }

        if !hex {
            // fractional part
            if self.accept(&['.']) {
                self.accept_run(digits);
            }
            // scientific notation
            if self.accept(&['e', 'E']) {
                self.accept(&['+', '-']);
                self.accept_run(&EXPONENT_DIGITS);
            }
        }

        let token = Token::new(TokenKind::Number, self.text(start), start + 1);

        // the first character after the number decides what comes next
        self.skip_whitespace();
        self.state = match self.current_char() {
            None => State::Eof,
            Some(c) if c.is_alphanumeric() => State::Units,
            _ => State::Symbol,
        };
        token
    }

    fn scan_units(&mut self) -> Token {
        self.skip_whitespace();
        let start = self.position;
        if self.accept_alphanumeric_run() == 0 {
            return self.error_token("units", start);
        }
        loop {
            let end = self.position;
            self.skip_whitespace();
            if self.at_in_keyword() {
                // the keyword belongs to the next token
                self.position = end;
                self.state = State::In;
                return self.units_token(start, end);
            }
            match self.current_char() {
                // a multi-word unit name like `fluid ounces`
                Some(c) if c.is_alphabetic() => {
                    self.accept_alphanumeric_run();
                }
                _ => {
                    self.position = end;
                    self.state = State::Symbol;
                    return self.units_token(start, end);
                }
            }
        }
    }

    /// A Units token's text is the input span exactly as typed.
    fn units_token(&self, start: usize, end: usize) -> Token {
        let text: String = self.chars[start..end].iter().collect();
        Token::new(TokenKind::Units, text, start + 1)
    }

    /// The keyword `in` (case-insensitive) followed by whitespace ends a unit
    /// name; without trailing whitespace it is part of the name.
    fn at_in_keyword(&self) -> bool {
        matches!(self.current_char(), Some('i' | 'I'))
            && matches!(self.peek(), Some('n' | 'N'))
            && matches!(self.chars.get(self.position + 2), Some(c) if c.is_whitespace())
    }

    fn scan_in(&mut self) -> Token {
        self.skip_whitespace();
        let start = self.position;
        if self.accept(&['i', 'I'])
            && self.accept(&['n', 'N'])
            && matches!(self.current_char(), Some(c) if c.is_whitespace())
        {
            self.state = State::Units;
            return Token::new(TokenKind::In, self.text(start), start + 1);
        }
        self.error_token("'in' keyword", start)
    }

    fn scan_symbol(&mut self) -> Option<Token> {
        self.skip_whitespace();
        let start = self.position;
        let kind = match self.current_char() {
            Some('+') => TokenKind::Plus,
            Some('-') => TokenKind::Minus,
            Some('*') => TokenKind::Multiply,
            Some('/') => TokenKind::Divide,
            None => {
                self.state = State::Eof;
                return None;
            }
            Some(_) => return Some(self.error_token("symbol", start)),
        };
        self.advance();
        self.state = State::Number;
        Some(Token::new(kind, self.text(start), start + 1))
    }

    fn scan_eof(&mut self) -> Token {
        self.skip_whitespace();
        let start = self.position;
        if self.current_char().is_some() {
            return self.error_token("EOF", start);
        }
        self.state = State::Done;
        Token::eof(self.position + 1)
    }
}

impl Iterator for Scanner {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        self.next_token()
    }
}
