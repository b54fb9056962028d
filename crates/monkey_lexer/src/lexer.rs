//! Responsible with converting source text into a stream of [Token]s

use crate::lexer::cursor::Cursor;
use monkey_tokens::token::{classify_identifier, Token, TokenKind};
use std::iter::FusedIterator;
use tracing::{debug, trace};

mod cursor;

/// Converts a borrowed input buffer into tokens, one [next_token](Scanner::next_token) call at a
/// time.
///
/// Scanning never fails. Bytes that can't start a token are returned as [TokenKind::Illegal]
/// tokens, and once the input is exhausted every call returns a [TokenKind::Eof] token.
#[derive(Debug, Clone)]
pub struct Scanner<'a> {
    cursor: Cursor<'a>,
    finished: bool,
}

impl<'a> Scanner<'a> {
    /// Creates a new scanner over some source text
    pub fn new(input: &'a str) -> Self {
        Self::from_bytes(input.as_bytes())
    }

    /// Creates a new scanner over raw bytes
    pub fn from_bytes(input: &'a [u8]) -> Self {
        Self {
            cursor: Cursor::new(input),
            finished: false,
        }
    }

    /// The byte offset of the next character to be scanned
    pub fn position(&self) -> usize {
        self.cursor.position()
    }

    /// Scans the next token
    pub fn next_token(&mut self) -> Token {
        let token = self.scan_token();
        trace!(?token, position = self.cursor.position(), "scanned token");
        token
    }

    fn scan_token(&mut self) -> Token {
        self.skip_whitespace();

        let Some(ch) = self.cursor.current() else {
            return Token::new(TokenKind::Eof, "");
        };

        let token = match ch {
            b'=' => self.scan_with_eq(ch, TokenKind::Assign, TokenKind::Eq),
            b'!' => self.scan_with_eq(ch, TokenKind::Bang, TokenKind::NotEq),
            b'+' => Token::from_byte(TokenKind::Plus, ch),
            b'-' => Token::from_byte(TokenKind::Minus, ch),
            b'*' => Token::from_byte(TokenKind::Asterisk, ch),
            b'/' => Token::from_byte(TokenKind::Slash, ch),
            b'<' => Token::from_byte(TokenKind::Lt, ch),
            b'>' => Token::from_byte(TokenKind::Gt, ch),
            b',' => Token::from_byte(TokenKind::Comma, ch),
            b';' => Token::from_byte(TokenKind::Semicolon, ch),
            b'(' => Token::from_byte(TokenKind::LParen, ch),
            b')' => Token::from_byte(TokenKind::RParen, ch),
            b'{' => Token::from_byte(TokenKind::LBrace, ch),
            b'}' => Token::from_byte(TokenKind::RBrace, ch),
            // identifiers and numbers leave the cursor on the byte after them
            ch if is_letter(ch) => return self.read_identifier(),
            ch if ch.is_ascii_digit() => return self.read_number(),
            _ => {
                debug!(
                    byte = ch,
                    position = self.cursor.position(),
                    "illegal character"
                );
                Token::from_byte(TokenKind::Illegal, ch)
            }
        };

        self.cursor.read_char();
        token
    }

    /// Scans either `single` or, when the current byte is followed by `=`, `double`.
    fn scan_with_eq(&mut self, ch: u8, single: TokenKind, double: TokenKind) -> Token {
        if self.cursor.peek_char() == Some(b'=') {
            self.cursor.read_char();
            Token::new(double, format!("{}=", char::from(ch)))
        } else {
            Token::from_byte(single, ch)
        }
    }

    fn read_identifier(&mut self) -> Token {
        let literal = literal(self.cursor.read_while(is_letter));
        Token::new(classify_identifier(&literal), literal)
    }

    fn read_number(&mut self) -> Token {
        let literal = literal(self.cursor.read_while(|ch| ch.is_ascii_digit()));
        Token::new(TokenKind::Int, literal)
    }

    fn skip_whitespace(&mut self) {
        self.cursor
            .read_while(|ch| matches!(ch, b' ' | b'\t' | b'\n' | b'\r'));
    }
}

impl Iterator for Scanner<'_> {
    type Item = Token;

    /// Gets the next token, stopping at [TokenKind::Eof] without yielding it
    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        let token = self.next_token();
        if token.kind() == TokenKind::Eof {
            self.finished = true;
            None
        } else {
            Some(token)
        }
    }
}

impl FusedIterator for Scanner<'_> {}

/// Identifiers may only contain ascii letters and underscores
fn is_letter(ch: u8) -> bool {
    ch.is_ascii_alphabetic() || ch == b'_'
}

fn literal(bytes: &[u8]) -> String {
    bytes.iter().copied().map(char::from).collect()
}
