//! A lexical token from a source line, along with the keyword table used to classify identifiers

use std::collections::HashMap;
use std::fmt::{Debug, Display, Formatter};
use std::sync::LazyLock;
use strum::{AsRefStr, EnumIter};

/// Reserved words, mapped to their token kinds
static KEYWORDS: LazyLock<HashMap<&'static str, TokenKind>> = LazyLock::new(|| {
    HashMap::from([
        ("fn", TokenKind::Function),
        ("let", TokenKind::Let),
        ("true", TokenKind::True),
        ("false", TokenKind::False),
        ("if", TokenKind::If),
        ("else", TokenKind::Else),
        ("return", TokenKind::Return),
    ])
});

/// Checks whether some identifier text is a keyword, returning the keyword's kind if it is and
/// [TokenKind::Ident] otherwise.
///
/// # Example
/// ```
/// # use monkey_tokens::token::{classify_identifier, TokenKind};
/// assert_eq!(classify_identifier("fn"), TokenKind::Function);
/// assert_eq!(classify_identifier("foobar"), TokenKind::Ident);
/// ```
pub fn classify_identifier(text: &str) -> TokenKind {
    KEYWORDS.get(text).copied().unwrap_or(TokenKind::Ident)
}

/// A lexical token
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Token {
    kind: TokenKind,
    literal: String,
}

impl Token {
    /// Creates a new token
    pub fn new(kind: TokenKind, literal: impl Into<String>) -> Self {
        Self {
            kind,
            literal: literal.into(),
        }
    }

    /// Creates a token whose literal is the single character `byte`
    pub fn from_byte(kind: TokenKind, byte: u8) -> Self {
        Self::new(kind, char::from(byte))
    }

    /// Gets the kind for this token
    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    /// Gets the source text this token was created from
    pub fn literal(&self) -> &str {
        &self.literal
    }
}

impl Debug for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}({:?})", self.kind, self.literal)
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{Type:{} Literal:{}}}", self.kind, self.literal)
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_ref())
    }
}

/// The kind for a token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, EnumIter)]
pub enum TokenKind {
    /// A byte that can't start any token
    #[strum(serialize = "ILLEGAL")]
    Illegal,
    /// EOF, emitted forever once the input is exhausted
    #[strum(serialize = "EOF")]
    Eof,

    #[strum(serialize = "IDENT")]
    Ident,
    #[strum(serialize = "INT")]
    Int,

    // operators
    #[strum(serialize = "=")]
    Assign,
    #[strum(serialize = "+")]
    Plus,
    #[strum(serialize = "-")]
    Minus,
    #[strum(serialize = "!")]
    Bang,
    #[strum(serialize = "*")]
    Asterisk,
    #[strum(serialize = "/")]
    Slash,
    #[strum(serialize = "<")]
    Lt,
    #[strum(serialize = ">")]
    Gt,
    /// ==
    #[strum(serialize = "==")]
    Eq,
    /// !=
    #[strum(serialize = "!=")]
    NotEq,

    // delimiters
    #[strum(serialize = ",")]
    Comma,
    #[strum(serialize = ";")]
    Semicolon,
    #[strum(serialize = "(")]
    LParen,
    #[strum(serialize = ")")]
    RParen,
    #[strum(serialize = "{")]
    LBrace,
    #[strum(serialize = "}")]
    RBrace,

    // keywords
    #[strum(serialize = "FUNCTION")]
    Function,
    #[strum(serialize = "LET")]
    Let,
    #[strum(serialize = "TRUE")]
    True,
    #[strum(serialize = "FALSE")]
    False,
    #[strum(serialize = "IF")]
    If,
    #[strum(serialize = "ELSE")]
    Else,
    #[strum(serialize = "RETURN")]
    Return,
}

impl TokenKind {
    /// Checks if this kind is one of the reserved words
    pub fn is_keyword(&self) -> bool {
        KEYWORDS.values().any(|kind| kind == self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_classify_keywords() {
        for (word, kind) in [
            ("fn", TokenKind::Function),
            ("let", TokenKind::Let),
            ("true", TokenKind::True),
            ("false", TokenKind::False),
            ("if", TokenKind::If),
            ("else", TokenKind::Else),
            ("return", TokenKind::Return),
        ] {
            assert_eq!(classify_identifier(word), kind, "{word:?} should be a keyword");
        }
    }

    #[test]
    fn test_classify_identifiers() {
        for word in ["foobar", "x", "_", "Let", "LET", "func", "returns", ""] {
            assert_eq!(classify_identifier(word), TokenKind::Ident);
        }
    }

    #[test]
    fn test_keyword_kinds() {
        let keywords = TokenKind::iter().filter(TokenKind::is_keyword).count();
        assert_eq!(keywords, 7);
        assert!(TokenKind::Let.is_keyword());
        assert!(!TokenKind::Ident.is_keyword());
        assert!(!TokenKind::Eq.is_keyword());
    }

    #[test]
    fn test_from_byte() {
        let token = Token::from_byte(TokenKind::Plus, b'+');
        assert_eq!(token.kind(), TokenKind::Plus);
        assert_eq!(token.literal(), "+");

        let token = Token::from_byte(TokenKind::Illegal, 0xE9);
        assert_eq!(token.literal(), "\u{e9}");
    }

    #[test]
    fn test_display() {
        assert_eq!(
            Token::new(TokenKind::Let, "let").to_string(),
            "{Type:LET Literal:let}"
        );
        assert_eq!(
            Token::new(TokenKind::NotEq, "!=").to_string(),
            "{Type:!= Literal:!=}"
        );
        assert_eq!(Token::new(TokenKind::Eof, "").to_string(), "{Type:EOF Literal:}");
        assert_eq!(TokenKind::Ident.to_string(), "IDENT");
    }

    #[test]
    fn test_debug() {
        let token = Token::new(TokenKind::Ident, "five");
        assert_eq!(format!("{token:?}"), "Ident(\"five\")");
    }
}
