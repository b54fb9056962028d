use crate::Node;
use monkey_tokens::token::Token;

/// A name bound to, or referring to, a value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identifier {
    token: Token,
    pub value: String,
}

impl Identifier {
    /// Creates an identifier from its [TokenKind::Ident](monkey_tokens::token::TokenKind::Ident)
    /// token
    pub fn new(token: Token) -> Self {
        let value = token.literal().to_string();
        Self { token, value }
    }

    pub fn token(&self) -> &Token {
        &self.token
    }
}

impl Node for Identifier {
    fn token_literal(&self) -> &str {
        self.token.literal()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use monkey_tokens::token::TokenKind;

    #[test]
    fn test_identifier_value() {
        let id = Identifier::new(Token::new(TokenKind::Ident, "five"));
        assert_eq!(id.value, "five");
        assert_eq!(id.token_literal(), "five");
        assert_eq!(id.token().kind(), TokenKind::Ident);
    }
}
