//! Statements

use crate::expr::Expression;
use crate::identifier::Identifier;
use crate::Node;
use monkey_tokens::token::Token;

/// A statement
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    Let(LetStatement),
}

impl Node for Statement {
    fn token_literal(&self) -> &str {
        match self {
            Statement::Let(stmt) => stmt.token_literal(),
        }
    }
}

impl From<LetStatement> for Statement {
    fn from(value: LetStatement) -> Self {
        Self::Let(value)
    }
}

/// Binds a value to a name, `let <name> = <value>;`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetStatement {
    token: Token,
    pub name: Identifier,
    pub value: Option<Expression>,
}

impl LetStatement {
    /// Creates a new let statement from its `let` token
    pub fn new(token: Token, name: Identifier, value: Option<Expression>) -> Self {
        Self {
            token,
            name,
            value,
        }
    }

    pub fn token(&self) -> &Token {
        &self.token
    }
}

impl Node for LetStatement {
    fn token_literal(&self) -> &str {
        self.token.literal()
    }
}
