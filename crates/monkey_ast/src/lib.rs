#![doc = include_str!("../README.md")]

pub mod expr;
pub mod identifier;
pub mod program;
pub mod statements;

pub use expr::Expression;
pub use identifier::Identifier;
pub use program::Program;
pub use statements::{LetStatement, Statement};

/// A node in the syntax tree
pub trait Node {
    /// The literal of the token this node was created from
    fn token_literal(&self) -> &str;
}
