#![doc = include_str!("../README.md")]

pub mod token;

pub use token::{classify_identifier, Token, TokenKind};
