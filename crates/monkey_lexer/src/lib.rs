#![doc = include_str!("../README.md")]

pub mod lexer;

pub use lexer::Scanner;
