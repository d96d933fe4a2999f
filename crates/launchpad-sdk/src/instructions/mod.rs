//! Instruction builders

pub mod token;

pub use token::*;
