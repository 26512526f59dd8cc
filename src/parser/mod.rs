//! letterloop lexing layer
//!
//! This module turns program text into tokens, one at a time:
//! - [`lexer`]: Tokenization (source text → tokens)
//! - [`buffer`]: Captured token spans for loop replay
//! - [`cursor`]: Peek/consume access over either source
//!
//! # No syntax tree
//!
//! There is no AST. Statements are executed by [`crate::interpreter`] as
//! they are recognised, reading straight from a [`cursor::TokenCursor`].

pub mod buffer;
pub mod cursor;
pub mod lexer;
