//! # Introduction
//!
//! letterloop interprets a minimal imperative language: 26 integer variables
//! `a`..`z`, single-digit literals, `+ - * / % ^` arithmetic, conditionals,
//! loops, and console input/output. Lexing, parsing and execution are one
//! pass; no syntax tree is ever built.
//!
//! ## Execution pipeline
//!
//! ```text
//! Source → Lexer → Statement interpreter ─┬→ side effects
//!                                         └→ loop capture → TokenBuffers → replay
//! ```
//!
//! 1. [`parser`] — on-demand tokens, captured token buffers, and the cursor
//!    abstraction over both.
//! 2. [`interpreter`] — the grammar, executed directly from a cursor, and the
//!    loop replay engine.
//!
//! ## Language
//!
//! ```text
//! Program    := { Statement } '.'
//! If         := '[' E '?' { Statement } [ ':' { Statement } ] ']'
//! While      := '{' E '?' { Statement } '}'
//! Assign     := IDENTIFIER '=' E ';'
//! Output     := '<' E ';'
//! Input      := '>' IDENTIFIER ';'
//! ```
//!
//! ```
//! use letterloop::interpreter::engine::Interpreter;
//!
//! let source = "n = 0; { n - 3 ? < n; n = n + 1; } .";
//! let mut interpreter = Interpreter::new(source, std::io::empty(), Vec::new());
//! interpreter.run().unwrap();
//!
//! let output = String::from_utf8(interpreter.into_output()).unwrap();
//! assert_eq!(output, "0\n1\n2\nProgram parsed successfully.\n");
//! ```

pub mod interpreter;
pub mod parser;

pub use interpreter::engine::{interpret, interpret_with};
pub use interpreter::errors::InterpretError;
