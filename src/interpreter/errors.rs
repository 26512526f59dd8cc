//! Error types for the letterloop interpreter
//!
//! This module defines [`InterpretError`], which covers everything that can go
//! wrong while a program is scanned and executed. Because parsing and
//! execution are a single pass, syntax errors and runtime errors share one type.
//!
//! All errors are fatal - the first one ends the run and nothing after the
//! error point executes.

use crate::parser::lexer::{SourceLocation, Token};
use std::fmt;
use std::io;

/// Errors that abort interpretation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InterpretError {
    /// A required token is missing or a statement/factor starts with a token
    /// the grammar does not accept
    Syntax {
        message: String,
        location: SourceLocation,
    },

    /// Division or modulo with a zero right-hand operand
    DivisionByZero {
        operation: String,
        location: SourceLocation,
    },

    /// A construct the replay engine cannot execute (a loop inside a loop body)
    UnsupportedConstruct {
        message: String,
        location: SourceLocation,
    },

    /// An input statement did not receive a decimal integer
    InvalidInput { variable: char, text: String },

    /// Reading program input or writing program output failed
    Io { message: String },
}

impl InterpretError {
    /// Syntax error for `found` where `expected` was required.
    pub fn expected(expected: &str, found: Token) -> Self {
        InterpretError::Syntax {
            message: format!("expected {}, found {}", expected, found),
            location: found.location,
        }
    }

    pub fn location(&self) -> Option<&SourceLocation> {
        match self {
            InterpretError::Syntax { location, .. } => Some(location),
            InterpretError::DivisionByZero { location, .. } => Some(location),
            InterpretError::UnsupportedConstruct { location, .. } => Some(location),
            InterpretError::InvalidInput { .. } => None,
            InterpretError::Io { .. } => None,
        }
    }
}

impl fmt::Display for InterpretError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InterpretError::Syntax { message, location } => {
                write!(f, "Syntax error at {}: {}", location, message)
            }
            InterpretError::DivisionByZero {
                operation,
                location,
            } => {
                write!(f, "{} at {}", operation, location)
            }
            InterpretError::UnsupportedConstruct { message, location } => {
                write!(f, "Unsupported construct at {}: {}", location, message)
            }
            InterpretError::InvalidInput { variable, text } => {
                if text.is_empty() {
                    write!(f, "No input available for variable '{}'", variable)
                } else {
                    write!(
                        f,
                        "Invalid input for variable '{}': '{}' is not an integer",
                        variable, text
                    )
                }
            }
            InterpretError::Io { message } => write!(f, "I/O error: {}", message),
        }
    }
}

impl std::error::Error for InterpretError {}

impl From<io::Error> for InterpretError {
    fn from(err: io::Error) -> Self {
        InterpretError::Io {
            message: err.to_string(),
        }
    }
}
