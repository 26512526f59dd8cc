//! Token cursors
//!
//! The grammar in [`crate::interpreter`] is written once against
//! [`TokenCursor`] and driven by two sources:
//! - [`LiveCursor`]: one token of lookahead over the on-demand [`Lexer`]
//! - [`BufferCursor`]: a position inside a captured [`TokenBuffer`]
//!
//! Both synthesize end-of-input tokens indefinitely once exhausted; only the
//! grammar decides whether that is an error.

use crate::parser::buffer::TokenBuffer;
use crate::parser::lexer::{Lexer, Token};

/// Peek/consume access to a token stream
pub trait TokenCursor {
    /// Current token, not consumed.
    fn peek(&self) -> Token;

    /// Consumes and returns the current token.
    fn advance(&mut self) -> Token;

    /// Whether this cursor replays a captured loop body.
    fn is_replay(&self) -> bool;
}

/// Cursor over the program text
pub struct LiveCursor {
    lexer: Lexer,
    current: Token,
}

impl LiveCursor {
    pub fn new(source: &str) -> Self {
        let mut lexer = Lexer::new(source);
        let current = lexer.next_token();
        LiveCursor { lexer, current }
    }
}

impl TokenCursor for LiveCursor {
    fn peek(&self) -> Token {
        self.current
    }

    fn advance(&mut self) -> Token {
        let token = self.current;
        self.current = self.lexer.next_token();
        token
    }

    fn is_replay(&self) -> bool {
        false
    }
}

/// Cursor over a captured token span, always starting at position 0
pub struct BufferCursor<'a> {
    buffer: &'a TokenBuffer,
    position: usize,
}

impl<'a> BufferCursor<'a> {
    pub fn new(buffer: &'a TokenBuffer) -> Self {
        BufferCursor {
            buffer,
            position: 0,
        }
    }
}

impl TokenCursor for BufferCursor<'_> {
    fn peek(&self) -> Token {
        self.buffer
            .get(self.position)
            .unwrap_or_else(|| Token::end(self.buffer.end_location()))
    }

    fn advance(&mut self) -> Token {
        let token = self.peek();
        if self.position < self.buffer.len() {
            self.position += 1;
        }
        token
    }

    fn is_replay(&self) -> bool {
        true
    }
}
