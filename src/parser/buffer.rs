//! Captured token spans for loop replay
//!
//! A [`TokenBuffer`] is filled once, during the single forward pass over a
//! loop's condition or body, and then read any number of times through a
//! [`BufferCursor`](crate::parser::cursor::BufferCursor).

use crate::interpreter::constants::TOKEN_BUFFER_INITIAL_CAPACITY;
use crate::parser::lexer::{SourceLocation, Token};

/// Append-only token sequence
#[derive(Debug, Clone)]
pub struct TokenBuffer {
    tokens: Vec<Token>,
    /// Where the captured span ended in the source (its closing delimiter)
    end_location: SourceLocation,
}

impl TokenBuffer {
    pub fn new(start: SourceLocation) -> Self {
        TokenBuffer {
            tokens: Vec::with_capacity(TOKEN_BUFFER_INITIAL_CAPACITY),
            end_location: start,
        }
    }

    /// Appends a token. Capacity grows geometrically when full.
    pub fn push(&mut self, token: Token) {
        if self.tokens.len() == self.tokens.capacity() {
            self.tokens.reserve_exact(self.tokens.capacity().max(1));
        }
        self.tokens.push(token);
        self.end_location = token.location;
    }

    /// Records the location of the delimiter that closed the capture.
    pub fn close(&mut self, location: SourceLocation) {
        self.end_location = location;
    }

    pub fn get(&self, index: usize) -> Option<Token> {
        self.tokens.get(index).copied()
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.tokens.capacity()
    }

    pub fn end_location(&self) -> SourceLocation {
        self.end_location
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::lexer::TokenKind;

    fn ident(ch: char, column: usize) -> Token {
        Token::new(TokenKind::Ident, ch, SourceLocation::new(1, column))
    }

    #[test]
    fn test_capacity_doubles() {
        let mut buffer = TokenBuffer::new(SourceLocation::new(1, 1));
        assert!(buffer.is_empty());
        assert!(buffer.capacity() >= TOKEN_BUFFER_INITIAL_CAPACITY);

        for i in 0..=TOKEN_BUFFER_INITIAL_CAPACITY {
            buffer.push(ident('a', i + 1));
            assert!(buffer.len() <= buffer.capacity());
        }

        assert_eq!(buffer.len(), TOKEN_BUFFER_INITIAL_CAPACITY + 1);
        assert!(buffer.capacity() >= 2 * TOKEN_BUFFER_INITIAL_CAPACITY);
    }

    #[test]
    fn test_preserves_order_and_locations() {
        let mut buffer = TokenBuffer::new(SourceLocation::new(1, 1));
        buffer.push(ident('x', 3));
        buffer.push(ident('y', 5));
        buffer.close(SourceLocation::new(1, 7));

        assert_eq!(buffer.get(0).map(|t| t.ch), Some('x'));
        assert_eq!(buffer.get(1).map(|t| t.location.column), Some(5));
        assert_eq!(buffer.get(2), None);
        assert_eq!(buffer.end_location(), SourceLocation::new(1, 7));
    }
}
