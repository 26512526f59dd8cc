//! Loop execution by token replay
//!
//! The live scan cannot rewind, so a `{ E ? body }` loop is captured in one
//! forward pass: the condition tokens up to the first `?` and the body tokens
//! up to the first `}` go into two [`TokenBuffer`]s. The loop driver then
//! alternates between evaluating the condition buffer and replaying the body
//! buffer through the ordinary statement code, each time with a fresh
//! [`BufferCursor`].
//!
//! Body capture does not count braces, so a loop inside a loop body cannot be
//! delimited; replay rejects it with [`InterpretError::UnsupportedConstruct`].

use crate::interpreter::engine::{Frame, Interpreter};
use crate::interpreter::errors::InterpretError;
use crate::parser::buffer::TokenBuffer;
use crate::parser::cursor::{BufferCursor, TokenCursor};
use crate::parser::lexer::{SourceLocation, TokenKind};
use std::io::{BufRead, Write};

impl<R: BufRead, W: Write> Interpreter<R, W> {
    /// `{ E ? body }`, with the opening `{` (at `location`) already consumed.
    ///
    /// The live scan resumes after the closing `}` however many iterations
    /// run. With the flag cleared the condition is still evaluated once, so
    /// it is checked like any other expression, but the body never runs.
    pub(crate) fn execute_while<C: TokenCursor>(
        &mut self,
        frame: &mut Frame<C>,
        location: SourceLocation,
    ) -> Result<(), InterpretError> {
        if frame.cursor.is_replay() {
            return Err(InterpretError::UnsupportedConstruct {
                message: "loops cannot be nested inside a loop body".to_string(),
                location,
            });
        }

        let condition = capture_until(
            &mut frame.cursor,
            TokenKind::Question,
            "'?' after the loop condition",
        )?;
        let body = capture_until(&mut frame.cursor, TokenKind::RBrace, "'}' to close the loop")?;

        if !frame.executing {
            self.evaluate_condition(&condition)?;
            return Ok(());
        }

        while self.evaluate_condition(&condition)? != 0 {
            self.replay_body(&body)?;
        }
        Ok(())
    }

    /// Evaluates a captured loop condition from its first token.
    ///
    /// The whole buffer must form a single expression.
    fn evaluate_condition(&self, condition: &TokenBuffer) -> Result<i32, InterpretError> {
        let mut cursor = BufferCursor::new(condition);
        let value = self.evaluate_expr(&mut cursor)?;

        let trailing = cursor.peek();
        if !trailing.is(TokenKind::End) {
            return Err(InterpretError::expected("an operator or '?'", trailing));
        }
        Ok(value)
    }

    /// Runs one pass of a captured loop body.
    ///
    /// Each pass gets its own frame with the flag set, so `If`s inside the
    /// body toggle and restore only that flag. The pass ends at the end of the
    /// buffer; whether to run another is the driver's decision.
    pub(crate) fn replay_body(&mut self, body: &TokenBuffer) -> Result<(), InterpretError> {
        self.record_iteration();
        let mut frame = Frame::new(BufferCursor::new(body));

        while !frame.cursor.peek().is(TokenKind::End) {
            self.execute_statement(&mut frame)?;
        }
        Ok(())
    }
}

/// Moves tokens from `cursor` into a new buffer up to (not including)
/// `delimiter`, then consumes the delimiter.
///
/// Hitting `.` or the end of input first is a syntax error.
fn capture_until<C: TokenCursor>(
    cursor: &mut C,
    delimiter: TokenKind,
    expected: &str,
) -> Result<TokenBuffer, InterpretError> {
    let mut buffer = TokenBuffer::new(cursor.peek().location);

    loop {
        let token = cursor.advance();
        if token.is(delimiter) {
            buffer.close(token.location);
            return Ok(buffer);
        }
        if matches!(token.kind, TokenKind::Dot | TokenKind::End) {
            return Err(InterpretError::expected(expected, token));
        }
        buffer.push(token);
    }
}
