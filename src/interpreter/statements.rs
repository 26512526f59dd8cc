//! Statement recognition and execution
//!
//! This module recognises and executes every statement form in one pass:
//!
//! ```text
//! Statement  := If | While | Assign | Output | Input
//! If         := '[' E '?' { Statement } [ ':' { Statement } ] ']'
//! While      := '{' E '?' { Statement } '}'
//! Assign     := IDENTIFIER '=' E ';'
//! Output     := '<' E ';'
//! Input      := '>' IDENTIFIER ';'
//! ```
//!
//! # Implementation
//!
//! All methods are `pub(crate)` methods on [`Interpreter`], generic over the
//! [`TokenCursor`] inside the frame, so the live scan and loop replay run the
//! same code. Side effects happen only while `frame.executing` is set;
//! untaken branches are still parsed token by token.
//!
//! `While` lives in [`crate::interpreter::loops`].

use crate::interpreter::engine::{Frame, Interpreter};
use crate::interpreter::errors::InterpretError;
use crate::parser::cursor::TokenCursor;
use crate::parser::lexer::{Token, TokenKind};
use std::io::{BufRead, Write};

impl<R: BufRead, W: Write> Interpreter<R, W> {
    /// Dispatches on the leading token of a statement.
    pub(crate) fn execute_statement<C: TokenCursor>(
        &mut self,
        frame: &mut Frame<C>,
    ) -> Result<(), InterpretError> {
        let token = frame.cursor.peek();

        match token.kind {
            TokenKind::LBracket => {
                frame.cursor.advance();
                self.execute_if(frame)
            }
            TokenKind::LBrace => {
                frame.cursor.advance();
                self.execute_while(frame, token.location)
            }
            TokenKind::Ident => self.execute_assign(frame),
            TokenKind::Lt => {
                frame.cursor.advance();
                self.execute_output(frame)
            }
            TokenKind::Gt => {
                frame.cursor.advance();
                self.execute_input(frame)
            }
            _ => Err(InterpretError::expected("a statement", token)),
        }
    }

    /// `[ E ? then... [: else...] ]`, with the opening `[` already consumed.
    ///
    /// Each branch runs with the flag set to whether it is the taken branch,
    /// and only if the enclosing flag was set. The enclosing flag is restored
    /// after `]`.
    fn execute_if<C: TokenCursor>(&mut self, frame: &mut Frame<C>) -> Result<(), InterpretError> {
        let condition = self.evaluate_expr(&mut frame.cursor)?;
        expect(&mut frame.cursor, TokenKind::Question, "'?' after the condition")?;

        let saved = frame.executing;
        let taken = condition != 0;

        frame.executing = saved && taken;
        self.execute_until(frame, &[TokenKind::Colon, TokenKind::RBracket], "':' or ']'")?;

        if frame.cursor.peek().is(TokenKind::Colon) {
            frame.cursor.advance();
            frame.executing = saved && !taken;
            self.execute_until(frame, &[TokenKind::RBracket], "']'")?;
        }

        expect(&mut frame.cursor, TokenKind::RBracket, "']'")?;
        frame.executing = saved;
        Ok(())
    }

    /// Executes statements until the next token is one of `stops` (not
    /// consumed). Running out of tokens or reaching `.` first is an error.
    fn execute_until<C: TokenCursor>(
        &mut self,
        frame: &mut Frame<C>,
        stops: &[TokenKind],
        expected: &str,
    ) -> Result<(), InterpretError> {
        loop {
            let token = frame.cursor.peek();
            if stops.contains(&token.kind) {
                return Ok(());
            }
            if matches!(token.kind, TokenKind::Dot | TokenKind::End) {
                return Err(InterpretError::expected(expected, token));
            }
            self.execute_statement(frame)?;
        }
    }

    /// `IDENTIFIER = E ;`
    fn execute_assign<C: TokenCursor>(
        &mut self,
        frame: &mut Frame<C>,
    ) -> Result<(), InterpretError> {
        let target = expect(&mut frame.cursor, TokenKind::Ident, "an identifier")?;
        expect(&mut frame.cursor, TokenKind::Eq, "'=' in assignment")?;
        let value = self.evaluate_expr(&mut frame.cursor)?;
        expect(&mut frame.cursor, TokenKind::Semicolon, "';' after assignment")?;

        if frame.executing {
            self.variables_mut().set(target.ch, value);
        }
        Ok(())
    }

    /// `< E ;`, with `<` already consumed.
    fn execute_output<C: TokenCursor>(
        &mut self,
        frame: &mut Frame<C>,
    ) -> Result<(), InterpretError> {
        let value = self.evaluate_expr(&mut frame.cursor)?;
        expect(&mut frame.cursor, TokenKind::Semicolon, "';' after output expression")?;

        if frame.executing {
            self.write_value(value)?;
        }
        Ok(())
    }

    /// `> IDENTIFIER ;`, with `>` already consumed.
    fn execute_input<C: TokenCursor>(
        &mut self,
        frame: &mut Frame<C>,
    ) -> Result<(), InterpretError> {
        let target = expect(&mut frame.cursor, TokenKind::Ident, "a variable to read into")?;
        expect(&mut frame.cursor, TokenKind::Semicolon, "';' after input variable")?;

        if frame.executing {
            let value = self.read_value(target.ch)?;
            self.variables_mut().set(target.ch, value);
        }
        Ok(())
    }
}

/// Consumes the next token, which must be of `kind`.
fn expect<C: TokenCursor>(
    cursor: &mut C,
    kind: TokenKind,
    expected: &str,
) -> Result<Token, InterpretError> {
    let token = cursor.advance();
    if token.is(kind) {
        Ok(token)
    } else {
        Err(InterpretError::expected(expected, token))
    }
}
