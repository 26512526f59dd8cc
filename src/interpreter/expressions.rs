//! Expression evaluation
//!
//! Precedence climbing over a [`TokenCursor`], evaluating while parsing:
//!
//! ```text
//! E := T { ('+'|'-') T }
//! T := U { ('*'|'/'|'%') U }
//! U := F [ '^' U ]
//! F := '(' E ')' | IDENTIFIER | NUMBER
//! ```
//!
//! The same functions serve the live program and loop replay. Arithmetic is
//! `i32` and wraps on overflow; `/` and `%` by zero are errors. `x ^ r` is `x`
//! multiplied by itself `r` times, so any `r <= 0` gives `1`.
//!
//! Expressions are always evaluated, whatever the execution-enabled flag says,
//! because evaluating them is how their tokens are consumed.

use crate::interpreter::engine::Interpreter;
use crate::interpreter::errors::InterpretError;
use crate::interpreter::store::VariableStore;
use crate::parser::cursor::TokenCursor;
use crate::parser::lexer::{SourceLocation, TokenKind};
use std::io::{BufRead, Write};

impl<R: BufRead, W: Write> Interpreter<R, W> {
    /// Evaluates one expression from `cursor` against the variable store.
    pub(crate) fn evaluate_expr<C: TokenCursor>(
        &self,
        cursor: &mut C,
    ) -> Result<i32, InterpretError> {
        evaluate_expression(self.variables(), cursor)
    }
}

/// E := T { ('+'|'-') T }
pub fn evaluate_expression<C: TokenCursor>(
    store: &VariableStore,
    cursor: &mut C,
) -> Result<i32, InterpretError> {
    let mut result = evaluate_term(store, cursor)?;

    loop {
        let op = cursor.peek();
        match op.kind {
            TokenKind::Plus | TokenKind::Minus => {
                cursor.advance();
                let right = evaluate_term(store, cursor)?;
                result = if op.is(TokenKind::Plus) {
                    result.wrapping_add(right)
                } else {
                    result.wrapping_sub(right)
                };
            }
            _ => return Ok(result),
        }
    }
}

/// T := U { ('*'|'/'|'%') U }
fn evaluate_term<C: TokenCursor>(
    store: &VariableStore,
    cursor: &mut C,
) -> Result<i32, InterpretError> {
    let mut result = evaluate_power(store, cursor)?;

    loop {
        let op = cursor.peek();
        match op.kind {
            TokenKind::Star => {
                cursor.advance();
                result = result.wrapping_mul(evaluate_power(store, cursor)?);
            }
            TokenKind::Slash => {
                cursor.advance();
                let right = evaluate_power(store, cursor)?;
                let divisor = checked_divisor(right, "Division by zero", op.location)?;
                result = result.wrapping_div(divisor);
            }
            TokenKind::Percent => {
                cursor.advance();
                let right = evaluate_power(store, cursor)?;
                let divisor = checked_divisor(right, "Modulo by zero", op.location)?;
                result = result.wrapping_rem(divisor);
            }
            _ => return Ok(result),
        }
    }
}

fn checked_divisor(
    divisor: i32,
    operation: &str,
    location: SourceLocation,
) -> Result<i32, InterpretError> {
    if divisor == 0 {
        return Err(InterpretError::DivisionByZero {
            operation: operation.to_string(),
            location,
        });
    }
    Ok(divisor)
}

/// U := F [ '^' U ]  (right-associative)
fn evaluate_power<C: TokenCursor>(
    store: &VariableStore,
    cursor: &mut C,
) -> Result<i32, InterpretError> {
    let base = evaluate_factor(store, cursor)?;

    if !cursor.peek().is(TokenKind::Caret) {
        return Ok(base);
    }
    cursor.advance();
    let exponent = evaluate_power(store, cursor)?;

    Ok(repeated_product(base, exponent))
}

/// `base` multiplied together `exponent` times with wrapping; `1` when
/// `exponent <= 0`.
pub fn repeated_product(base: i32, exponent: i32) -> i32 {
    if exponent <= 0 {
        return 1;
    }
    // Wrapping multiplication is exact modulo 2^32, so squaring gives the
    // same bits as the naive loop.
    base.wrapping_pow(exponent as u32)
}

/// F := '(' E ')' | IDENTIFIER | NUMBER
fn evaluate_factor<C: TokenCursor>(
    store: &VariableStore,
    cursor: &mut C,
) -> Result<i32, InterpretError> {
    let token = cursor.advance();

    match token.kind {
        TokenKind::LParen => {
            let value = evaluate_expression(store, cursor)?;
            let closing = cursor.advance();
            if !closing.is(TokenKind::RParen) {
                return Err(InterpretError::expected("')'", closing));
            }
            Ok(value)
        }
        TokenKind::Ident => Ok(store.get(token.ch)),
        TokenKind::Number => token
            .digit_value()
            .ok_or_else(|| InterpretError::expected("a digit", token)),
        _ => Err(InterpretError::expected(
            "'(', an identifier or a number",
            token,
        )),
    }
}
