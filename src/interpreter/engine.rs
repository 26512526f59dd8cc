// Execution engine for the letterloop interpreter

use crate::interpreter::constants::{input_prompt, SUCCESS_NOTICE};
use crate::interpreter::errors::InterpretError;
use crate::interpreter::store::VariableStore;
use crate::parser::cursor::{LiveCursor, TokenCursor};
use crate::parser::lexer::TokenKind;
use std::io::{self, BufRead, Write};

/// A token source together with the execution-enabled flag that gates the
/// side effects of statements read from it.
///
/// The live program gets one frame for the whole run; every replayed loop
/// iteration gets a fresh one, starting enabled.
pub(crate) struct Frame<C> {
    pub cursor: C,
    pub executing: bool,
}

impl<C: TokenCursor> Frame<C> {
    pub fn new(cursor: C) -> Self {
        Frame {
            cursor,
            executing: true,
        }
    }
}

/// The interpreter context: program text, variable store and program I/O
pub struct Interpreter<R, W> {
    /// Program text, scanned once by [`Interpreter::run`]
    source: String,

    /// The single store shared by the live scan and every loop replay
    store: VariableStore,

    /// Where input statements read lines from
    input: R,

    /// Where output statements, prompts and the success notice go
    output: W,

    /// Loop body passes executed so far
    loop_iterations: u64,
}

impl<R: BufRead, W: Write> Interpreter<R, W> {
    pub fn new(source: &str, input: R, output: W) -> Self {
        Interpreter {
            source: source.to_string(),
            store: VariableStore::new(),
            input,
            output,
            loop_iterations: 0,
        }
    }

    /// Scans and executes the program: `{ Statement } '.'`.
    ///
    /// Writes the success notice after the terminating `.`; anything after
    /// it is ignored.
    pub fn run(&mut self) -> Result<(), InterpretError> {
        let mut frame = Frame::new(LiveCursor::new(&self.source));

        loop {
            let token = frame.cursor.peek();
            match token.kind {
                TokenKind::Dot => break,
                TokenKind::End => {
                    return Err(InterpretError::expected("'.' to end the program", token));
                }
                _ => self.execute_statement(&mut frame)?,
            }
        }
        frame.cursor.advance();

        writeln!(self.output, "{}", SUCCESS_NOTICE)?;
        self.output.flush()?;
        Ok(())
    }

    pub fn variables(&self) -> &VariableStore {
        &self.store
    }

    pub(crate) fn variables_mut(&mut self) -> &mut VariableStore {
        &mut self.store
    }

    pub fn output(&self) -> &W {
        &self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }

    pub fn total_loop_iterations(&self) -> u64 {
        self.loop_iterations
    }

    pub(crate) fn record_iteration(&mut self) {
        self.loop_iterations += 1;
    }

    /// Writes one output statement's value.
    pub(crate) fn write_value(&mut self, value: i32) -> Result<(), InterpretError> {
        writeln!(self.output, "{}", value)?;
        Ok(())
    }

    /// Prompts for and reads an integer for `variable`.
    ///
    /// Blank lines are skipped; end of input or a line that is not a decimal
    /// integer is an error.
    pub(crate) fn read_value(&mut self, variable: char) -> Result<i32, InterpretError> {
        write!(self.output, "{}", input_prompt(variable))?;
        self.output.flush()?;

        let mut line = String::new();
        loop {
            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                return Err(InterpretError::InvalidInput {
                    variable,
                    text: String::new(),
                });
            }

            let text = line.trim();
            if text.is_empty() {
                continue;
            }

            return text.parse::<i32>().map_err(|_| InterpretError::InvalidInput {
                variable,
                text: text.to_string(),
            });
        }
    }
}

/// Interprets `program_text` against the process's stdin and stdout.
pub fn interpret(program_text: &str) -> Result<(), InterpretError> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    interpret_with(program_text, stdin.lock(), stdout.lock()).map(|_| ())
}

/// Interprets `program_text` with the given program input and output.
///
/// Returns the finished interpreter so callers can inspect the store and
/// the output.
pub fn interpret_with<R: BufRead, W: Write>(
    program_text: &str,
    input: R,
    output: W,
) -> Result<Interpreter<R, W>, InterpretError> {
    let mut interpreter = Interpreter::new(program_text, input, output);
    interpreter.run()?;
    Ok(interpreter)
}
