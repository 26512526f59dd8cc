//! letterloop execution engine
//!
//! This module provides the fused parse-and-execute logic:
//! - [`engine`]: Interpreter context, program rule, program I/O
//! - [`statements`]: Statement dispatch, `If`, assignment, output, input
//! - [`loops`]: Loop capture and body replay
//! - [`expressions`]: Arithmetic expression evaluation
//! - [`store`]: The 26 integer variables
//! - [`errors`]: Error types
//!
//! # Execution Model
//!
//! Statements execute as soon as they are recognised. A frame pairs a token
//! cursor with an execution-enabled flag; a cleared flag suppresses
//! assignment, output, input and loop iteration while the tokens are still
//! parsed. Loops are re-run by replaying captured token buffers
//! through the same statement code.

pub mod constants;
pub mod engine;
pub mod errors;
pub mod expressions;
pub mod loops;
pub mod statements;
pub mod store;
