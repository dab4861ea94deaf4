//! Per-family stack transforms behind each opcode. Every function checks
//! its own arity and reports the opcode it was dispatched for, so failure
//! messages name the operation that ran short.

pub mod arith;
pub mod crypto;
pub mod logic;
pub mod sig;
pub mod stack;

use crate::encoding::int_to_bytes;
use crate::error::{Result, ScriptError};
use crate::opcode::Opcode;

/// The data stack: owned byte buffers, top at the end of the `Vec`.
pub type Stack = Vec<Vec<u8>>;

/// Arity precondition shared by all operations.
fn require(stack: &Stack, op: Opcode, needed: usize) -> Result<()> {
    if stack.len() < needed {
        return Err(ScriptError::InsufficientOperands { op, needed });
    }
    Ok(())
}

/// Pop the top entry; `op` names the caller in the underflow error.
fn pop(stack: &mut Stack, op: Opcode) -> Result<Vec<u8>> {
    stack
        .pop()
        .ok_or(ScriptError::InsufficientOperands { op, needed: 1 })
}

/// The canonical true/false results pushed by comparisons and checks.
fn push_bool(stack: &mut Stack, value: bool) {
    stack.push(if value { int_to_bytes(1) } else { Vec::new() });
}

/// OP_0/OP_FALSE and OP_1..OP_16: push the literal, no pops.
pub fn push_literal(stack: &mut Stack, op: Opcode) {
    match op {
        Opcode::Zero => stack.push(Vec::new()),
        Opcode::Num(k) => stack.push(int_to_bytes(k as i64)),
        _ => unreachable!("non-literal opcode routed to push_literal"),
    }
}
