//! Arithmetic and numeric comparison. Operands decode through the script
//! number encoding, so differently-encoded equal numbers compare equal
//! here (unlike OP_EQUAL).

use super::{pop, push_bool, require, Stack};
use crate::encoding::{bytes_to_int, int_to_bytes};
use crate::error::{Result, ScriptError};
use crate::opcode::Opcode;

/// OP_ADD: `[.., a, b] -> [.., a + b]`.
pub fn add(stack: &mut Stack) -> Result<()> {
    require(stack, Opcode::Add, 2)?;
    let b = bytes_to_int(&pop(stack, Opcode::Add)?);
    let a = bytes_to_int(&pop(stack, Opcode::Add)?);
    stack.push(int_to_bytes(a.saturating_add(b)));
    Ok(())
}

/// OP_SUB: `[.., a, b] -> [.., a - b]` (second-from-top minus top).
pub fn sub(stack: &mut Stack) -> Result<()> {
    require(stack, Opcode::Sub, 2)?;
    let b = bytes_to_int(&pop(stack, Opcode::Sub)?);
    let a = bytes_to_int(&pop(stack, Opcode::Sub)?);
    stack.push(int_to_bytes(a.saturating_sub(b)));
    Ok(())
}

/// OP_NUMEQUALVERIFY: fails the script unless the top two entries are
/// numerically equal.
pub fn num_equal_verify(stack: &mut Stack) -> Result<()> {
    require(stack, Opcode::NumEqualVerify, 2)?;
    let b = bytes_to_int(&pop(stack, Opcode::NumEqualVerify)?);
    let a = bytes_to_int(&pop(stack, Opcode::NumEqualVerify)?);
    if a != b {
        return Err(ScriptError::VerifyFailed(Opcode::NumEqualVerify));
    }
    Ok(())
}

/// The four ordering comparisons, selected by opcode: pushes `(a <op> b)`
/// where `b` is the popped top and `a` the entry under it.
pub fn compare(stack: &mut Stack, op: Opcode) -> Result<()> {
    require(stack, op, 2)?;
    let b = bytes_to_int(&pop(stack, op)?);
    let a = bytes_to_int(&pop(stack, op)?);
    let result = match op {
        Opcode::LessThan => a < b,
        Opcode::GreaterThan => a > b,
        Opcode::LessThanOrEqual => a <= b,
        Opcode::GreaterThanOrEqual => a >= b,
        _ => unreachable!("non-comparison opcode routed to compare"),
    };
    push_bool(stack, result);
    Ok(())
}
