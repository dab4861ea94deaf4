//! Stack manipulation: OP_DUP, OP_DROP, OP_SWAP, OP_OVER.

use super::{pop, require, Stack};
use crate::error::Result;
use crate::opcode::Opcode;

/// OP_DUP: `[.., a] -> [.., a, a]`. The copy is a new owned buffer.
pub fn dup(stack: &mut Stack) -> Result<()> {
    require(stack, Opcode::Dup, 1)?;
    let top = stack[stack.len() - 1].clone();
    stack.push(top);
    Ok(())
}

/// OP_DROP: `[.., a] -> [..]`.
pub fn drop(stack: &mut Stack) -> Result<()> {
    pop(stack, Opcode::Drop)?;
    Ok(())
}

/// OP_SWAP: `[.., a, b] -> [.., b, a]`.
pub fn swap(stack: &mut Stack) -> Result<()> {
    require(stack, Opcode::Swap, 2)?;
    let len = stack.len();
    stack.swap(len - 1, len - 2);
    Ok(())
}

/// OP_OVER: `[.., a, b] -> [.., a, b, a]`.
pub fn over(stack: &mut Stack) -> Result<()> {
    require(stack, Opcode::Over, 2)?;
    let second = stack[stack.len() - 2].clone();
    stack.push(second);
    Ok(())
}
