//! Hash opcodes. The actual digest comes from the injected
//! [`HashProvider`]; the engine never hashes on its own.

use super::{pop, Stack};
use crate::error::Result;
use crate::opcode::Opcode;
use crate::providers::{HashKind, HashProvider};

/// OP_SHA256 / OP_HASH160 / OP_HASH256: pop one entry, push its digest.
pub fn hash<H: HashProvider>(stack: &mut Stack, kind: HashKind, hasher: &H) -> Result<()> {
    let op = match kind {
        HashKind::Sha256 => Opcode::Sha256,
        HashKind::Hash160 => Opcode::Hash160,
        HashKind::Hash256 => Opcode::Hash256,
    };
    let data = pop(stack, op)?;
    stack.push(hasher.hash(kind, &data));
    Ok(())
}
