//! Signature-check opcodes. Verification is delegated to the injected
//! [`SigVerifier`]; the multisig forms share the single-signature shape
//! (pubKey on top, signature under it).

use super::{pop, push_bool, require, Stack};
use crate::error::{Result, ScriptError};
use crate::opcode::Opcode;
use crate::providers::SigVerifier;

fn pop_pair(stack: &mut Stack, op: Opcode) -> Result<(Vec<u8>, Vec<u8>)> {
    require(stack, op, 2)?;
    let pub_key = pop(stack, op)?;
    let sig = pop(stack, op)?;
    Ok((sig, pub_key))
}

/// OP_CHECKSIG: pop pubKey then sig, push the verification result.
pub fn check_sig<V: SigVerifier>(stack: &mut Stack, verifier: &V) -> Result<()> {
    let (sig, pub_key) = pop_pair(stack, Opcode::CheckSig)?;
    push_bool(stack, verifier.verify(&sig, &pub_key));
    Ok(())
}

/// OP_CHECKSIGVERIFY: as OP_CHECKSIG, but failure aborts the script.
pub fn check_sig_verify<V: SigVerifier>(stack: &mut Stack, verifier: &V) -> Result<()> {
    let (sig, pub_key) = pop_pair(stack, Opcode::CheckSigVerify)?;
    if !verifier.verify(&sig, &pub_key) {
        return Err(ScriptError::VerifyFailed(Opcode::CheckSigVerify));
    }
    Ok(())
}

/// OP_CHECKMULTISIG: same pair shape, result pushed.
pub fn check_multi_sig<V: SigVerifier>(stack: &mut Stack, verifier: &V) -> Result<()> {
    let (sig, pub_key) = pop_pair(stack, Opcode::CheckMultiSig)?;
    push_bool(stack, verifier.verify(&sig, &pub_key));
    Ok(())
}

/// OP_CHECKMULTISIGVERIFY: aborting form of OP_CHECKMULTISIG.
pub fn check_multi_sig_verify<V: SigVerifier>(stack: &mut Stack, verifier: &V) -> Result<()> {
    let (sig, pub_key) = pop_pair(stack, Opcode::CheckMultiSigVerify)?;
    if !verifier.verify(&sig, &pub_key) {
        return Err(ScriptError::VerifyFailed(Opcode::CheckMultiSigVerify));
    }
    Ok(())
}
