//! Logic and comparison: OP_EQUAL, OP_EQUALVERIFY, OP_NOT, OP_BOOLAND,
//! OP_BOOLOR. Equality here is byte-exact, not numeric.

use super::{pop, push_bool, require, Stack};
use crate::encoding::{bytes_equal, is_truthy};
use crate::error::{Result, ScriptError};
use crate::opcode::Opcode;

/// OP_EQUAL: `[.., a, b] -> [.., a == b]` (byte-exact).
pub fn equal(stack: &mut Stack) -> Result<()> {
    require(stack, Opcode::Equal, 2)?;
    let b = pop(stack, Opcode::Equal)?;
    let a = pop(stack, Opcode::Equal)?;
    push_bool(stack, bytes_equal(&a, &b));
    Ok(())
}

/// OP_EQUALVERIFY: as OP_EQUAL, but inequality fails the whole script
/// instead of pushing false.
pub fn equal_verify(stack: &mut Stack) -> Result<()> {
    require(stack, Opcode::EqualVerify, 2)?;
    let b = pop(stack, Opcode::EqualVerify)?;
    let a = pop(stack, Opcode::EqualVerify)?;
    if !bytes_equal(&a, &b) {
        return Err(ScriptError::VerifyFailed(Opcode::EqualVerify));
    }
    Ok(())
}

/// OP_NOT: logical negation of the top entry's truthiness.
pub fn not(stack: &mut Stack) -> Result<()> {
    let top = pop(stack, Opcode::Not)?;
    push_bool(stack, !is_truthy(&top));
    Ok(())
}

/// OP_BOOLAND: `[.., a, b] -> [.., a && b]` over truthiness.
pub fn bool_and(stack: &mut Stack) -> Result<()> {
    require(stack, Opcode::BoolAnd, 2)?;
    let b = is_truthy(&pop(stack, Opcode::BoolAnd)?);
    let a = is_truthy(&pop(stack, Opcode::BoolAnd)?);
    push_bool(stack, a && b);
    Ok(())
}

/// OP_BOOLOR: `[.., a, b] -> [.., a || b]` over truthiness.
pub fn bool_or(stack: &mut Stack) -> Result<()> {
    require(stack, Opcode::BoolOr, 2)?;
    let b = is_truthy(&pop(stack, Opcode::BoolOr)?);
    let a = is_truthy(&pop(stack, Opcode::BoolOr)?);
    push_bool(stack, a || b);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoding::int_to_bytes;

    fn s(entries: &[&[u8]]) -> Stack {
        entries.iter().map(|e| e.to_vec()).collect()
    }

    #[test]
    fn equal_pushes_one_or_empty() {
        let mut stack = s(&[b"x", b"x"]);
        equal(&mut stack).unwrap();
        assert_eq!(stack, vec![vec![0x01]]);

        let mut stack = s(&[b"x", b"y"]);
        equal(&mut stack).unwrap();
        assert_eq!(stack, vec![Vec::<u8>::new()]);
    }

    #[test]
    fn equal_is_literal_not_numeric() {
        // [] and [0x80] both decode to 0 but differ byte-wise
        let mut stack: Stack = vec![vec![], vec![0x80]];
        equal(&mut stack).unwrap();
        assert_eq!(stack, vec![Vec::<u8>::new()]);
    }

    #[test]
    fn equal_verify_passes_silently() {
        let mut stack = s(&[b"keep", b"x", b"x"]);
        equal_verify(&mut stack).unwrap();
        assert_eq!(stack, s(&[b"keep"]));
    }

    #[test]
    fn equal_verify_fails_script() {
        let mut stack = s(&[b"x", b"y"]);
        let err = equal_verify(&mut stack).unwrap_err();
        assert_eq!(err, ScriptError::VerifyFailed(Opcode::EqualVerify));
        assert!(err.to_string().contains("OP_EQUALVERIFY"));
    }

    #[test]
    fn not_flips_truthiness() {
        let mut stack: Stack = vec![int_to_bytes(5)];
        not(&mut stack).unwrap();
        assert_eq!(stack, vec![Vec::<u8>::new()]);

        let mut stack: Stack = vec![vec![]];
        not(&mut stack).unwrap();
        assert_eq!(stack, vec![vec![0x01]]);

        // negative zero is falsy, so OP_NOT yields true
        let mut stack: Stack = vec![vec![0x80]];
        not(&mut stack).unwrap();
        assert_eq!(stack, vec![vec![0x01]]);
    }

    #[test]
    fn bool_and_or_tables() {
        for (a, b, and_r, or_r) in [
            (0i64, 0i64, false, false),
            (0, 3, false, true),
            (3, 0, false, true),
            (3, 4, true, true),
        ] {
            let mut stack: Stack = vec![int_to_bytes(a), int_to_bytes(b)];
            bool_and(&mut stack).unwrap();
            assert_eq!(stack, vec![if and_r { vec![0x01] } else { vec![] }]);

            let mut stack: Stack = vec![int_to_bytes(a), int_to_bytes(b)];
            bool_or(&mut stack).unwrap();
            assert_eq!(stack, vec![if or_r { vec![0x01] } else { vec![] }]);
        }
    }

    #[test]
    fn arity_failures() {
        let mut one = s(&[b"a"]);
        let binary: [fn(&mut Stack) -> Result<()>; 4] = [equal, equal_verify, bool_and, bool_or];
        for f in binary {
            let mut stack = one.clone();
            assert!(matches!(
                f(&mut stack),
                Err(ScriptError::InsufficientOperands { needed: 2, .. })
            ));
        }
        one.clear();
        assert!(matches!(
            not(&mut one),
            Err(ScriptError::InsufficientOperands { op: Opcode::Not, .. })
        ));
    }
}
