//! The closed opcode set. Dispatch in the engine matches exhaustively on
//! this enum, so adding a variant without handling it is a compile error.

use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::fmt;

/// A symbolic operation identifier.
///
/// `Num(k)` covers `OP_1` through `OP_16`; `OP_0`/`OP_FALSE` are both read
/// as `Zero`. `Pushdata1`/`Pushdata2` are recognized by the lexer but have
/// no textual-script semantics and fail at dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Opcode {
    // Literals
    Zero,
    Num(u8),
    Pushdata1,
    Pushdata2,
    // Stack manipulation
    Dup,
    Drop,
    Swap,
    Over,
    // Logic
    Equal,
    EqualVerify,
    Not,
    BoolAnd,
    BoolOr,
    // Arithmetic
    Add,
    Sub,
    NumEqualVerify,
    LessThan,
    GreaterThan,
    LessThanOrEqual,
    GreaterThanOrEqual,
    // Flow control
    If,
    NotIf,
    Else,
    EndIf,
    Verify,
    Return,
    // Hashing (provider-backed)
    Sha256,
    Hash160,
    Hash256,
    // Signatures (provider-backed)
    CheckSig,
    CheckSigVerify,
    CheckMultiSig,
    CheckMultiSigVerify,
}

/// Fixed-name opcodes, one entry per script-text spelling.
const NAMED: &[(&str, Opcode)] = &[
    ("OP_0", Opcode::Zero),
    ("OP_FALSE", Opcode::Zero),
    ("OP_PUSHDATA1", Opcode::Pushdata1),
    ("OP_PUSHDATA2", Opcode::Pushdata2),
    ("OP_DUP", Opcode::Dup),
    ("OP_DROP", Opcode::Drop),
    ("OP_SWAP", Opcode::Swap),
    ("OP_OVER", Opcode::Over),
    ("OP_EQUAL", Opcode::Equal),
    ("OP_EQUALVERIFY", Opcode::EqualVerify),
    ("OP_NOT", Opcode::Not),
    ("OP_BOOLAND", Opcode::BoolAnd),
    ("OP_BOOLOR", Opcode::BoolOr),
    ("OP_ADD", Opcode::Add),
    ("OP_SUB", Opcode::Sub),
    ("OP_NUMEQUALVERIFY", Opcode::NumEqualVerify),
    ("OP_LESSTHAN", Opcode::LessThan),
    ("OP_GREATERTHAN", Opcode::GreaterThan),
    ("OP_LESSTHANOREQUAL", Opcode::LessThanOrEqual),
    ("OP_GREATERTHANOREQUAL", Opcode::GreaterThanOrEqual),
    ("OP_IF", Opcode::If),
    ("OP_NOTIF", Opcode::NotIf),
    ("OP_ELSE", Opcode::Else),
    ("OP_ENDIF", Opcode::EndIf),
    ("OP_VERIFY", Opcode::Verify),
    ("OP_RETURN", Opcode::Return),
    ("OP_SHA256", Opcode::Sha256),
    ("OP_HASH160", Opcode::Hash160),
    ("OP_HASH256", Opcode::Hash256),
    ("OP_CHECKSIG", Opcode::CheckSig),
    ("OP_CHECKSIGVERIFY", Opcode::CheckSigVerify),
    ("OP_CHECKMULTISIG", Opcode::CheckMultiSig),
    ("OP_CHECKMULTISIGVERIFY", Opcode::CheckMultiSigVerify),
];

static NAME_MAP: Lazy<HashMap<String, Opcode>> = Lazy::new(|| {
    let mut map: HashMap<String, Opcode> = NAMED
        .iter()
        .map(|&(name, op)| (name.to_string(), op))
        .collect();
    for k in 1..=16u8 {
        map.insert(format!("OP_{k}"), Opcode::Num(k));
    }
    map
});

impl Opcode {
    /// Look up an opcode by its script-text name, e.g. `"OP_DUP"`.
    pub fn from_name(name: &str) -> Option<Opcode> {
        NAME_MAP.get(name).copied()
    }

    /// True for the four conditional-nesting opcodes, the only ones still
    /// interpreted inside a suppressed branch.
    pub fn is_conditional(self) -> bool {
        matches!(self, Opcode::If | Opcode::NotIf | Opcode::Else | Opcode::EndIf)
    }
}

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use Opcode::*;
        let name = match self {
            Zero => "OP_0",
            Num(k) => return write!(f, "OP_{k}"),
            Pushdata1 => "OP_PUSHDATA1",
            Pushdata2 => "OP_PUSHDATA2",
            Dup => "OP_DUP",
            Drop => "OP_DROP",
            Swap => "OP_SWAP",
            Over => "OP_OVER",
            Equal => "OP_EQUAL",
            EqualVerify => "OP_EQUALVERIFY",
            Not => "OP_NOT",
            BoolAnd => "OP_BOOLAND",
            BoolOr => "OP_BOOLOR",
            Add => "OP_ADD",
            Sub => "OP_SUB",
            NumEqualVerify => "OP_NUMEQUALVERIFY",
            LessThan => "OP_LESSTHAN",
            GreaterThan => "OP_GREATERTHAN",
            LessThanOrEqual => "OP_LESSTHANOREQUAL",
            GreaterThanOrEqual => "OP_GREATERTHANOREQUAL",
            If => "OP_IF",
            NotIf => "OP_NOTIF",
            Else => "OP_ELSE",
            EndIf => "OP_ENDIF",
            Verify => "OP_VERIFY",
            Return => "OP_RETURN",
            Sha256 => "OP_SHA256",
            Hash160 => "OP_HASH160",
            Hash256 => "OP_HASH256",
            CheckSig => "OP_CHECKSIG",
            CheckSigVerify => "OP_CHECKSIGVERIFY",
            CheckMultiSig => "OP_CHECKMULTISIG",
            CheckMultiSigVerify => "OP_CHECKMULTISIGVERIFY",
        };
        f.write_str(name)
    }
}
