//! The tagged datum produced by the lexer: an opcode reference or an owned
//! data literal. Stack entries never alias a `Value`'s buffer; the engine
//! copies on push.

use crate::opcode::Opcode;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Op(Opcode),
    Data(Vec<u8>),
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Op(op) => write!(f, "{op}"),
            Value::Data(bytes) => write!(f, "DATA[{}]", hex::encode(bytes)),
        }
    }
}
