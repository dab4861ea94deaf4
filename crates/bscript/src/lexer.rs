//! Turns a whitespace-delimited script string into a sequence of typed
//! [`Value`]s. Stateless: tokenizing the same input twice yields
//! value-equal output.

use crate::encoding::int_to_bytes;
use crate::error::{Result, ScriptError};
use crate::opcode::Opcode;
use crate::value::Value;

/// Tokenize a script. Blank input yields an empty sequence; the first
/// unrecognized token aborts the whole call with no partial result.
pub fn tokenize(script: &str) -> Result<Vec<Value>> {
    script.split_whitespace().map(parse_token).collect()
}

/// Classification priority: opcode name, `<placeholder>`, base-10 integer,
/// `0x` hex literal.
fn parse_token(token: &str) -> Result<Value> {
    if let Some(op) = Opcode::from_name(token) {
        return Ok(Value::Op(op));
    }

    // <sig>, <pubKey>, <pubKeyHash>: the inner text itself is the data
    if token.len() >= 2 && token.starts_with('<') && token.ends_with('>') {
        return Ok(Value::Data(token[1..token.len() - 1].as_bytes().to_vec()));
    }

    if let Ok(n) = token.parse::<i64>() {
        return Ok(Value::Data(int_to_bytes(n)));
    }

    if let Some(digits) = token.strip_prefix("0x").or_else(|| token.strip_prefix("0X")) {
        if let Ok(bytes) = decode_hex(digits) {
            return Ok(Value::Data(bytes));
        }
    }

    Err(ScriptError::UnrecognizedToken(token.to_string()))
}

/// Hex decode, left-padding odd-length input with a zero nibble.
fn decode_hex(digits: &str) -> std::result::Result<Vec<u8>, hex::FromHexError> {
    if digits.len() % 2 == 1 {
        hex::decode(format!("0{digits}"))
    } else {
        hex::decode(digits)
    }
}
