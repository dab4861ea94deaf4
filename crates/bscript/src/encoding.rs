//! Script-number encoding: signed little-endian with the sign bit in the
//! most significant bit of the final byte. Zero is the empty buffer.
//!
//! Every arithmetic and logic opcode, the truthiness rule, and numeric
//! literal pushes share these conversions.

/// Encode an integer as a minimal signed little-endian buffer.
///
/// Zero encodes as an empty buffer. Otherwise the magnitude is laid out
/// least-significant byte first; if the top bit of the last magnitude byte
/// is set, an extra `0x00` (or `0x80` for negatives) byte is appended so
/// the sign bit stays unambiguous.
pub fn int_to_bytes(value: i64) -> Vec<u8> {
    if value == 0 {
        return Vec::new();
    }

    let negative = value < 0;
    let mut mag = value.unsigned_abs();
    let mut out = Vec::new();
    while mag > 0 {
        out.push((mag & 0xff) as u8);
        mag >>= 8;
    }

    let last = out.len() - 1;
    if out[last] & 0x80 != 0 {
        out.push(if negative { 0x80 } else { 0x00 });
    } else if negative {
        out[last] |= 0x80;
    }
    out
}

/// Decode a signed little-endian buffer back to an integer.
///
/// Empty input yields 0. The sign bit is masked out of the final byte and
/// applied at the end. Magnitude beyond the low 8 bytes is ignored; script
/// numbers never reach that width.
pub fn bytes_to_int(bytes: &[u8]) -> i64 {
    if bytes.is_empty() {
        return 0;
    }

    let last = bytes.len() - 1;
    let negative = bytes[last] & 0x80 != 0;
    let mut result: i64 = 0;
    for (i, &byte) in bytes.iter().enumerate().take(8) {
        let mut b = byte as i64;
        if i == last {
            b &= 0x7f;
        }
        result |= b << (8 * i);
    }
    if negative {
        -result
    } else {
        result
    }
}

/// Boolean interpretation of a stack entry.
///
/// Falsy: empty, all zero bytes, or all zero bytes with a lone `0x80` sign
/// bit in the final byte (negative zero). Anything else is truthy.
pub fn is_truthy(bytes: &[u8]) -> bool {
    for (i, &b) in bytes.iter().enumerate() {
        if b != 0 {
            return !(i == bytes.len() - 1 && b == 0x80);
        }
    }
    false
}

/// Byte-exact equality, no numeric normalization: `[]` and `[0x80]` both
/// decode to 0 but are not equal here.
pub fn bytes_equal(a: &[u8], b: &[u8]) -> bool {
    a == b
}
