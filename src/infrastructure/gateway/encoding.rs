//! Argument encoding for gateway queries and transactions

use crate::domain::contract::{CallData, SEPARATOR};

/// Hex-encode a literal call argument the way the VM expects it.
/// Decimal strings become minimal big-endian integers (zero is empty),
/// anything else is sent as its UTF-8 bytes.
pub fn encode_argument(arg: &str) -> String {
    if !arg.is_empty() && arg.bytes().all(|b| b.is_ascii_digit()) {
        hex::encode(decimal_to_be_bytes(arg))
    } else {
        hex::encode(arg.as_bytes())
    }
}

/// Arbitrary-length decimal string to minimal big-endian bytes
fn decimal_to_be_bytes(digits: &str) -> Vec<u8> {
    // little-endian accumulator
    let mut bytes: Vec<u8> = Vec::new();
    for digit in digits.bytes().map(|b| (b - b'0') as u32) {
        let mut carry = digit;
        for byte in bytes.iter_mut() {
            let v = *byte as u32 * 10 + carry;
            *byte = (v & 0xff) as u8;
            carry = v >> 8;
        }
        while carry > 0 {
            bytes.push((carry & 0xff) as u8);
            carry >>= 8;
        }
    }
    bytes.reverse();
    bytes
}

/// Transaction data as the VM parses it: function name, then hex arguments
pub fn encode_call_data(call: &CallData) -> String {
    let mut data = call.function().to_string();
    for arg in call.arguments() {
        data.push(SEPARATOR);
        data.push_str(&encode_argument(arg));
    }
    data
}

pub fn encode_data_field(data: &str) -> Option<String> {
    use base64::Engine;

    if data.is_empty() {
        None
    } else {
        Some(base64::engine::general_purpose::STANDARD.encode(data))
    }
}
