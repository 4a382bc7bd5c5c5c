//! Hexadecimal payload parsing
//!
//! SMS user data arrives from the modem as a string of hexadecimal digit
//! pairs, one pair per octet.

use crate::error::{SmsError, SmsResult};

/// Parse a hexadecimal string into bytes
///
/// # Arguments
///
/// * `hex` - String of hexadecimal digit pairs, e.g. `"0102ABFF"`
///
/// # Returns
///
/// Returns `Ok(Vec<u8>)` with one byte per digit pair, `Err(SmsError)`
/// otherwise.
///
/// # Errors
///
/// Returns `SmsError::MalformedPayload` if:
/// - the string has odd length
/// - the string contains a non-hexadecimal character
pub fn parse_hex(hex: &str) -> SmsResult<Vec<u8>> {
    if !hex.is_ascii() {
        return Err(SmsError::MalformedPayload(
            "Hex string contains non-ASCII characters".to_string(),
        ));
    }
    if hex.len() % 2 != 0 {
        return Err(SmsError::MalformedPayload(
            "Hex string must have even length".to_string(),
        ));
    }

    let mut bytes = Vec::with_capacity(hex.len() / 2);
    for i in (0..hex.len()).step_by(2) {
        let pair = &hex[i..i + 2];
        let byte = u8::from_str_radix(pair, 16)
            .map_err(|_| SmsError::MalformedPayload(format!("Invalid hex digits: {}", pair)))?;
        bytes.push(byte);
    }
    Ok(bytes)
}

/// Format bytes as a lowercase hexadecimal string
pub fn to_hex(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{:02x}", b)).collect()
}
