//! UCS2 decoding
//!
//! UCS2 message bodies carry one big-endian 16-bit code unit per
//! character. Modern handsets emit UTF-16 in practice, so surrogate pairs
//! are combined into supplementary code points.

use sms_core::{SmsError, SmsResult};

/// Decode UCS2 (big-endian 16-bit code units) into text
///
/// # Arguments
///
/// * `bytes` - Byte source for the message body
/// * `byte_count` - Number of bytes to consume; must be even
///
/// # Errors
///
/// Returns `SmsError::InvalidData` if:
/// - `byte_count` is odd
/// - the source yields fewer than `byte_count` bytes
/// - the code units contain an unpaired surrogate
pub fn decode_ucs2<I>(mut bytes: I, byte_count: usize) -> SmsResult<String>
where
    I: Iterator<Item = u8>,
{
    if byte_count % 2 != 0 {
        return Err(SmsError::InvalidData(format!(
            "UCS2 byte count must be even, got {}",
            byte_count
        )));
    }

    let mut units = Vec::with_capacity(byte_count / 2);
    for _ in 0..byte_count / 2 {
        let high = next_byte(&mut bytes)?;
        let low = next_byte(&mut bytes)?;
        units.push(((high as u16) << 8) | low as u16);
    }

    String::from_utf16(&units)
        .map_err(|_| SmsError::InvalidData("Unpaired surrogate in UCS2 data".to_string()))
}

fn next_byte<I: Iterator<Item = u8>>(bytes: &mut I) -> SmsResult<u8> {
    bytes
        .next()
        .ok_or_else(|| SmsError::InvalidData("UCS2 data ended before byte count".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_single_character() {
        let data = [0x00, 0x41];
        assert_eq!(decode_ucs2(data.iter().copied(), 2).unwrap(), "A");
    }

    #[test]
    fn test_decode_bmp_text() {
        let data = [0x00, 0x48, 0x00, 0x69, 0x4E, 0x16, 0x75, 0x4C];
        assert_eq!(decode_ucs2(data.iter().copied(), 8).unwrap(), "Hi世界");
    }

    #[test]
    fn test_decode_surrogate_pair() {
        // U+1F600, GRINNING FACE
        let data = [0xD8, 0x3D, 0xDE, 0x00];
        assert_eq!(decode_ucs2(data.iter().copied(), 4).unwrap(), "\u{1F600}");
    }

    #[test]
    fn test_decode_empty() {
        assert_eq!(decode_ucs2(std::iter::empty(), 0).unwrap(), "");
    }

    #[test]
    fn test_odd_byte_count() {
        let data = [0x00, 0x41, 0x00];
        let result = decode_ucs2(data.iter().copied(), 3);
        assert!(matches!(result, Err(SmsError::InvalidData(_))));
    }

    #[test]
    fn test_short_input() {
        let data = [0x00, 0x41];
        let result = decode_ucs2(data.iter().copied(), 4);
        assert!(matches!(result, Err(SmsError::InvalidData(_))));
    }

    #[test]
    fn test_unpaired_surrogate() {
        let data = [0xD8, 0x3D, 0x00, 0x41];
        let result = decode_ucs2(data.iter().copied(), 4);
        assert!(matches!(result, Err(SmsError::InvalidData(_))));
    }
}
