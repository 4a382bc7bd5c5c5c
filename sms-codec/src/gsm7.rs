//! GSM 7-bit default alphabet decoding
//!
//! The GSM 7-bit default alphabet (3GPP TS 23.038 section 6.2.1) maps
//! septet values 0-127 to characters. Septets are packed eight to seven
//! octets (section 6.1.2.1.1) and must be unpacked before table lookup.
//! Characters outside the basic table are reached through the 0x1B escape
//! followed by an extension table code.

/// GSM 7-bit default alphabet, indexed by septet value
///
/// Index 0x1B is the escape to the extension table and never produces a
/// character by itself.
const GSM7_BASIC: [char; 128] = [
    '@', '£', '$', '¥', 'è', 'é', 'ù', 'ì', 'ò', 'Ç', '\n', 'Ø', 'ø', '\r', 'Å', 'å',
    'Δ', '_', 'Φ', 'Γ', 'Λ', 'Ω', 'Π', 'Ψ', 'Σ', 'Θ', 'Ξ', '\x1b', 'Æ', 'æ', 'ß', 'É',
    ' ', '!', '"', '#', '¤', '%', '&', '\'', '(', ')', '*', '+', ',', '-', '.', '/',
    '0', '1', '2', '3', '4', '5', '6', '7', '8', '9', ':', ';', '<', '=', '>', '?',
    '¡', 'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O',
    'P', 'Q', 'R', 'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z', 'Ä', 'Ö', 'Ñ', 'Ü', '§',
    '¿', 'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j', 'k', 'l', 'm', 'n', 'o',
    'p', 'q', 'r', 's', 't', 'u', 'v', 'w', 'x', 'y', 'z', 'ä', 'ö', 'ñ', 'ü', 'à',
];

/// Extension table, reached via the 0x1B escape septet
const GSM7_EXTENSION: &[(u8, char)] = &[
    (0x0A, '\x0C'), // form feed
    (0x14, '^'),
    (0x28, '{'),
    (0x29, '}'),
    (0x2F, '\\'),
    (0x3C, '['),
    (0x3D, '~'),
    (0x3E, ']'),
    (0x40, '|'),
    (0x65, '€'),
];

/// Escape septet selecting the extension table
const ESCAPE: u8 = 0x1B;

/// Unpack 8-bit-packed septets into one septet value per byte
///
/// The packing rule fills each octet with the low bits of the next septet,
/// least significant bits first, so eight septets occupy seven octets.
/// Septet order and count are preserved; fewer than seven pending bits at
/// the end of the input are fill bits and are discarded.
pub fn unpack_septets(data: &[u8]) -> Vec<u8> {
    let mut septets = Vec::with_capacity(data.len() * 8 / 7);
    let mut pending = 0u16;
    let mut pending_bits = 0u8;

    for &byte in data {
        pending |= (byte as u16) << pending_bits;
        pending_bits += 8;

        while pending_bits >= 7 {
            septets.push((pending & 0x7F) as u8);
            pending >>= 7;
            pending_bits -= 7;
        }
    }

    septets
}

/// Decode septet values through the GSM 7-bit default alphabet
///
/// Decoding is lenient: an unknown extension code and a trailing lone
/// escape produce no output rather than an error, since a modem can hand
/// over any septet sequence.
pub fn decode_gsm7(septets: &[u8]) -> String {
    let mut result = String::with_capacity(septets.len());
    let mut escape = false;

    for &septet in septets {
        if escape {
            escape = false;
            if let Some(&(_, ch)) = GSM7_EXTENSION.iter().find(|&&(code, _)| code == septet) {
                result.push(ch);
            }
        } else if septet == ESCAPE {
            escape = true;
        } else if (septet as usize) < GSM7_BASIC.len() {
            result.push(GSM7_BASIC[septet as usize]);
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unpack_septets_single_octet() {
        // one octet yields one septet, the eighth bit is fill
        assert_eq!(unpack_septets(&[0x00]), vec![0x00]);
        assert_eq!(unpack_septets(&[0x41]), vec![0x41]);
    }

    #[test]
    fn test_unpack_septets_preserves_order() {
        // "hello" packed per TS 23.038
        let packed = [0xE8, 0x32, 0x9B, 0xFD, 0x06];
        assert_eq!(unpack_septets(&packed), vec![0x68, 0x65, 0x6C, 0x6C, 0x6F]);
    }

    #[test]
    fn test_unpack_septets_empty() {
        assert!(unpack_septets(&[]).is_empty());
    }

    #[test]
    fn test_decode_basic_alphabet() {
        assert_eq!(decode_gsm7(&[0x00]), "@");
        assert_eq!(decode_gsm7(&[0x68, 0x65, 0x6C, 0x6C, 0x6F]), "hello");
    }

    #[test]
    fn test_decode_extension_table() {
        assert_eq!(decode_gsm7(&[0x1B, 0x65]), "€");
        assert_eq!(decode_gsm7(&[0x1B, 0x28, 0x41, 0x1B, 0x29]), "{A}");
    }

    #[test]
    fn test_decode_unknown_extension_code() {
        // unknown extension code is skipped, decoding continues
        assert_eq!(decode_gsm7(&[0x1B, 0x00, 0x41]), "A");
    }

    #[test]
    fn test_decode_trailing_escape() {
        assert_eq!(decode_gsm7(&[0x41, 0x1B]), "A");
    }

    #[test]
    fn test_unpack_then_decode() {
        let packed = [0xE8, 0x32, 0x9B, 0xFD, 0x06];
        assert_eq!(decode_gsm7(&unpack_septets(&packed)), "hello");
    }
}
