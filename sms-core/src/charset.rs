//! Character set classification for SMS user data

use serde::{Deserialize, Serialize};
use std::fmt;

/// Character set selected by the Data Coding Scheme byte of an SMS PDU
///
/// Classification follows 3GPP TS 23.038. Every possible 8-bit DCS value
/// maps to exactly one of these variants; coding groups the standard keeps
/// reserved (or that this implementation does not decode) map to
/// `Reserved`, and subfield values the standard leaves undefined map to
/// `Undefined`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Charset {
    /// GSM 7-bit default alphabet, packed as septets
    Gsm7Bit,
    /// 8-bit data, opaque to text decoding
    EightBitData,
    /// UCS2 (16-bit big-endian code units)
    Ucs2,
    /// Coding group reserved by the standard
    Reserved,
    /// Subfield value the standard leaves undefined
    Undefined,
}

impl fmt::Display for Charset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Charset::Gsm7Bit => "GSM 7-bit",
            Charset::EightBitData => "8-bit data",
            Charset::Ucs2 => "UCS2",
            Charset::Reserved => "reserved",
            Charset::Undefined => "undefined",
        };
        write!(f, "{}", name)
    }
}

/// Result of decoding SMS user data
///
/// Callers that need to distinguish decoded message text from a raw
/// pass-through (8-bit data, or an encoding that could not be determined)
/// can match on the variant; callers that do not can use [`as_str`].
///
/// [`as_str`]: DecodedText::as_str
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DecodedText {
    /// Message text decoded from the GSM 7-bit alphabet or UCS2
    Text(String),
    /// The original hexadecimal payload, returned unchanged
    Raw(String),
}

impl DecodedText {
    /// Get the contained string, decoded text or raw hex alike
    pub fn as_str(&self) -> &str {
        match self {
            DecodedText::Text(s) | DecodedText::Raw(s) => s,
        }
    }

    /// Whether this is a raw pass-through rather than decoded text
    pub fn is_raw(&self) -> bool {
        matches!(self, DecodedText::Raw(_))
    }

    /// Consume the value, returning the contained string
    pub fn into_string(self) -> String {
        match self {
            DecodedText::Text(s) | DecodedText::Raw(s) => s,
        }
    }
}

impl fmt::Display for DecodedText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_charset_display() {
        assert_eq!(format!("{}", Charset::Gsm7Bit), "GSM 7-bit");
        assert_eq!(format!("{}", Charset::Ucs2), "UCS2");
    }

    #[test]
    fn test_decoded_text_accessors() {
        let text = DecodedText::Text("hello".to_string());
        assert_eq!(text.as_str(), "hello");
        assert!(!text.is_raw());

        let raw = DecodedText::Raw("0102AB".to_string());
        assert_eq!(raw.as_str(), "0102AB");
        assert!(raw.is_raw());
        assert_eq!(raw.into_string(), "0102AB");
    }
}
