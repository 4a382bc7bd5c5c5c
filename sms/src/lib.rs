//! SMS text decoding per 3GPP TS 23.038
//!
//! This library decodes SMS message bodies handed over by a modem as
//! (hex payload, DCS byte) pairs: the Data Coding Scheme byte is
//! classified into a character set and the payload is routed to the
//! matching codec.
//!
//! # Architecture
//!
//! This library is organized as a workspace with multiple crates:
//!
//! - `sms-core`: Core types, error handling, and hex parsing
//! - `sms-codec`: GSM 7-bit and UCS2 codecs
//! - `sms-dcs`: DCS classification and message body decoding
//!
//! # Usage
//!
//! ```
//! use sms::{DecodedText, decode_message};
//!
//! let decoded = decode_message("E8329BFD06", 0x00)?;
//! assert_eq!(decoded, DecodedText::Text("hello".to_string()));
//! # Ok::<(), sms::SmsError>(())
//! ```

// Re-export core types
pub use sms_core::{Charset, DecodedText, SmsError, SmsResult, parse_hex, to_hex};

// Re-export the DCS entry points
pub use sms_dcs::{charset_for_dcs, decode_message};

// Re-export codecs
pub mod codec {
    pub use sms_codec::*;
}
