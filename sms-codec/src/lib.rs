//! Text codecs for SMS user data
//!
//! This crate implements the two text encodings an SMS message body can
//! carry per 3GPP TS 23.038: the GSM 7-bit default alphabet (packed as
//! septets) and UCS2.

pub mod gsm7;
pub mod ucs2;

pub use gsm7::{decode_gsm7, unpack_septets};
pub use ucs2::decode_ucs2;
