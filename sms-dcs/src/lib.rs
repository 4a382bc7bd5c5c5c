//! Data Coding Scheme handling for SMS user data
//!
//! The DCS byte of an SMS PDU selects the character encoding of the
//! message body. This crate classifies the DCS byte per 3GPP TS 23.038
//! and routes the hex-encoded body to the matching codec.
//!
//! # Coding groups
//!
//! Bits 7..4 of the DCS byte select a coding group; bits 3..0 are a
//! group-specific subfield. The general data coding groups (0100-0111 and
//! 1001) select the alphabet with subfield bits 3..2; the data coding /
//! message class group (1111) selects it with subfield bit 2 alone.
//! Several groups are reserved outright, and this implementation treats
//! the I1 protocol message group (TS 24.294) and the WAP Forum group as
//! reserved too since it does not decode them.

use sms_codec::{decode_gsm7, decode_ucs2, unpack_septets};
use sms_core::{Charset, DecodedText, SmsResult, parse_hex};

/// Alphabet table for the general data coding groups, indexed by subfield
/// bits 3..2
const GENERAL_CODING: [Charset; 4] = [
    Charset::Gsm7Bit,
    Charset::EightBitData,
    Charset::Ucs2,
    Charset::Reserved,
];

/// Classify a Data Coding Scheme byte into a character set
///
/// See 3GPP TS 23.038 V9.1.1 (2010-02). Total over all 256 values: every
/// DCS byte resolves to exactly one [`Charset`], with no failure mode.
///
/// Two sub-variants are classified but not fully decoded: the
/// language-indication variants of group 0001 (the language prefix is
/// left in the text), and compressed text (bit 5 of the general coding
/// groups is ignored, so compressed bodies decode to garbage rather than
/// being rejected).
pub fn charset_for_dcs(dcs: u8) -> Charset {
    let group = dcs >> 4;
    let sub = dcs & 0x0F;

    match group {
        0b0000 => Charset::Gsm7Bit,
        0b0001 => match sub {
            // message preceded by an ISO 639 language indication; the
            // prefix is not stripped here
            0b0000 => Charset::Gsm7Bit,
            0b0001 => Charset::Ucs2,
            _ => Charset::Undefined,
        },
        0b0010 | 0b0011 => Charset::Gsm7Bit,
        // general data coding, with and without message class
        0b0100..=0b0111 | 0b1001 => GENERAL_CODING[(sub >> 2) as usize],
        0b1000 | 0b1010..=0b1100 => Charset::Reserved,
        // I1 protocol message (TS 24.294), not decoded
        0b1101 => Charset::Reserved,
        // WAP Forum scheme, not decoded
        0b1110 => Charset::Reserved,
        // data coding / message class: bit 2 selects the alphabet
        _ => {
            if sub & 0b0100 != 0 {
                Charset::EightBitData
            } else {
                Charset::Gsm7Bit
            }
        }
    }
}

/// Decode an SMS message body according to its DCS byte
///
/// # Arguments
///
/// * `payload` - Message body as hexadecimal digit pairs, one per octet
/// * `dcs` - The Data Coding Scheme byte from the PDU
///
/// # Returns
///
/// [`DecodedText::Text`] for GSM 7-bit and UCS2 bodies. For 8-bit data,
/// and for DCS values whose encoding is reserved or undefined, the
/// payload is passed through unchanged as [`DecodedText::Raw`]; the
/// reserved/undefined case additionally logs a warning.
///
/// # Errors
///
/// Returns `SmsError::MalformedPayload` if `payload` is not valid hex,
/// regardless of the DCS value, and `SmsError::InvalidData` if a UCS2
/// body is not a whole number of valid code units.
pub fn decode_message(payload: &str, dcs: u8) -> SmsResult<DecodedText> {
    let charset = charset_for_dcs(dcs);
    log::debug!("dcs = 0x{:02X}", dcs);
    log::debug!("charset = {}", charset);
    log::debug!("payload = {}", payload);

    let bytes = parse_hex(payload)?;
    match charset {
        Charset::Gsm7Bit => Ok(DecodedText::Text(decode_gsm7(&unpack_septets(&bytes)))),
        Charset::Ucs2 => {
            let byte_count = bytes.len();
            let text = decode_ucs2(bytes.into_iter(), byte_count)?;
            Ok(DecodedText::Text(text))
        }
        Charset::EightBitData => Ok(DecodedText::Raw(payload.to_owned())),
        Charset::Reserved | Charset::Undefined => {
            log::warn!(
                "Unable to determine the encoding from DCS 0x{:02X}, returning the raw payload",
                dcs
            );
            Ok(DecodedText::Raw(payload.to_owned()))
        }
    }
}
