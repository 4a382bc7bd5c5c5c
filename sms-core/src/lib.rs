//! Core types and utilities for SMS text decoding
//!
//! This crate provides fundamental types, error handling, and utilities
//! used throughout the SMS decoding implementation.

pub mod charset;
pub mod error;
pub mod hex;

pub use charset::{Charset, DecodedText};
pub use error::{SmsError, SmsResult};
pub use hex::{parse_hex, to_hex};
