//! Byte, UTF-8 and hex helpers used to interpret NDEF record payloads
//!
//! Everything in here is a pure function, safe to call from any thread.

pub mod byte;
pub mod error;
pub mod hex_string;
pub mod record_type;
pub mod result_ext;
pub mod utf8;

mod ffi;

pub use byte::{byte_to_hex, byte_to_printable_char, normalize_byte};
pub use error::{EncodingError, HexParseError, InvalidInputError, TnfOutOfRange, UtilError};
pub use hex_string::{
    bytes_to_hex_string, hex_string_to_bytes, hex_string_to_bytes_lenient,
    signed_bytes_to_hex_string,
};
pub use record_type::{RTD_TEXT, RTD_URI, RecordType, Tnf, TypedRecord, is_record_type};
pub use utf8::{bytes_to_utf8_string, string_to_utf8_bytes};

uniffi::setup_scaffolding!();
