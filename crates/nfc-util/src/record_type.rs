use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use crate::{
    error::{EncodingError, TnfOutOfRange},
    utf8::bytes_to_utf8_string,
};

/// Well-known record type for text records
pub const RTD_TEXT: &[u8] = b"T";

/// Well-known record type for URI records
pub const RTD_URI: &[u8] = b"U";

/// The 3 bit Type Name Format of an NDEF record
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, uniffi::Enum)]
#[serde(try_from = "u8", into = "u8")]
pub enum Tnf {
    Empty,
    WellKnown,
    Mime,
    AbsoluteUri,
    External,
    Unknown,
    Unchanged,
    Reserved,
}

impl Tnf {
    pub const fn as_u8(self) -> u8 {
        match self {
            Self::Empty => 0,
            Self::WellKnown => 1,
            Self::Mime => 2,
            Self::AbsoluteUri => 3,
            Self::External => 4,
            Self::Unknown => 5,
            Self::Unchanged => 6,
            Self::Reserved => 7,
        }
    }
}

impl TryFrom<u8> for Tnf {
    type Error = TnfOutOfRange;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        let tnf = match value {
            0 => Self::Empty,
            1 => Self::WellKnown,
            2 => Self::Mime,
            3 => Self::AbsoluteUri,
            4 => Self::External,
            5 => Self::Unknown,
            6 => Self::Unchanged,
            7 => Self::Reserved,
            _ => return Err(TnfOutOfRange(value)),
        };

        Ok(tnf)
    }
}

impl From<Tnf> for u8 {
    fn from(tnf: Tnf) -> Self {
        tnf.as_u8()
    }
}

/// The type to match a record against, either already a string or the raw
/// bytes of the type field
#[derive(Debug, Clone, PartialEq, Eq, Hash, uniffi::Enum)]
pub enum RecordType {
    Utf8(String),
    Bytes(Vec<u8>),
}

impl RecordType {
    /// The type as a string, raw bytes are UTF-8 decoded
    pub fn to_type_string(&self) -> Result<Cow<'_, str>, EncodingError> {
        match self {
            Self::Utf8(string) => Ok(Cow::Borrowed(string)),
            Self::Bytes(bytes) => bytes_to_utf8_string(bytes).map(Cow::Owned),
        }
    }
}

impl From<&str> for RecordType {
    fn from(string: &str) -> Self {
        Self::Utf8(string.to_string())
    }
}

impl From<String> for RecordType {
    fn from(string: String) -> Self {
        Self::Utf8(string)
    }
}

impl From<&[u8]> for RecordType {
    fn from(bytes: &[u8]) -> Self {
        Self::Bytes(bytes.to_vec())
    }
}

impl From<Vec<u8>> for RecordType {
    fn from(bytes: Vec<u8>) -> Self {
        Self::Bytes(bytes)
    }
}

/// Anything that carries an NDEF type name format and type field
pub trait TypedRecord {
    fn tnf(&self) -> Tnf;
    fn record_type(&self) -> &[u8];
}

/// True if the record has the given TNF and its type decodes to `record_type`
pub fn is_record_type<R>(
    record: &R,
    tnf: Tnf,
    record_type: &RecordType,
) -> Result<bool, EncodingError>
where
    R: TypedRecord + ?Sized,
{
    if record.tnf() != tnf {
        return Ok(false);
    }

    let expected = record_type.to_type_string()?;
    let actual = bytes_to_utf8_string(record.record_type())?;

    Ok(actual == expected)
}
