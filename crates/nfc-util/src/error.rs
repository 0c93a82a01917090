/// A byte stream could not be decoded as UTF-8 text
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum EncodingError {
    #[error("utf-8 stream truncated at byte {index}, missing {needed} byte(s)")]
    Truncated { index: usize, needed: usize },

    #[error("invalid code point {code_point:#x} in 4 byte sequence at byte {index}")]
    InvalidCodePoint { index: usize, code_point: u32 },

    #[error("unpaired utf-16 surrogate {0:#06x}")]
    UnpairedSurrogate(u16),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum InvalidInputError {
    #[error("byte value {0} is out of range, expected -128..=255")]
    ByteOutOfRange(i32),
}

/// Errors from strict hex string parsing, indexes are into the string after
/// delimiters and the `0x` prefix are removed
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum HexParseError {
    #[error("expecting an even number of characters in the hex string, got {0}")]
    OddLength(usize),

    #[error("found non-hex character {character:?} at index {index}")]
    InvalidCharacter { character: char, index: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("type name format {0} is out of range, only 3 bits")]
pub struct TnfOutOfRange(pub u8);

// For uniffi
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, uniffi::Error)]
pub enum UtilError {
    #[error("utf-8 stream truncated at byte {index}, missing {needed} byte(s)")]
    TruncatedUtf8 { index: u64, needed: u64 },

    #[error("invalid code point {code_point} at byte {index}")]
    InvalidCodePoint { index: u64, code_point: u32 },

    #[error("unpaired utf-16 surrogate {0}")]
    UnpairedSurrogate(u16),

    #[error("byte value {0} is out of range")]
    ByteOutOfRange(i32),

    #[error("odd number of hex characters: {0}")]
    OddHexLength(u64),

    #[error("invalid hex character {character} at index {index}")]
    InvalidHexCharacter { character: String, index: u64 },
}

impl From<EncodingError> for UtilError {
    fn from(error: EncodingError) -> Self {
        match error {
            EncodingError::Truncated { index, needed } => Self::TruncatedUtf8 {
                index: index as u64,
                needed: needed as u64,
            },
            EncodingError::InvalidCodePoint { index, code_point } => Self::InvalidCodePoint {
                index: index as u64,
                code_point,
            },
            EncodingError::UnpairedSurrogate(unit) => Self::UnpairedSurrogate(unit),
        }
    }
}

impl From<InvalidInputError> for UtilError {
    fn from(error: InvalidInputError) -> Self {
        match error {
            InvalidInputError::ByteOutOfRange(value) => Self::ByteOutOfRange(value),
        }
    }
}

impl From<HexParseError> for UtilError {
    fn from(error: HexParseError) -> Self {
        match error {
            HexParseError::OddLength(length) => Self::OddHexLength(length as u64),
            HexParseError::InvalidCharacter { character, index } => Self::InvalidHexCharacter {
                character: character.to_string(),
                index: index as u64,
            },
        }
    }
}
