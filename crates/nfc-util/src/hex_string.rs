use tracing::warn;
use winnow::{
    ModalResult, Parser,
    combinator::{alt, repeat},
    stream::AsChar,
    token::{any, take_while},
};

use crate::error::HexParseError;

/// Lowercase hex for any byte buffer, e.g. `[0x00, 0x04, 0x07, 0xAF]` -> `"000407af"`
pub fn bytes_to_hex_string(bytes: impl AsRef<[u8]>) -> String {
    ::hex::encode(bytes)
}

/// Lowercase hex for a signed (Java style) byte array, negative values are
/// treated as unsigned
pub fn signed_bytes_to_hex_string(bytes: &[i8]) -> String {
    let unsigned = bytes.iter().map(|byte| *byte as u8).collect::<Vec<u8>>();
    ::hex::encode(unsigned)
}

/// Parse a hex string such as `"0x00-04:07 AF"` into bytes
///
/// Whitespace, `-` and `:` delimiters and a leading `0x` are removed first,
/// anything else that is not a hex digit is an error
pub fn hex_string_to_bytes(hex: &str) -> Result<Vec<u8>, HexParseError> {
    let hex = strip_delimiters(hex);

    let invalid = hex.chars().enumerate().find(|(_, c)| !c.is_ascii_hexdigit());
    if let Some((index, character)) = invalid {
        return Err(HexParseError::InvalidCharacter { character, index });
    }

    // only ascii hex digits left, so bytes and chars line up
    if hex.len() % 2 != 0 {
        return Err(HexParseError::OddLength(hex.len()));
    }

    ::hex::decode(&hex).map_err(|error| match error {
        ::hex::FromHexError::InvalidHexCharacter { c, index } => {
            HexParseError::InvalidCharacter { character: c, index }
        }
        ::hex::FromHexError::OddLength | ::hex::FromHexError::InvalidStringLength => {
            HexParseError::OddLength(hex.len())
        }
    })
}

/// Parse a hex string, keeping every valid pair of hex digits
///
/// Odd lengths and non-hex characters are logged and skipped instead of
/// failing, `"0G12"` parses as `[0x12]`
pub fn hex_string_to_bytes_lenient(hex: &str) -> Vec<u8> {
    let hex = strip_delimiters(hex);

    if hex.chars().count() % 2 != 0 {
        warn!("expecting an even number of characters in the hex string");
    }

    if let Some(bad) = hex.chars().find(|c| !c.is_ascii_hexdigit()) {
        warn!(%bad, "found non-hex characters in the hex string");
    }

    let mut input = hex.as_str();
    hex_pairs(&mut input).unwrap_or_default()
}

fn strip_delimiters(hex: &str) -> String {
    let stripped = hex
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '-' && *c != ':')
        .collect::<String>();

    match stripped.strip_prefix("0x") {
        Some(rest) => rest.to_string(),
        None => stripped,
    }
}

fn hex_pair(input: &mut &str) -> ModalResult<u8> {
    take_while(2, AsChar::is_hex_digit)
        .try_map(|pair: &str| u8::from_str_radix(pair, 16))
        .parse_next(input)
}

// left to right, non overlapping pairs, residue is dropped
fn hex_pairs(input: &mut &str) -> ModalResult<Vec<u8>> {
    let pairs: Vec<Option<u8>> =
        repeat(0.., alt((hex_pair.map(Some), any.value(None)))).parse_next(input)?;

    Ok(pairs.into_iter().flatten().collect())
}
