use crate::error::EncodingError;

const BOM: [u8; 3] = [0xEF, 0xBB, 0xBF];

/// Decode a UTF-8 byte stream, skipping a leading byte order mark
///
/// Continuation bytes are masked rather than validated. Sequences are
/// collected as UTF-16 code units, so a surrogate pair written as two 3 byte
/// sequences still decodes to a single character.
pub fn bytes_to_utf8_string(bytes: &[u8]) -> Result<String, EncodingError> {
    let start = if has_bom(bytes) { BOM.len() } else { 0 };

    let mut units: Vec<u16> = Vec::with_capacity(bytes.len() - start);
    let mut index = start;

    while index < bytes.len() {
        let lead = bytes[index];
        let (length, lead_mask) = sequence_shape(lead);

        let end = index + length;
        if end > bytes.len() {
            return Err(EncodingError::Truncated {
                index,
                needed: end - bytes.len(),
            });
        }

        let code_point = bytes[index + 1..end]
            .iter()
            .fold(u32::from(lead & lead_mask), |acc, byte| (acc << 6) | u32::from(byte & 0x3F));

        if length == 4 {
            let ch = char::from_u32(code_point)
                .ok_or(EncodingError::InvalidCodePoint { index, code_point })?;

            let mut buf = [0u16; 2];
            units.extend_from_slice(ch.encode_utf16(&mut buf));
        } else {
            // 3 byte sequences carry at most 16 bits
            units.push(code_point as u16);
        }

        index = end;
    }

    char::decode_utf16(units)
        .map(|unit| {
            unit.map_err(|error| EncodingError::UnpairedSurrogate(error.unpaired_surrogate()))
        })
        .collect()
}

/// Encode a string as UTF-8 bytes, characters outside the BMP take 4 bytes
pub fn string_to_utf8_bytes(string: &str) -> Vec<u8> {
    string.as_bytes().to_vec()
}

fn has_bom(bytes: &[u8]) -> bool {
    match bytes {
        [b0, b1, b2, ..] => {
            b0 & BOM[0] == BOM[0] && b1 & BOM[1] == BOM[1] && b2 & BOM[2] == BOM[2]
        }
        _ => false,
    }
}

/// Sequence length and the mask for the payload bits of the lead byte
///
/// Anything that is not ASCII, a 2 byte lead or a 4 byte lead is read as a
/// 3 byte sequence, stray continuation bytes included
fn sequence_shape(lead: u8) -> (usize, u8) {
    match lead {
        0x00..=0x7F => (1, 0x7F),
        0xC0..=0xDF => (2, 0x1F),
        0xF0..=0xF7 => (4, 0x07),
        _ => (3, 0x0F),
    }
}
