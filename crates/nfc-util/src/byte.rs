use crate::error::InvalidInputError;

/// Normalize a signed or unsigned byte value into a `u8`
///
/// Java byte arrays arrive signed, so `-128..=-1` maps onto `128..=255`
pub fn normalize_byte(value: i32) -> Result<u8, InvalidInputError> {
    match value {
        -128..=-1 => Ok((value + 256) as u8),
        0..=255 => Ok(value as u8),
        _ => Err(InvalidInputError::ByteOutOfRange(value)),
    }
}

/// Two character lowercase hex for a single byte, e.g. `-1` -> `"ff"`
pub fn byte_to_hex(value: i32) -> Result<String, InvalidInputError> {
    let byte = normalize_byte(value)?;
    Ok(format!("{byte:02x}"))
}

/// The ASCII character for `0x20..=0x7F`, `.` for everything else
pub fn byte_to_printable_char(value: i32) -> char {
    match u8::try_from(value) {
        Ok(byte @ 0x20..=0x7F) => char::from(byte),
        _ => '.',
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_byte_to_hex() {
        assert_eq!(byte_to_hex(-1).unwrap(), "ff");
        assert_eq!(byte_to_hex(0).unwrap(), "00");
        assert_eq!(byte_to_hex(255).unwrap(), "ff");
        assert_eq!(byte_to_hex(10).unwrap(), "0a");
        assert_eq!(byte_to_hex(-128).unwrap(), "80");
        assert_eq!(byte_to_hex(127).unwrap(), "7f");
    }

    #[test]
    fn test_byte_to_hex_out_of_range() {
        assert_eq!(byte_to_hex(256), Err(InvalidInputError::ByteOutOfRange(256)));
        assert_eq!(byte_to_hex(-129), Err(InvalidInputError::ByteOutOfRange(-129)));
        assert!(normalize_byte(i32::MAX).is_err());
    }

    #[test]
    fn test_byte_to_printable_char() {
        assert_eq!(byte_to_printable_char(0x41), 'A');
        assert_eq!(byte_to_printable_char(0x20), ' ');
        assert_eq!(byte_to_printable_char(0x7F), '\u{7f}');
        assert_eq!(byte_to_printable_char(0x01), '.');
        assert_eq!(byte_to_printable_char(0x80), '.');
        assert_eq!(byte_to_printable_char(-65), '.');
        assert_eq!(byte_to_printable_char(1000), '.');
    }
}
