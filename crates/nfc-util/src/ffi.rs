use crate::{
    error::UtilError,
    record_type::{RecordType, Tnf},
};

#[uniffi::export]
fn byte_to_hex(value: i32) -> Result<String, UtilError> {
    Ok(crate::byte::byte_to_hex(value)?)
}

#[uniffi::export]
fn byte_to_printable_char(value: i32) -> String {
    crate::byte::byte_to_printable_char(value).to_string()
}

#[uniffi::export]
fn bytes_to_utf8_string(bytes: Vec<u8>) -> Result<String, UtilError> {
    Ok(crate::utf8::bytes_to_utf8_string(&bytes)?)
}

#[uniffi::export]
fn string_to_utf8_bytes(string: &str) -> Vec<u8> {
    crate::utf8::string_to_utf8_bytes(string)
}

#[uniffi::export]
fn bytes_to_hex_string(bytes: Vec<u8>) -> String {
    crate::hex_string::bytes_to_hex_string(bytes)
}

#[uniffi::export]
fn signed_bytes_to_hex_string(bytes: Vec<i8>) -> String {
    crate::hex_string::signed_bytes_to_hex_string(&bytes)
}

#[uniffi::export]
fn hex_string_to_bytes(hex: &str) -> Result<Vec<u8>, UtilError> {
    Ok(crate::hex_string::hex_string_to_bytes(hex)?)
}

#[uniffi::export]
fn hex_string_to_bytes_lenient(hex: &str) -> Vec<u8> {
    crate::hex_string::hex_string_to_bytes_lenient(hex)
}

#[uniffi::export]
fn tnf_from_u8(value: u8) -> Option<Tnf> {
    Tnf::try_from(value).ok()
}

#[uniffi::export]
fn tnf_to_u8(tnf: Tnf) -> u8 {
    tnf.as_u8()
}

#[uniffi::export]
fn record_type_to_string(record_type: RecordType) -> Result<String, UtilError> {
    let string = record_type.to_type_string()?;
    Ok(string.into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_errors_flatten_for_ffi() {
        assert_eq!(byte_to_hex(300), Err(UtilError::ByteOutOfRange(300)));

        assert_eq!(
            bytes_to_utf8_string(vec![0xE2, 0x82]),
            Err(UtilError::TruncatedUtf8 { index: 0, needed: 1 })
        );

        assert_eq!(
            hex_string_to_bytes("0xZZ"),
            Err(UtilError::InvalidHexCharacter {
                character: "Z".to_string(),
                index: 0
            })
        );

        assert_eq!(hex_string_to_bytes("123"), Err(UtilError::OddHexLength(3)));
    }

    #[test]
    fn test_record_type_to_string() {
        let record_type = RecordType::Bytes(vec![0x54]);
        assert_eq!(record_type_to_string(record_type).unwrap(), "T");
        assert_eq!(byte_to_printable_char(0x41), "A");
        assert_eq!(tnf_from_u8(9), None);
    }
}
