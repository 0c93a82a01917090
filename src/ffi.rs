use nfc_util::{RecordType, Tnf, UtilError};

use crate::{
    payload::NdefPayload,
    tag::{NdefRecord, ScannedTag, TagError},
};

#[uniffi::export]
fn scanned_tag_from_json(json: &str) -> Result<ScannedTag, TagError> {
    ScannedTag::from_json(json)
}

#[uniffi::export]
fn scanned_tag_id_hex(tag: ScannedTag) -> String {
    tag.id_hex()
}

#[uniffi::export]
fn ndef_record_is_type(
    record: NdefRecord,
    tnf: Tnf,
    record_type: RecordType,
) -> Result<bool, UtilError> {
    Ok(record.is_type(tnf, &record_type)?)
}

#[uniffi::export]
fn ndef_record_type_string(record: NdefRecord) -> Result<String, UtilError> {
    Ok(record.type_string()?)
}

#[uniffi::export]
fn ndef_record_payload_hex(record: NdefRecord) -> String {
    record.payload_hex()
}

#[uniffi::export]
fn ndef_record_decode_payload(record: NdefRecord) -> Result<NdefPayload, TagError> {
    record.decode_payload()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> NdefRecord {
        NdefRecord {
            tnf: Tnf::WellKnown,
            type_: vec![0x54],
            id: vec![],
            payload: vec![0x02, b'e', b'n', b'h', b'i'],
        }
    }

    #[test]
    fn test_ndef_record_is_type() {
        assert_eq!(ndef_record_is_type(record(), Tnf::WellKnown, "T".into()), Ok(true));
        assert_eq!(ndef_record_is_type(record(), Tnf::Mime, "T".into()), Ok(false));

        let mut broken = record();
        broken.type_ = vec![0xE2, 0x82];

        assert_eq!(
            ndef_record_is_type(broken, Tnf::WellKnown, "T".into()),
            Err(UtilError::TruncatedUtf8 { index: 0, needed: 1 })
        );
    }

    #[test]
    fn test_ndef_record_helpers() {
        assert_eq!(ndef_record_type_string(record()).unwrap(), "T");
        assert_eq!(ndef_record_payload_hex(record()), "02656e6869");
        assert!(matches!(ndef_record_decode_payload(record()), Ok(NdefPayload::Text(_))));
    }
}
