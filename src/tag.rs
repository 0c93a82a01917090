//! Tags as reported by the native reader mode callback

use nfc_util::{
    EncodingError, RecordType, Tnf, TypedRecord, bytes_to_hex_string, bytes_to_utf8_string,
    is_record_type, normalize_byte, result_ext::ResultExt as _,
};
use serde::{Deserialize, Deserializer, de::Error as _};

use crate::payload::{self, NdefPayload};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, uniffi::Record)]
#[serde(rename_all = "camelCase")]
pub struct ScannedTag {
    #[serde(deserialize_with = "signed_bytes")]
    pub id: Vec<u8>,

    #[serde(default)]
    pub tech_types: Vec<String>,

    #[serde(default, rename = "type")]
    pub tag_type: Option<String>,

    #[serde(default)]
    pub max_size: Option<u32>,

    #[serde(default)]
    pub is_writable: Option<bool>,

    #[serde(default)]
    pub can_make_read_only: Option<bool>,

    /// Empty when the tag has no NDEF tech or no cached message
    #[serde(default)]
    pub ndef_message: Vec<NdefRecord>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, uniffi::Record)]
pub struct NdefRecord {
    pub tnf: Tnf,

    #[serde(rename = "type", default, deserialize_with = "signed_bytes")]
    pub type_: Vec<u8>,

    #[serde(default, deserialize_with = "signed_bytes")]
    pub id: Vec<u8>,

    #[serde(default, deserialize_with = "signed_bytes")]
    pub payload: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, uniffi::Error)]
pub enum TagError {
    #[error("invalid tag json: {0}")]
    Json(String),

    #[error("unable to decode record: {0}")]
    Encoding(String),

    #[error("malformed {kind} payload: {reason}")]
    MalformedPayload { kind: String, reason: String },
}

impl From<EncodingError> for TagError {
    fn from(error: EncodingError) -> Self {
        Self::Encoding(error.to_string())
    }
}

impl ScannedTag {
    pub fn from_json(json: &str) -> Result<Self, TagError> {
        serde_json::from_str(json).map_err_str(TagError::Json)
    }

    pub fn id_hex(&self) -> String {
        bytes_to_hex_string(&self.id)
    }

    /// Records in the NDEF message matching the given TNF and type
    pub fn records_of_type(
        &self,
        tnf: Tnf,
        record_type: &RecordType,
    ) -> Result<Vec<&NdefRecord>, EncodingError> {
        let mut matching = Vec::new();
        for record in &self.ndef_message {
            if record.is_type(tnf, record_type)? {
                matching.push(record);
            }
        }

        Ok(matching)
    }
}

impl TypedRecord for NdefRecord {
    fn tnf(&self) -> Tnf {
        self.tnf
    }

    fn record_type(&self) -> &[u8] {
        &self.type_
    }
}

impl NdefRecord {
    pub fn is_type(&self, tnf: Tnf, record_type: &RecordType) -> Result<bool, EncodingError> {
        is_record_type(self, tnf, record_type)
    }

    pub fn type_string(&self) -> Result<String, EncodingError> {
        bytes_to_utf8_string(&self.type_)
    }

    pub fn payload_hex(&self) -> String {
        bytes_to_hex_string(&self.payload)
    }

    pub fn decode_payload(&self) -> Result<NdefPayload, TagError> {
        payload::decode_payload(self)
    }
}

// java bytes are signed, accept both -128..=-1 and 128..=255
fn signed_bytes<'de, D>(deserializer: D) -> Result<Vec<u8>, D::Error>
where
    D: Deserializer<'de>,
{
    Vec::<i32>::deserialize(deserializer)?
        .into_iter()
        .map(|value| normalize_byte(value).map_err(D::Error::custom))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const NDEF_TAG: &str = r#"{
        "id": [4, -94, 18, 106, -1, 0, 128],
        "techTypes": [
            "android.nfc.tech.NfcA",
            "android.nfc.tech.MifareUltralight",
            "android.nfc.tech.Ndef"
        ],
        "type": "org.nfcforum.ndef.type2",
        "maxSize": 137,
        "isWritable": true,
        "canMakeReadOnly": true,
        "ndefMessage": [
            {"tnf": 1, "type": [84], "id": [], "payload": [2, 101, 110, 104, 101, 108, 108, 111]},
            {
                "tnf": 1,
                "type": [85],
                "id": [],
                "payload": [4, 101, 120, 97, 109, 112, 108, 101, 46, 99, 111, 109]
            },
            {
                "tnf": 2,
                "type": [116, 101, 120, 116, 47, 112, 108, 97, 105, 110],
                "id": [49],
                "payload": [-61, -87]
            }
        ]
    }"#;

    const PLAIN_TAG: &str = r#"{"id": [1, 2, 3, 4], "techTypes": ["android.nfc.tech.IsoDep"]}"#;

    #[test]
    fn test_parse_ndef_tag() {
        let tag = ScannedTag::from_json(NDEF_TAG).unwrap();

        assert_eq!(tag.id, vec![0x04, 0xA2, 0x12, 0x6A, 0xFF, 0x00, 0x80]);
        assert_eq!(tag.id_hex(), "04a2126aff0080");
        assert_eq!(tag.tech_types.len(), 3);
        assert_eq!(tag.tag_type.as_deref(), Some("org.nfcforum.ndef.type2"));
        assert_eq!(tag.max_size, Some(137));
        assert_eq!(tag.is_writable, Some(true));
        assert_eq!(tag.ndef_message.len(), 3);

        let mime = &tag.ndef_message[2];
        assert_eq!(mime.tnf, Tnf::Mime);
        assert_eq!(mime.type_string().unwrap(), "text/plain");
        assert_eq!(mime.id, vec![0x31]);
        assert_eq!(mime.payload, vec![0xC3, 0xA9]);
        assert_eq!(mime.payload_hex(), "c3a9");
    }

    #[test]
    fn test_parse_tag_without_ndef() {
        let tag = ScannedTag::from_json(PLAIN_TAG).unwrap();

        assert_eq!(tag.id_hex(), "01020304");
        assert_eq!(tag.tag_type, None);
        assert!(tag.ndef_message.is_empty());
    }

    #[test]
    fn test_record_type_matching() {
        let tag = ScannedTag::from_json(NDEF_TAG).unwrap();
        let text = &tag.ndef_message[0];

        assert!(text.is_type(Tnf::WellKnown, &"T".into()).unwrap());
        assert!(text.is_type(Tnf::WellKnown, &RecordType::Bytes(vec![0x54])).unwrap());
        assert!(!text.is_type(Tnf::Mime, &"T".into()).unwrap());

        let uris = tag.records_of_type(Tnf::WellKnown, &"U".into()).unwrap();
        assert_eq!(uris, vec![&tag.ndef_message[1]]);
    }

    #[test]
    fn test_id_is_required() {
        let result = ScannedTag::from_json(r#"{"techTypes": ["android.nfc.tech.NfcA"]}"#);
        assert!(matches!(result, Err(TagError::Json(message)) if message.contains("id")));

        // an empty id is still an id
        let tag = ScannedTag::from_json(r#"{"id": []}"#).unwrap();
        assert_eq!(tag.id_hex(), "");
    }

    #[test]
    fn test_invalid_json() {
        assert!(matches!(ScannedTag::from_json("not json"), Err(TagError::Json(_))));
        assert!(matches!(
            ScannedTag::from_json(r#"{"id": [], "techTypes": 5}"#),
            Err(TagError::Json(_))
        ));

        // byte out of range
        let result = ScannedTag::from_json(r#"{"id": [256]}"#);
        assert!(matches!(result, Err(TagError::Json(message)) if message.contains("256")));

        // tnf only has 3 bits
        let result = ScannedTag::from_json(r#"{"id": [], "ndefMessage": [{"tnf": 8}]}"#);
        assert!(matches!(result, Err(TagError::Json(_))));
    }
}
