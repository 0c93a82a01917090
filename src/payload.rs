use nfc_util::{RTD_TEXT, RTD_URI, Tnf, bytes_to_utf8_string};

use crate::tag::{NdefRecord, TagError};

#[derive(Debug, Clone, PartialEq, Eq, uniffi::Enum)]
pub enum NdefPayload {
    Text(TextPayload),
    Uri(String),
    Data(Vec<u8>),
}

#[derive(Debug, Clone, PartialEq, Eq, uniffi::Record)]
pub struct TextPayload {
    pub format: TextPayloadFormat,
    pub language: String,
    pub text: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, uniffi::Enum)]
pub enum TextPayloadFormat {
    Utf8,
    Utf16,
}

/// URI identifier codes from the NFC Forum URI record type definition
pub const URI_PREFIXES: &[&str] = &[
    "",                           // 0x00 - no prepending
    "http://www.",                // 0x01
    "https://www.",               // 0x02
    "http://",                    // 0x03
    "https://",                   // 0x04
    "tel:",                       // 0x05
    "mailto:",                    // 0x06
    "ftp://anonymous:anonymous@", // 0x07
    "ftp://ftp.",                 // 0x08
    "ftps://",                    // 0x09
    "sftp://",                    // 0x0A
    "smb://",                     // 0x0B
    "nfs://",                     // 0x0C
    "ftp://",                     // 0x0D
    "dav://",                     // 0x0E
    "news:",                      // 0x0F
    "telnet://",                  // 0x10
    "imap:",                      // 0x11
    "rtsp://",                    // 0x12
    "urn:",                       // 0x13
    "pop:",                       // 0x14
    "sip:",                       // 0x15
    "sips:",                      // 0x16
    "tftp:",                      // 0x17
    "btspp://",                   // 0x18
    "btl2cap://",                 // 0x19
    "btgoep://",                  // 0x1A
    "tcpobex://",                 // 0x1B
    "irdaobex://",                // 0x1C
    "file://",                    // 0x1D
    "urn:epc:id:",                // 0x1E
    "urn:epc:tag:",               // 0x1F
    "urn:epc:pat:",               // 0x20
    "urn:epc:raw:",               // 0x21
    "urn:epc:",                   // 0x22
    "urn:nfc:",                   // 0x23
];

/// Decode well-known text and URI records, anything else stays raw data
pub fn decode_payload(record: &NdefRecord) -> Result<NdefPayload, TagError> {
    if record.tnf != Tnf::WellKnown {
        return Ok(NdefPayload::Data(record.payload.clone()));
    }

    match record.type_.as_slice() {
        RTD_TEXT => decode_text(&record.payload).map(NdefPayload::Text),
        RTD_URI => decode_uri(&record.payload).map(NdefPayload::Uri),
        _ => Ok(NdefPayload::Data(record.payload.clone())),
    }
}

fn decode_text(payload: &[u8]) -> Result<TextPayload, TagError> {
    let Some((&status, rest)) = payload.split_first() else {
        return Err(malformed("text", "empty payload"));
    };

    let is_utf16 = status & 0x80 != 0;
    let language_length = usize::from(status & 0x3F);

    if language_length > rest.len() {
        return Err(malformed(
            "text",
            format!("language code length {language_length} exceeds payload"),
        ));
    }

    let (language, text) = rest.split_at(language_length);
    let language = bytes_to_utf8_string(language)?;

    let (format, text) = if is_utf16 {
        (TextPayloadFormat::Utf16, decode_utf16(text)?)
    } else {
        (TextPayloadFormat::Utf8, bytes_to_utf8_string(text)?)
    };

    Ok(TextPayload {
        format,
        language,
        text,
    })
}

// big endian unless the text starts with a little endian byte order mark
fn decode_utf16(text: &[u8]) -> Result<String, TagError> {
    if text.len() % 2 != 0 {
        return Err(malformed("text", "utf-16 text has an odd number of bytes"));
    }

    let (text, little_endian) = match text {
        [0xFE, 0xFF, rest @ ..] => (rest, false),
        [0xFF, 0xFE, rest @ ..] => (rest, true),
        _ => (text, false),
    };

    let units = text
        .chunks_exact(2)
        .map(|chunk| {
            let pair = [chunk[0], chunk[1]];
            if little_endian {
                u16::from_le_bytes(pair)
            } else {
                u16::from_be_bytes(pair)
            }
        })
        .collect::<Vec<u16>>();

    String::from_utf16(&units).map_err(|error| malformed("text", error.to_string()))
}

fn decode_uri(payload: &[u8]) -> Result<String, TagError> {
    let Some((&code, rest)) = payload.split_first() else {
        return Err(malformed("uri", "empty payload"));
    };

    let prefix = URI_PREFIXES.get(usize::from(code)).copied().unwrap_or_default();
    let rest = bytes_to_utf8_string(rest)?;

    Ok(format!("{prefix}{rest}"))
}

fn malformed(kind: &str, reason: impl Into<String>) -> TagError {
    TagError::MalformedPayload {
        kind: kind.to_string(),
        reason: reason.into(),
    }
}
