use std::str::FromStr as _;

/// NFC adapter status strings reported by the native plugin
#[derive(
    Debug,
    Copy,
    Clone,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    uniffi::Enum,
)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum NfcStatus {
    NfcOk,
    NoNfc,
    NfcDisabled,
    NdefPushDisabled,
}

impl NfcStatus {
    /// Read a status out of a native payload, tolerating whitespace and JSON quotes
    pub fn from_payload(payload: &str) -> Option<Self> {
        let trimmed = payload.trim();
        let unquoted = trimmed
            .strip_prefix('"')
            .and_then(|rest| rest.strip_suffix('"'))
            .unwrap_or(trimmed);

        Self::from_str(unquoted).ok()
    }

    pub fn is_available(&self) -> bool {
        matches!(self, Self::NfcOk)
    }
}

#[uniffi::export]
fn nfc_status_from_payload(payload: &str) -> Option<NfcStatus> {
    NfcStatus::from_payload(payload)
}

#[uniffi::export]
fn nfc_status_is_available(status: NfcStatus) -> bool {
    status.is_available()
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator as _;

    #[test]
    fn test_status_strings() {
        assert_eq!(NfcStatus::NfcOk.to_string(), "NFC_OK");
        assert_eq!(NfcStatus::NoNfc.to_string(), "NO_NFC");
        assert_eq!(NfcStatus::NfcDisabled.to_string(), "NFC_DISABLED");
        assert_eq!(NfcStatus::NdefPushDisabled.to_string(), "NDEF_PUSH_DISABLED");
    }

    #[test]
    fn test_from_payload() {
        for status in NfcStatus::iter() {
            assert_eq!(NfcStatus::from_payload(&status.to_string()), Some(status));
        }

        assert_eq!(NfcStatus::from_payload("\"NFC_DISABLED\""), Some(NfcStatus::NfcDisabled));
        assert_eq!(NfcStatus::from_payload("  NFC_OK\n"), Some(NfcStatus::NfcOk));
        assert_eq!(NfcStatus::from_payload("Reader Mode started."), None);
        assert_eq!(NfcStatus::from_payload(""), None);
    }

    #[test]
    fn test_only_ok_is_available() {
        let available = NfcStatus::iter().filter(NfcStatus::is_available).collect::<Vec<_>>();
        assert_eq!(available, vec![NfcStatus::NfcOk]);
    }
}
