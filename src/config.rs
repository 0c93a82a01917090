use nfc_macros::impl_default_for;
use nfc_util::result_ext::ResultExt as _;
use serde::{Deserialize, Serialize};

/// Service name the native plugin registers under
pub const DEFAULT_SERVICE_NAME: &str = "NFCScanner";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, uniffi::Record)]
#[serde(default, rename_all = "camelCase")]
pub struct ScannerConfig {
    /// Native service every call is addressed to
    pub service_name: String,

    /// Include native payloads in debug logs, they can carry tag ids
    pub log_payloads: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, uniffi::Error)]
pub enum ConfigError {
    #[error("invalid config json: {0}")]
    Json(String),

    #[error("service name must not be empty")]
    EmptyServiceName,
}

impl_default_for!(ScannerConfig);

impl ScannerConfig {
    pub fn new() -> Self {
        Self {
            service_name: DEFAULT_SERVICE_NAME.to_string(),
            log_payloads: false,
        }
    }

    /// Parse a config, missing fields fall back to their defaults
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json).map_err_str(ConfigError::Json)?;
        config.validate()?;

        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.service_name.trim().is_empty() {
            return Err(ConfigError::EmptyServiceName);
        }

        Ok(())
    }
}

#[uniffi::export]
fn scanner_config_default() -> ScannerConfig {
    ScannerConfig::new()
}

#[uniffi::export]
fn scanner_config_from_json(json: &str) -> Result<ScannerConfig, ConfigError> {
    ScannerConfig::from_json(json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defaults() {
        let config = ScannerConfig::default();
        assert_eq!(config.service_name, "NFCScanner");
        assert!(!config.log_payloads);
    }

    #[test]
    fn test_from_json_fills_missing_fields() {
        assert_eq!(ScannerConfig::from_json("{}").unwrap(), ScannerConfig::new());

        let config = ScannerConfig::from_json(r#"{"logPayloads": true}"#).unwrap();
        assert_eq!(
            config,
            ScannerConfig {
                service_name: "NFCScanner".to_string(),
                log_payloads: true,
            }
        );

        let config = ScannerConfig::from_json(r#"{"serviceName": "NfcPlugin"}"#).unwrap();
        assert_eq!(config.service_name, "NfcPlugin");
    }

    #[test]
    fn test_from_json_errors() {
        assert_eq!(
            ScannerConfig::from_json(r#"{"serviceName": "  "}"#),
            Err(ConfigError::EmptyServiceName)
        );

        assert!(matches!(ScannerConfig::from_json("not json"), Err(ConfigError::Json(_))));
        assert!(matches!(
            ScannerConfig::from_json(r#"{"logPayloads": "yes"}"#),
            Err(ConfigError::Json(_))
        ));
    }
}
