// src/types.rs
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ConfigValidationError;
use crate::validator::validate_config;

/// A per-chain wallet configuration. Every field is optional; a present
/// field carries a raw string whose shape the validator has vouched for.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChainConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub simple_account_factory: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entry_point: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bundler_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_verifying_paymaster_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_verifying_paymaster_pk: Option<String>,
}

impl ChainConfig {
    /// Validate a raw record and, on success, deserialize it into the typed
    /// form. Unknown extra fields in the record are dropped.
    pub fn from_value(value: &Value) -> Result<Self, ConfigValidationError> {
        validate_config(value)?;
        serde_json::from_value(value.clone())
            .map_err(|err| ConfigValidationError::Unexpected(err.to_string()))
    }

    /// Run an already-typed configuration back through the validation gate.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        let value = serde_json::to_value(self)
            .map_err(|err| ConfigValidationError::Unexpected(err.to_string()))?;
        validate_config(&value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn default_config_validates() {
        assert_eq!(ChainConfig::default().validate(), Ok(()));
    }

    #[test]
    fn from_value_populates_typed_fields() {
        let entry_point = "0x5FF137D4b0FDCD49DcA30c7CF57E578a026d2789";
        let value = json!({
            "entryPoint": entry_point,
            "bundlerUrl": "http://localhost:3000",
            "ignoredExtra": true,
        });
        let config = ChainConfig::from_value(&value).unwrap();
        assert_eq!(config.entry_point.as_deref(), Some(entry_point));
        assert_eq!(config.bundler_url.as_deref(), Some("http://localhost:3000"));
        assert_eq!(config.simple_account_factory, None);
    }

    #[test]
    fn from_value_rejects_invalid_records() {
        let value = json!({ "entryPoint": "not-an-address" });
        let err = ChainConfig::from_value(&value).unwrap_err();
        assert_eq!(
            err.to_string(),
            "[Snap] Invalid Entry Point Address: not-an-address"
        );
    }

    #[test]
    fn typed_config_with_bad_field_fails_its_own_gate() {
        let config = ChainConfig {
            bundler_url: Some("ftp://bad".to_string()),
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert_eq!(err.to_string(), "[Snap] Invalid Bundler URL: ftp://bad");
    }
}
