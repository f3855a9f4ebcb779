// src/validator.rs
use serde_json::Value;

use crate::error::ConfigValidationError;
use crate::schema::{self, SchemaViolation};

/// Field-specific diagnostic templates. The offending value is appended to
/// the template when the error is built.
const CONFIG_ERROR_MESSAGES: &[(&str, &str)] = &[
    (
        schema::SIMPLE_ACCOUNT_FACTORY,
        "[Snap] Invalid Simple Account Factory Address:",
    ),
    (schema::ENTRY_POINT, "[Snap] Invalid Entry Point Address:"),
    (schema::BUNDLER_URL, "[Snap] Invalid Bundler URL:"),
    (
        schema::CUSTOM_VERIFYING_PAYMASTER_ADDRESS,
        "[Snap] Invalid Custom Verifying Paymaster Address:",
    ),
    (
        schema::CUSTOM_VERIFYING_PAYMASTER_PK,
        "[Snap] Invalid Custom Verifying Paymaster Private Key:",
    ),
];

fn error_message_for(field: &str) -> Option<&'static str> {
    CONFIG_ERROR_MESSAGES
        .iter()
        .find(|(name, _)| *name == field)
        .map(|(_, message)| *message)
}

// Strings render bare; everything else renders in its JSON form.
fn render_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Validate a raw chain configuration record.
///
/// Returns `Ok(())` when every present field satisfies its format check.
/// Otherwise fails with a diagnostic for the first violation found, in schema
/// declaration order; violations are never aggregated.
pub fn validate_config(config: &Value) -> Result<(), ConfigValidationError> {
    match schema::check(config) {
        Ok(()) => Ok(()),
        Err(SchemaViolation::TopLevel { description }) => {
            Err(ConfigValidationError::MalformedConfig(description))
        }
        Err(SchemaViolation::Field { name, value }) => {
            let rendered = render_value(&value);
            match error_message_for(name) {
                Some(template) => Err(ConfigValidationError::InvalidField(template, rendered)),
                // Unreachable as long as every schema rule has a table entry;
                // kept so a table gap degrades to a generic diagnostic.
                None => Err(ConfigValidationError::UnrecognizedField(
                    name.to_string(),
                    rendered,
                )),
            }
        }
    }
}

/// Validate a chain configuration held as raw JSON text. Undecodable input
/// is reported as a generic configuration error rather than a decode error.
pub fn validate_config_json(raw: &str) -> Result<(), ConfigValidationError> {
    let config: Value = serde_json::from_str(raw)
        .map_err(|err| ConfigValidationError::Unexpected(err.to_string()))?;
    validate_config(&config)
}
