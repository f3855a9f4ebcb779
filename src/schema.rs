// src/schema.rs
use serde_json::Value;

use crate::predicates::{is_eth_address, is_hex_string, is_url};

// Recognized configuration field keys, as they appear on the wire.
pub const SIMPLE_ACCOUNT_FACTORY: &str = "simpleAccountFactory";
pub const ENTRY_POINT: &str = "entryPoint";
pub const BUNDLER_URL: &str = "bundlerUrl";
pub const CUSTOM_VERIFYING_PAYMASTER_ADDRESS: &str = "customVerifyingPaymasterAddress";
pub const CUSTOM_VERIFYING_PAYMASTER_PK: &str = "customVerifyingPaymasterPk";

/// A single optional field binding: the field is allowed to be absent, but a
/// present value must be a string satisfying `check`.
pub struct FieldRule {
    pub name: &'static str,
    pub check: fn(&str) -> bool,
}

/// The chain configuration schema. Order matters: violations are reported
/// against the first failing rule in this table.
pub const CHAIN_CONFIG_SCHEMA: &[FieldRule] = &[
    FieldRule {
        name: SIMPLE_ACCOUNT_FACTORY,
        check: is_eth_address,
    },
    FieldRule {
        name: ENTRY_POINT,
        check: is_eth_address,
    },
    FieldRule {
        name: BUNDLER_URL,
        check: is_url,
    },
    FieldRule {
        name: CUSTOM_VERIFYING_PAYMASTER_ADDRESS,
        check: is_eth_address,
    },
    FieldRule {
        name: CUSTOM_VERIFYING_PAYMASTER_PK,
        check: is_hex_string,
    },
];

/// The first structural violation found while checking a record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchemaViolation {
    /// The record itself is not a JSON object.
    TopLevel { description: String },
    /// A recognized field holds a value that fails its binding.
    Field { name: &'static str, value: Value },
}

/// Check a raw record against the chain configuration schema, reporting the
/// first violation in schema declaration order. Absent fields impose no
/// constraint; unknown extra fields are ignored.
pub fn check(config: &Value) -> Result<(), SchemaViolation> {
    let Some(object) = config.as_object() else {
        return Err(SchemaViolation::TopLevel {
            description: format!("expected an object, but received: {config}"),
        });
    };

    for rule in CHAIN_CONFIG_SCHEMA {
        if let Some(value) = object.get(rule.name) {
            let holds = value.as_str().map_or(false, rule.check);
            if !holds {
                return Err(SchemaViolation::Field {
                    name: rule.name,
                    value: value.clone(),
                });
            }
        }
    }

    Ok(())
}
