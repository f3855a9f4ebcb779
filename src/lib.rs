// src/lib.rs
//! Validation for account-abstraction chain configurations.
//!
//! A chain configuration is a flat record of optional fields: contract
//! addresses, a bundler URL, and a paymaster private key. [`validate_config`]
//! accepts well-formed records silently and rejects malformed ones with a
//! field-specific, `[Snap]`-tagged diagnostic.

pub mod error;
pub mod predicates;
pub mod schema;
pub mod types;
pub mod validator;

pub use crate::error::ConfigValidationError;
pub use crate::types::ChainConfig;
pub use crate::validator::{validate_config, validate_config_json};
