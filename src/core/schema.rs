//! Schema validation of user-defined structures.
//!
//! Caller-supplied JSON schemas (draft 7) are compiled once with the
//! `jsonschema` crate and then applied to `user_defined` items and secret
//! payloads while a file is loaded. Validation reports the first violation.

use std::fmt;
use std::sync::Arc;

use jsonschema::{Draft, Validator};
use serde_json::Value;

use crate::error::{Result, SchemaError};

/// A compiled JSON schema.
#[derive(Debug, Clone)]
pub struct Schema {
    raw: Arc<Value>,
    validator: Arc<Validator>,
}

/// First violation found when validating a value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// JSON pointer to the offending element (e.g., "/ports/0"), empty for the top level
    pub path: String,
    /// Human-readable error message
    pub message: String,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_empty() || self.path == "/" {
            write!(f, "top-level element: {}", self.message)
        } else {
            write!(f, "element '{}': {}", self.path, self.message)
        }
    }
}

impl Schema {
    /// Compile a schema.
    ///
    /// # Arguments
    ///
    /// * `target` - What the schema validates, used in error messages
    /// * `schema` - The JSON schema document
    ///
    /// # Errors
    ///
    /// Returns `SchemaError::Invalid` if `schema` is not a valid draft 7 schema.
    pub fn compile(target: &str, schema: Value) -> Result<Self> {
        let validator = Validator::options()
            .with_draft(Draft::Draft7)
            .build(&schema)
            .map_err(|e| SchemaError::Invalid {
                target: target.to_string(),
                message: e.to_string(),
            })?;

        Ok(Self {
            raw: Arc::new(schema),
            validator: Arc::new(validator),
        })
    }

    /// The schema document this validator was compiled from.
    pub fn raw(&self) -> &Value {
        &self.raw
    }

    /// Validate a value, returning the first violation.
    pub fn validate(&self, instance: &Value) -> std::result::Result<(), Violation> {
        match self.validator.iter_errors(instance).next() {
            None => Ok(()),
            Some(e) => Err(Violation {
                path: e.instance_path.to_string(),
                message: e.to_string(),
            }),
        }
    }

    /// Whether a value passes validation.
    pub fn is_valid(&self, instance: &Value) -> bool {
        self.validate(instance).is_ok()
    }
}
