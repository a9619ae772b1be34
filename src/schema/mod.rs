//! Validation of input records against JSON Schema documents.
//!
//! Each [`Schema`] wraps a JSON Schema file compiled once with `jsonschema`.
//! [`validate_input`] first checks that every field listed under `required`
//! is present, so an absent top-level field surfaces as a readable
//! `MissingFieldError`, and only then runs the full schema check, which
//! reports every rejected field.

pub mod building;
pub mod zone;

pub use building::BUILDING_SCHEMA;
pub use zone::ZONE_SCHEMA;

use crate::domain::model::Record;
use crate::utils::error::{ConvertError, Result};
use jsonschema::Validator;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// One rejected field and the reason.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldIssue {
    pub field: String,
    pub reason: String,
}

impl FieldIssue {
    pub fn new(field: &str, reason: impl Into<String>) -> Self {
        Self {
            field: field.to_string(),
            reason: reason.into(),
        }
    }
}

impl fmt::Display for FieldIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.reason)
    }
}

/// A schema document compiled into a whole-record validator plus one
/// validator per property, so issues can be attributed to a field.
pub struct CompiledSchema {
    required: Vec<String>,
    validator: Validator,
    properties: Vec<(String, Validator)>,
}

impl CompiledSchema {
    pub fn compile(name: &str, source: &str) -> std::result::Result<Self, String> {
        let document: Value = serde_json::from_str(source)
            .map_err(|e| format!("Failed to load {} schema: {}", name, e))?;

        let validator = Validator::new(&document)
            .map_err(|e| format!("Failed to compile {} schema: {}", name, e))?;

        let required = document
            .get("required")
            .and_then(Value::as_array)
            .map(|fields| {
                fields
                    .iter()
                    .filter_map(|field| field.as_str().map(str::to_string))
                    .collect()
            })
            .unwrap_or_default();

        let mut properties = Vec::new();
        if let Some(map) = document.get("properties").and_then(Value::as_object) {
            for (field, subschema) in map {
                let property = Validator::new(subschema).map_err(|e| {
                    format!("Failed to compile {} schema property '{}': {}", name, field, e)
                })?;
                properties.push((field.clone(), property));
            }
        }

        Ok(Self {
            required,
            validator,
            properties,
        })
    }
}

pub struct Schema {
    pub name: &'static str,
    compiled: Lazy<std::result::Result<CompiledSchema, String>>,
}

impl Schema {
    pub const fn new(
        name: &'static str,
        compiled: Lazy<std::result::Result<CompiledSchema, String>>,
    ) -> Self {
        Self { name, compiled }
    }

    fn compiled(&self) -> Result<&CompiledSchema> {
        self.compiled
            .as_ref()
            .map_err(|message| ConvertError::ValidationFailure {
                message: message.clone(),
            })
    }

    pub fn required_fields(&self) -> Result<Vec<&str>> {
        Ok(self
            .compiled()?
            .required
            .iter()
            .map(String::as_str)
            .collect())
    }

    pub fn check_required(&self, record: &Record) -> Result<()> {
        match self
            .required_fields()?
            .into_iter()
            .find(|field| !record.contains(field))
        {
            Some(field) => Err(ConvertError::MissingFieldError {
                field: field.to_string(),
            }),
            None => Ok(()),
        }
    }

    /// 完整檢查，回傳所有問題而不是第一個；空的代表通過
    pub fn check(&self, record: &Record) -> Result<Vec<FieldIssue>> {
        let compiled = self.compiled()?;
        let mut issues: Vec<FieldIssue> = compiled
            .required
            .iter()
            .filter(|field| !record.contains(field))
            .map(|field| FieldIssue::new(field, "field required"))
            .collect();

        for (field, validator) in &compiled.properties {
            if let Some(value) = record.get(field) {
                issues.extend(
                    validator
                        .iter_errors(value)
                        .map(|e| FieldIssue::new(field, e.to_string())),
                );
            }
        }

        Ok(issues)
    }

    /// 不拋錯；非物件或 schema 無法載入時一律視為不符合
    pub fn accepts(&self, value: &Value) -> bool {
        self.compiled()
            .map(|compiled| compiled.validator.is_valid(value))
            .unwrap_or(false)
    }
}

impl fmt::Debug for Schema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Schema").field("name", &self.name).finish()
    }
}

/// Required-field check, then full schema validation.
pub fn validate_input(schema: &Schema, record: &Record) -> Result<()> {
    tracing::info!("🔍 Validating {} data...", schema.name);

    let result = schema.check_required(record).and_then(|()| {
        let issues = schema.check(record)?;
        if issues.is_empty() {
            Ok(())
        } else {
            Err(ConvertError::SchemaValidationError {
                schema: schema.name,
                issues,
            })
        }
    });

    match &result {
        Ok(()) => tracing::info!("✅ {} data validation passed", schema.name),
        Err(e @ ConvertError::ValidationFailure { .. }) => {
            tracing::error!("❌ Unexpected {} validation error: {}", schema.name, e)
        }
        Err(e) => tracing::error!("❌ {} data validation failed: {}", schema.name, e),
    }
    result
}
