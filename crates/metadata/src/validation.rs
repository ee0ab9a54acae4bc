//! Form field validation.
//!
//! A field is checked for presence first, then against its anchored
//! pattern. Patterns always match the whole value (`^(?:…)$`), so a config
//! pattern like `\d{9,10}` cannot accidentally accept a partial match.

use regex::Regex;
use serde_json::Value;
use thiserror::Error;

use crate::config::{EntityConfig, FieldDescriptor};
use crate::format::stringify;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{label} es obligatorio")]
    Required { label: String },
    #[error("{message}")]
    Pattern { label: String, message: String },
}

/// Validate one field's raw value.
///
/// Empty optional values are valid; the pattern only applies once there is
/// something to match.
pub fn validate_field(field: &FieldDescriptor, value: &Value) -> Result<(), ValidationError> {
    let text = stringify(value);

    if field.required && text.trim().is_empty() {
        return Err(ValidationError::Required {
            label: field.header.to_string(),
        });
    }

    if text.is_empty() {
        return Ok(());
    }

    if let Some(validation) = &field.validation {
        // Configs are static literals; a pattern that fails to compile is
        // caught by the registry tests, not at runtime.
        if let Ok(re) = Regex::new(&format!("^(?:{})$", validation.pattern)) {
            if !re.is_match(&text) {
                return Err(ValidationError::Pattern {
                    label: field.header.to_string(),
                    message: validation.message.to_string(),
                });
            }
        }
    }

    Ok(())
}

/// Validate every form field of a config against a record, collecting the
/// failures keyed by `backend_key`.
pub fn validate_record(
    config: &EntityConfig,
    record: &Value,
) -> Vec<(&'static str, ValidationError)> {
    let mut errors = Vec::new();
    for field in config.form_fields() {
        let Some(key) = field.backend_key else {
            continue;
        };
        let value = record.get(key).cloned().unwrap_or(Value::Null);
        if let Err(err) = validate_field(field, &value) {
            errors.push((key, err));
        }
    }
    errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FieldValidation;
    use serde_json::json;

    fn nit_field() -> FieldDescriptor {
        FieldDescriptor {
            header: "NIT",
            backend_key: Some("nit"),
            editable: true,
            required: true,
            validation: Some(FieldValidation {
                pattern: r"\d{9,10}",
                message: "El NIT debe tener 9 o 10 dígitos",
            }),
            ..FieldDescriptor::default()
        }
    }

    #[test]
    fn required_field_rejects_blank() {
        let field = nit_field();
        let err = validate_field(&field, &json!("")).unwrap_err();
        assert_eq!(err.to_string(), "NIT es obligatorio");
        assert!(validate_field(&field, &Value::Null).is_err());
    }

    #[test]
    fn pattern_is_whole_string_anchored() {
        let field = nit_field();
        assert!(validate_field(&field, &json!("900123456")).is_ok());
        // A partial match must not pass.
        let err = validate_field(&field, &json!("x900123456y")).unwrap_err();
        assert_eq!(err.to_string(), "El NIT debe tener 9 o 10 dígitos");
    }

    #[test]
    fn optional_empty_value_is_valid() {
        let field = FieldDescriptor {
            required: false,
            ..nit_field()
        };
        assert!(validate_field(&field, &json!("")).is_ok());
        assert!(validate_field(&field, &json!("abc")).is_err());
    }

    #[test]
    fn record_validation_collects_per_field_errors() {
        let config = EntityConfig {
            name: "Proveedor",
            plural: "Proveedores",
            endpoint: "/api/proveedores",
            fields: vec![
                nit_field(),
                FieldDescriptor {
                    header: "Nombre",
                    backend_key: Some("name"),
                    editable: true,
                    required: true,
                    ..FieldDescriptor::default()
                },
            ],
        };
        let errors = validate_record(&config, &json!({"nit": "12", "name": "Acme"}));
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].0, "nit");
    }
}
