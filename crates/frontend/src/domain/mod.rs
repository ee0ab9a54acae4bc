//! Entity configuration registry: one declarative config and REST service
//! per entity type. Base configs are immutable singletons; pages enrich a
//! clone per mount.

pub mod client;
pub mod contract;
pub mod deliverable;
pub mod provider;
pub mod service;

#[cfg(test)]
mod tests {
    use metadata::config::{EntityConfig, FieldKind};
    use regex::Regex;
    use serde_json::{json, Value};

    fn all_configs() -> Vec<&'static EntityConfig> {
        vec![
            &super::contract::CONFIG,
            &super::deliverable::CONFIG,
            &super::service::CONFIG,
            &super::provider::CONFIG,
        ]
    }

    #[test]
    fn backend_keys_are_unique_within_each_config() {
        for config in all_configs() {
            let mut seen = Vec::new();
            for field in &config.fields {
                if let Some(key) = field.backend_key {
                    assert!(
                        !seen.contains(&key),
                        "{}: duplicate backend key {}",
                        config.name,
                        key
                    );
                    seen.push(key);
                }
            }
        }
    }

    #[test]
    fn map_from_is_total_over_malformed_records() {
        for config in all_configs() {
            for field in &config.fields {
                if let Some(map) = field.map_from {
                    for record in [json!({}), Value::Null, json!({"unrelated": 1})] {
                        let out = map(&record, 0);
                        assert!(
                            !out.is_empty(),
                            "{}.{}: map_from returned an empty string",
                            config.name,
                            field.header
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn lookup_fields_are_selects() {
        for config in all_configs() {
            for field in &config.fields {
                if field.lookup.is_some() {
                    assert_eq!(
                        field.kind,
                        FieldKind::Select,
                        "{}.{}: lookup on a non-select field",
                        config.name,
                        field.header
                    );
                }
            }
        }
    }

    #[test]
    fn validation_patterns_compile_anchored() {
        for config in all_configs() {
            for field in &config.fields {
                if let Some(validation) = &field.validation {
                    Regex::new(&format!("^(?:{})$", validation.pattern)).unwrap_or_else(|e| {
                        panic!("{}.{}: bad pattern: {}", config.name, field.header, e)
                    });
                }
            }
        }
    }

    #[test]
    fn every_config_carries_a_row_index_column() {
        for config in all_configs() {
            let synthetic = config.fields.iter().find(|f| f.backend_key.is_none());
            assert!(synthetic.is_some(), "{}: no synthetic column", config.name);
        }
    }
}
