//! Select-option enrichment from fetched lookup catalogs.
//!
//! Fetching is the caller's job (one concurrent request per catalog); this
//! module applies the already-fetched results to a clone of the base
//! config. Each catalog result touches only its own fields, so application
//! order does not matter and a failed catalog leaves its fields' options
//! exactly as they were.

use serde_json::Value;

use crate::config::{CatalogKey, EntityConfig, SelectOption};
use crate::format::stringify;

/// Outcome of fetching one lookup catalog.
pub type CatalogResult = (CatalogKey, Result<Vec<Value>, String>);

/// Derive a clone of `base` with lookup-backed select options populated.
///
/// Best effort: failed catalogs are skipped and the affected fields keep
/// their prior options. Re-applying the same results is idempotent because
/// options are replaced, never appended.
pub fn enrich_config(base: &EntityConfig, results: &[CatalogResult]) -> EntityConfig {
    let mut enriched = base.clone();
    for (catalog, result) in results {
        let Ok(records) = result else {
            continue;
        };
        apply_lookup(&mut enriched, *catalog, records);
    }
    enriched
}

/// Replace the options of every field bound to `catalog`, preserving the
/// lookup list's order. Records without an `id` are skipped.
pub fn apply_lookup(config: &mut EntityConfig, catalog: CatalogKey, records: &[Value]) {
    for field in &mut config.fields {
        let Some(lookup) = field.lookup else {
            continue;
        };
        if lookup.catalog != catalog {
            continue;
        }
        field.options = records
            .iter()
            .filter(|record| record.get("id").is_some())
            .map(|record| SelectOption {
                value: record.get("id").cloned().unwrap_or(Value::Null),
                label: (lookup.label)(record),
            })
            .collect();
    }
}

/// Default option label: `name`, falling back to `id`.
pub fn name_or_id(record: &Value) -> String {
    record
        .get("name")
        .filter(|v| !matches!(v, Value::Null))
        .or_else(|| record.get("id"))
        .map(stringify)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{FieldDescriptor, FieldKind, Lookup, SelectOption};
    use serde_json::json;

    fn base_config() -> EntityConfig {
        EntityConfig {
            name: "Contrato",
            plural: "Contratos",
            endpoint: "/api/contratos",
            fields: vec![
                FieldDescriptor {
                    header: "Cliente",
                    backend_key: Some("clientId"),
                    kind: FieldKind::Select,
                    lookup: Some(Lookup {
                        catalog: CatalogKey::Clients,
                        label: name_or_id,
                    }),
                    ..FieldDescriptor::default()
                },
                FieldDescriptor {
                    header: "Proveedor",
                    backend_key: Some("providerId"),
                    kind: FieldKind::Select,
                    options: vec![SelectOption::new("p0", "Existente")],
                    lookup: Some(Lookup {
                        catalog: CatalogKey::Providers,
                        label: name_or_id,
                    }),
                    ..FieldDescriptor::default()
                },
            ],
        }
    }

    fn clients() -> Vec<Value> {
        vec![
            json!({"id": "c2", "name": "Beta"}),
            json!({"id": "c1", "name": "Alfa"}),
        ]
    }

    #[test]
    fn options_preserve_lookup_order() {
        let base = base_config();
        let enriched = enrich_config(&base, &[(CatalogKey::Clients, Ok(clients()))]);
        let labels: Vec<&str> = enriched.fields[0]
            .options
            .iter()
            .map(|o| o.label.as_str())
            .collect();
        assert_eq!(labels, vec!["Beta", "Alfa"]);
    }

    #[test]
    fn base_config_is_never_mutated() {
        let base = base_config();
        let _ = enrich_config(&base, &[(CatalogKey::Clients, Ok(clients()))]);
        assert!(base.fields[0].options.is_empty());
    }

    #[test]
    fn partial_failure_keeps_prior_options() {
        let base = base_config();
        let enriched = enrich_config(
            &base,
            &[
                (CatalogKey::Clients, Ok(clients())),
                (CatalogKey::Providers, Err("HTTP 500".to_string())),
            ],
        );
        assert_eq!(enriched.fields[0].options.len(), 2);
        // The failed catalog's field is untouched, down to the old options.
        assert_eq!(
            enriched.fields[1].options,
            vec![SelectOption::new("p0", "Existente")]
        );
    }

    #[test]
    fn enrichment_is_idempotent() {
        let base = base_config();
        let results = [(CatalogKey::Clients, Ok(clients()))];
        let once = enrich_config(&base, &results);
        let twice = enrich_config(&once, &results);
        assert_eq!(once.fields[0].options, twice.fields[0].options);
    }

    #[test]
    fn records_without_id_are_skipped() {
        let base = base_config();
        let enriched = enrich_config(
            &base,
            &[(
                CatalogKey::Clients,
                Ok(vec![json!({"name": "SinId"}), json!({"id": 9, "name": "ConId"})]),
            )],
        );
        assert_eq!(enriched.fields[0].options.len(), 1);
        assert_eq!(enriched.fields[0].options[0].value, json!(9));
    }

    #[test]
    fn label_falls_back_to_id() {
        assert_eq!(name_or_id(&json!({"id": 5})), "5");
        assert_eq!(name_or_id(&json!({"id": 5, "name": "Gamma"})), "Gamma");
    }
}
