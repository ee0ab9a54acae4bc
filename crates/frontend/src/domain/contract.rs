use once_cell::sync::Lazy;
use serde_json::Value;

use crate::generic::service::RestEntityService;
use metadata::config::{
    CatalogKey, CurrencySpec, EntityConfig, FieldDescriptor, FieldKind, FieldValidation, Lookup,
    SelectOption,
};
use metadata::enrich::name_or_id;
use metadata::format::{stringify, EMPTY_PLACEHOLDER};

pub const SERVICE: RestEntityService =
    RestEntityService::new("/api/contratos", &["data", "contracts", "contract"]);

/// Contracts label themselves by number in lookups; older records without
/// one fall back to name/id.
pub fn contract_label(record: &Value) -> String {
    match record.get("number") {
        Some(v) if !matches!(v, Value::Null) => stringify(v),
        _ => name_or_id(record),
    }
}

fn active_flag(record: &Value, _index: usize) -> String {
    match record.get("isActive") {
        Some(Value::Bool(true)) => "Sí".to_string(),
        Some(Value::Bool(false)) => "No".to_string(),
        _ => EMPTY_PLACEHOLDER.to_string(),
    }
}

pub static CONFIG: Lazy<EntityConfig> = Lazy::new(|| EntityConfig {
    name: "Contrato",
    plural: "Contratos",
    endpoint: "/api/contratos",
    fields: vec![
        FieldDescriptor::row_index(),
        FieldDescriptor {
            header: "Número",
            backend_key: Some("number"),
            editable: true,
            required: true,
            validation: Some(FieldValidation {
                pattern: r"[A-Z0-9][A-Z0-9\-]{2,19}",
                message: "Número de contrato no válido (3 a 20 caracteres, mayúsculas)",
            }),
            ..FieldDescriptor::default()
        },
        FieldDescriptor {
            header: "Cliente",
            backend_key: Some("clientId"),
            kind: FieldKind::Select,
            editable: true,
            required: true,
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
            editable: true,
            required: true,
            lookup: Some(Lookup {
                catalog: CatalogKey::Providers,
                label: name_or_id,
            }),
            ..FieldDescriptor::default()
        },
        FieldDescriptor {
            header: "Objeto",
            backend_key: Some("subject"),
            kind: FieldKind::Textarea,
            editable: true,
            hidden_in_table: true,
            ..FieldDescriptor::default()
        },
        FieldDescriptor {
            header: "Valor",
            backend_key: Some("value"),
            kind: FieldKind::Currency,
            editable: true,
            required: true,
            currency: Some(CurrencySpec::COP),
            ..FieldDescriptor::default()
        },
        FieldDescriptor {
            header: "Fecha de inicio",
            backend_key: Some("startDate"),
            kind: FieldKind::Date,
            editable: true,
            required: true,
            ..FieldDescriptor::default()
        },
        FieldDescriptor {
            header: "Fecha de fin",
            backend_key: Some("endDate"),
            kind: FieldKind::Date,
            editable: true,
            ..FieldDescriptor::default()
        },
        FieldDescriptor {
            header: "Estado",
            backend_key: Some("status"),
            kind: FieldKind::Select,
            editable: true,
            options: vec![
                SelectOption::new("draft", "Borrador"),
                SelectOption::new("active", "Activo"),
                SelectOption::new("terminated", "Terminado"),
            ],
            ..FieldDescriptor::default()
        },
        FieldDescriptor {
            header: "Activo",
            map_from: Some(active_flag),
            hide_in_form: true,
            ..FieldDescriptor::default()
        },
    ],
});

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn contract_label_prefers_number() {
        assert_eq!(contract_label(&json!({"number": "CT-001", "name": "x"})), "CT-001");
        assert_eq!(contract_label(&json!({"name": "Obra", "id": 4})), "Obra");
        assert_eq!(contract_label(&json!({"id": 4})), "4");
    }

    #[test]
    fn active_flag_handles_missing_and_non_boolean() {
        assert_eq!(active_flag(&json!({"isActive": true}), 0), "Sí");
        assert_eq!(active_flag(&json!({"isActive": false}), 0), "No");
        assert_eq!(active_flag(&json!({"isActive": "yes"}), 0), "-");
        assert_eq!(active_flag(&json!({}), 0), "-");
    }
}
