use once_cell::sync::Lazy;
use serde_json::Value;

use crate::domain::contract::contract_label;
use crate::generic::service::RestEntityService;
use metadata::config::{
    CatalogKey, EntityConfig, FieldDescriptor, FieldKind, Lookup, SelectOption,
};
use metadata::format::EMPTY_PLACEHOLDER;

pub const SERVICE: RestEntityService =
    RestEntityService::new("/api/entregables", &["data", "deliverables", "deliverable"]);

fn progress_percent(record: &Value, _index: usize) -> String {
    match record.get("progress").and_then(Value::as_f64) {
        Some(p) => format!("{:.0} %", p),
        None => EMPTY_PLACEHOLDER.to_string(),
    }
}

pub static CONFIG: Lazy<EntityConfig> = Lazy::new(|| EntityConfig {
    name: "Entregable",
    plural: "Entregables",
    endpoint: "/api/entregables",
    fields: vec![
        FieldDescriptor::row_index(),
        FieldDescriptor {
            header: "Contrato",
            backend_key: Some("contractId"),
            kind: FieldKind::Select,
            editable: true,
            required: true,
            lookup: Some(Lookup {
                catalog: CatalogKey::Contracts,
                label: contract_label,
            }),
            ..FieldDescriptor::default()
        },
        FieldDescriptor {
            header: "Nombre",
            backend_key: Some("name"),
            editable: true,
            required: true,
            ..FieldDescriptor::default()
        },
        FieldDescriptor {
            header: "Descripción",
            backend_key: Some("description"),
            kind: FieldKind::Textarea,
            editable: true,
            hidden_in_table: true,
            ..FieldDescriptor::default()
        },
        FieldDescriptor {
            header: "Fecha de entrega",
            backend_key: Some("dueDate"),
            kind: FieldKind::Date,
            editable: true,
            required: true,
            ..FieldDescriptor::default()
        },
        FieldDescriptor {
            header: "Estado",
            backend_key: Some("status"),
            kind: FieldKind::Select,
            editable: true,
            options: vec![
                SelectOption::new("pending", "Pendiente"),
                SelectOption::new("delivered", "Entregado"),
                SelectOption::new("approved", "Aprobado"),
            ],
            ..FieldDescriptor::default()
        },
        FieldDescriptor {
            header: "Avance",
            backend_key: Some("progress"),
            kind: FieldKind::Number,
            editable: true,
            map_from: Some(progress_percent),
            ..FieldDescriptor::default()
        },
    ],
});

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn progress_renders_as_whole_percent() {
        assert_eq!(progress_percent(&json!({"progress": 62.4}), 0), "62 %");
        assert_eq!(progress_percent(&json!({"progress": 100}), 0), "100 %");
        assert_eq!(progress_percent(&json!({"progress": "n/a"}), 0), "-");
        assert_eq!(progress_percent(&json!({}), 0), "-");
    }
}
