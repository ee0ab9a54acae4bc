use once_cell::sync::Lazy;

use crate::generic::service::RestEntityService;
use metadata::config::{EntityConfig, FieldDescriptor, FieldKind, FieldValidation};

pub const SERVICE: RestEntityService =
    RestEntityService::new("/api/proveedores", &["data", "providers", "provider"]);

pub static CONFIG: Lazy<EntityConfig> = Lazy::new(|| EntityConfig {
    name: "Proveedor",
    plural: "Proveedores",
    endpoint: "/api/proveedores",
    fields: vec![
        FieldDescriptor::row_index(),
        FieldDescriptor {
            header: "Nombre",
            backend_key: Some("name"),
            editable: true,
            required: true,
            ..FieldDescriptor::default()
        },
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
        },
        FieldDescriptor {
            header: "Correo electrónico",
            backend_key: Some("email"),
            editable: true,
            validation: Some(FieldValidation {
                pattern: r"[^@\s]+@[^@\s]+\.[^@\s]+",
                message: "Correo electrónico no válido",
            }),
            ..FieldDescriptor::default()
        },
        FieldDescriptor {
            header: "Teléfono",
            backend_key: Some("phone"),
            editable: true,
            ..FieldDescriptor::default()
        },
        FieldDescriptor {
            header: "Ciudad",
            backend_key: Some("city"),
            editable: true,
            ..FieldDescriptor::default()
        },
        FieldDescriptor {
            header: "Fecha de registro",
            backend_key: Some("createdAt"),
            kind: FieldKind::Date,
            hide_in_form: true,
            ..FieldDescriptor::default()
        },
    ],
});
