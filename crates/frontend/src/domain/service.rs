use once_cell::sync::Lazy;

use crate::generic::service::RestEntityService;
use metadata::config::{
    CatalogKey, CurrencySpec, EntityConfig, FieldDescriptor, FieldKind, Lookup,
};
use metadata::enrich::name_or_id;

pub const SERVICE: RestEntityService =
    RestEntityService::new("/api/servicios", &["data", "services", "service"]);

pub static CONFIG: Lazy<EntityConfig> = Lazy::new(|| EntityConfig {
    name: "Servicio",
    plural: "Servicios",
    endpoint: "/api/servicios",
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
            header: "Descripción",
            backend_key: Some("description"),
            kind: FieldKind::Textarea,
            editable: true,
            hidden_in_table: true,
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
            header: "Precio",
            backend_key: Some("price"),
            kind: FieldKind::Currency,
            editable: true,
            required: true,
            // Services are quoted in dollars, unlike contract values.
            currency: Some(CurrencySpec::USD),
            ..FieldDescriptor::default()
        },
        FieldDescriptor {
            header: "Vigente",
            backend_key: Some("isActive"),
            kind: FieldKind::Boolean,
            editable: true,
            ..FieldDescriptor::default()
        },
    ],
});
