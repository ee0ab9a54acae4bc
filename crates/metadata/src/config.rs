//! Declarative entity configuration types.
//!
//! One [`EntityConfig`] per entity type enumerates its fields for both the
//! table and the form. Base configs are immutable singletons; enrichment
//! always works on a clone (see [`crate::enrich`]), never on the shared
//! instance.

use serde_json::Value;

/// Override hook for a field's display value: `(record, row_index) -> text`.
///
/// Must be pure and total: defined for every record shape, returning a
/// placeholder string instead of panicking on missing data.
pub type MapFn = fn(&Value, usize) -> String;

/// Derives the option label for one lookup record.
pub type LabelFn = fn(&Value) -> String;

/// Rendering/input category of a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldKind {
    #[default]
    Text,
    Textarea,
    Number,
    Date,
    Select,
    Currency,
    Boolean,
}

impl FieldKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Textarea => "textarea",
            Self::Number => "number",
            Self::Date => "date",
            Self::Select => "select",
            Self::Currency => "currency",
            Self::Boolean => "boolean",
        }
    }
}

/// Lookup catalogs a `select` field can be enriched from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogKey {
    Clients,
    Providers,
    Contracts,
    Services,
}

impl CatalogKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Clients => "clients",
            Self::Providers => "providers",
            Self::Contracts => "contracts",
            Self::Services => "services",
        }
    }
}

/// Ties a `select` field to the catalog that supplies its options.
#[derive(Debug, Clone, Copy)]
pub struct Lookup {
    pub catalog: CatalogKey,
    pub label: LabelFn,
}

/// Explicit per-field currency rendering. Fields never infer a locale from
/// the environment; a `Currency` field without a spec falls back to
/// [`CurrencySpec::COP`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrencySpec {
    pub symbol: &'static str,
    pub thousands: char,
    pub decimal: char,
    pub decimals: u8,
}

impl CurrencySpec {
    /// Colombian pesos, `$ 1.234.568` style.
    pub const COP: Self = Self {
        symbol: "$",
        thousands: '.',
        decimal: ',',
        decimals: 0,
    };

    /// US dollars, `US$ 1,234.57` style.
    pub const USD: Self = Self {
        symbol: "US$",
        thousands: ',',
        decimal: '.',
        decimals: 2,
    };
}

/// One entry of a `select` field's option list.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectOption {
    pub value: Value,
    pub label: String,
}

impl SelectOption {
    pub fn new(value: impl Into<Value>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// Anchored pattern + message for form validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldValidation {
    pub pattern: &'static str,
    pub message: &'static str,
}

/// Describes one attribute of an entity for table and form rendering.
///
/// `backend_key` is `None` only for synthetic columns (row index); all
/// other keys are unique within a config.
#[derive(Debug, Clone)]
pub struct FieldDescriptor {
    pub header: &'static str,
    pub backend_key: Option<&'static str>,
    pub kind: FieldKind,
    pub editable: bool,
    pub required: bool,
    pub validation: Option<FieldValidation>,
    /// Replaced wholesale by enrichment; the only mutable part of a config.
    pub options: Vec<SelectOption>,
    pub lookup: Option<Lookup>,
    pub currency: Option<CurrencySpec>,
    pub map_from: Option<MapFn>,
    pub hide_in_form: bool,
    pub hidden_in_table: bool,
}

impl Default for FieldDescriptor {
    fn default() -> Self {
        Self {
            header: "",
            backend_key: None,
            kind: FieldKind::Text,
            editable: false,
            required: false,
            validation: None,
            options: Vec::new(),
            lookup: None,
            currency: None,
            map_from: None,
            hide_in_form: false,
            hidden_in_table: false,
        }
    }
}

fn row_number(_record: &Value, index: usize) -> String {
    (index + 1).to_string()
}

impl FieldDescriptor {
    /// Synthetic 1-based row index column. Has no `backend_key` and never
    /// appears in forms or detail views.
    pub fn row_index() -> Self {
        Self {
            header: "#",
            map_from: Some(row_number),
            hide_in_form: true,
            ..Self::default()
        }
    }
}

/// Declarative descriptor of one entity type. Field order defines both
/// column order and form order.
#[derive(Debug, Clone)]
pub struct EntityConfig {
    /// Singular display name ("Contrato").
    pub name: &'static str,
    /// Plural display name for list titles ("Contratos").
    pub plural: &'static str,
    /// Informational; the REST service carries the authoritative endpoint.
    pub endpoint: &'static str,
    pub fields: Vec<FieldDescriptor>,
}

impl EntityConfig {
    pub fn field(&self, backend_key: &str) -> Option<&FieldDescriptor> {
        self.fields
            .iter()
            .find(|f| f.backend_key == Some(backend_key))
    }

    /// Columns shown in the table, in config order.
    pub fn table_fields(&self) -> impl Iterator<Item = &FieldDescriptor> {
        self.fields.iter().filter(|f| !f.hidden_in_table)
    }

    /// Editable fields rendered in the edit form.
    pub fn form_fields(&self) -> impl Iterator<Item = &FieldDescriptor> {
        self.fields
            .iter()
            .filter(|f| f.editable && !f.hide_in_form && f.backend_key.is_some())
    }

    /// Fields shown in the read-only detail view: everything backed by a
    /// real record key (synthetic columns excluded).
    pub fn detail_fields(&self) -> impl Iterator<Item = &FieldDescriptor> {
        self.fields.iter().filter(|f| f.backend_key.is_some())
    }

    /// Distinct lookup catalogs referenced by this config, in field order.
    pub fn lookup_catalogs(&self) -> Vec<CatalogKey> {
        let mut keys: Vec<CatalogKey> = Vec::new();
        for field in &self.fields {
            if let Some(lookup) = &field.lookup {
                if !keys.contains(&lookup.catalog) {
                    keys.push(lookup.catalog);
                }
            }
        }
        keys
    }
}
