//! Display-value formatting.
//!
//! One pure function, [`display_value`], shared by the table renderer and
//! the detail view so both always agree on how a raw record value reads.
//! Precedence, in order: `map_from` override, empty placeholder, select
//! label lookup, date, currency, boolean, default string form.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Timelike, Utc};
use serde_json::Value;

use crate::config::{CurrencySpec, FieldDescriptor, FieldKind, SelectOption};

/// Shown for null/missing/empty values.
pub const EMPTY_PLACEHOLDER: &str = "-";
/// Shown for a select value with no matching option.
pub const NO_OPTION: &str = "No disponible";
/// Shown for an unparseable date value. Distinct from the empty placeholder.
pub const INVALID_DATE: &str = "Fecha inválida";

const MONTHS_ES: [&str; 12] = [
    "enero",
    "febrero",
    "marzo",
    "abril",
    "mayo",
    "junio",
    "julio",
    "agosto",
    "septiembre",
    "octubre",
    "noviembre",
    "diciembre",
];

/// Format the value a field reads from `record` for display.
///
/// An explicit `map_from` fully overrides the type-driven rules; several
/// configs rely on that to apply entity-specific date or currency formats.
pub fn display_value(field: &FieldDescriptor, record: &Value, index: usize) -> String {
    if let Some(map) = field.map_from {
        return map(record, index);
    }

    let value = field
        .backend_key
        .and_then(|key| record.get(key))
        .unwrap_or(&Value::Null);

    if is_empty(value) {
        return EMPTY_PLACEHOLDER.to_string();
    }

    match field.kind {
        FieldKind::Select => select_label(value, &field.options),
        FieldKind::Date => format_calendar_date(&stringify(value)),
        FieldKind::Currency => {
            format_currency(value, field.currency.unwrap_or(CurrencySpec::COP))
        }
        FieldKind::Number if monetary_header(field.header) => {
            format_currency(value, field.currency.unwrap_or(CurrencySpec::COP))
        }
        _ => match value {
            Value::Bool(true) => "Sí".to_string(),
            Value::Bool(false) => "No".to_string(),
            _ => stringify(value),
        },
    }
}

fn is_empty(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        _ => false,
    }
}

/// Default string form of a JSON value, without quoting strings.
pub fn stringify(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        other => other.to_string(),
    }
}

/// Resolve a select value to its option label.
///
/// Equality is by stringified value, so numeric `1` and string `"1"` match
/// the same option.
pub fn select_label(value: &Value, options: &[SelectOption]) -> String {
    let key = stringify(value);
    options
        .iter()
        .find(|opt| stringify(&opt.value) == key)
        .map(|opt| opt.label.clone())
        .unwrap_or_else(|| NO_OPTION.to_string())
}

/// Format an ISO date or datetime string as a long Spanish date.
///
/// Date-only input (`2025-03-10`) is parsed as a plain calendar date and
/// never passes through a timezone conversion, so it cannot shift a day
/// for viewers west of UTC. Time-of-day is appended only when the source
/// explicitly carries one.
pub fn format_calendar_date(raw: &str) -> String {
    if raw.contains('T') {
        if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
            let utc = dt.with_timezone(&Utc);
            return format!(
                "{}, {:02}:{:02}",
                long_date(utc.date_naive()),
                utc.hour(),
                utc.minute()
            );
        }
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
            return format!(
                "{}, {:02}:{:02}",
                long_date(naive.date()),
                naive.hour(),
                naive.minute()
            );
        }
        return INVALID_DATE.to_string();
    }

    match NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        Ok(date) => long_date(date),
        Err(_) => INVALID_DATE.to_string(),
    }
}

fn long_date(date: NaiveDate) -> String {
    use chrono::Datelike;
    let month = MONTHS_ES[date.month0() as usize];
    format!("{} de {} de {}", date.day(), month, date.year())
}

/// Format a numeric value as currency under an explicit per-field spec.
/// Values that are not numbers (and not numeric strings) fall back to
/// their raw string form rather than erroring.
pub fn format_currency(value: &Value, spec: CurrencySpec) -> String {
    let amount = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    match amount {
        Some(amount) => format!(
            "{} {}",
            spec.symbol,
            format_grouped(amount, spec.decimals, spec.thousands, spec.decimal)
        ),
        None => stringify(value),
    }
}

/// Group a number with a thousands separator and fixed decimals.
pub fn format_grouped(value: f64, decimals: u8, thousands: char, decimal: char) -> String {
    let formatted = format!("{:.*}", decimals as usize, value);
    let (integer_part, decimal_part) = match formatted.split_once('.') {
        Some((i, d)) => (i, Some(d)),
        None => (formatted.as_str(), None),
    };

    // Insert the separator every 3 digits from the right, skipping the sign.
    let mut grouped = String::new();
    let digits: Vec<char> = integer_part.chars().rev().collect();
    for (i, c) in digits.iter().enumerate() {
        if i > 0 && i % 3 == 0 && *c != '-' {
            grouped.push(thousands);
        }
        grouped.push(*c);
    }
    let integer_grouped: String = grouped.chars().rev().collect();

    match decimal_part {
        Some(d) => format!("{}{}{}", integer_grouped, decimal, d),
        None => integer_grouped,
    }
}

/// Heuristic for `Number` fields whose header marks them as monetary.
pub fn monetary_header(header: &str) -> bool {
    let lower = header.to_lowercase();
    ["valor", "monto", "precio", "costo", "presupuesto"]
        .iter()
        .any(|term| lower.contains(term))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FieldDescriptor;
    use serde_json::json;

    fn status_field() -> FieldDescriptor {
        FieldDescriptor {
            header: "Estado",
            backend_key: Some("status"),
            kind: FieldKind::Select,
            options: vec![
                SelectOption::new("active", "Activo"),
                SelectOption::new("draft", "Borrador"),
            ],
            ..FieldDescriptor::default()
        }
    }

    #[test]
    fn missing_key_renders_placeholder() {
        let field = FieldDescriptor {
            header: "Nombre",
            backend_key: Some("name"),
            ..FieldDescriptor::default()
        };
        assert_eq!(display_value(&field, &json!({"other": 1}), 0), "-");
        assert_eq!(display_value(&field, &json!({"name": null}), 0), "-");
        assert_eq!(display_value(&field, &json!({"name": ""}), 0), "-");
    }

    #[test]
    fn map_from_overrides_everything() {
        fn shout(_: &Value, _: usize) -> String {
            "override".to_string()
        }
        let field = FieldDescriptor {
            map_from: Some(shout),
            kind: FieldKind::Currency,
            backend_key: Some("value"),
            ..FieldDescriptor::default()
        };
        assert_eq!(display_value(&field, &json!({"value": 100}), 0), "override");
    }

    #[test]
    fn select_matches_by_stringified_value() {
        let field = FieldDescriptor {
            header: "Estado",
            backend_key: Some("status"),
            kind: FieldKind::Select,
            options: vec![SelectOption::new(1, "Activo")],
            ..FieldDescriptor::default()
        };
        assert_eq!(display_value(&field, &json!({"status": 1}), 0), "Activo");
        assert_eq!(display_value(&field, &json!({"status": "1"}), 0), "Activo");
    }

    #[test]
    fn select_round_trip_and_unknown_value() {
        let field = status_field();
        assert_eq!(display_value(&field, &json!({"status": "active"}), 0), "Activo");
        assert_eq!(
            display_value(&field, &json!({"status": "unknown_value"}), 0),
            "No disponible"
        );
    }

    #[test]
    fn date_only_never_shifts_a_day() {
        assert_eq!(format_calendar_date("2025-03-10"), "10 de marzo de 2025");
    }

    #[test]
    fn datetime_keeps_time_of_day() {
        assert_eq!(
            format_calendar_date("2024-12-31T23:59:59Z"),
            "31 de diciembre de 2024, 23:59"
        );
    }

    #[test]
    fn invalid_date_has_distinct_placeholder() {
        let field = FieldDescriptor {
            header: "Fecha",
            backend_key: Some("date"),
            kind: FieldKind::Date,
            ..FieldDescriptor::default()
        };
        assert_eq!(
            display_value(&field, &json!({"date": "not-a-date"}), 0),
            "Fecha inválida"
        );
        assert_eq!(display_value(&field, &json!({}), 0), "-");
    }

    #[test]
    fn currency_uses_per_field_spec() {
        let cop = FieldDescriptor {
            header: "Valor",
            backend_key: Some("value"),
            kind: FieldKind::Currency,
            ..FieldDescriptor::default()
        };
        assert_eq!(display_value(&cop, &json!({"value": 1234567.89}), 0), "$ 1.234.568");

        let usd = FieldDescriptor {
            currency: Some(CurrencySpec::USD),
            ..cop.clone()
        };
        assert_eq!(display_value(&usd, &json!({"value": 1234567.89}), 0), "US$ 1,234,567.89");
    }

    #[test]
    fn monetary_number_header_formats_as_currency() {
        let field = FieldDescriptor {
            header: "Valor total",
            backend_key: Some("total"),
            kind: FieldKind::Number,
            ..FieldDescriptor::default()
        };
        assert_eq!(display_value(&field, &json!({"total": 1000}), 0), "$ 1.000");

        let plain = FieldDescriptor {
            header: "Cantidad",
            ..field.clone()
        };
        assert_eq!(display_value(&plain, &json!({"total": 1000}), 0), "1000");
    }

    #[test]
    fn booleans_render_localized() {
        let field = FieldDescriptor {
            header: "Activo",
            backend_key: Some("active"),
            kind: FieldKind::Boolean,
            ..FieldDescriptor::default()
        };
        assert_eq!(display_value(&field, &json!({"active": true}), 0), "Sí");
        assert_eq!(display_value(&field, &json!({"active": false}), 0), "No");
    }

    #[test]
    fn grouping_handles_sign_and_decimals() {
        assert_eq!(format_grouped(1234567.89, 2, ',', '.'), "1,234,567.89");
        assert_eq!(format_grouped(-1234.6, 0, '.', ','), "-1.235");
        assert_eq!(format_grouped(0.0, 2, ',', '.'), "0.00");
    }
}
