//! Generic table renderer: config + record array in, formatted rows out.
//!
//! Cells go through [`metadata::format::display_value`], the same law the
//! detail view uses. Filtering, sorting and pagination are pure recomputes
//! over the in-memory data; the table performs no network I/O and never
//! mutates its source.

use std::cmp::Ordering;

use leptos::prelude::*;
use serde_json::Value;

use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::icons::icon;
use metadata::config::{EntityConfig, FieldDescriptor, FieldKind};
use metadata::format::{display_value, stringify};
use metadata::paginate::{page_slice, total_pages};

/// One rendered row: the formatted cell per visible column plus the source
/// record for action callbacks.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayRow {
    pub record: Value,
    pub cells: Vec<String>,
}

/// The record's `id` as a string, if it has a usable one.
pub fn record_id(record: &Value) -> Option<String> {
    match record.get("id") {
        Some(v) if !v.is_null() => {
            let s = stringify(v);
            (!s.is_empty()).then_some(s)
        }
        _ => None,
    }
}

/// Format every record under the config's visible columns, in order.
pub fn build_rows(config: &EntityConfig, data: &[Value]) -> Vec<DisplayRow> {
    data.iter()
        .enumerate()
        .map(|(index, record)| DisplayRow {
            record: record.clone(),
            cells: config
                .table_fields()
                .map(|field| display_value(field, record, index))
                .collect(),
        })
        .collect()
}

/// Case-insensitive substring filter over the formatted cells.
pub fn filter_rows(rows: Vec<DisplayRow>, filter: &str) -> Vec<DisplayRow> {
    let needle = filter.trim().to_lowercase();
    if needle.is_empty() {
        return rows;
    }
    rows.into_iter()
        .filter(|row| row.cells.iter().any(|c| c.to_lowercase().contains(&needle)))
        .collect()
}

fn raw_number(field: &FieldDescriptor, record: &Value) -> Option<f64> {
    match field.backend_key.and_then(|key| record.get(key))? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn raw_text(field: &FieldDescriptor, record: &Value) -> String {
    field
        .backend_key
        .and_then(|key| record.get(key))
        .map(stringify)
        .unwrap_or_default()
}

/// Sort by one visible column. Number and currency columns compare the raw
/// numeric value, date columns the raw ISO string (chronological), and
/// everything else the formatted cell text, case-insensitive. Stable, so
/// equal cells keep their incoming order.
pub fn sort_rows(
    rows: &mut [DisplayRow],
    fields: &[FieldDescriptor],
    column: usize,
    ascending: bool,
) {
    rows.sort_by(|a, b| {
        let cmp = compare_rows(fields.get(column), column, a, b);
        if ascending {
            cmp
        } else {
            cmp.reverse()
        }
    });
}

fn compare_rows(
    field: Option<&FieldDescriptor>,
    column: usize,
    a: &DisplayRow,
    b: &DisplayRow,
) -> Ordering {
    match field {
        Some(f) if matches!(f.kind, FieldKind::Number | FieldKind::Currency) => {
            // Missing or non-numeric values sort after real numbers.
            match (raw_number(f, &a.record), raw_number(f, &b.record)) {
                (Some(x), Some(y)) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => Ordering::Equal,
            }
        }
        Some(f) if f.kind == FieldKind::Date => {
            // ISO-8601 strings order chronologically as plain text.
            raw_text(f, &a.record).cmp(&raw_text(f, &b.record))
        }
        _ => {
            let av = a.cells.get(column).map(|s| s.to_lowercase()).unwrap_or_default();
            let bv = b.cells.get(column).map(|s| s.to_lowercase()).unwrap_or_default();
            av.cmp(&bv)
        }
    }
}

fn sort_indicator(current: Option<usize>, column: usize, ascending: bool) -> &'static str {
    if current == Some(column) {
        if ascending {
            " ▲"
        } else {
            " ▼"
        }
    } else {
        " ⇅"
    }
}

#[component]
pub fn GenericTable(
    /// Enriched entity config; column set and formatting rules.
    #[prop(into)]
    config: Signal<EntityConfig>,
    /// Records to render. Shape is backend-defined; only keys named by the
    /// config are read.
    #[prop(into)]
    data: Signal<Vec<Value>>,
    /// Row click / edit action, receives the full record.
    on_edit: Callback<Value>,
    /// Delete action, receives the record id.
    on_delete: Callback<String>,
    /// Initial page size.
    #[prop(optional)]
    page_size: Option<usize>,
) -> impl IntoView {
    let (filter, set_filter) = signal(String::new());
    let (page, set_page) = signal(0usize);
    let (size, set_size) = signal(page_size.unwrap_or(25));
    let (sort_col, set_sort_col) = signal::<Option<usize>>(None);
    let (ascending, set_ascending) = signal(true);

    let visible_rows = Memo::new(move |_| {
        let cfg = config.get();
        let mut rows = filter_rows(build_rows(&cfg, &data.get()), &filter.get());
        if let Some(column) = sort_col.get() {
            let fields: Vec<FieldDescriptor> = cfg.table_fields().cloned().collect();
            sort_rows(&mut rows, &fields, column, ascending.get());
        }
        rows
    });
    let pages = Memo::new(move |_| total_pages(visible_rows.get().len(), size.get()));
    // Clamp so a shrinking dataset cannot leave us on a page past the end.
    let current_page = Signal::derive(move || page.get().min(pages.get() - 1));

    let headers = move || {
        let cfg = config.get();
        cfg.table_fields().map(|f| f.header).collect::<Vec<_>>()
    };

    view! {
        <div class="table-container">
            <div class="table-toolbar">
                <input
                    type="text"
                    class="table-filter"
                    placeholder="Filtrar..."
                    prop:value=move || filter.get()
                    on:input=move |ev| {
                        set_filter.set(event_target_value(&ev));
                        set_page.set(0);
                    }
                />
            </div>
            <table class="table__data table--striped">
                <thead class="table__head">
                    <tr>
                        {move || headers().into_iter().enumerate().map(|(i, header)| {
                            view! {
                                <th
                                    class="table__header-cell table__header-cell--sortable"
                                    on:click=move |_| {
                                        if sort_col.get() == Some(i) {
                                            set_ascending.update(|v| *v = !*v);
                                        } else {
                                            set_sort_col.set(Some(i));
                                            set_ascending.set(true);
                                        }
                                    }
                                >
                                    {header}
                                    <span class="table__sort-indicator">
                                        {move || sort_indicator(sort_col.get(), i, ascending.get())}
                                    </span>
                                </th>
                            }
                        }).collect_view()}
                        <th class="table__header-cell table__header-cell--actions">{"Acciones"}</th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        let rows = visible_rows.get();
                        page_slice(&rows, current_page.get(), size.get())
                            .iter()
                            .cloned()
                            .map(|row| {
                                let record_for_click = row.record.clone();
                                let record_for_edit = row.record.clone();
                                let id_for_delete = record_id(&row.record);
                                view! {
                                    <tr class="table__row" on:click=move |_| on_edit.run(record_for_click.clone())>
                                        {row.cells.into_iter().map(|cell| {
                                            view! { <td class="table__cell">{cell}</td> }
                                        }).collect_view()}
                                        <td class="table__cell table__cell--actions">
                                            <button
                                                class="button button--icon"
                                                title="Editar"
                                                on:click=move |ev| {
                                                    ev.stop_propagation();
                                                    on_edit.run(record_for_edit.clone());
                                                }
                                            >
                                                {icon("edit")}
                                            </button>
                                            <button
                                                class="button button--icon"
                                                title="Eliminar"
                                                on:click=move |ev| {
                                                    ev.stop_propagation();
                                                    if let Some(id) = id_for_delete.clone() {
                                                        on_delete.run(id);
                                                    }
                                                }
                                            >
                                                {icon("delete")}
                                            </button>
                                        </td>
                                    </tr>
                                }
                            })
                            .collect_view()
                    }}
                </tbody>
            </table>
            <PaginationControls
                current_page=current_page
                total_pages=pages
                total_count=Signal::derive(move || visible_rows.get().len())
                page_size=size
                on_page_change=Callback::new(move |p| set_page.set(p))
                on_page_size_change=Callback::new(move |s| {
                    set_size.set(s);
                    set_page.set(0);
                })
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use metadata::config::{FieldDescriptor, FieldKind, SelectOption};
    use serde_json::json;

    fn config() -> EntityConfig {
        EntityConfig {
            name: "Contrato",
            plural: "Contratos",
            endpoint: "/api/contratos",
            fields: vec![
                FieldDescriptor::row_index(),
                FieldDescriptor {
                    header: "Número",
                    backend_key: Some("number"),
                    ..FieldDescriptor::default()
                },
                FieldDescriptor {
                    header: "Estado",
                    backend_key: Some("status"),
                    kind: FieldKind::Select,
                    options: vec![SelectOption::new("active", "Activo")],
                    ..FieldDescriptor::default()
                },
            ],
        }
    }

    #[test]
    fn rows_follow_column_order_and_formatting() {
        let rows = build_rows(
            &config(),
            &[json!({"id": "a", "number": "CT-1", "status": "active"})],
        );
        assert_eq!(rows[0].cells, vec!["1", "CT-1", "Activo"]);
    }

    #[test]
    fn missing_id_falls_back_without_crashing() {
        let rows = build_rows(&config(), &[json!({"number": "CT-2"})]);
        assert_eq!(record_id(&rows[0].record), None);
        assert_eq!(rows[0].cells[2], "-");
    }

    #[test]
    fn filter_matches_formatted_cells() {
        let rows = build_rows(
            &config(),
            &[
                json!({"id": 1, "number": "CT-1", "status": "active"}),
                json!({"id": 2, "number": "CT-2", "status": "other"}),
            ],
        );
        // "Activo" only exists after formatting; the raw value is "active".
        let filtered = filter_rows(rows, "activo");
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].cells[1], "CT-1");
    }

    #[test]
    fn sorting_is_a_pure_reorder() {
        let cfg = config();
        let fields: Vec<FieldDescriptor> = cfg.table_fields().cloned().collect();
        let mut rows = build_rows(
            &cfg,
            &[
                json!({"id": 1, "number": "b"}),
                json!({"id": 2, "number": "A"}),
            ],
        );
        sort_rows(&mut rows, &fields, 1, true);
        assert_eq!(rows[0].cells[1], "A");
        sort_rows(&mut rows, &fields, 1, false);
        assert_eq!(rows[0].cells[1], "b");
    }

    fn single_column_config(header: &'static str, key: &'static str, kind: FieldKind) -> EntityConfig {
        EntityConfig {
            name: "Entregable",
            plural: "Entregables",
            endpoint: "/api/entregables",
            fields: vec![FieldDescriptor {
                header,
                backend_key: Some(key),
                kind,
                ..FieldDescriptor::default()
            }],
        }
    }

    #[test]
    fn numeric_columns_sort_by_value_not_text() {
        let cfg = single_column_config("Avance", "qty", FieldKind::Number);
        let fields: Vec<FieldDescriptor> = cfg.table_fields().cloned().collect();
        let mut rows = build_rows(&cfg, &[json!({"qty": 10}), json!({"qty": 9})]);
        sort_rows(&mut rows, &fields, 0, true);
        let cells: Vec<&str> = rows.iter().map(|r| r.cells[0].as_str()).collect();
        assert_eq!(cells, vec!["9", "10"]);
    }

    #[test]
    fn currency_columns_sort_numerically_under_grouping() {
        let cfg = single_column_config("Valor", "value", FieldKind::Currency);
        let fields: Vec<FieldDescriptor> = cfg.table_fields().cloned().collect();
        let mut rows = build_rows(&cfg, &[json!({"value": 1000}), json!({"value": 200})]);
        sort_rows(&mut rows, &fields, 0, true);
        // Text order would put "$ 1.000" before "$ 200".
        let cells: Vec<&str> = rows.iter().map(|r| r.cells[0].as_str()).collect();
        assert_eq!(cells, vec!["$ 200", "$ 1.000"]);
    }

    #[test]
    fn date_columns_sort_chronologically() {
        let cfg = single_column_config("Fecha de entrega", "dueDate", FieldKind::Date);
        let fields: Vec<FieldDescriptor> = cfg.table_fields().cloned().collect();
        let mut rows = build_rows(
            &cfg,
            &[json!({"dueDate": "2025-03-10"}), json!({"dueDate": "2025-03-09"})],
        );
        sort_rows(&mut rows, &fields, 0, true);
        // "10 de marzo" sorts before "9 de marzo" as text; the raw dates
        // must win.
        let cells: Vec<&str> = rows.iter().map(|r| r.cells[0].as_str()).collect();
        assert_eq!(cells, vec!["9 de marzo de 2025", "10 de marzo de 2025"]);
    }
}
