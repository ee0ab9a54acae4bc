//! Generic edit/create modal, driven by a config's editable fields.
//!
//! Validation runs reactively over the whole form record; submission is
//! blocked while any field fails, and each failure renders inline next to
//! its input.

use leptos::prelude::*;
use serde_json::Value;

use crate::generic::service::EntityService;
use crate::generic::table::record_id;
use crate::shared::icons::icon;
use crate::shared::modal::Modal;
use metadata::config::{EntityConfig, FieldDescriptor, FieldKind};
use metadata::format::stringify;
use metadata::validation::{validate_record, ValidationError};

fn set_field(form: RwSignal<Value>, key: &'static str, value: Value) {
    form.update(|record| {
        if let Value::Object(map) = record {
            map.insert(key.to_string(), value);
        }
    });
}

/// Numeric inputs are stored as JSON numbers when they parse; otherwise
/// the raw text is kept so validation can point at it.
fn parse_input(kind: FieldKind, raw: String) -> Value {
    match kind {
        FieldKind::Number | FieldKind::Currency => raw
            .parse::<f64>()
            .ok()
            .and_then(serde_json::Number::from_f64)
            .map(Value::Number)
            .unwrap_or(Value::String(raw)),
        _ => Value::String(raw),
    }
}

fn field_input(
    form: RwSignal<Value>,
    errors: Memo<Vec<(&'static str, ValidationError)>>,
    field: FieldDescriptor,
) -> AnyView {
    let Some(key) = field.backend_key else {
        return view! { <></> }.into_any();
    };

    let current = move || form.with(|r| r.get(key).map(stringify).unwrap_or_default());
    let error_text = move || {
        errors
            .get()
            .into_iter()
            .find(|(k, _)| *k == key)
            .map(|(_, e)| e.to_string())
    };

    let input = match field.kind {
        FieldKind::Textarea => view! {
            <textarea
                class="form__textarea"
                rows="3"
                prop:value=current
                on:input=move |ev| set_field(form, key, Value::String(event_target_value(&ev)))
            />
        }
        .into_any(),
        FieldKind::Select => {
            let options = field.options.clone();
            let options_for_change = field.options.clone();
            view! {
                <select
                    class="form__select"
                    on:change=move |ev| {
                        let raw = event_target_value(&ev);
                        // Store the option's original value, not its string
                        // form, so numeric ids stay numeric in the payload.
                        let value = options_for_change
                            .iter()
                            .find(|o| stringify(&o.value) == raw)
                            .map(|o| o.value.clone())
                            .unwrap_or(Value::Null);
                        set_field(form, key, value);
                    }
                >
                    <option value="" selected=move || current().is_empty()>{"Seleccione..."}</option>
                    {options.into_iter().map(|opt| {
                        let opt_key = stringify(&opt.value);
                        let opt_key_for_selected = opt_key.clone();
                        view! {
                            <option value=opt_key selected=move || current() == opt_key_for_selected>
                                {opt.label}
                            </option>
                        }
                    }).collect_view()}
                </select>
            }
            .into_any()
        }
        FieldKind::Boolean => view! {
            <input
                type="checkbox"
                class="form__checkbox"
                prop:checked=move || form.with(|r| r.get(key).and_then(Value::as_bool).unwrap_or(false))
                on:change=move |ev| set_field(form, key, Value::Bool(event_target_checked(&ev)))
            />
        }
        .into_any(),
        FieldKind::Date => view! {
            <input
                type="date"
                class="form__input"
                prop:value=current
                on:input=move |ev| set_field(form, key, Value::String(event_target_value(&ev)))
            />
        }
        .into_any(),
        FieldKind::Number | FieldKind::Currency => {
            let kind = field.kind;
            view! {
                <input
                    type="number"
                    class="form__input"
                    prop:value=current
                    on:input=move |ev| set_field(form, key, parse_input(kind, event_target_value(&ev)))
                />
            }
            .into_any()
        }
        _ => view! {
            <input
                type="text"
                class="form__input"
                prop:value=current
                on:input=move |ev| set_field(form, key, Value::String(event_target_value(&ev)))
            />
        }
        .into_any(),
    };

    view! {
        <div class="form-group">
            <label class="form__label">
                {field.header}
                {field.required.then(|| view! { <span class="form__required">{" *"}</span> })}
            </label>
            {input}
            {move || error_text().map(|msg| view! { <div class="form__error">{msg}</div> })}
        </div>
    }
    .into_any()
}

#[component]
pub fn EntityFormModal<S>(
    service: S,
    #[prop(into)] config: Signal<EntityConfig>,
    #[prop(optional)] initial: Option<Value>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView
where
    S: EntityService + Clone + Send + Sync + 'static,
{
    let is_edit = initial.as_ref().map(|r| record_id(r).is_some()).unwrap_or(false);
    let form = RwSignal::new(initial.unwrap_or_else(|| Value::Object(serde_json::Map::new())));
    let server_error = RwSignal::new(None::<String>);

    let errors = Memo::new(move |_| {
        let cfg = config.get();
        validate_record(&cfg, &form.get())
    });

    let title = {
        let name = config.with_untracked(|c| c.name).to_lowercase();
        if is_edit {
            format!("Editar {}", name)
        } else {
            format!("Nuevo {}", name)
        }
    };

    let service_for_save = service.clone();
    let handle_save = move |_| {
        if !errors.get().is_empty() {
            return;
        }
        let service = service_for_save.clone();
        let payload = form.get();
        leptos::task::spawn_local(async move {
            let result = match record_id(&payload) {
                Some(id) => service.update(&id, &payload).await.map(|_| ()),
                None => service.create(&payload).await.map(|_| ()),
            };
            match result {
                Ok(()) => on_saved.run(()),
                Err(e) => {
                    let _ = server_error.try_set(Some(e));
                }
            }
        });
    };

    view! {
        <Modal title=title on_close=on_cancel>
            {move || server_error.get().map(|e| view! { <div class="error">{e}</div> })}
            <div class="details-form">
                {move || {
                    let cfg = config.get();
                    let fields: Vec<FieldDescriptor> = cfg.form_fields().cloned().collect();
                    fields
                        .into_iter()
                        .map(|field| field_input(form, errors, field))
                        .collect_view()
                }}
            </div>
            <div class="details-actions">
                <button
                    class="button button--primary"
                    on:click=handle_save
                    disabled=move || !errors.get().is_empty()
                >
                    {icon("save")}
                    {if is_edit { "Guardar" } else { "Crear" }}
                </button>
                <button class="button button--secondary" on:click=move |_| on_cancel.run(())>
                    {icon("x")}
                    {"Cancelar"}
                </button>
            </div>
        </Modal>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn numeric_input_parses_or_keeps_raw_text() {
        assert_eq!(parse_input(FieldKind::Currency, "1500".into()), json!(1500.0));
        assert_eq!(parse_input(FieldKind::Number, "abc".into()), json!("abc"));
        assert_eq!(parse_input(FieldKind::Text, "12".into()), json!("12"));
    }
}
