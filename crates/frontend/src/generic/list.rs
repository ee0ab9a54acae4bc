//! Generic list page: fetch-all on mount, table rendering, create modal,
//! delete with confirmation. All mutations end in a refetch; the list
//! never patches its local copy.

use leptos::prelude::*;
use serde_json::Value;

use crate::generic::form::EntityFormModal;
use crate::generic::service::EntityService;
use crate::generic::table::{record_id, GenericTable};
use crate::shared::icons::icon;
use metadata::config::EntityConfig;

#[component]
pub fn GenericListPage<S>(
    service: S,
    /// Enriched config shared with the detail page.
    #[prop(into)]
    config: Signal<EntityConfig>,
    /// Opens the detail page for a record id.
    on_open: Callback<String>,
    /// Re-runs catalog enrichment alongside the data refetch.
    #[prop(optional)]
    on_refresh_catalogs: Option<Callback<()>>,
) -> impl IntoView
where
    S: EntityService + Clone + Send + Sync + 'static,
{
    let (items, set_items) = signal::<Vec<Value>>(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let creating = RwSignal::new(false);

    let service_for_fetch = service.clone();
    let fetch = move || {
        let service = service_for_fetch.clone();
        leptos::task::spawn_local(async move {
            match service.get_all().await {
                Ok(records) => {
                    let _ = set_items.try_set(records);
                    let _ = set_error.try_set(None);
                }
                Err(e) => {
                    let _ = set_error.try_set(Some(e));
                }
            }
        });
    };

    let fetch_for_refresh = fetch.clone();
    let fetch_for_saved = fetch.clone();
    let fetch_for_delete = fetch.clone();
    let service_for_delete = service.clone();
    let service_for_modal = service.clone();

    let handle_delete = move |id: String| {
        let confirmed = web_sys::window()
            .map(|w| {
                w.confirm_with_message(&format!("¿Eliminar el registro {}?", id))
                    .unwrap_or(false)
            })
            .unwrap_or(false);
        if !confirmed {
            return;
        }
        let service = service_for_delete.clone();
        let fetch = fetch_for_delete.clone();
        leptos::task::spawn_local(async move {
            match service.delete(&id).await {
                Ok(()) => fetch(),
                Err(e) => {
                    let _ = set_error.try_set(Some(e));
                }
            }
        });
    };

    fetch();

    view! {
        <div class="content">
            <div class="header">
                <h2>{move || config.get().plural}</h2>
                <div class="header__actions">
                    <button class="button button--primary" on:click=move |_| creating.set(true)>
                        {icon("plus")}
                        {move || format!("Nuevo {}", config.get().name.to_lowercase())}
                    </button>
                    <button
                        class="button button--secondary"
                        on:click=move |_| {
                            fetch_for_refresh();
                            if let Some(cb) = on_refresh_catalogs {
                                cb.run(());
                            }
                        }
                    >
                        {icon("refresh")}
                        {"Actualizar"}
                    </button>
                </div>
            </div>

            {move || error.get().map(|e| view! { <div class="error">{e}</div> })}

            <GenericTable
                config=config
                data=items
                on_edit=Callback::new(move |record: Value| {
                    if let Some(id) = record_id(&record) {
                        on_open.run(id);
                    }
                })
                on_delete=Callback::new(handle_delete)
            />

            {move || creating.get().then(|| {
                let fetch = fetch_for_saved.clone();
                view! {
                    <EntityFormModal
                        service=service_for_modal.clone()
                        config=config
                        on_saved=Callback::new(move |_| {
                            creating.set(false);
                            fetch();
                        })
                        on_cancel=Callback::new(move |_| creating.set(false))
                    />
                }
            })}
        </div>
    }
}
