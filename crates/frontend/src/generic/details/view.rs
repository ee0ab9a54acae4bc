use leptos::prelude::*;

use super::view_model::{DetailsState, GenericDetailsViewModel};
use crate::generic::form::EntityFormModal;
use crate::generic::service::EntityService;
use crate::shared::icons::icon;
use metadata::config::EntityConfig;
use metadata::format::display_value;

/// Read-only detail page for one record, driven by the same config (and
/// the same formatting law) as the table. Editing opens the generic form
/// modal over the loaded record.
#[component]
pub fn GenericViewPage<S>(
    service: S,
    #[prop(into)] config: Signal<EntityConfig>,
    id: String,
    on_back: Callback<()>,
) -> impl IntoView
where
    S: EntityService + Clone + Send + Sync + 'static,
{
    let vm = GenericDetailsViewModel::new(service.clone(), id);
    vm.fetch_data();

    let vm_for_refresh = vm.clone();
    let vm_for_edit = vm.clone();
    let vm_for_edit_disabled = vm.clone();
    let vm_for_state = vm.clone();
    let vm_for_modal = vm.clone();
    let service_for_modal = service.clone();

    view! {
        <div class="details-container">
            <div class="details-header">
                <button class="button button--icon" title="Volver" on:click=move |_| on_back.run(())>
                    {icon("arrow-left")}
                </button>
                <h2>{move || format!("Detalle de {}", config.get().name.to_lowercase())}</h2>
                <div class="header__actions">
                    <button
                        class="button button--primary"
                        on:click=move |_| vm_for_edit.editing.set(true)
                        disabled={
                            let vm = vm_for_edit_disabled.clone();
                            move || !matches!(vm.state.get(), DetailsState::Loaded(_))
                        }
                    >
                        {icon("edit")}
                        {"Editar"}
                    </button>
                    <button class="button button--secondary" on:click=move |_| vm_for_refresh.fetch_data()>
                        {icon("refresh")}
                        {"Actualizar"}
                    </button>
                </div>
            </div>

            {move || match vm_for_state.state.get() {
                DetailsState::Loading => view! {
                    <div class="details-loading">{"Cargando..."}</div>
                }.into_any(),
                DetailsState::Error(e) => view! {
                    <div class="error">{format!("No fue posible cargar el registro: {}", e)}</div>
                }.into_any(),
                DetailsState::Loaded(record) => {
                    let cfg = config.get();
                    let fields: Vec<_> = cfg.detail_fields().cloned().collect();
                    view! {
                        <div class="details-grid">
                            {fields.into_iter().map(|field| {
                                let value = display_value(&field, &record, 0);
                                view! {
                                    <div class="detail-field">
                                        <span class="detail-field__label">{field.header}</span>
                                        <span class="detail-field__value">{value}</span>
                                    </div>
                                }
                            }).collect_view()}
                        </div>
                    }.into_any()
                }
            }}

            {move || {
                if !vm_for_modal.editing.get() {
                    return view! { <></> }.into_any();
                }
                match vm_for_modal.state.get() {
                    DetailsState::Loaded(record) => {
                        let vm_saved = vm_for_modal.clone();
                        let vm_cancel = vm_for_modal.clone();
                        view! {
                            <EntityFormModal
                                service=service_for_modal.clone()
                                config=config
                                initial=record
                                on_saved=Callback::new(move |_| {
                                    vm_saved.editing.set(false);
                                    vm_saved.fetch_data();
                                })
                                on_cancel=Callback::new(move |_| vm_cancel.editing.set(false))
                            />
                        }.into_any()
                    }
                    _ => view! { <></> }.into_any(),
                }
            }}
        </div>
    }
}
