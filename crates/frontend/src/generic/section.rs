//! One entity section: owns the enriched config for the page and switches
//! between the list and the detail view.

use leptos::prelude::*;

use crate::generic::catalogs::fetch_catalogs;
use crate::generic::details::GenericViewPage;
use crate::generic::list::GenericListPage;
use crate::generic::service::EntityService;
use metadata::config::EntityConfig;

#[derive(Clone, Debug, PartialEq)]
enum SectionView {
    List,
    Details(String),
}

#[component]
pub fn EntitySection<S>(service: S, base: EntityConfig) -> impl IntoView
where
    S: EntityService + Clone + Send + Sync + 'static,
{
    // The shared base stays untouched; this section works on its own
    // enriched clone so concurrently open sections cannot leak options
    // into each other.
    let config = RwSignal::new(base.clone());
    let base_stored = StoredValue::new(base);
    let mode = RwSignal::new(SectionView::List);

    let load_catalogs = move || {
        let base = base_stored.get_value();
        leptos::task::spawn_local(async move {
            let enriched = fetch_catalogs(&base).await;
            let _ = config.try_set(enriched);
        });
    };
    load_catalogs();

    let service_for_list = service.clone();
    let service_for_details = service.clone();

    view! {
        {move || match mode.get() {
            SectionView::List => view! {
                <GenericListPage
                    service=service_for_list.clone()
                    config=config
                    on_open=Callback::new(move |id| mode.set(SectionView::Details(id)))
                    on_refresh_catalogs=Callback::new(move |_| load_catalogs())
                />
            }.into_any(),
            SectionView::Details(id) => view! {
                <GenericViewPage
                    service=service_for_details.clone()
                    config=config
                    id=id
                    on_back=Callback::new(move |_| mode.set(SectionView::List))
                />
            }.into_any(),
        }}
    }
}
