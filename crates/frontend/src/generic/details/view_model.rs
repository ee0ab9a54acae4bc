use leptos::prelude::*;
use serde_json::Value;

use crate::generic::service::EntityService;

/// Lifecycle of the detail page: `Loading → Loaded | Error`, back to
/// `Loading` on every refetch.
#[derive(Clone, Debug, PartialEq)]
pub enum DetailsState {
    Loading,
    Loaded(Value),
    Error(String),
}

/// ViewModel for the generic detail page.
#[derive(Clone)]
pub struct GenericDetailsViewModel<S: EntityService + Clone + 'static> {
    pub service: S,
    pub id: String,
    pub state: RwSignal<DetailsState>,
    pub editing: RwSignal<bool>,
}

impl<S: EntityService + Clone + 'static> GenericDetailsViewModel<S> {
    pub fn new(service: S, id: String) -> Self {
        Self {
            service,
            id,
            state: RwSignal::new(DetailsState::Loading),
            editing: RwSignal::new(false),
        }
    }

    /// Fetch the authoritative record from the server.
    ///
    /// Also called after every successful save: the server is the single
    /// source of truth, local state is never patched optimistically.
    /// `try_set` drops the result if the page unmounted mid-flight.
    pub fn fetch_data(&self) {
        self.state.set(DetailsState::Loading);
        let this = self.clone();
        leptos::task::spawn_local(async move {
            match this.service.get_by_id(&this.id).await {
                Ok(record) => {
                    let _ = this.state.try_set(DetailsState::Loaded(record));
                }
                Err(e) => {
                    let _ = this.state.try_set(DetailsState::Error(e));
                }
            }
        });
    }
}
