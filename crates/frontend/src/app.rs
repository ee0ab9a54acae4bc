//! Application shell: sidebar navigation over the entity sections.
//!
//! Navigation is a plain signal rather than a router; every section is a
//! fresh mount, so its config enrichment re-runs on entry.

use leptos::prelude::*;

use crate::domain;
use crate::generic::section::EntitySection;
use crate::shared::icons::icon;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Section {
    Contracts,
    Deliverables,
    Services,
    Providers,
}

impl Section {
    const ALL: [Self; 4] = [
        Self::Contracts,
        Self::Deliverables,
        Self::Services,
        Self::Providers,
    ];

    fn title(self) -> &'static str {
        match self {
            Self::Contracts => "Contratos",
            Self::Deliverables => "Entregables",
            Self::Services => "Servicios",
            Self::Providers => "Proveedores",
        }
    }

    fn icon_name(self) -> &'static str {
        match self {
            Self::Contracts => "contracts",
            Self::Deliverables => "deliverables",
            Self::Services => "services",
            Self::Providers => "providers",
        }
    }
}

#[component]
pub fn App() -> impl IntoView {
    let active = RwSignal::new(Section::Contracts);

    view! {
        <div class="app">
            <nav class="sidebar">
                <h1 class="sidebar__title">{"Gestión de contratos"}</h1>
                {Section::ALL
                    .into_iter()
                    .map(|section| {
                        view! {
                            <button
                                class="sidebar__item"
                                class:sidebar__item--active=move || active.get() == section
                                on:click=move |_| active.set(section)
                            >
                                {icon(section.icon_name())}
                                <span>{section.title()}</span>
                            </button>
                        }
                    })
                    .collect_view()}
            </nav>
            <main class="main">
                {move || match active.get() {
                    Section::Contracts => view! {
                        <EntitySection
                            service=domain::contract::SERVICE
                            base=domain::contract::CONFIG.clone()
                        />
                    }.into_any(),
                    Section::Deliverables => view! {
                        <EntitySection
                            service=domain::deliverable::SERVICE
                            base=domain::deliverable::CONFIG.clone()
                        />
                    }.into_any(),
                    Section::Services => view! {
                        <EntitySection
                            service=domain::service::SERVICE
                            base=domain::service::CONFIG.clone()
                        />
                    }.into_any(),
                    Section::Providers => view! {
                        <EntitySection
                            service=domain::provider::SERVICE
                            base=domain::provider::CONFIG.clone()
                        />
                    }.into_any(),
                }}
            </main>
        </div>
    }
}
