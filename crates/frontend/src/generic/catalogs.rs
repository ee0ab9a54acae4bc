//! Option enrichment: fetch the lookup catalogs a config references and
//! apply them to a clone of the base config.
//!
//! The fetches race concurrently; each result only touches its own fields,
//! so the final config is order-independent. A failed catalog is logged
//! and skipped so the page still renders (best effort, partial success).

use futures::future::join_all;
use serde_json::Value;

use crate::domain;
use crate::generic::service::{EntityService, RestEntityService};
use metadata::config::{CatalogKey, EntityConfig};
use metadata::enrich::{enrich_config, CatalogResult};

fn catalog_service(key: CatalogKey) -> RestEntityService {
    match key {
        CatalogKey::Clients => domain::client::SERVICE,
        CatalogKey::Providers => domain::provider::SERVICE,
        CatalogKey::Contracts => domain::contract::SERVICE,
        CatalogKey::Services => domain::service::SERVICE,
    }
}

async fn fetch_catalog(key: CatalogKey) -> (CatalogKey, Result<Vec<Value>, String>) {
    (key, catalog_service(key).get_all().await)
}

/// Produce the enriched clone of `base` for one page mount.
///
/// No implicit retry: the caller re-triggers by remounting or via an
/// explicit refresh action.
pub async fn fetch_catalogs(base: &EntityConfig) -> EntityConfig {
    let keys = base.lookup_catalogs();
    if keys.is_empty() {
        return base.clone();
    }

    let results: Vec<CatalogResult> = join_all(keys.into_iter().map(fetch_catalog)).await;
    for (key, result) in &results {
        if let Err(e) = result {
            log::warn!("catálogo {} no disponible: {}", key.as_str(), e);
        }
    }
    enrich_config(base, &results)
}
