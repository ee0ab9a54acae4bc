//! Entity data access behind one trait.
//!
//! The generic pages only ever talk to an [`EntityService`]; the REST
//! implementation handles envelope unwrapping so callers always see plain
//! records.

use async_trait::async_trait;
use serde_json::Value;

use crate::shared::api_utils::api_url;
use crate::shared::fetch::fetch_json;
use metadata::envelope::{unwrap_envelope, unwrap_list};

/// CRUD capability consumed per entity type by the generic pages.
#[async_trait(?Send)]
pub trait EntityService {
    async fn get_all(&self) -> Result<Vec<Value>, String>;
    async fn get_by_id(&self, id: &str) -> Result<Value, String>;
    async fn create(&self, payload: &Value) -> Result<Value, String>;
    async fn update(&self, id: &str, payload: &Value) -> Result<Value, String>;
    async fn delete(&self, id: &str) -> Result<(), String>;
}

/// REST-backed service with a fixed endpoint and envelope key priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RestEntityService {
    pub endpoint: &'static str,
    /// Known envelope keys, tried in order; the raw response is the
    /// fallback.
    pub envelope_keys: &'static [&'static str],
}

impl RestEntityService {
    pub const fn new(endpoint: &'static str, envelope_keys: &'static [&'static str]) -> Self {
        Self {
            endpoint,
            envelope_keys,
        }
    }

    fn item_url(&self, id: &str) -> String {
        api_url(&format!("{}/{}", self.endpoint, id))
    }
}

#[async_trait(?Send)]
impl EntityService for RestEntityService {
    async fn get_all(&self) -> Result<Vec<Value>, String> {
        let body = fetch_json("GET", &api_url(self.endpoint), None).await?;
        Ok(unwrap_list(body, self.envelope_keys))
    }

    async fn get_by_id(&self, id: &str) -> Result<Value, String> {
        let body = fetch_json("GET", &self.item_url(id), None).await?;
        Ok(unwrap_envelope(body, self.envelope_keys))
    }

    async fn create(&self, payload: &Value) -> Result<Value, String> {
        let body = fetch_json("POST", &api_url(self.endpoint), Some(payload)).await?;
        Ok(unwrap_envelope(body, self.envelope_keys))
    }

    async fn update(&self, id: &str, payload: &Value) -> Result<Value, String> {
        let body = fetch_json("PUT", &self.item_url(id), Some(payload)).await?;
        Ok(unwrap_envelope(body, self.envelope_keys))
    }

    async fn delete(&self, id: &str) -> Result<(), String> {
        fetch_json("DELETE", &self.item_url(id), None).await?;
        Ok(())
    }
}
