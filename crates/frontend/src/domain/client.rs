//! Clients participate only as a lookup catalog; they have no section of
//! their own in the dashboard.

use crate::generic::service::RestEntityService;

pub const SERVICE: RestEntityService =
    RestEntityService::new("/api/clientes", &["data", "clients", "client"]);
