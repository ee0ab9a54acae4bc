//! Config-driven generic UI: one table, one detail page, one form modal
//! serve every entity type through its [`metadata::config::EntityConfig`].

pub mod catalogs;
pub mod details;
pub mod form;
pub mod list;
pub mod section;
pub mod service;
pub mod table;
