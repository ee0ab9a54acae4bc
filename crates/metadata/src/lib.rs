//! Declarative entity metadata and the pure rendering core.
//!
//! This crate holds everything the UI needs that does not touch the DOM or
//! the network: field/config descriptors, the display-value formatting law,
//! response envelope unwrapping, select-option enrichment over fetched
//! lookup lists, field validation, and pagination math.

pub mod config;
pub mod enrich;
pub mod envelope;
pub mod format;
pub mod paginate;
pub mod validation;
