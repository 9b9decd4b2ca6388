//! Fixture-backed catalog for the Vitrine storefront.
//!
//! There is no backend: every query is answered from an embedded JSON
//! fixture after a simulated network delay, so the UI exercises its
//! loading states against realistic latency. The API surface mirrors
//! what a remote catalog service would expose.

pub mod api;
pub mod error;
pub mod fixture;

pub use api::{fetch_list_shows, fetch_sections, shows_by_kind};
pub use error::{CatalogError, Result};
