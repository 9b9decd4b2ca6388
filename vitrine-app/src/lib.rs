//! Vitrine application library.
//!
//! This crate contains the desktop storefront's library surfaces used
//! by the executable in `src/main.rs`. Modules are exposed publicly to
//! enable integration testing of the slider engine and the domain
//! reducers without a running window.

pub mod app;
pub mod domains;
pub mod infra;
pub mod messages;
pub mod state;
pub mod subscriptions;
pub mod update;
pub mod view;
