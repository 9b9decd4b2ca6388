//! UI-shell domain: theme, shared messages, views, and their handlers.

pub mod messages;
pub mod theme;
pub mod update_handlers;
pub mod views;
