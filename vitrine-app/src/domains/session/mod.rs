//! Session domain: account, profiles, and the thin login flow.

pub mod actions;
pub mod auth;
pub mod messages;
pub mod state;
pub mod update;

pub use actions::{PersistEffect, SessionAction, apply};
pub use messages::SessionMessage;
pub use state::SessionState;
