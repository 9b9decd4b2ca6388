//! Application configuration and boot state.

use std::sync::Arc;

use iced::Task;

use crate::messages::Message;
use crate::state::State;

/// Runtime configuration, read once at startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// External auth service base URL. Without one, login falls back
    /// to an offline session.
    pub auth_url: Option<Arc<str>>,
    /// Email used for the offline fallback session.
    pub demo_email: Arc<str>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            auth_url: None,
            demo_email: Arc::from("viewer@vitrine.local"),
        }
    }
}

impl AppConfig {
    pub fn from_environment() -> Self {
        let auth_url = std::env::var("VITRINE_AUTH_URL")
            .ok()
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .map(Arc::from);
        let demo_email = std::env::var("VITRINE_DEMO_EMAIL")
            .unwrap_or_else(|_| "viewer@vitrine.local".to_string());

        Self {
            auth_url,
            demo_email: Arc::from(demo_email),
        }
    }
}

/// Boot logic used by the runtime application.
pub fn boot(config: &Arc<AppConfig>) -> (State, Task<Message>) {
    (State::new(Arc::clone(config)), Task::none())
}
