//! Thin login flow against an external auth service.
//!
//! The storefront has no backend of its own: when an auth endpoint is
//! configured the flow is a single token-exchange POST; without one it
//! falls back to a locally issued token so the app remains usable
//! offline. Protocol correctness is explicitly out of scope.

use std::sync::Arc;
use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;
use url::Url;
use uuid::Uuid;

use crate::app::bootstrap::AppConfig;

/// Result of a completed login.
#[derive(Debug, Clone)]
pub struct LoginOutcome {
    pub token: String,
    pub email: String,
}

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("auth endpoint is not a valid url: {0}")]
    BadEndpoint(#[from] url::ParseError),

    #[error("auth service unreachable: {0}")]
    Http(#[from] reqwest::Error),

    #[error("auth service returned an incomplete grant")]
    IncompleteGrant,
}

#[derive(Debug, Deserialize)]
struct TokenGrant {
    token: String,
    email: Option<String>,
}

/// Run the login flow using the configured endpoint, or the offline
/// fallback when none is set.
pub async fn login(config: Arc<AppConfig>) -> Result<LoginOutcome, AuthError> {
    match config.auth_url.as_deref() {
        Some(endpoint) => exchange(endpoint).await,
        None => offline_login(&config).await,
    }
}

/// Exchange a device grant for a token at the external service.
async fn exchange(endpoint: &str) -> Result<LoginOutcome, AuthError> {
    let mut url = Url::parse(endpoint)?;
    url.path_segments_mut()
        .map_err(|_| url::ParseError::RelativeUrlWithCannotBeABaseBase)?
        .push("token");

    let client = reqwest::Client::new();
    let grant: TokenGrant = client
        .post(url)
        .json(&serde_json::json!({ "client": "vitrine-desktop" }))
        .send()
        .await?
        .error_for_status()?
        .json()
        .await?;

    let email = grant.email.ok_or(AuthError::IncompleteGrant)?;
    log::info!("token grant received for {email}");
    Ok(LoginOutcome {
        token: grant.token,
        email,
    })
}

/// Offline fallback: issue a local token after a short pause that
/// stands in for the redirect round-trip.
async fn offline_login(config: &AppConfig) -> Result<LoginOutcome, AuthError> {
    tokio::time::sleep(Duration::from_millis(400)).await;
    log::info!("no auth endpoint configured, issuing offline session");
    Ok(LoginOutcome {
        token: format!("offline-{}", Uuid::new_v4()),
        email: config.demo_email.to_string(),
    })
}
