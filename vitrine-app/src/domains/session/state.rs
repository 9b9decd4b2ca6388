//! Session state: the account plus per-session selection.

use anyhow::Context;
use vitrine_model::{Account, Profile, ProfileId};

use crate::infra::persist;

/// Account plus runtime-only session fields. Profile selection and
/// the manage-profiles toggle never persist; the account does.
#[derive(Debug, Clone, Default)]
pub struct SessionState {
    pub account: Account,
    pub selected_profile: Option<ProfileId>,
    pub managing_profiles: bool,
    pub authenticating: bool,
    pub login_error: Option<String>,
}

impl SessionState {
    /// Restore the persisted account if one exists; storage errors
    /// degrade to a signed-out session rather than failing startup.
    pub fn from_storage() -> Self {
        let account = match persist::load_account().context("restoring persisted account") {
            Ok(Some(account)) => {
                log::info!("restored account for {:?}", account.email);
                account
            }
            Ok(None) => Account::default(),
            Err(error) => {
                log::warn!("starting signed out: {error:#}");
                Account::default()
            }
        };
        Self {
            account,
            ..Self::default()
        }
    }

    pub fn selected(&self) -> Option<&Profile> {
        self.selected_profile
            .and_then(|id| self.account.find_profile(id))
    }
}
