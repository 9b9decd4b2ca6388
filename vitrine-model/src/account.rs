//! The locally persisted account: auth token plus profiles.

use crate::ids::ProfileId;
use crate::profile::Profile;

/// Account state as persisted between runs.
///
/// Which profile is currently selected is deliberately *not* part of
/// this type; selection is per-session state owned by the application.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Account {
    pub token: Option<String>,
    pub email: Option<String>,
    pub profiles: Vec<Profile>,
}

impl Account {
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    pub fn find_profile(&self, id: ProfileId) -> Option<&Profile> {
        self.profiles.iter().find(|profile| profile.id == id)
    }

    pub fn find_profile_mut(&mut self, id: ProfileId) -> Option<&mut Profile> {
        self.profiles.iter_mut().find(|profile| profile.id == id)
    }
}
