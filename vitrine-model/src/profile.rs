//! Viewer profiles and their notifications.

use chrono::{DateTime, Utc};

use crate::ids::{ProfileId, ShowId};

/// An in-app notification entry on a profile.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Notification {
    pub title: String,
    pub subtitle: String,
    pub picture: String,
    pub date: DateTime<Utc>,
}

/// One viewer profile on the account.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Profile {
    pub id: ProfileId,
    pub name: String,
    pub picture: String,
    pub alias: Option<String>,
    /// Autoplay the next episode of a series.
    pub autoplay_next_episode: bool,
    /// Autoplay previews while browsing.
    pub autoplay_previews: bool,
    pub notifications: Vec<Notification>,
    /// Shows saved to "my list", in insertion order.
    pub list: Vec<ShowId>,
}

impl Profile {
    /// Create a profile with defaults matching a freshly added viewer.
    pub fn new(name: impl Into<String>, picture: impl Into<String>) -> Self {
        Self {
            id: ProfileId::random(),
            name: name.into(),
            picture: picture.into(),
            alias: None,
            autoplay_next_episode: true,
            autoplay_previews: true,
            notifications: Vec::new(),
            list: Vec::new(),
        }
    }

    pub fn has_listed(&self, id: ShowId) -> bool {
        self.list.contains(&id)
    }

    /// Add or remove a show from the profile list, returning whether it
    /// is present afterwards.
    pub fn toggle_listed(&mut self, id: ShowId) -> bool {
        if let Some(pos) = self.list.iter().position(|listed| *listed == id) {
            self.list.remove(pos);
            false
        } else {
            self.list.push(id);
            true
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Profile;
    use crate::ids::ShowId;

    #[test]
    fn toggle_listed_round_trips() {
        let mut profile = Profile::new("Ada", "avatars/01.png");
        let id = ShowId::new(7);

        assert!(profile.toggle_listed(id));
        assert!(profile.has_listed(id));
        assert!(!profile.toggle_listed(id));
        assert!(!profile.has_listed(id));
    }

    #[test]
    fn toggle_preserves_insertion_order() {
        let mut profile = Profile::new("Ada", "avatars/01.png");
        for raw in [3, 1, 2] {
            profile.toggle_listed(ShowId::new(raw));
        }
        profile.toggle_listed(ShowId::new(1));

        let order: Vec<u64> = profile.list.iter().map(|id| id.value()).collect();
        assert_eq!(order, vec![3, 2]);
    }
}
