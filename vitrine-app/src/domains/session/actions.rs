//! Closed action set and transition function for session state.
//!
//! Every mutation of account/profile state goes through [`apply`]; no
//! call site touches the fields directly. The return value tells the
//! caller what storage side effect the transition requires — the
//! reducer itself never performs IO.

use vitrine_model::{Profile, ProfileId, ShowId};

use super::state::SessionState;

/// Everything that can happen to session state.
#[derive(Debug, Clone)]
pub enum SessionAction {
    LoggedIn { token: String, email: String },
    Logout,
    ToggleManaging,
    AddProfile(Profile),
    UpdateProfile(Profile),
    UpdateProfilePicture { id: ProfileId, picture: String },
    RemoveProfile(ProfileId),
    SelectProfile(Option<ProfileId>),
    ToggleListed { profile: ProfileId, show: ShowId },
}

/// Storage side effect owed after a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PersistEffect {
    None,
    Save,
    Clear,
}

/// Apply one action. Pure with respect to IO.
pub fn apply(state: &mut SessionState, action: SessionAction) -> PersistEffect {
    match action {
        SessionAction::LoggedIn { token, email } => {
            state.account.token = Some(token);
            if state.account.profiles.is_empty() {
                state.account.profiles = default_profiles(&email);
            }
            state.account.email = Some(email);
            state.selected_profile = None;
            state.managing_profiles = false;
            state.authenticating = false;
            state.login_error = None;
            PersistEffect::Save
        }
        SessionAction::Logout => {
            *state = SessionState::default();
            PersistEffect::Clear
        }
        SessionAction::ToggleManaging => {
            state.managing_profiles = !state.managing_profiles;
            PersistEffect::None
        }
        SessionAction::AddProfile(profile) => {
            state.account.profiles.push(profile);
            PersistEffect::Save
        }
        SessionAction::UpdateProfile(profile) => {
            if let Some(existing) = state.account.find_profile_mut(profile.id) {
                *existing = profile;
                PersistEffect::Save
            } else {
                log::warn!("update for unknown profile {} ignored", profile.id);
                PersistEffect::None
            }
        }
        SessionAction::UpdateProfilePicture { id, picture } => {
            if let Some(profile) = state.account.find_profile_mut(id) {
                profile.picture = picture;
                PersistEffect::Save
            } else {
                PersistEffect::None
            }
        }
        SessionAction::RemoveProfile(id) => {
            state.account.profiles.retain(|profile| profile.id != id);
            if state.selected_profile == Some(id) {
                state.selected_profile = None;
            }
            PersistEffect::Save
        }
        SessionAction::SelectProfile(id) => {
            // Selecting validates against the account; a stale id
            // degrades to "nothing selected".
            state.selected_profile = id.filter(|id| state.account.find_profile(*id).is_some());
            state.managing_profiles = false;
            PersistEffect::None
        }
        SessionAction::ToggleListed { profile, show } => {
            if let Some(profile) = state.account.find_profile_mut(profile) {
                let listed = profile.toggle_listed(show);
                log::debug!("show {show} {} list", if listed { "added to" } else { "removed from" });
                PersistEffect::Save
            } else {
                PersistEffect::None
            }
        }
    }
}

/// Starter profiles created on first login: one named after the
/// account, one guest.
fn default_profiles(email: &str) -> Vec<Profile> {
    let owner = email
        .split('@')
        .next()
        .filter(|name| !name.is_empty())
        .map(capitalize)
        .unwrap_or_else(|| "Viewer".to_string());

    vec![
        Profile::new(owner, "avatars/01.png"),
        Profile::new("Guest", "avatars/02.png"),
    ]
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn logged_in_state() -> SessionState {
        let mut state = SessionState::default();
        let effect = apply(
            &mut state,
            SessionAction::LoggedIn {
                token: "token".into(),
                email: "ada@example.com".into(),
            },
        );
        assert_eq!(effect, PersistEffect::Save);
        state
    }

    #[test]
    fn login_seeds_default_profiles_from_email() {
        let state = logged_in_state();
        assert_eq!(state.account.profiles.len(), 2);
        assert_eq!(state.account.profiles[0].name, "Ada");
        assert_eq!(state.account.profiles[1].name, "Guest");
        assert!(state.selected_profile.is_none());
    }

    #[test]
    fn login_keeps_existing_profiles() {
        let mut state = logged_in_state();
        let profiles = state.account.profiles.clone();
        apply(
            &mut state,
            SessionAction::LoggedIn {
                token: "fresh".into(),
                email: "ada@example.com".into(),
            },
        );
        assert_eq!(state.account.profiles, profiles);
    }

    #[test]
    fn removing_the_selected_profile_clears_selection() {
        let mut state = logged_in_state();
        let id = state.account.profiles[0].id;
        apply(&mut state, SessionAction::SelectProfile(Some(id)));
        assert_eq!(state.selected_profile, Some(id));

        let effect = apply(&mut state, SessionAction::RemoveProfile(id));
        assert_eq!(effect, PersistEffect::Save);
        assert!(state.selected_profile.is_none());
        assert_eq!(state.account.profiles.len(), 1);
    }

    #[test]
    fn selecting_an_unknown_profile_degrades_to_none() {
        let mut state = logged_in_state();
        let stale = vitrine_model::ProfileId::random();
        apply(&mut state, SessionAction::SelectProfile(Some(stale)));
        assert!(state.selected_profile.is_none());
    }

    #[test]
    fn toggle_listed_saves_through_the_reducer() {
        let mut state = logged_in_state();
        let id = state.account.profiles[0].id;
        let show = ShowId::new(3);

        let effect = apply(&mut state, SessionAction::ToggleListed { profile: id, show });
        assert_eq!(effect, PersistEffect::Save);
        assert!(state.account.find_profile(id).unwrap().has_listed(show));
    }

    #[test]
    fn logout_clears_everything_and_requests_a_storage_clear() {
        let mut state = logged_in_state();
        let effect = apply(&mut state, SessionAction::Logout);
        assert_eq!(effect, PersistEffect::Clear);
        assert!(state.account.profiles.is_empty());
        assert!(!state.account.is_authenticated());
    }
}
