//! Session messages.

use super::actions::SessionAction;
use super::auth::LoginOutcome;

#[derive(Debug, Clone)]
pub enum SessionMessage {
    /// The sign-in button was pressed.
    LoginRequested,
    /// The login flow resolved. Errors arrive pre-rendered since iced
    /// messages must be `Clone`.
    LoginCompleted(Result<LoginOutcome, String>),
    /// A state transition from the closed action set.
    Action(SessionAction),
}
