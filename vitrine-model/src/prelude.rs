//! Convenience re-exports for downstream crates.

pub use crate::account::Account;
pub use crate::error::{ModelError, Result as ModelResult};
pub use crate::ids::{ProfileId, ShowId};
pub use crate::profile::{Notification, Profile};
pub use crate::section::Section;
pub use crate::show::{Evaluation, Show, ShowKind};
