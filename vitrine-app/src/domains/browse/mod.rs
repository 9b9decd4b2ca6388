//! Browse domain: section rows, my list, and the hover preview.

pub mod messages;
pub mod state;
pub mod update;

pub use messages::BrowseMessage;
pub use state::{ActivePreview, BrowseState, HomeTab, LoadState, PreviewPhase};
