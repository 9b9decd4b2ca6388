//! Slider engine.
//!
//! The horizontal windowing and paging core of the storefront: pure
//! index-band computation (`bands`), a pagination state machine
//! (`state`), the offset engine and tween (`motion`), per-row state
//! scoping (`registry`), and the view composition (`view`). Message
//! handling lives in `domains::ui::update_handlers::slider_updates`.

pub mod bands;
pub mod messages;
pub mod motion;
pub mod registry;
pub mod state;
pub mod view;

pub use bands::{EntryKind, SliderEntry, WindowBands};
pub use messages::SliderMessage;
pub use registry::{SliderKey, SliderRegistry};
pub use state::{MoveCommand, SliderPhase, SliderState, WrapMode};
pub use view::slider;
