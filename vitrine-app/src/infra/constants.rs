//! Layout and timing constants.

/// Card geometry. Cards are fixed-size; the slider derives everything
/// else from the measured container width.
pub mod card {
    pub const WIDTH: f32 = 224.0;
    pub const HEIGHT: f32 = 128.0;
}

/// Slider layout values.
pub mod slider {
    /// Height of a slider row, card plus breathing room.
    pub const ROW_HEIGHT: f32 = 148.0;

    /// Spacing between a section header and its row.
    pub const HEADER_SPACING: f32 = 10.0;
}

/// Page chrome.
pub mod layout {
    /// Horizontal padding applied to browse content on both sides.
    pub const PAGE_PADDING: f32 = 48.0;

    /// Fixed width of the hover-preview modal.
    pub const MODAL_WIDTH: f32 = 320.0;
}

/// Animation and timer durations.
pub mod timing {
    use std::time::Duration;

    /// A normal one-page slider transition.
    pub const STEP_TRANSITION: Duration = Duration::from_millis(500);

    /// A wrap transition from the last page back to the first (or the
    /// reverse). Longer on purpose so a loop reads differently from a
    /// step.
    pub const WRAP_TRANSITION: Duration = Duration::from_millis(800);

    /// Hover dwell before the preview modal opens.
    pub const PREVIEW_SHOW_DELAY: Duration = Duration::from_millis(1_000);

    /// Hide animation length before the preview modal is dropped.
    pub const PREVIEW_HIDE_DELAY: Duration = Duration::from_millis(500);
}
