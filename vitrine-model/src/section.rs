//! Named groupings of shows as returned by the catalog.

use crate::show::Show;

/// One browse row: a heading plus the shows rendered in its slider.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Section {
    pub name: String,
    pub shows: Vec<Show>,
}

impl Section {
    pub fn new(name: impl Into<String>, shows: Vec<Show>) -> Self {
        Self {
            name: name.into(),
            shows,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.shows.is_empty()
    }
}
