//! Show records and their classification.

use std::fmt;
use std::str::FromStr;

use crate::error::ModelError;
use crate::ids::ShowId;

/// Broad classification of a show record.
///
/// Browse views filter the catalog by kind; `None` at the filter level
/// means "everything", which is why the filter is `Option<ShowKind>`
/// rather than a variant here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ShowKind {
    Film,
    Series,
}

impl fmt::Display for ShowKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ShowKind::Film => "film",
            ShowKind::Series => "series",
        })
    }
}

impl FromStr for ShowKind {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "film" => Ok(ShowKind::Film),
            "series" => Ok(ShowKind::Series),
            other => Err(ModelError::UnknownShowKind(other.to_string())),
        }
    }
}

/// A single catalog entry.
///
/// The slider core never looks inside this type; only its count and the
/// measured card width matter there. Everything else is presentation.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Show {
    pub id: ShowId,
    pub name: String,
    pub year: u16,
    /// Minimum recommended viewer age.
    pub age: u8,
    /// Short justification for the age rating.
    pub age_why: String,
    pub audiodescription: bool,
    /// Display duration, e.g. "2 h 11 min" or "3 seasons".
    pub duration: String,
    pub directors: Vec<String>,
    pub writers: Vec<String>,
    pub description: String,
    pub kind: ShowKind,
    pub tags: Vec<String>,
    pub cast: Vec<String>,
    /// Cover art location. Opaque to every subsystem but the card view.
    pub picture: String,
    /// Match percentage shown in the preview modal.
    pub recommended: u8,
}

/// Viewer reaction attached to a show from the preview modal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Evaluation {
    Bad,
    Like,
    Love,
}

#[cfg(test)]
mod tests {
    use super::ShowKind;
    use std::str::FromStr;

    #[test]
    fn kind_round_trips_through_display() {
        for kind in [ShowKind::Film, ShowKind::Series] {
            let parsed = ShowKind::from_str(&kind.to_string()).unwrap();
            assert_eq!(parsed, kind);
        }
    }

    #[test]
    fn unknown_kind_is_rejected() {
        assert!(ShowKind::from_str("documentary").is_err());
    }
}
