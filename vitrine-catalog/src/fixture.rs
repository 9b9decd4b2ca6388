//! Embedded catalog fixture.

use std::sync::OnceLock;

use vitrine_model::Show;

use crate::error::Result;

const RAW_CATALOG: &str = include_str!("../assets/catalog.json");

static CATALOG: OnceLock<Vec<Show>> = OnceLock::new();

/// All shows in the fixture, decoded once per process.
pub fn all_shows() -> Result<&'static [Show]> {
    if let Some(shows) = CATALOG.get() {
        return Ok(shows);
    }

    let decoded: Vec<Show> = serde_json::from_str(RAW_CATALOG)?;
    log::debug!("catalog fixture decoded: {} shows", decoded.len());
    Ok(CATALOG.get_or_init(|| decoded))
}

#[cfg(test)]
mod tests {
    use super::all_shows;

    #[test]
    fn fixture_decodes_with_unique_ids() {
        let shows = all_shows().unwrap();
        assert!(!shows.is_empty());

        let mut ids: Vec<u64> = shows.iter().map(|show| show.id.value()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), shows.len(), "show ids must be unique");
    }
}
