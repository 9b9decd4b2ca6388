//! Async catalog queries with simulated latency.
//!
//! Mirrors the surface a remote catalog service would expose:
//! `fetch_sections(profile, kind)` for the browse rows and
//! `fetch_list_shows(profile)` for "my list". Both resolve after a
//! randomized delay so callers must render their pending states.

use std::time::Duration;

use rand::Rng;
use rand::seq::SliceRandom;
use vitrine_model::{Profile, Section, Show, ShowKind};

use crate::error::Result;
use crate::fixture;

/// Simulated round-trip latency window, matching a slow-ish CDN edge.
const LATENCY_MS: std::ops::RangeInclusive<u64> = 1_000..=2_000;

async fn simulated_latency() {
    let millis = rand::rng().random_range(LATENCY_MS);
    tokio::time::sleep(Duration::from_millis(millis)).await;
}

/// Shows matching a kind filter; `None` selects the whole catalog.
pub fn shows_by_kind(kind: Option<ShowKind>) -> Result<Vec<Show>> {
    let shows = fixture::all_shows()?;
    Ok(shows
        .iter()
        .filter(|show| kind.is_none_or(|kind| show.kind == kind))
        .cloned()
        .collect())
}

/// Fetch the browse sections for a profile.
///
/// Every section draws from the same kind-filtered pool in its own
/// shuffled order, the way a recommendation backend would produce
/// overlapping but differently ranked rows.
pub async fn fetch_sections(profile: &Profile, kind: Option<ShowKind>) -> Result<Vec<Section>> {
    let pool = shows_by_kind(kind)?;

    let acclaimed = match kind {
        Some(ShowKind::Series) => "Critically acclaimed series to binge without moderation",
        _ => "Critically acclaimed films to watch without moderation",
    };

    let mut sections = vec![
        Section::new(format!("Our selection for {}", profile.name), pool.clone()),
        Section::new(acclaimed, pool.clone()),
        Section::new("New releases", pool),
    ];

    {
        let mut rng = rand::rng();
        for section in &mut sections {
            section.shows.shuffle(&mut rng);
        }
    }

    simulated_latency().await;
    log::debug!(
        "sections resolved for profile {}: {} rows",
        profile.id,
        sections.len()
    );
    Ok(sections)
}

/// Fetch the shows a profile has saved to its list.
///
/// Unknown ids (stale entries from an older fixture) are skipped rather
/// than reported; the list keeps catalog order.
pub async fn fetch_list_shows(profile: &Profile) -> Result<Vec<Show>> {
    let shows = fixture::all_shows()?;
    let listed: Vec<Show> = shows
        .iter()
        .filter(|show| profile.has_listed(show.id))
        .cloned()
        .collect();

    simulated_latency().await;
    Ok(listed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use vitrine_model::ShowId;

    fn profile_named(name: &str) -> Profile {
        Profile::new(name, "avatars/01.png")
    }

    #[test]
    fn kind_filter_partitions_the_catalog() {
        let all = shows_by_kind(None).unwrap();
        let films = shows_by_kind(Some(ShowKind::Film)).unwrap();
        let series = shows_by_kind(Some(ShowKind::Series)).unwrap();

        assert_eq!(all.len(), films.len() + series.len());
        assert!(films.iter().all(|show| show.kind == ShowKind::Film));
        assert!(series.iter().all(|show| show.kind == ShowKind::Series));
    }

    #[tokio::test(start_paused = true)]
    async fn sections_are_personalized_permutations() {
        let profile = profile_named("Ada");
        let sections = fetch_sections(&profile, Some(ShowKind::Film)).await.unwrap();

        assert_eq!(sections.len(), 3);
        assert!(sections[0].name.contains("Ada"));

        let pool = shows_by_kind(Some(ShowKind::Film)).unwrap();
        for section in &sections {
            assert_eq!(section.shows.len(), pool.len());
            let mut ids: Vec<u64> = section.shows.iter().map(|s| s.id.value()).collect();
            ids.sort_unstable();
            let mut expected: Vec<u64> = pool.iter().map(|s| s.id.value()).collect();
            expected.sort_unstable();
            assert_eq!(ids, expected, "each row is a permutation of the pool");
        }
    }

    #[tokio::test(start_paused = true)]
    async fn list_keeps_catalog_order_and_skips_unknown_ids() {
        let mut profile = profile_named("Ada");
        profile.list = vec![ShowId::new(12), ShowId::new(999), ShowId::new(3)];

        let listed = fetch_list_shows(&profile).await.unwrap();
        let ids: Vec<u64> = listed.iter().map(|show| show.id.value()).collect();
        assert_eq!(ids, vec![3, 12], "catalog order, stale ids dropped");
    }

    #[tokio::test(start_paused = true)]
    async fn empty_list_resolves_to_no_shows() {
        let profile = profile_named("Guest");
        let listed = fetch_list_shows(&profile).await.unwrap();
        assert!(listed.is_empty());
    }
}
