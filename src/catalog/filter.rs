// SPDX-License-Identifier: MPL-2.0
//! Pure filtering over the video collection.
//!
//! Every function here is a pure subsequence selection: relative order of the
//! input collection is always preserved, and no state is involved. The screens
//! call these on render; nothing is cached.

use super::VideoRecord;

/// Videos whose tag list contains `selected` (exact match). With no
/// selection, the full collection passes through unfiltered.
pub fn by_tag<'a>(videos: &'a [VideoRecord], selected: Option<&str>) -> Vec<&'a VideoRecord> {
    match selected {
        Some(tag) => videos
            .iter()
            .filter(|v| v.tags.iter().any(|t| t == tag))
            .collect(),
        None => videos.iter().collect(),
    }
}

/// Videos the viewer has saved.
pub fn saved(videos: &[VideoRecord]) -> Vec<&VideoRecord> {
    videos.iter().filter(|v| v.saved).collect()
}

/// Videos the viewer has liked.
pub fn liked(videos: &[VideoRecord]) -> Vec<&VideoRecord> {
    videos.iter().filter(|v| v.liked).collect()
}

/// Applies a tag click to the current selection: picking a new tag selects
/// it, picking the already-selected tag clears the filter.
pub fn toggle_tag(current: Option<&str>, tag: &str) -> Option<String> {
    match current {
        Some(selected) if selected == tag => None,
        _ => Some(tag.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Catalog, MockCatalog};

    #[test]
    fn no_selection_passes_everything_through() {
        let catalog = MockCatalog::new();
        let filtered = by_tag(catalog.list(), None);
        assert_eq!(filtered.len(), catalog.list().len());
    }

    #[test]
    fn tag_filter_keeps_only_matching_records() {
        let catalog = MockCatalog::new();
        let filtered = by_tag(catalog.list(), Some("nature"));
        assert!(!filtered.is_empty());
        for video in &filtered {
            assert!(video.tags.iter().any(|t| t == "nature"));
        }
    }

    #[test]
    fn tag_filter_preserves_relative_order() {
        let catalog = MockCatalog::new();
        let filtered = by_tag(catalog.list(), Some("nature"));
        let ids: Vec<&str> = filtered.iter().map(|v| v.id.as_str()).collect();
        assert_eq!(ids, ["1", "3"]);
    }

    #[test]
    fn selecting_a_tag_twice_restores_the_full_collection() {
        let catalog = MockCatalog::new();
        for video in catalog.list() {
            for tag in &video.tags {
                let selected = toggle_tag(None, tag);
                assert_eq!(selected.as_deref(), Some(tag.as_str()));
                let cleared = toggle_tag(selected.as_deref(), tag);
                assert!(cleared.is_none());
                assert_eq!(
                    by_tag(catalog.list(), cleared.as_deref()).len(),
                    catalog.list().len()
                );
            }
        }
    }

    #[test]
    fn switching_tags_replaces_the_selection() {
        let selected = toggle_tag(Some("city"), "nature");
        assert_eq!(selected.as_deref(), Some("nature"));
    }

    #[test]
    fn saved_subset_preserves_order() {
        let catalog = MockCatalog::new();
        let ids: Vec<&str> = saved(catalog.list()).iter().map(|v| v.id.as_str()).collect();
        assert_eq!(ids, ["3", "5"]);
    }

    #[test]
    fn liked_subset_preserves_order() {
        let catalog = MockCatalog::new();
        let ids: Vec<&str> = liked(catalog.list()).iter().map(|v| v.id.as_str()).collect();
        assert_eq!(ids, ["2", "5"]);
    }

    #[test]
    fn unknown_tag_yields_empty_subset() {
        let catalog = MockCatalog::new();
        assert!(by_tag(catalog.list(), Some("underwater")).is_empty());
    }
}
