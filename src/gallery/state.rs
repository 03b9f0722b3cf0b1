//! Gallery view state and event application.
//!
//! The state a screen needs is held here explicitly and updated through
//! [`GalleryEvent`]s, with all list shaping delegated to the pure functions
//! in [`super::derive`]. Filtering always starts from the canonical photo
//! index, never from an already-filtered view, so selecting a tag after a
//! reversal or search behaves the same as selecting it first.

use crate::store::{GalleryMeta, PhotoRecord};

use super::derive::{
    all_tags, canonical, filter_photos_by_tag, filter_tags_by_input, photo_index, reversed,
    PhotoIndexEntry, TagEntry,
};

/// Discrete things that can happen to a gallery screen.
#[derive(Debug, Clone)]
pub enum GalleryEvent {
    FetchStarted,
    FetchSucceeded {
        meta: GalleryMeta,
        records: Vec<PhotoRecord>,
    },
    FetchFailed,
    TagViewToggled,
    TagSelected(String),
    TagCleared,
    SearchSubmitted(String),
    SearchCancelled,
    ReverseToggled,
}

/// All state owned by one gallery screen.
#[derive(Debug, Default)]
pub struct GalleryState {
    /// Canonical photo index, ascending by id. Untouched by view changes.
    photo_index: Vec<PhotoIndexEntry>,
    /// Photos currently on screen (filtered and/or reversed).
    view_photos: Vec<PhotoIndexEntry>,
    /// Full tag set derived from the last fetch.
    all_tags: Vec<TagEntry>,
    /// Tags currently on screen (possibly narrowed by a search).
    current_tags: Vec<TagEntry>,
    selected_tag: Option<String>,
    is_reverse: bool,
    is_tag_view: bool,
    is_loading: bool,
    is_error: bool,
}

impl GalleryState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one event. Derived collections are recomputed from the canonical
    /// index; nothing is mutated in place across events.
    pub fn apply(&mut self, event: GalleryEvent) {
        match event {
            GalleryEvent::FetchStarted => {
                self.is_loading = true;
                self.is_error = false;
            }
            GalleryEvent::FetchSucceeded { meta, records } => {
                self.all_tags = all_tags(&records);
                self.current_tags = self.all_tags.clone();
                self.photo_index = photo_index(&meta, &records);
                self.view_photos = self.photo_index.clone();
                self.selected_tag = None;
                self.is_reverse = false;
                self.is_loading = false;
                self.is_error = false;
                tracing::info!(
                    photos = self.photo_index.len(),
                    tags = self.all_tags.len(),
                    "gallery loaded"
                );
            }
            GalleryEvent::FetchFailed => {
                self.is_loading = false;
                self.is_error = true;
            }
            GalleryEvent::TagViewToggled => {
                self.is_tag_view = !self.is_tag_view;
                if self.is_tag_view {
                    self.current_tags = self.all_tags.clone();
                }
            }
            GalleryEvent::TagSelected(tag) => {
                self.view_photos = filter_photos_by_tag(&tag, &self.photo_index);
                self.selected_tag = Some(tag);
                self.is_reverse = false;
                self.is_tag_view = false;
            }
            GalleryEvent::TagCleared => {
                self.view_photos = self.photo_index.clone();
                self.selected_tag = None;
                self.is_reverse = false;
                self.is_tag_view = false;
                self.current_tags = self.all_tags.clone();
            }
            GalleryEvent::SearchSubmitted(input) => {
                self.current_tags = filter_tags_by_input(&self.all_tags, &input);
            }
            GalleryEvent::SearchCancelled => {
                self.current_tags = self.all_tags.clone();
            }
            GalleryEvent::ReverseToggled => {
                self.is_reverse = !self.is_reverse;
                self.view_photos = if self.is_reverse {
                    reversed(&canonical(&self.view_photos))
                } else {
                    canonical(&self.view_photos)
                };
            }
        }
    }

    pub fn view_photos(&self) -> &[PhotoIndexEntry] {
        &self.view_photos
    }

    pub fn current_tags(&self) -> &[TagEntry] {
        &self.current_tags
    }

    pub fn all_tags(&self) -> &[TagEntry] {
        &self.all_tags
    }

    pub fn selected_tag(&self) -> Option<&str> {
        self.selected_tag.as_deref()
    }

    pub fn is_reverse(&self) -> bool {
        self.is_reverse
    }

    pub fn is_tag_view(&self) -> bool {
        self.is_tag_view
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn is_error(&self) -> bool {
        self.is_error
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loaded_state() -> GalleryState {
        let records = vec![
            PhotoRecord {
                index: 0,
                source: None,
                tags: vec!["sea".to_string()],
            },
            PhotoRecord {
                index: 1,
                source: None,
                tags: vec!["dog".to_string()],
            },
            PhotoRecord {
                index: 2,
                source: None,
                tags: vec!["sea".to_string(), "dog".to_string()],
            },
        ];
        let mut state = GalleryState::new();
        state.apply(GalleryEvent::FetchStarted);
        state.apply(GalleryEvent::FetchSucceeded {
            meta: GalleryMeta {
                base_ref: "g".to_string(),
                count: 3,
            },
            records,
        });
        state
    }

    #[test]
    fn fetch_success_populates_all_collections() {
        let state = loaded_state();
        assert!(!state.is_loading());
        assert!(!state.is_error());
        assert_eq!(state.view_photos().len(), 3);
        assert_eq!(state.all_tags().len(), 2);
        assert_eq!(state.current_tags().len(), 2);
    }

    #[test]
    fn fetch_failure_sets_error_and_keeps_prior_state() {
        let mut state = loaded_state();
        state.apply(GalleryEvent::FetchStarted);
        state.apply(GalleryEvent::FetchFailed);
        assert!(state.is_error());
        assert!(!state.is_loading());
        assert_eq!(state.view_photos().len(), 3);
    }

    #[test]
    fn fetch_success_clears_a_standing_error() {
        let mut state = loaded_state();
        state.apply(GalleryEvent::FetchFailed);
        assert!(state.is_error());

        // A success with no preceding FetchStarted still clears the flag.
        state.apply(GalleryEvent::FetchSucceeded {
            meta: GalleryMeta {
                base_ref: "g".to_string(),
                count: 0,
            },
            records: vec![],
        });
        assert!(!state.is_error());
        assert!(state.view_photos().is_empty());
    }

    #[test]
    fn reverse_twice_restores_canonical_order() {
        let mut state = loaded_state();
        let before: Vec<u64> = state.view_photos().iter().map(|e| e.id).collect();

        state.apply(GalleryEvent::ReverseToggled);
        assert!(state.is_reverse());
        let reversed_ids: Vec<u64> = state.view_photos().iter().map(|e| e.id).collect();
        assert_eq!(reversed_ids, vec![2, 1, 0]);

        state.apply(GalleryEvent::ReverseToggled);
        assert!(!state.is_reverse());
        let after: Vec<u64> = state.view_photos().iter().map(|e| e.id).collect();
        assert_eq!(after, before);
    }

    #[test]
    fn tag_select_filters_from_canonical_index_even_when_reversed() {
        let mut state = loaded_state();
        state.apply(GalleryEvent::ReverseToggled);
        state.apply(GalleryEvent::TagSelected("sea".to_string()));

        assert_eq!(state.selected_tag(), Some("sea"));
        let ids: Vec<u64> = state.view_photos().iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![0, 2]);
    }

    #[test]
    fn tag_clear_restores_full_view_and_tags() {
        let mut state = loaded_state();
        state.apply(GalleryEvent::SearchSubmitted("se".to_string()));
        state.apply(GalleryEvent::TagSelected("dog".to_string()));
        state.apply(GalleryEvent::TagCleared);

        assert_eq!(state.selected_tag(), None);
        assert_eq!(state.view_photos().len(), 3);
        assert_eq!(state.current_tags().len(), state.all_tags().len());
    }

    #[test]
    fn search_narrows_tags_and_cancel_resets() {
        let mut state = loaded_state();
        state.apply(GalleryEvent::SearchSubmitted("se".to_string()));
        assert_eq!(state.current_tags().len(), 1);
        assert_eq!(state.current_tags()[0].label, "sea");

        state.apply(GalleryEvent::SearchCancelled);
        assert_eq!(state.current_tags().len(), 2);
    }

    #[test]
    fn entering_tag_view_resets_current_tags() {
        let mut state = loaded_state();
        state.apply(GalleryEvent::SearchSubmitted("zzz".to_string()));
        assert!(state.current_tags().is_empty());

        state.apply(GalleryEvent::TagViewToggled);
        assert!(state.is_tag_view());
        assert_eq!(state.current_tags().len(), 2);
    }
}
