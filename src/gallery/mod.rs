//! Gallery data derivation and view state.
//!
//! Raw store documents are turned into display-ready collections by the pure
//! functions in [`derive`]; [`state`] owns the view state the source kept in
//! UI component state and applies discrete events to it. Everything derived
//! is recomputed fresh from each fetch, there is no cross-fetch caching.

pub mod derive;
pub mod state;

pub use derive::{
    all_tags, canonical, filter_photos_by_tag, filter_tags_by_input, photo_index, reversed,
    PhotoIndexEntry, TagEntry,
};
pub use state::{GalleryEvent, GalleryState};
