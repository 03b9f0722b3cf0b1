//! Screen-load fetch.
//!
//! One fetch per screen load: the photo collection read followed by the
//! metadata document read, in that order. There is no retry, timeout, or
//! partial recovery; any failure collapses into a single fetch-failed event
//! for the state layer, with the cause logged here.

use crate::gallery::GalleryEvent;
use crate::store::DocumentStore;

/// Run both store reads and fold the outcome into a [`GalleryEvent`].
pub fn load_gallery(store: &dyn DocumentStore) -> GalleryEvent {
    let records = match store.fetch_photos() {
        Ok(records) => records,
        Err(e) => {
            tracing::error!(error = %e, "photo collection read failed");
            return GalleryEvent::FetchFailed;
        }
    };
    match store.fetch_meta() {
        Ok(meta) => GalleryEvent::FetchSucceeded { meta, records },
        Err(e) => {
            tracing::error!(error = %e, "gallery metadata read failed");
            GalleryEvent::FetchFailed
        }
    }
}
