//! In-memory document store backend.
//!
//! Used by tests and by callers that already hold the documents. The failure
//! switch makes the fetch error path reachable without filesystem setup.

use std::sync::atomic::{AtomicBool, Ordering};

use super::{DocumentStore, GalleryMeta, PhotoRecord, StoreError};

pub struct MemoryStore {
    photos: Vec<PhotoRecord>,
    meta: GalleryMeta,
    fail: AtomicBool,
}

impl MemoryStore {
    pub fn new(meta: GalleryMeta, photos: Vec<PhotoRecord>) -> Self {
        Self {
            photos,
            meta,
            fail: AtomicBool::new(false),
        }
    }

    /// Make every subsequent read fail with [`StoreError::Unavailable`].
    pub fn set_failing(&self, fail: bool) {
        self.fail.store(fail, Ordering::Relaxed);
    }

    fn check(&self) -> Result<(), StoreError> {
        if self.fail.load(Ordering::Relaxed) {
            Err(StoreError::Unavailable)
        } else {
            Ok(())
        }
    }
}

impl DocumentStore for MemoryStore {
    fn fetch_photos(&self) -> Result<Vec<PhotoRecord>, StoreError> {
        self.check()?;
        Ok(self.photos.clone())
    }

    fn fetch_meta(&self) -> Result<GalleryMeta, StoreError> {
        self.check()?;
        Ok(self.meta.clone())
    }
}
