//! JSON-file document store backend.
//!
//! Lays the gallery out as a directory of JSON documents: one file per photo
//! under `photos/`, and a single metadata document next to them. This is the
//! local stand-in for the hosted document store the gallery was designed
//! against; the read surface is identical.

use std::fs;
use std::path::{Path, PathBuf};

use super::{DocumentStore, GalleryMeta, PhotoRecord, StoreError};

/// Directory-backed document store.
///
/// Layout:
/// ```text
/// <root>/
///   gallery.json      metadata document (name configurable)
///   photos/
///     <any>.json      one photo document per file
/// ```
pub struct JsonStore {
    root: PathBuf,
    meta_doc: String,
}

impl JsonStore {
    pub fn open(root: impl Into<PathBuf>, meta_doc: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            meta_doc: meta_doc.into(),
        }
    }

    fn read_doc<T: serde::de::DeserializeOwned>(&self, path: &Path) -> Result<T, StoreError> {
        let name = path
            .strip_prefix(&self.root)
            .unwrap_or(path)
            .to_string_lossy()
            .into_owned();
        let bytes = fs::read(path).map_err(|source| StoreError::Io {
            name: name.clone(),
            source,
        })?;
        serde_json::from_slice(&bytes).map_err(|source| StoreError::Decode { name, source })
    }
}

impl DocumentStore for JsonStore {
    fn fetch_photos(&self) -> Result<Vec<PhotoRecord>, StoreError> {
        let dir = self.root.join("photos");
        let entries = fs::read_dir(&dir).map_err(|source| StoreError::Io {
            name: "photos".to_string(),
            source,
        })?;

        let mut paths: Vec<PathBuf> = entries
            .flatten()
            .map(|e| e.path())
            .filter(|p| p.extension().and_then(|e| e.to_str()) == Some("json"))
            .collect();
        // Directory iteration order is filesystem-dependent; fix it so the
        // collection read is deterministic.
        paths.sort();

        let mut records = Vec::with_capacity(paths.len());
        for path in &paths {
            records.push(self.read_doc::<PhotoRecord>(path)?);
        }
        tracing::debug!(count = records.len(), "read photo collection");
        Ok(records)
    }

    fn fetch_meta(&self) -> Result<GalleryMeta, StoreError> {
        self.read_doc(&self.root.join(&self.meta_doc))
    }
}
