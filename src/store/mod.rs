//! Document store boundary.
//!
//! The gallery is backed by a schemaless document store holding one document
//! per photo plus a single gallery-metadata document. This module defines the
//! record shapes those documents deserialize into and a backend trait so the
//! rest of the application never talks to a concrete store directly.

pub mod json;
pub mod memory;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use json::JsonStore;
pub use memory::MemoryStore;

/// Error for a failed store read.
///
/// Exactly one kind of failure crosses this boundary: the read did not
/// complete. The sources are carried for logging only; callers treat any
/// variant as the same fetch-failure signal.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to read document {name}: {source}")]
    Io {
        name: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to decode document {name}: {source}")]
    Decode {
        name: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("store unavailable")]
    Unavailable,
}

/// One photo document as stored remotely.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhotoRecord {
    /// Position assigned at upload time; drives the canonical display order.
    pub index: i64,

    /// Fully resolved source reference, when the document embeds one.
    /// Absent sources are resolved against the gallery base ref.
    #[serde(default)]
    pub source: Option<String>,

    /// Tag labels attached to this photo. Documents written before tagging
    /// existed have no `tags` field at all.
    #[serde(default)]
    pub tags: Vec<String>,
}

/// The gallery-metadata document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GalleryMeta {
    /// Base reference photo sources are resolved against.
    #[serde(rename = "ref")]
    pub base_ref: String,

    /// Number of photo documents the writer believes exist.
    pub count: usize,
}

/// Backend interface for the document store.
///
/// Implementations perform blocking reads; the application drives them from
/// its async shell. Both reads are independent, but a screen load issues them
/// in a fixed order: collection first, then the metadata document.
pub trait DocumentStore: Send + Sync {
    /// Read every document in the photo collection.
    fn fetch_photos(&self) -> Result<Vec<PhotoRecord>, StoreError>;

    /// Read the single gallery-metadata document.
    fn fetch_meta(&self) -> Result<GalleryMeta, StoreError>;
}
