//! Pure derivation functions over fetched gallery documents.
//!
//! All functions here are synchronous, total for structurally valid input,
//! and leave their inputs untouched. Policies fixed by this module:
//!
//! - Tag order is first occurrence across the photo collection.
//! - Tag search is case-sensitive substring containment.
//! - When the metadata `count` disagrees with the number of photo documents,
//!   the documents win; the mismatch is logged at `warn`.

use std::collections::HashSet;

use crate::store::{GalleryMeta, PhotoRecord};

/// One display-ready photo entry.
#[derive(Debug, Clone, PartialEq)]
pub struct PhotoIndexEntry {
    /// Stable list key. Ascending `id` is the canonical display order.
    pub id: u64,
    /// The record's original upload index.
    pub index: i64,
    /// Resolved source reference.
    pub source: String,
    /// Tags carried through from the record so filtering needs no access to
    /// the raw documents.
    pub tags: Vec<String>,
}

/// One entry in the tag list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagEntry {
    pub label: String,
}

/// Collect every distinct tag across the photo collection, in first-occurrence
/// order. Records without tags contribute nothing.
pub fn all_tags(records: &[PhotoRecord]) -> Vec<TagEntry> {
    let mut seen = HashSet::new();
    let mut tags = Vec::new();
    for record in records {
        for label in &record.tags {
            if seen.insert(label.as_str()) {
                tags.push(TagEntry {
                    label: label.clone(),
                });
            }
        }
    }
    tags
}

/// Build the display index from the metadata document and the photo records.
///
/// Output is ordered ascending by the records' original `index`, with `id`
/// assigned sequentially from 0 in that order, so sorting by `id` always
/// reproduces the canonical order. Sources missing from a record are resolved
/// as `{base_ref}/{index}`.
///
/// The length of the output follows the records, not `meta.count`; a mismatch
/// is a data-integrity condition worth surfacing but never an error.
pub fn photo_index(meta: &GalleryMeta, records: &[PhotoRecord]) -> Vec<PhotoIndexEntry> {
    if meta.count != records.len() {
        tracing::warn!(
            expected = meta.count,
            actual = records.len(),
            "gallery count does not match photo collection"
        );
    }

    let mut ordered: Vec<&PhotoRecord> = records.iter().collect();
    ordered.sort_by_key(|r| r.index);

    ordered
        .into_iter()
        .enumerate()
        .map(|(id, record)| PhotoIndexEntry {
            id: id as u64,
            index: record.index,
            source: record
                .source
                .clone()
                .unwrap_or_else(|| format!("{}/{}", meta.base_ref, record.index)),
            tags: record.tags.clone(),
        })
        .collect()
}

/// Entries whose tag set contains `tag`, relative order preserved.
/// An unknown tag simply matches nothing.
pub fn filter_photos_by_tag(tag: &str, entries: &[PhotoIndexEntry]) -> Vec<PhotoIndexEntry> {
    entries
        .iter()
        .filter(|e| e.tags.iter().any(|t| t == tag))
        .cloned()
        .collect()
}

/// Tags whose label contains `input` as a case-sensitive substring.
/// Empty input returns the full set unchanged, acting as a reset.
pub fn filter_tags_by_input(tags: &[TagEntry], input: &str) -> Vec<TagEntry> {
    if input.is_empty() {
        return tags.to_vec();
    }
    tags.iter()
        .filter(|t| t.label.contains(input))
        .cloned()
        .collect()
}

/// The entries in reverse display order, as a fresh list.
pub fn reversed(entries: &[PhotoIndexEntry]) -> Vec<PhotoIndexEntry> {
    let mut out = entries.to_vec();
    out.reverse();
    out
}

/// The entries restored to canonical order (ascending `id`), as a fresh list.
pub fn canonical(entries: &[PhotoIndexEntry]) -> Vec<PhotoIndexEntry> {
    let mut out = entries.to_vec();
    out.sort_by_key(|e| e.id);
    out
}
