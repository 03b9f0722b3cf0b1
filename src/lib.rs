//! photogrid - gallery data derivation over a JSON document store.
//!
//! Fetches a photo collection and a gallery-metadata document from a
//! document store, derives a display-ready photo index and tag set, and
//! supports tag filtering, tag search, and an order-reversal toggle. The
//! derivation itself is pure and store-agnostic; [`gallery::state`] owns
//! the screen state and [`store`] is the only boundary with side effects.

pub mod config;
pub mod fetch;
pub mod gallery;
pub mod logging;
pub mod store;

pub use config::Config;
pub use fetch::load_gallery;
pub use gallery::{GalleryEvent, GalleryState, PhotoIndexEntry, TagEntry};
pub use store::{DocumentStore, GalleryMeta, JsonStore, MemoryStore, PhotoRecord, StoreError};
