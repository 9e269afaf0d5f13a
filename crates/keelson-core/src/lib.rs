//! Ordering engine for Keelson.
//!
//! This crate turns a bundle of rendered documents into two ordered
//! sequences: lifecycle hooks and ordinary manifests. It splits sources into
//! documents, classifies each by its hook annotation, and sorts both
//! collections by weight, kind priority, and name for install or uninstall.
//! The engine is a pure function of its input and performs no I/O.

pub mod classify;
pub mod sort;
pub mod sorter;
pub mod split;

pub use classify::{classify, Classified};
pub use sort::{sort_manifests, SortedResources};
pub use sorter::{compare, sort_by_kind, Sortable};
pub use split::{is_private, split_documents, Document, PRIVATE_PREFIX};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SortError {
    #[error("failed to read {path}: {source}")]
    Envelope {
        path: String,
        #[source]
        source: keelson_schema::EnvelopeError,
    },
}
