//! Data model and structural parsing for Keelson.
//!
//! This crate defines the schema layer: envelope extraction from rendered
//! YAML documents (`parse_envelope`), the `Hook` and `Manifest` records the
//! sorter produces, lifecycle events and delete policies, the fixed
//! kind-priority tables (`SortOrder`), and the recognized API version set.

pub mod envelope;
pub mod hook;
pub mod kind_order;
pub mod manifest;
pub mod version;

pub use envelope::{parse_envelope, Envelope, EnvelopeError};
pub use hook::{
    Hook, HookDeletePolicy, HookEvent, UnknownHookEvent, HOOK_ANNOTATION,
    HOOK_DELETE_POLICY_ANNOTATION, HOOK_WEIGHT_ANNOTATION,
};
pub use kind_order::{InvalidSortOrder, SortOrder, INSTALL_ORDER, UNINSTALL_ORDER, UNKNOWN_KIND};
pub use manifest::{Manifest, SimpleHead, WEIGHT_ANNOTATION};
pub use version::VersionSet;
