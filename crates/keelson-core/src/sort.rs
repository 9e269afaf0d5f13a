use crate::classify::{classify, Classified};
use crate::sorter::sort_by_kind;
use crate::split::split_documents;
use crate::SortError;
use keelson_schema::{parse_envelope, Hook, Manifest, SortOrder, VersionSet};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::{debug, info};

/// Hooks and manifests of a rendered bundle, each in apply order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortedResources {
    pub hooks: Vec<Hook>,
    pub manifests: Vec<Manifest>,
}

/// Split, classify, and order a bundle of rendered documents.
///
/// `files` maps each source key to its rendered text. `versions` is carried
/// for the renderer's validation and not enforced here. A document whose
/// structure cannot be parsed fails the whole call.
pub fn sort_manifests(
    files: &BTreeMap<String, String>,
    versions: &VersionSet,
    order: SortOrder,
) -> Result<SortedResources, SortError> {
    debug!(
        "sorting {} sources for {order} ({} recognized API versions)",
        files.len(),
        versions.len()
    );

    let mut sorted = SortedResources::default();
    let mut discarded = 0usize;

    for document in split_documents(files) {
        let envelope = parse_envelope(document.content).map_err(|source| SortError::Envelope {
            path: document.path.to_owned(),
            source,
        })?;

        match classify(&document, envelope) {
            Classified::Hook(hook) => sorted.hooks.push(hook),
            Classified::Manifest(manifest) => sorted.manifests.push(manifest),
            Classified::Discarded(_) => discarded += 1,
        }
    }

    sort_by_kind(&mut sorted.hooks, order);
    sort_by_kind(&mut sorted.manifests, order);

    info!(
        "ordered {} hooks and {} manifests for {order} ({discarded} discarded)",
        sorted.hooks.len(),
        sorted.manifests.len()
    );
    Ok(sorted)
}
