use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// API versions recognized by the target platform.
///
/// Enforcement belongs to whoever renders and validates documents; sorting
/// only carries the set along.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VersionSet(BTreeSet<String>);

impl VersionSet {
    pub fn new<I, S>(versions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(versions.into_iter().map(Into::into).collect())
    }

    pub fn has(&self, version: &str) -> bool {
        self.0.contains(version)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl Default for VersionSet {
    fn default() -> Self {
        Self::new(["v1"])
    }
}

impl<S: Into<String>> FromIterator<S> for VersionSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter)
    }
}
