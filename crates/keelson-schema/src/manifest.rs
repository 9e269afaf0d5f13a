use serde::{Deserialize, Serialize};

/// Annotation carrying a manifest's integer weight.
pub const WEIGHT_ANNOTATION: &str = "helm.sh/weight";

/// Kind and API version of a manifest.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimpleHead {
    pub kind: String,
    #[serde(rename = "apiVersion")]
    pub api_version: String,
}

/// An ordinary deployable resource, applied as part of the main resource set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    /// External key of the source the document was rendered from.
    pub name: String,
    pub content: String,
    #[serde(default)]
    pub weight: i64,
    pub head: SimpleHead,
}
