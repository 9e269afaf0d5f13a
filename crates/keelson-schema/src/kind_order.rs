//! Kind-priority tables used as the secondary sort key.
//!
//! The install table lists kinds so that resources others depend on come
//! first. The uninstall table is its exact reverse. Both end with
//! [`UNKNOWN_KIND`], which absorbs every kind not listed, so unrecognized
//! kinds sort last in either direction.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Catch-all bucket for kinds missing from the tables.
pub const UNKNOWN_KIND: &str = "Unknown";

const KNOWN_KINDS: usize = 35;

const INSTALL_KINDS: [&str; KNOWN_KINDS] = [
    "Namespace",
    "NetworkPolicy",
    "ResourceQuota",
    "LimitRange",
    "PodSecurityPolicy",
    "PodDisruptionBudget",
    "ServiceAccount",
    "Secret",
    "SecretList",
    "ConfigMap",
    "StorageClass",
    "PersistentVolume",
    "PersistentVolumeClaim",
    "CustomResourceDefinition",
    "ClusterRole",
    "ClusterRoleList",
    "ClusterRoleBinding",
    "ClusterRoleBindingList",
    "Role",
    "RoleList",
    "RoleBinding",
    "RoleBindingList",
    "Service",
    "DaemonSet",
    "Pod",
    "ReplicationController",
    "ReplicaSet",
    "Deployment",
    "HorizontalPodAutoscaler",
    "StatefulSet",
    "Job",
    "CronJob",
    "IngressClass",
    "Ingress",
    "APIService",
];

const fn build_table(reverse: bool) -> [&'static str; KNOWN_KINDS + 1] {
    let mut table = [UNKNOWN_KIND; KNOWN_KINDS + 1];
    let mut i = 0;
    while i < KNOWN_KINDS {
        table[i] = if reverse {
            INSTALL_KINDS[KNOWN_KINDS - 1 - i]
        } else {
            INSTALL_KINDS[i]
        };
        i += 1;
    }
    table
}

/// Install order, with [`UNKNOWN_KIND`] appended.
pub static INSTALL_ORDER: [&str; KNOWN_KINDS + 1] = build_table(false);
/// Reverse of the install order, with [`UNKNOWN_KIND`] appended after reversal.
pub static UNINSTALL_ORDER: [&str; KNOWN_KINDS + 1] = build_table(true);

/// Direction of a sort.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Install,
    Uninstall,
}

impl SortOrder {
    /// The kind-priority table for this direction.
    pub fn kinds(self) -> &'static [&'static str] {
        match self {
            SortOrder::Install => &INSTALL_ORDER,
            SortOrder::Uninstall => &UNINSTALL_ORDER,
        }
    }

    /// Priority index of `kind` in this direction's table. Kinds not in the
    /// table (including the empty kind) resolve to the last index.
    pub fn kind_index(self, kind: &str) -> usize {
        let table = self.kinds();
        table
            .iter()
            .position(|k| *k == kind)
            .unwrap_or(table.len() - 1)
    }

    #[must_use]
    pub fn reverse(self) -> Self {
        match self {
            SortOrder::Install => SortOrder::Uninstall,
            SortOrder::Uninstall => SortOrder::Install,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SortOrder::Install => "install",
            SortOrder::Uninstall => "uninstall",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when text names neither sort direction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid sort order '{0}', expected 'install' or 'uninstall'")]
pub struct InvalidSortOrder(pub String);

impl FromStr for SortOrder {
    type Err = InvalidSortOrder;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "install" => Ok(SortOrder::Install),
            "uninstall" => Ok(SortOrder::Uninstall),
            _ => Err(InvalidSortOrder(s.to_owned())),
        }
    }
}
