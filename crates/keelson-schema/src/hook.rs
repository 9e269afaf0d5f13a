use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Annotation declaring the lifecycle events a hook runs at.
pub const HOOK_ANNOTATION: &str = "helm.sh/hook";
/// Annotation carrying a hook's integer weight.
pub const HOOK_WEIGHT_ANNOTATION: &str = "helm.sh/hook-weight";
/// Annotation carrying a hook's comma-separated delete policies.
pub const HOOK_DELETE_POLICY_ANNOTATION: &str = "helm.sh/hook-delete-policy";

/// A named point in a release's life at which a hook may run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HookEvent {
    PreInstall,
    PostInstall,
    PreDelete,
    PostDelete,
    PreUpgrade,
    PostUpgrade,
    PreRollback,
    PostRollback,
    Test,
}

impl HookEvent {
    pub const ALL: [HookEvent; 9] = [
        HookEvent::PreInstall,
        HookEvent::PostInstall,
        HookEvent::PreDelete,
        HookEvent::PostDelete,
        HookEvent::PreUpgrade,
        HookEvent::PostUpgrade,
        HookEvent::PreRollback,
        HookEvent::PostRollback,
        HookEvent::Test,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            HookEvent::PreInstall => "pre-install",
            HookEvent::PostInstall => "post-install",
            HookEvent::PreDelete => "pre-delete",
            HookEvent::PostDelete => "post-delete",
            HookEvent::PreUpgrade => "pre-upgrade",
            HookEvent::PostUpgrade => "post-upgrade",
            HookEvent::PreRollback => "pre-rollback",
            HookEvent::PostRollback => "post-rollback",
            HookEvent::Test => "test",
        }
    }
}

impl fmt::Display for HookEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a token names no known lifecycle event.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown hook event '{0}'")]
pub struct UnknownHookEvent(pub String);

impl FromStr for HookEvent {
    type Err = UnknownHookEvent;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // "test-success" is the older spelling of "test".
        if s == "test-success" {
            return Ok(HookEvent::Test);
        }
        HookEvent::ALL
            .into_iter()
            .find(|e| e.as_str() == s)
            .ok_or_else(|| UnknownHookEvent(s.to_owned()))
    }
}

/// Rule governing when a hook's resource is removed.
///
/// Delete policies are never validated: unrecognized tokens are kept as
/// [`HookDeletePolicy::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum HookDeletePolicy {
    BeforeHookCreation,
    HookSucceeded,
    HookFailed,
    Other(String),
}

impl HookDeletePolicy {
    pub fn as_str(&self) -> &str {
        match self {
            HookDeletePolicy::BeforeHookCreation => "before-hook-creation",
            HookDeletePolicy::HookSucceeded => "hook-succeeded",
            HookDeletePolicy::HookFailed => "hook-failed",
            HookDeletePolicy::Other(s) => s,
        }
    }
}

impl From<&str> for HookDeletePolicy {
    fn from(s: &str) -> Self {
        match s {
            "before-hook-creation" => HookDeletePolicy::BeforeHookCreation,
            "hook-succeeded" => HookDeletePolicy::HookSucceeded,
            "hook-failed" => HookDeletePolicy::HookFailed,
            other => HookDeletePolicy::Other(other.to_owned()),
        }
    }
}

impl fmt::Display for HookDeletePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for HookDeletePolicy {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for HookDeletePolicy {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(HookDeletePolicy::from(s.as_str()))
    }
}

/// A resource executed at named lifecycle points instead of being applied
/// with the main resource set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hook {
    /// Name declared inside the document (`metadata.name`).
    pub name: String,
    pub kind: String,
    /// External key of the source the document was rendered from.
    pub path: String,
    pub manifest: String,
    #[serde(default)]
    pub weight: i64,
    /// Never empty. Order is as declared.
    pub events: Vec<HookEvent>,
    #[serde(default)]
    pub delete_policies: Vec<HookDeletePolicy>,
}

impl Hook {
    pub fn has_event(&self, event: HookEvent) -> bool {
        self.events.contains(&event)
    }

    pub fn has_delete_policy(&self, policy: &HookDeletePolicy) -> bool {
        self.delete_policies.contains(policy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_event_spelling() {
        for event in HookEvent::ALL {
            assert_eq!(event.as_str().parse::<HookEvent>().unwrap(), event);
        }
    }

    #[test]
    fn test_success_is_alias_for_test() {
        assert_eq!("test-success".parse::<HookEvent>().unwrap(), HookEvent::Test);
    }

    #[test]
    fn rejects_unknown_event() {
        let err = "no-such-hook".parse::<HookEvent>().unwrap_err();
        assert_eq!(err, UnknownHookEvent("no-such-hook".to_owned()));
        assert_eq!(err.to_string(), "unknown hook event 'no-such-hook'");
        let boxed: Box<dyn std::error::Error> = Box::new(err);
        assert!(boxed.source().is_none());
    }

    #[test]
    fn empty_token_is_not_an_event() {
        assert_eq!(
            "".parse::<HookEvent>(),
            Err(UnknownHookEvent(String::new()))
        );
    }

    #[test]
    fn event_serializes_as_annotation_spelling() {
        let json = serde_json::to_string(&HookEvent::PostRollback).unwrap();
        assert_eq!(json, "\"post-rollback\"");
    }

    #[test]
    fn delete_policy_keeps_unknown_tokens() {
        assert_eq!(
            HookDeletePolicy::from("hook-succeeded"),
            HookDeletePolicy::HookSucceeded
        );
        let other = HookDeletePolicy::from("keep-forever");
        assert_eq!(other, HookDeletePolicy::Other("keep-forever".to_owned()));
        assert_eq!(other.to_string(), "keep-forever");
    }

    #[test]
    fn delete_policy_serde_uses_plain_strings() {
        let policies = vec![
            HookDeletePolicy::BeforeHookCreation,
            HookDeletePolicy::Other("custom".to_owned()),
        ];
        let json = serde_json::to_string(&policies).unwrap();
        assert_eq!(json, r#"["before-hook-creation","custom"]"#);
        let back: Vec<HookDeletePolicy> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, policies);
    }

    #[test]
    fn hook_event_and_policy_queries() {
        let hook = Hook {
            name: "db-migrate".to_owned(),
            kind: "Job".to_owned(),
            path: "templates/migrate.yaml".to_owned(),
            manifest: String::new(),
            weight: 0,
            events: vec![HookEvent::PreInstall, HookEvent::PreUpgrade],
            delete_policies: vec![HookDeletePolicy::HookSucceeded],
        };
        assert!(hook.has_event(HookEvent::PreUpgrade));
        assert!(!hook.has_event(HookEvent::PostInstall));
        assert!(hook.has_delete_policy(&HookDeletePolicy::HookSucceeded));
        assert!(!hook.has_delete_policy(&HookDeletePolicy::HookFailed));
    }
}
