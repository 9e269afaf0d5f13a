use crate::split::Document;
use keelson_schema::{
    Envelope, Hook, HookDeletePolicy, HookEvent, Manifest, SimpleHead, UnknownHookEvent,
    HOOK_ANNOTATION, HOOK_DELETE_POLICY_ANNOTATION, HOOK_WEIGHT_ANNOTATION, WEIGHT_ANNOTATION,
};
use tracing::{debug, warn};

/// Outcome of classifying one document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classified {
    Hook(Hook),
    Manifest(Manifest),
    /// The hook declaration named an event that does not exist. The document
    /// is neither applied nor run.
    Discarded(UnknownHookEvent),
}

/// Decide whether `document` is a hook, a manifest, or discarded.
///
/// A hook annotation whose tokens are all blank counts as absent. Otherwise
/// every token, blank ones included, must name a known event.
pub fn classify(document: &Document<'_>, envelope: Envelope) -> Classified {
    let declared: Vec<&str> = envelope
        .annotation(HOOK_ANNOTATION)
        .map(|value| value.split(',').map(str::trim).collect())
        .unwrap_or_default();

    if declared.iter().all(|token| token.is_empty()) {
        return Classified::Manifest(Manifest {
            name: document.path.to_owned(),
            content: document.content.to_owned(),
            weight: parse_weight(envelope.annotation(WEIGHT_ANNOTATION), document.path),
            head: SimpleHead {
                kind: envelope.kind,
                api_version: envelope.api_version,
            },
        });
    }

    let events = match declared
        .iter()
        .map(|token| token.parse::<HookEvent>())
        .collect::<Result<Vec<_>, _>>()
    {
        Ok(events) => events,
        Err(unknown) => {
            warn!(
                "skipping {} '{}' in {}: {unknown}",
                envelope.kind, envelope.name, document.path
            );
            return Classified::Discarded(unknown);
        }
    };

    let delete_policies = envelope
        .annotation(HOOK_DELETE_POLICY_ANNOTATION)
        .map(split_annotation_values)
        .unwrap_or_default()
        .into_iter()
        .map(HookDeletePolicy::from)
        .collect();

    debug!(
        "{} '{}' in {} is a hook for {:?}",
        envelope.kind, envelope.name, document.path, declared
    );

    Classified::Hook(Hook {
        weight: parse_weight(envelope.annotation(HOOK_WEIGHT_ANNOTATION), document.path),
        name: envelope.name,
        kind: envelope.kind,
        path: document.path.to_owned(),
        manifest: document.content.to_owned(),
        events,
        delete_policies,
    })
}

/// Comma-separated delete-policy tokens, trimmed, with empty tokens dropped.
fn split_annotation_values(value: &str) -> Vec<&str> {
    value
        .split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .collect()
}

/// Weight from an annotation value. Absent, blank, or unparsable values are 0.
fn parse_weight(value: Option<&str>, path: &str) -> i64 {
    let Some(raw) = value.map(str::trim).filter(|v| !v.is_empty()) else {
        return 0;
    };
    raw.parse().unwrap_or_else(|_| {
        warn!("ignoring non-integer weight '{raw}' in {path}");
        0
    })
}
