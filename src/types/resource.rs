//! Resource descriptors carried by apply/prune/delete/hook notifications.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::HookType;

/// The identity of a cluster resource as reported by the sync engine.
///
/// Rendered in event lines as `'name' (Kind) uid`. The descriptor does not
/// participate in the phase/wave state machine; it only decorates
/// render-only lifecycle events.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceDescriptor {
    pub name: String,
    pub kind: String,
    pub namespace: String,
    pub uid: String,
    /// Present when the resource is a lifecycle hook.
    pub hook_type: Option<HookType>,
}

impl ResourceDescriptor {
    pub fn new(
        name: impl Into<String>,
        kind: impl Into<String>,
        namespace: impl Into<String>,
        uid: impl Into<String>,
    ) -> Self {
        ResourceDescriptor {
            name: name.into(),
            kind: kind.into(),
            namespace: namespace.into(),
            uid: uid.into(),
            hook_type: None,
        }
    }

    pub fn with_hook(mut self, hook_type: HookType) -> Self {
        self.hook_type = Some(hook_type);
        self
    }
}

impl fmt::Display for ResourceDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "'{}' ({}) {}", self.name, self.kind, self.uid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_format() {
        let res = ResourceDescriptor::new("web", "Deployment", "default", "uid-123");
        assert_eq!(res.to_string(), "'web' (Deployment) uid-123");
    }

    #[test]
    fn with_hook_sets_tag() {
        let res =
            ResourceDescriptor::new("migrate", "Job", "default", "uid-9").with_hook(HookType::PreSync);
        assert_eq!(res.hook_type, Some(HookType::PreSync));
    }

    #[test]
    fn serde_roundtrip() {
        let res = ResourceDescriptor::new("web", "Service", "prod", "uid-5").with_hook(HookType::Sync);
        let json = serde_json::to_string(&res).unwrap();
        let parsed: ResourceDescriptor = serde_json::from_str(&json).unwrap();
        assert_eq!(res, parsed);
    }
}
