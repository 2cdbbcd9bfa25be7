//! Sync phases and hook types.
//!
//! A sync operation proceeds through coarse-grained phases; each phase runs
//! one or more ordered waves. Hooks are resources the engine runs around the
//! main sync, tagged with the hook type they belong to.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A coarse-grained stage of a multi-stage sync operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SyncPhase {
    PreSync,
    Sync,
    PostSync,
    /// Runs only when the main sync phase fails.
    SyncFail,
}

impl SyncPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            SyncPhase::PreSync => "PreSync",
            SyncPhase::Sync => "Sync",
            SyncPhase::PostSync => "PostSync",
            SyncPhase::SyncFail => "SyncFail",
        }
    }
}

impl fmt::Display for SyncPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The lifecycle tag on a hook resource.
///
/// `Skip` is carried through from resource annotations even though skipped
/// resources never reach the tracker in practice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HookType {
    PreSync,
    Sync,
    PostSync,
    SyncFail,
    Skip,
}

impl HookType {
    pub fn as_str(&self) -> &'static str {
        match self {
            HookType::PreSync => "PreSync",
            HookType::Sync => "Sync",
            HookType::PostSync => "PostSync",
            HookType::SyncFail => "SyncFail",
            HookType::Skip => "Skip",
        }
    }
}

impl fmt::Display for HookType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phase_display_matches_wire_names() {
        assert_eq!(SyncPhase::PreSync.to_string(), "PreSync");
        assert_eq!(SyncPhase::Sync.to_string(), "Sync");
        assert_eq!(SyncPhase::PostSync.to_string(), "PostSync");
        assert_eq!(SyncPhase::SyncFail.to_string(), "SyncFail");
    }

    #[test]
    fn hook_type_display_matches_wire_names() {
        assert_eq!(HookType::PreSync.to_string(), "PreSync");
        assert_eq!(HookType::Skip.to_string(), "Skip");
    }

    #[test]
    fn phase_serde_roundtrip() {
        for phase in [
            SyncPhase::PreSync,
            SyncPhase::Sync,
            SyncPhase::PostSync,
            SyncPhase::SyncFail,
        ] {
            let json = serde_json::to_string(&phase).unwrap();
            let parsed: SyncPhase = serde_json::from_str(&json).unwrap();
            assert_eq!(phase, parsed);
        }
    }
}
