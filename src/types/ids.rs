//! Newtype wrappers for domain identifiers.
//!
//! These types prevent accidental mixing of different identifier kinds (e.g.
//! using a display name where the stable cache key is expected) and make the
//! code more self-documenting.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The stable, globally unique key for a tracked application (e.g. a
/// resource UID). The cache treats it as an opaque string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityId(pub String);

impl EntityId {
    pub fn new(s: impl Into<String>) -> Self {
        EntityId(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for EntityId {
    fn from(s: String) -> Self {
        EntityId(s)
    }
}

impl From<&str> for EntityId {
    fn from(s: &str) -> Self {
        EntityId(s.to_string())
    }
}

/// The human-facing name of a tracked application, used in rendered event
/// lines. Distinct from [`EntityId`]: names are not required to be unique.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityName(pub String);

impl EntityName {
    pub fn new(s: impl Into<String>) -> Self {
        EntityName(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EntityName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for EntityName {
    fn from(s: &str) -> Self {
        EntityName(s.to_string())
    }
}

/// An ordered sub-step within a sync phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WaveNumber(pub i64);

impl fmt::Display for WaveNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for WaveNumber {
    fn from(n: i64) -> Self {
        WaveNumber(n)
    }
}

/// Correlation identifier for one sync attempt.
///
/// The driver owns the attempt sequence and passes the id through its
/// request-scoped context; this crate holds no global counter. Rendered as
/// `00042-ab3de` to match the controller's log fields.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SyncId {
    pub seq: u64,
    pub suffix: String,
}

impl SyncId {
    pub fn new(seq: u64, suffix: impl Into<String>) -> Self {
        SyncId {
            seq,
            suffix: suffix.into(),
        }
    }
}

impl fmt::Display for SyncId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:05}-{}", self.seq, self.suffix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod entity_id {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn serde_roundtrip(s in "[a-f0-9-]{1,36}") {
                let id = EntityId::new(&s);
                let json = serde_json::to_string(&id).unwrap();
                let parsed: EntityId = serde_json::from_str(&json).unwrap();
                prop_assert_eq!(id, parsed);
            }

            #[test]
            fn display_is_raw_string(s in "[a-f0-9-]{1,36}") {
                let id = EntityId::new(&s);
                prop_assert_eq!(format!("{}", id), s);
            }

            #[test]
            fn comparison_matches_underlying(a in "[a-z]{1,10}", b in "[a-z]{1,10}") {
                let id_a = EntityId::new(&a);
                let id_b = EntityId::new(&b);
                prop_assert_eq!(id_a == id_b, a == b);
            }
        }
    }

    mod wave_number {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn serde_roundtrip(n: i64) {
                let wave = WaveNumber(n);
                let json = serde_json::to_string(&wave).unwrap();
                let parsed: WaveNumber = serde_json::from_str(&json).unwrap();
                prop_assert_eq!(wave, parsed);
            }

            #[test]
            fn ordering_matches_underlying(a: i64, b: i64) {
                prop_assert_eq!(WaveNumber(a) < WaveNumber(b), a < b);
            }
        }
    }

    mod sync_id {
        use super::*;

        #[test]
        fn display_pads_sequence_to_five_digits() {
            let id = SyncId::new(42, "ab3de");
            assert_eq!(format!("{}", id), "00042-ab3de");
        }

        #[test]
        fn display_does_not_truncate_large_sequences() {
            let id = SyncId::new(123456, "zzzzz");
            assert_eq!(format!("{}", id), "123456-zzzzz");
        }
    }
}
