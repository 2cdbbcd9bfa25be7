//! Shared test utilities and arbitrary generators for property-based testing.

use proptest::prelude::*;

use crate::types::{HookType, ResourceDescriptor, SyncPhase, WaveNumber};

pub fn arb_sync_phase() -> impl Strategy<Value = SyncPhase> {
    prop_oneof![
        Just(SyncPhase::PreSync),
        Just(SyncPhase::Sync),
        Just(SyncPhase::PostSync),
        Just(SyncPhase::SyncFail),
    ]
}

pub fn arb_wave_number() -> impl Strategy<Value = WaveNumber> {
    (0i64..10).prop_map(WaveNumber)
}

pub fn arb_hook_type() -> impl Strategy<Value = HookType> {
    prop_oneof![
        Just(HookType::PreSync),
        Just(HookType::Sync),
        Just(HookType::PostSync),
        Just(HookType::SyncFail),
        Just(HookType::Skip),
    ]
}

pub fn arb_resource_descriptor() -> impl Strategy<Value = ResourceDescriptor> {
    (
        "[a-z][a-z0-9-]{0,20}",
        "[A-Z][a-zA-Z]{0,15}",
        "[a-z][a-z0-9-]{0,20}",
        "[a-f0-9-]{8,36}",
        prop::option::of(arb_hook_type()),
    )
        .prop_map(|(name, kind, namespace, uid, hook_type)| ResourceDescriptor {
            name,
            kind,
            namespace,
            uid,
            hook_type,
        })
}

/// A phase/wave report sequence as the driver would produce it: mostly
/// forward progress with occasional redundant repeats.
pub fn arb_report_sequence() -> impl Strategy<Value = Vec<(SyncPhase, WaveNumber)>> {
    prop::collection::vec((arb_sync_phase(), arb_wave_number()), 1..20)
}
