//! Progress events emitted during a sync operation.
//!
//! Events are plain values; rendering them into the line-oriented stream is
//! the job of [`format`](super::format) and the configured
//! [`EventSink`](super::EventSink). Phase/wave events come out of the
//! tracker's state machine; resource events are render-only notifications
//! forwarded from the sync engine.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::types::{HookType, ResourceDescriptor, SyncPhase, WaveNumber};

/// A single progress event within a sync operation.
///
/// The end variants carry `Option`s because the tracker may be asked to
/// close a phase/wave it never saw begin (a forced final flush before any
/// activity); these render with a blank label rather than failing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProgressEvent {
    PhaseBegin(SyncPhase),
    PhaseEnd(Option<SyncPhase>),
    WaveBegin(WaveNumber),
    WaveEnd(Option<WaveNumber>),
    ResourceApplied(ResourceDescriptor),
    ResourceDeleted(ResourceDescriptor),
    TaskCreated(ResourceDescriptor),
    TaskPruned(ResourceDescriptor),
    HookDeleted(ResourceDescriptor),
}

impl ProgressEvent {
    fn hook_suffix(hook: HookType, resource: &ResourceDescriptor) -> String {
        format!("Hook {}\u{1fa9d} - {}", hook, resource)
    }
}

impl fmt::Display for ProgressEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProgressEvent::PhaseBegin(phase) => write!(f, "\u{1f319} Beginning phase {}", phase),
            ProgressEvent::PhaseEnd(Some(phase)) => write!(f, "\u{1f319} Ending phase {}", phase),
            ProgressEvent::PhaseEnd(None) => write!(f, "\u{1f319} Ending phase "),
            ProgressEvent::WaveBegin(wave) => write!(f, "\u{1f30a} Beginning wave {}", wave),
            ProgressEvent::WaveEnd(Some(wave)) => write!(f, "\u{1f30a} Ending wave {}", wave),
            ProgressEvent::WaveEnd(None) => write!(f, "\u{1f30a} Ending wave "),
            ProgressEvent::ResourceApplied(res) => write!(f, "Applying resource {}", res),
            ProgressEvent::ResourceDeleted(res) => write!(f, "Deleting resource {}", res),
            ProgressEvent::TaskCreated(res) => match res.hook_type {
                Some(hook) => write!(f, "Creating {}", Self::hook_suffix(hook, res)),
                None => write!(f, "Creating {}", res),
            },
            ProgressEvent::TaskPruned(res) => match res.hook_type {
                Some(hook) => write!(f, "Pruning {}", Self::hook_suffix(hook, res)),
                None => write!(f, "Pruning {}", res),
            },
            ProgressEvent::HookDeleted(res) => match res.hook_type {
                Some(hook) => write!(f, "Deleting {}", Self::hook_suffix(hook, res)),
                // A hook deletion without a tag should not happen; render
                // what we were given rather than dropping the event.
                None => write!(f, "Deleting {}", res),
            },
        }
    }
}
