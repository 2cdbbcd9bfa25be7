//! Phase/wave dedup tracking for sync operations.
//!
//! The sync engine drives a tracker through the [`SyncEventObserver`] seam:
//! repeated "active phase/wave" notifications, render-only resource
//! lifecycle notifications, and a one-time final completion. The tracker
//! turns that stream into a minimal, correctly paired begin/end event log.

pub mod progress;


// Re-export commonly used types
pub use progress::{ProgressTracker, TrackerState};

use crate::types::{ResourceDescriptor, SyncPhase, WaveNumber};

/// The notification surface the sync engine drives during an operation.
///
/// Implementations must not fail: a malformed or out-of-order notification
/// degrades to a best-guess event rather than an error, so the engine never
/// has to handle reporting failures on its sync path.
pub trait SyncEventObserver {
    /// The engine is currently executing tasks in `(phase, wave)`.
    fn report_active(&mut self, phase: SyncPhase, wave: WaveNumber);

    /// A phase/wave transition (or the whole operation, when `is_final`)
    /// has ended.
    fn report_complete(&mut self, phase: SyncPhase, wave: WaveNumber, is_final: bool);

    /// A resource was applied to the cluster.
    fn resource_applied(&mut self, resource: &ResourceDescriptor);

    /// A resource was deleted from the cluster.
    fn resource_deleted(&mut self, resource: &ResourceDescriptor);

    /// A sync task was created for a resource (possibly a hook).
    fn task_created(&mut self, resource: &ResourceDescriptor);

    /// A sync task was pruned (possibly a hook).
    fn task_pruned(&mut self, resource: &ResourceDescriptor);

    /// A hook resource was deleted.
    fn hook_deleted(&mut self, resource: &ResourceDescriptor);
}

impl SyncEventObserver for ProgressTracker {
    fn report_active(&mut self, phase: SyncPhase, wave: WaveNumber) {
        ProgressTracker::report_active(self, phase, wave);
    }

    fn report_complete(&mut self, phase: SyncPhase, wave: WaveNumber, is_final: bool) {
        ProgressTracker::report_complete(self, phase, wave, is_final);
    }

    fn resource_applied(&mut self, resource: &ResourceDescriptor) {
        ProgressTracker::resource_applied(self, resource);
    }

    fn resource_deleted(&mut self, resource: &ResourceDescriptor) {
        ProgressTracker::resource_deleted(self, resource);
    }

    fn task_created(&mut self, resource: &ResourceDescriptor) {
        ProgressTracker::task_created(self, resource);
    }

    fn task_pruned(&mut self, resource: &ResourceDescriptor) {
        ProgressTracker::task_pruned(self, resource);
    }

    fn hook_deleted(&mut self, resource: &ResourceDescriptor) {
        ProgressTracker::hook_deleted(self, resource);
    }
}
