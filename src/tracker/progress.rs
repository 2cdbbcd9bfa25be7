//! The phase/wave transition tracker.
//!
//! The sync engine reports "currently executing phase X, wave Y" far more
//! reliably than it reports "phase X has ended", so the tracker infers ends
//! from the next begin: whenever the reported phase/wave differs from the
//! last active one, it first synthesizes the closing events for the previous
//! pair, then emits the new begins. An explicit final completion flushes the
//! trailing ends when the whole operation finishes.
//!
//! # Key Invariants
//!
//! 1. **Dedup**: repeated reports of an unchanged `(phase, wave)` pair emit
//!    nothing after the first.
//! 2. **Pairing**: every begin-phase is closed by exactly one end-phase,
//!    either implicitly on the next transition or by the final flush. Waves
//!    pair the same way.
//! 3. **Totality**: no operation fails; closing a phase/wave that never
//!    began emits events with blank labels instead of erroring.
//!
//! The tracker is not internally thread-safe. The session cache hands each
//! tracker out behind its own `Mutex`, and in practice exactly one sync
//! attempt drives a given application at a time.

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::events::{EventSink, ProgressEvent, StdoutSink, format_line};
use crate::types::{EntityName, ResourceDescriptor, SyncPhase, WaveNumber};

/// Dedup state: either nothing has been reported yet, or some phase/wave is
/// currently active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackerState {
    Idle,
    Active { phase: SyncPhase, wave: WaveNumber },
}

/// Converts a stream of phase/wave notifications into a minimal, correctly
/// paired sequence of begin/end events, each stamped with the elapsed time
/// since the operation started.
pub struct ProgressTracker {
    entity: EntityName,
    started_at: Option<DateTime<Utc>>,
    state: TrackerState,
    sink: Box<dyn EventSink>,
}

impl std::fmt::Debug for ProgressTracker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProgressTracker")
            .field("entity", &self.entity)
            .field("started_at", &self.started_at)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

impl ProgressTracker {
    /// Creates a tracker that renders to stdout.
    pub fn new(entity: EntityName) -> Self {
        Self::with_sink(entity, Box::new(StdoutSink))
    }

    /// Creates a tracker with an explicit sink.
    pub fn with_sink(entity: EntityName, sink: Box<dyn EventSink>) -> Self {
        ProgressTracker {
            entity,
            started_at: None,
            state: TrackerState::Idle,
            sink,
        }
    }

    pub fn entity(&self) -> &EntityName {
        &self.entity
    }

    pub fn state(&self) -> TrackerState {
        self.state
    }

    /// The timestamp of the first notification, if any event has been
    /// emitted yet.
    pub fn started_at(&self) -> Option<DateTime<Utc>> {
        self.started_at
    }

    fn emit(&mut self, event: ProgressEvent) {
        let line = format_line(self.started_at, Utc::now(), &self.entity, &event);
        self.sink.record(&line);
    }

    /// Records that the engine is currently executing `(phase, wave)`.
    ///
    /// Called repeatedly as syncing progresses, potentially with the same
    /// pair many times. Only transitions emit events; a previous active
    /// pair is closed implicitly before the new begins.
    pub fn report_active(&mut self, phase: SyncPhase, wave: WaveNumber) {
        debug!(entity = %self.entity, %phase, %wave, "active tasks in phase/wave");

        if self.started_at.is_none() {
            self.started_at = Some(Utc::now());
        }

        match self.state {
            TrackerState::Active {
                phase: prev_phase,
                wave: prev_wave,
            } => {
                if prev_phase == phase && prev_wave == wave {
                    // Redundant report of the current pair.
                    return;
                }
                // The engine jumped to a new phase/wave without an explicit
                // end signal; close out the previous pair first.
                self.report_complete(phase, wave, false);
                if prev_phase != phase {
                    self.emit(ProgressEvent::PhaseBegin(phase));
                }
                self.emit(ProgressEvent::WaveBegin(wave));
            }
            TrackerState::Idle => {
                // First report of the operation; nothing to close.
                self.emit(ProgressEvent::PhaseBegin(phase));
                self.emit(ProgressEvent::WaveBegin(wave));
            }
        }

        self.state = TrackerState::Active { phase, wave };
    }

    /// Records that a phase/wave transition ended, or that the whole
    /// operation ended when `is_final` is set.
    ///
    /// This never advances the dedup state; `report_active` owns state
    /// updates. A non-final call with the currently active pair is a no-op,
    /// while `is_final` always flushes both end events, with blank labels if
    /// nothing was ever active.
    pub fn report_complete(&mut self, phase: SyncPhase, wave: WaveNumber, is_final: bool) {
        debug!(entity = %self.entity, %phase, %wave, is_final, "phase/wave complete");

        let (prev_phase, prev_wave) = match self.state {
            TrackerState::Active { phase, wave } => (Some(phase), Some(wave)),
            TrackerState::Idle => (None, None),
        };

        if is_final || prev_wave != Some(wave) || prev_phase != Some(phase) {
            self.emit(ProgressEvent::WaveEnd(prev_wave));
        }

        if is_final || matches!(prev_phase, Some(p) if p != phase) {
            self.emit(ProgressEvent::PhaseEnd(prev_phase));
        }
    }

    /// Renders an apply notification. Does not touch the phase/wave state.
    pub fn resource_applied(&mut self, resource: &ResourceDescriptor) {
        self.emit(ProgressEvent::ResourceApplied(resource.clone()));
    }

    /// Renders a delete notification. Does not touch the phase/wave state.
    pub fn resource_deleted(&mut self, resource: &ResourceDescriptor) {
        self.emit(ProgressEvent::ResourceDeleted(resource.clone()));
    }

    /// Renders a task-creation notification, tagged when the task is a hook.
    pub fn task_created(&mut self, resource: &ResourceDescriptor) {
        self.emit(ProgressEvent::TaskCreated(resource.clone()));
    }

    /// Renders a task-prune notification, tagged when the task is a hook.
    pub fn task_pruned(&mut self, resource: &ResourceDescriptor) {
        self.emit(ProgressEvent::TaskPruned(resource.clone()));
    }

    /// Renders a hook-deletion notification.
    pub fn hook_deleted(&mut self, resource: &ResourceDescriptor) {
        self.emit(ProgressEvent::HookDeleted(resource.clone()));
    }
}
