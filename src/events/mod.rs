//! Event model and rendering for the sync progress stream.
//!
//! Events are plain values ([`ProgressEvent`]), rendered into a line-oriented
//! text stream by [`format`] and delivered through an [`EventSink`]. Keeping
//! events as data separates the transition logic in the tracker from I/O and
//! makes the stream testable without capturing stdout.

pub mod event;
pub mod format;
pub mod sink;

// Re-export commonly used types
pub use event::ProgressEvent;
pub use format::{format_elapsed, format_line};
pub use sink::{EventSink, MemorySink, StdoutSink};
