//! Sinks for the rendered event stream.
//!
//! Rendering is append-only and infallible from the tracker's point of view:
//! the driver never consumes a return value, and a failed write must not
//! fail the sync operation.

use std::io::Write;
use std::sync::{Arc, Mutex};

/// Receives rendered event lines, one call per line (no trailing newline).
pub trait EventSink: Send {
    fn record(&mut self, line: &str);
}

/// Writes each line to stdout. Write errors are discarded; the progress
/// stream is best-effort by contract.
#[derive(Debug, Default)]
pub struct StdoutSink;

impl EventSink for StdoutSink {
    fn record(&mut self, line: &str) {
        let stdout = std::io::stdout();
        let mut handle = stdout.lock();
        let _ = writeln!(handle, "{}", line);
    }
}

/// Collects lines in memory behind a shared handle, for tests and
/// diagnostics. Clones share the same buffer.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    lines: Arc<Mutex<Vec<String>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all lines recorded so far.
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().expect("memory sink lock poisoned").clone()
    }

    /// Snapshot of the event descriptions (line text after the framing
    /// prefix), convenient for asserting on event sequences.
    pub fn descriptions(&self) -> Vec<String> {
        self.lines()
            .iter()
            .map(|line| match line.split_once("]  ") {
                Some((_, desc)) => desc.to_string(),
                None => line.clone(),
            })
            .collect()
    }
}

impl EventSink for MemorySink {
    fn record(&mut self, line: &str) {
        self.lines
            .lock()
            .expect("memory sink lock poisoned")
            .push(line.to_string());
    }
}
