//! Line framing for the progress-event stream.
//!
//! Every event is rendered as exactly one line:
//!
//! ```text
//! (<elapsed-seconds>.<elapsed-millis>)  [<entity-name>]  <description>
//! ```
//!
//! Elapsed time is measured from the first notification of the operation and
//! is blank for events emitted before it (e.g. resource notifications that
//! arrive before any phase/wave report). The stream is human-facing, but the
//! one-event-per-line framing and non-decreasing elapsed values are relied
//! upon downstream.

use chrono::{DateTime, Utc};

use crate::types::EntityName;

use super::ProgressEvent;

/// Formats the elapsed time since `started_at` as `secs.millis`, e.g.
/// `12.045`. Returns an empty string when the operation has not started.
pub fn format_elapsed(started_at: Option<DateTime<Utc>>, now: DateTime<Utc>) -> String {
    match started_at {
        Some(start) => {
            let elapsed = now - start;
            format!(
                "{}.{:03}",
                elapsed.num_seconds(),
                elapsed.num_milliseconds() % 1000
            )
        }
        None => String::new(),
    }
}

/// Renders one event into its line, without the trailing newline.
pub fn format_line(
    started_at: Option<DateTime<Utc>>,
    now: DateTime<Utc>,
    entity: &EntityName,
    event: &ProgressEvent,
) -> String {
    format!("({})  [{}]  {}", format_elapsed(started_at, now), entity, event)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    use crate::types::SyncPhase;

    #[test]
    fn elapsed_blank_before_start() {
        assert_eq!(format_elapsed(None, Utc::now()), "");
    }

    #[test]
    fn elapsed_zero_pads_millis() {
        let start = Utc::now();
        let now = start + Duration::seconds(3) + Duration::milliseconds(7);
        assert_eq!(format_elapsed(Some(start), now), "3.007");
    }

    #[test]
    fn elapsed_truncates_to_whole_seconds() {
        let start = Utc::now();
        let now = start + Duration::milliseconds(12_345);
        assert_eq!(format_elapsed(Some(start), now), "12.345");
    }

    #[test]
    fn line_framing_matches_contract() {
        let start = Utc::now();
        let now = start + Duration::seconds(1);
        let line = format_line(
            Some(start),
            now,
            &EntityName::new("guestbook"),
            &ProgressEvent::PhaseBegin(SyncPhase::Sync),
        );
        assert_eq!(line, "(1.000)  [guestbook]  \u{1f319} Beginning phase Sync");
    }

    #[test]
    fn line_with_blank_elapsed() {
        let line = format_line(
            None,
            Utc::now(),
            &EntityName::new("guestbook"),
            &ProgressEvent::PhaseEnd(None),
        );
        assert_eq!(line, "()  [guestbook]  \u{1f319} Ending phase ");
    }
}
