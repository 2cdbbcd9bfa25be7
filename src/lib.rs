//! Sync progress tracking for a continuous-deployment controller.
//!
//! This library renders the phase/wave notifications produced by a resource
//! synchronization engine into a deduplicated, timestamped progress-event
//! stream, and caches one tracker per application across reconciliation
//! passes with a sliding 12-hour TTL.

pub mod cache;
pub mod config;
pub mod events;
pub mod tracker;
pub mod types;

#[cfg(test)]
pub mod test_utils;
