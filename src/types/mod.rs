//! Core domain types for sync progress tracking.
//!
//! This module contains the fundamental types used throughout the crate,
//! designed to encode invariants via the type system.

pub mod ids;
pub mod phase;
pub mod resource;

// Re-export commonly used types at the module level
pub use ids::{EntityId, EntityName, SyncId, WaveNumber};
pub use phase::{HookType, SyncPhase};
pub use resource::ResourceDescriptor;
