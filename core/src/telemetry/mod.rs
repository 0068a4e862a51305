//! telemetry/mod.rs
//! Encoder telemetry: counters, stage timers and immutable snapshots.
//!
//! Counters are plain integers owned by one encoder, no atomics. A snapshot
//! freezes them together with derived ratios and can be serialized with serde.

pub mod counters;
pub mod timers;
pub mod snapshot;

pub use counters::*;
pub use timers::*;
pub use snapshot::*;
