//! Profile service boundary - fetch at session start, mirror outward after
//!
//! The remote profile is the long-lived source of truth across sessions;
//! in-memory engine state is authoritative for the session and flushed
//! outward, never pulled mid-session.

pub mod client;
pub mod snapshot;
pub mod sync;

pub use client::{ProfileClient, StatsUpdate};
pub use snapshot::ProfileSnapshot;
pub use sync::{ProfilePush, SyncAdapter, SyncHandle};
