//! Core type definitions used throughout the crate

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Glowbits amount (the platform's virtual currency).
///
/// Unsigned by construction: no amount or balance can ever be negative.
pub type Glowbits = u32;

/// Unique identifier for a user profile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserKey(pub Uuid);

impl UserKey {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for UserKey {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for UserKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Session activity counters driving quest progress and profile stats.
///
/// These are facts about what the user did this session; quest progress is
/// recomputed from them on every query and never stored on its own.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityCounters {
    pub articles_read: u32,
    pub articles_written: u32,
    pub articles_shared: u32,
    pub avatar_customized: bool,
}
