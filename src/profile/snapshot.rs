//! Versioned profile snapshots
//!
//! A snapshot is the full profile-observable state of a session at one
//! point in time. The version is a per-session monotonic counter; the
//! remote keeps the highest version it has seen, so an older in-flight
//! write can never clobber a newer one.

use serde::{Deserialize, Serialize};

use crate::avatar::AvatarConfig;
use crate::core::types::Glowbits;
use crate::quests::QuestId;

/// Serialized engine state mirrored to the remote profile service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileSnapshot {
    pub version: u64,
    pub nickname: String,
    pub glowbits: Glowbits,
    pub avatar: AvatarConfig,
    /// Purchased item ids, sorted
    pub purchased_items: Vec<String>,
    /// Claimed quest ids, in display order
    pub claimed_quests: Vec<QuestId>,
    pub articles_read: u32,
    pub articles_written: u32,
}

impl ProfileSnapshot {
    /// Whether two snapshots describe the same profile state,
    /// ignoring the version counter
    pub fn same_state(&self, other: &Self) -> bool {
        self.nickname == other.nickname
            && self.glowbits == other.glowbits
            && self.avatar == other.avatar
            && self.purchased_items == other.purchased_items
            && self.claimed_quests == other.claimed_quests
            && self.articles_read == other.articles_read
            && self.articles_written == other.articles_written
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot() -> ProfileSnapshot {
        ProfileSnapshot {
            version: 1,
            nickname: "Sena".into(),
            glowbits: 150,
            avatar: AvatarConfig::default(),
            purchased_items: vec![],
            claimed_quests: vec![],
            articles_read: 0,
            articles_written: 0,
        }
    }

    #[test]
    fn test_same_state_ignores_version() {
        let a = snapshot();
        let mut b = snapshot();
        b.version = 99;
        assert!(a.same_state(&b));

        b.glowbits = 160;
        assert!(!a.same_state(&b));
    }

    #[test]
    fn test_snapshot_round_trips_through_json() {
        let snap = snapshot();
        let json = serde_json::to_string(&snap).unwrap();
        let back: ProfileSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(snap, back);
    }
}
