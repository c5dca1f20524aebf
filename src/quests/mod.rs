//! Quest system - fixed quest set with recomputed progress
//!
//! Progress is never stored: it is a pure function of the session's
//! activity counters, recomputed on every query. The only durable quest
//! state is the set of claimed ids, which is mirrored to the remote
//! profile so a reload cannot re-claim a reward.

pub mod definitions;
pub mod tracker;

pub use definitions::{QuestDefinition, QUEST_LIBRARY};
pub use tracker::{QuestStatus, QuestTracker};

use serde::{Deserialize, Serialize};

use crate::core::types::ActivityCounters;

/// Identifier of a built-in quest
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum QuestId {
    DailyReader,
    FirstArticle,
    AvatarCustom,
    ShareArticle,
}

impl std::fmt::Display for QuestId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            QuestId::DailyReader => "daily-reader",
            QuestId::FirstArticle => "first-article",
            QuestId::AvatarCustom => "avatar-custom",
            QuestId::ShareArticle => "share-article",
        };
        write!(f, "{name}")
    }
}

/// Which activity counter drives a quest's progress
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressSource {
    ArticlesRead,
    ArticlesWritten,
    ArticlesShared,
    AvatarCustomized,
}

impl ProgressSource {
    /// Raw (unclamped) progress contributed by the counters
    pub fn progress(self, counters: &ActivityCounters) -> u32 {
        match self {
            ProgressSource::ArticlesRead => counters.articles_read,
            ProgressSource::ArticlesWritten => counters.articles_written,
            ProgressSource::ArticlesShared => counters.articles_shared,
            ProgressSource::AvatarCustomized => counters.avatar_customized as u32,
        }
    }
}
