//! Static quest definitions - the built-in quest set
//!
//! The set is fixed for the session; collaborators only supply the
//! counters that drive progress.

use crate::quests::{ProgressSource, QuestId};

/// Definition of a single quest
#[derive(Debug, Clone)]
pub struct QuestDefinition {
    pub id: QuestId,
    pub title: &'static str,
    pub description: &'static str,
    /// Counter value at which the quest completes
    pub target: u32,
    /// Glowbits credited on claim
    pub reward: u32,
    /// Counter driving progress
    pub source: ProgressSource,
}

const DAILY_READER: QuestDefinition = QuestDefinition {
    id: QuestId::DailyReader,
    title: "Pembaca Aktif",
    description: "Baca 3 artikel hari ini",
    target: 3,
    reward: 30,
    source: ProgressSource::ArticlesRead,
};

const FIRST_ARTICLE: QuestDefinition = QuestDefinition {
    id: QuestId::FirstArticle,
    title: "Jurnalis Pemula",
    description: "Tulis artikel pertamamu",
    target: 1,
    reward: 50,
    source: ProgressSource::ArticlesWritten,
};

const AVATAR_CUSTOM: QuestDefinition = QuestDefinition {
    id: QuestId::AvatarCustom,
    title: "Gaya Kamu!",
    description: "Kustomisasi avatarmu",
    target: 1,
    reward: 20,
    source: ProgressSource::AvatarCustomized,
};

const SHARE_ARTICLE: QuestDefinition = QuestDefinition {
    id: QuestId::ShareArticle,
    title: "Berbagi Pengetahuan",
    description: "Bagikan 1 artikel ke teman",
    target: 1,
    reward: 25,
    source: ProgressSource::ArticlesShared,
};

/// Built-in quest set, in display order
pub static QUEST_LIBRARY: &[QuestDefinition] = &[
    DAILY_READER,
    FIRST_ARTICLE,
    AVATAR_CUSTOM,
    SHARE_ARTICLE,
];

impl QuestId {
    /// The static definition behind this id
    pub fn definition(self) -> &'static QuestDefinition {
        match self {
            QuestId::DailyReader => &DAILY_READER,
            QuestId::FirstArticle => &FIRST_ARTICLE,
            QuestId::AvatarCustom => &AVATAR_CUSTOM,
            QuestId::ShareArticle => &SHARE_ARTICLE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_covers_every_id() {
        for def in QUEST_LIBRARY {
            assert_eq!(def.id.definition().id, def.id);
            assert!(def.target > 0);
            assert!(def.reward > 0);
        }
    }
}
