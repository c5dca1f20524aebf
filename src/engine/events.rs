//! Engine events - an activity log for the UI layer
//!
//! Each mutation appends an event; the UI drains them to drive toasts
//! and the session activity feed.

use crate::catalog::ItemCategory;
use crate::core::types::Glowbits;
use crate::quests::QuestId;
use crate::quiz::QuizKind;

/// Something observable the engine did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    /// Glowbits credited to the wallet
    GlowbitsCredited { amount: Glowbits, balance: Glowbits },
    /// An item was bought and charged
    ItemPurchased {
        item_id: String,
        cost: Glowbits,
        balance: Glowbits,
    },
    /// An item was equipped (or the accessory cleared)
    ItemEquipped {
        category: ItemCategory,
        item_id: Option<String>,
    },
    /// A quest reward was claimed
    QuestClaimed { quest_id: QuestId, reward: Glowbits },
    /// A quiz finished (completed or skipped)
    QuizFinished {
        kind: QuizKind,
        score: u32,
        total: u32,
        reward: Glowbits,
    },
    /// The nickname changed
    NicknameChanged { nickname: String },
}
