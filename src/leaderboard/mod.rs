//! Leaderboard ranker - deterministic total order over player snapshots
//!
//! The ranker is stateless: it is fed externally-fetched snapshots plus
//! the current user's live balance (which may be ahead of their last
//! synced snapshot). Ties are broken ascending by id so the order is a
//! total order regardless of input ordering.

use serde::{Deserialize, Serialize};

use crate::core::types::Glowbits;

/// One player's synced snapshot on the board
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub id: String,
    pub name: String,
    pub glowbits: Glowbits,
    pub articles_read: u32,
    pub articles_written: u32,
}

/// An entry with its derived 1-indexed rank
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedEntry {
    pub rank: usize,
    pub entry: LeaderboardEntry,
}

/// Order entries into ranks: descending by Glowbits, ties ascending by id.
pub fn rank(mut entries: Vec<LeaderboardEntry>) -> Vec<RankedEntry> {
    entries.sort_by(|a, b| {
        b.glowbits
            .cmp(&a.glowbits)
            .then_with(|| a.id.cmp(&b.id))
    });
    entries
        .into_iter()
        .enumerate()
        .map(|(i, entry)| RankedEntry { rank: i + 1, entry })
        .collect()
}

/// The current user's rank.
///
/// When the user appears on the board their position is their rank; when
/// absent (not yet synced) this is the rank they would occupy: one plus
/// the number of entries strictly ahead of their live balance.
pub fn user_rank(ranked: &[RankedEntry], user_id: &str, live_balance: Glowbits) -> usize {
    if let Some(found) = ranked.iter().find(|r| r.entry.id == user_id) {
        return found.rank;
    }
    ranked
        .iter()
        .filter(|r| r.entry.glowbits > live_balance)
        .count()
        + 1
}

/// The visible top-N window
pub fn visible_top(ranked: &[RankedEntry], n: usize) -> &[RankedEntry] {
    &ranked[..n.min(ranked.len())]
}

/// Glowbits short of overtaking the entry one rank up, clamped to zero.
/// `None` for the leader (there is no next rank).
pub fn glowbits_to_next_rank(
    ranked: &[RankedEntry],
    rank: usize,
    live_balance: Glowbits,
) -> Option<Glowbits> {
    if rank <= 1 {
        return None;
    }
    ranked
        .get(rank - 2)
        .map(|above| above.entry.glowbits.saturating_sub(live_balance))
}

/// Glowbits short of entering the visible top-N window, clamped to zero.
pub fn glowbits_to_top(ranked: &[RankedEntry], n: usize, live_balance: Glowbits) -> Glowbits {
    match visible_top(ranked, n).last() {
        Some(last) => last.entry.glowbits.saturating_sub(live_balance),
        None => 0,
    }
}
