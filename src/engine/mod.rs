//! Rewards engine facade - the single authoritative session state
//!
//! All balance, inventory, avatar, quest, and quiz state for the active
//! user lives in one `RewardsEngine` instance. Views read derived
//! snapshots and dispatch intents through its methods; nothing else
//! mutates engine fields. Every local mutation applies synchronously and
//! immediately; the remote mirror trails behind via the sync adapter.

pub mod events;

pub use events::EngineEvent;

use tracing::debug;

use crate::avatar::AvatarConfig;
use crate::catalog::{Catalog, ItemCategory};
use crate::core::config::EngineConfig;
use crate::core::error::{EngineError, Result};
use crate::core::types::{ActivityCounters, Glowbits, UserKey};
use crate::inventory::{Inventory, PurchaseOutcome};
use crate::ledger::Wallet;
use crate::profile::{ProfileSnapshot, SyncHandle};
use crate::quests::{QuestId, QuestStatus, QuestTracker};
use crate::quiz::{Advance, AnswerOutcome, QuizKind, QuizQuestion, QuizResult, QuizSession};

/// The rewards and inventory engine for one user session
pub struct RewardsEngine {
    config: EngineConfig,
    catalog: Catalog,
    user: UserKey,
    nickname: String,
    wallet: Wallet,
    inventory: Inventory,
    avatar: AvatarConfig,
    quests: QuestTracker,
    counters: ActivityCounters,
    quiz: Option<QuizSession>,
    /// Monotonic snapshot version; bumped on every profile-visible change
    version: u64,
    last_published: Option<ProfileSnapshot>,
    sync: Option<SyncHandle>,
    events: Vec<EngineEvent>,
}

impl RewardsEngine {
    /// Start a fresh session with the built-in catalog
    pub fn new(config: EngineConfig) -> Result<Self> {
        Self::with_catalog(config, Catalog::with_defaults())
    }

    /// Start a fresh session over a custom catalog
    pub fn with_catalog(config: EngineConfig, catalog: Catalog) -> Result<Self> {
        config.validate()?;
        let wallet = Wallet::new(config.starting_glowbits);
        let mut engine = Self {
            config,
            catalog,
            user: UserKey::new(),
            nickname: "Kamu".into(),
            wallet,
            inventory: Inventory::new(),
            avatar: AvatarConfig::default(),
            quests: QuestTracker::new(),
            counters: ActivityCounters::default(),
            quiz: None,
            version: 0,
            last_published: None,
            sync: None,
            events: Vec::new(),
        };
        engine.last_published = Some(engine.snapshot());
        Ok(engine)
    }

    /// Restore a session from a profile fetched at login
    pub fn from_profile(
        config: EngineConfig,
        user: UserKey,
        profile: ProfileSnapshot,
    ) -> Result<Self> {
        config.validate()?;
        let mut engine = Self {
            config,
            catalog: Catalog::with_defaults(),
            user,
            nickname: profile.nickname,
            wallet: Wallet::new(profile.glowbits),
            inventory: Inventory::from_owned(profile.purchased_items),
            avatar: profile.avatar,
            quests: QuestTracker::from_claimed(profile.claimed_quests),
            counters: ActivityCounters {
                articles_read: profile.articles_read,
                articles_written: profile.articles_written,
                articles_shared: 0,
                avatar_customized: false,
            },
            quiz: None,
            version: profile.version,
            last_published: None,
            sync: None,
            events: Vec::new(),
        };
        engine.last_published = Some(engine.snapshot());
        Ok(engine)
    }

    /// Attach the handle the sync adapter listens on
    pub fn attach_sync(&mut self, handle: SyncHandle) {
        self.sync = Some(handle);
    }

    // === Read-only views ===

    pub fn user(&self) -> UserKey {
        self.user
    }

    pub fn nickname(&self) -> &str {
        &self.nickname
    }

    pub fn balance(&self) -> Glowbits {
        self.wallet.balance()
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn avatar(&self) -> &AvatarConfig {
        &self.avatar
    }

    pub fn counters(&self) -> &ActivityCounters {
        &self.counters
    }

    pub fn owns(&self, item_id: &str) -> bool {
        self.inventory.owns(&self.catalog, item_id)
    }

    pub fn quest_statuses(&self) -> Vec<QuestStatus> {
        self.quests.statuses(&self.counters)
    }

    pub fn quiz(&self) -> Option<&QuizSession> {
        self.quiz.as_ref()
    }

    /// Current profile-observable state at the current version
    pub fn snapshot(&self) -> ProfileSnapshot {
        ProfileSnapshot {
            version: self.version,
            nickname: self.nickname.clone(),
            glowbits: self.wallet.balance(),
            avatar: self.avatar.clone(),
            purchased_items: self.inventory.purchased_ids(),
            claimed_quests: self.quests.claimed_ids(),
            articles_read: self.counters.articles_read,
            articles_written: self.counters.articles_written,
        }
    }

    /// Drain the pending event log (for UI toasts / activity feed)
    pub fn drain_events(&mut self) -> Vec<EngineEvent> {
        std::mem::take(&mut self.events)
    }

    // === Reading and writing ===

    /// Record a finished article read and credit the reward
    pub fn read_article(&mut self) -> Glowbits {
        self.counters.articles_read += 1;
        let reward = self.config.article_read_reward;
        self.credit(reward);
        self.publish_profile();
        reward
    }

    /// Record a published article and credit the reward
    pub fn publish_article(&mut self) -> Glowbits {
        self.counters.articles_written += 1;
        let reward = self.config.article_write_reward;
        self.credit(reward);
        self.publish_profile();
        reward
    }

    /// Record sharing an article (quest fuel; pays nothing directly)
    pub fn share_article(&mut self) {
        self.counters.articles_shared += 1;
    }

    // === Shop and avatar ===

    /// Buy an item, auto-equipping it on success.
    ///
    /// Auto-equip is a policy of this facade, not an invariant of the
    /// inventory: a freshly bought cosmetic is worn right away, matching
    /// what the shop UI promises.
    pub fn purchase_item(&mut self, item_id: &str) -> Result<PurchaseOutcome> {
        let outcome = self
            .inventory
            .purchase(&self.catalog, &mut self.wallet, item_id)?;

        if let PurchaseOutcome::Purchased { cost } = outcome {
            self.events.push(EngineEvent::ItemPurchased {
                item_id: item_id.to_string(),
                cost,
                balance: self.wallet.balance(),
            });
            debug!(item = item_id, cost, balance = self.wallet.balance(), "item purchased");

            let category = self.catalog.require(item_id)?.category;
            self.avatar
                .equip(&self.catalog, &self.inventory, category, item_id)?;
            self.events.push(EngineEvent::ItemEquipped {
                category,
                item_id: Some(item_id.to_string()),
            });
            self.counters.avatar_customized = true;
            self.publish_profile();
        }
        Ok(outcome)
    }

    /// Equip an owned item into a slot
    pub fn equip_item(&mut self, category: ItemCategory, item_id: &str) -> Result<()> {
        let before = self.avatar.clone();
        self.avatar
            .equip(&self.catalog, &self.inventory, category, item_id)?;

        if self.avatar != before {
            self.events.push(EngineEvent::ItemEquipped {
                category,
                item_id: Some(item_id.to_string()),
            });
            self.counters.avatar_customized = true;
            self.publish_profile();
        }
        Ok(())
    }

    /// Unequip the accessory
    pub fn clear_accessory(&mut self) {
        if self.avatar.accessory.is_some() {
            self.avatar.clear_accessory();
            self.events.push(EngineEvent::ItemEquipped {
                category: ItemCategory::Accessory,
                item_id: None,
            });
            self.counters.avatar_customized = true;
            self.publish_profile();
        }
    }

    // === Quests ===

    /// Claim a completed quest's reward (once per quest, ever)
    pub fn claim_quest(&mut self, id: QuestId) -> Result<Glowbits> {
        let reward = self.quests.claim(&self.counters, id)?;
        self.events.push(EngineEvent::QuestClaimed {
            quest_id: id,
            reward,
        });
        self.credit(reward);
        self.publish_profile();
        Ok(reward)
    }

    // === Quizzes ===

    /// Start a quiz, replacing any session already in progress
    /// (restarting always means a fresh run)
    pub fn start_quiz(&mut self, kind: QuizKind, questions: Vec<QuizQuestion>) -> Result<()> {
        self.quiz = Some(QuizSession::new(kind, questions)?);
        Ok(())
    }

    /// Start the built-in media-literacy quiz
    pub fn start_media_literacy_quiz(&mut self) -> Result<()> {
        self.start_quiz(
            QuizKind::MediaLiteracy,
            crate::quiz::definitions::media_literacy_quiz(),
        )
    }

    /// Answer the active quiz's current question
    pub fn answer_quiz(&mut self, option: usize) -> Result<AnswerOutcome> {
        self.quiz
            .as_mut()
            .ok_or(EngineError::NoActiveQuiz)?
            .answer(option)
    }

    /// Advance the active quiz; on completion the reward is credited and
    /// the session is consumed, so results cannot be submitted twice
    pub fn advance_quiz(&mut self) -> Result<Advance> {
        let quiz = self.quiz.as_mut().ok_or(EngineError::NoActiveQuiz)?;
        let advance = quiz.advance()?;
        if let Advance::Completed(result) = advance {
            let kind = quiz.kind();
            self.quiz = None;
            self.finish_quiz(kind, result);
        }
        Ok(advance)
    }

    /// Abandon the active quiz, crediting whatever was earned so far
    pub fn skip_quiz(&mut self) -> Result<QuizResult> {
        let quiz = self.quiz.take().ok_or(EngineError::NoActiveQuiz)?;
        let kind = quiz.kind();
        let result = quiz.skip();
        self.finish_quiz(kind, result);
        Ok(result)
    }

    fn finish_quiz(&mut self, kind: QuizKind, result: QuizResult) {
        self.events.push(EngineEvent::QuizFinished {
            kind,
            score: result.score,
            total: result.total,
            reward: result.reward,
        });
        if result.reward > 0 {
            self.credit(result.reward);
        }
        self.publish_profile();
    }

    // === Nickname ===

    pub fn set_nickname(&mut self, nickname: &str) -> Result<()> {
        let trimmed = nickname.trim();
        if trimmed.is_empty() {
            return Err(EngineError::InvalidNickname);
        }
        if trimmed != self.nickname {
            self.nickname = trimmed.to_string();
            self.events.push(EngineEvent::NicknameChanged {
                nickname: self.nickname.clone(),
            });
            self.publish_profile();
        }
        Ok(())
    }

    // === Internals ===

    fn credit(&mut self, amount: Glowbits) {
        self.wallet.credit(amount);
        self.events.push(EngineEvent::GlowbitsCredited {
            amount,
            balance: self.wallet.balance(),
        });
    }

    /// Publish a new snapshot if profile-observable state changed
    fn publish_profile(&mut self) {
        let snapshot = self.snapshot();
        if self
            .last_published
            .as_ref()
            .is_some_and(|last| last.same_state(&snapshot))
        {
            return;
        }
        self.version += 1;
        let snapshot = ProfileSnapshot {
            version: self.version,
            ..snapshot
        };
        if let Some(sync) = &self.sync {
            sync.publish(snapshot.clone());
        }
        self.last_published = Some(snapshot);
    }
}
