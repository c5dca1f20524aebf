//! Engine configuration with documented constants
//!
//! The reward amounts are collected here so the economy can be tuned in
//! one place instead of scattering magic numbers across call sites.

use std::time::Duration;

use crate::core::error::{EngineError, Result};

/// Tunable constants for the rewards engine
///
/// Defaults reproduce the reference economy: a new account starts with
/// enough Glowbits to afford one or two cheap cosmetics, and reading pays
/// a fifth of writing.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Balance a brand-new account starts with.
    ///
    /// At the default (150), a new reader can buy one mid-priced item
    /// right away and has something to lose, which makes the shop
    /// interesting from the first session.
    pub starting_glowbits: u32,

    /// Glowbits credited for finishing an article.
    pub article_read_reward: u32,

    /// Glowbits credited for publishing an article.
    ///
    /// Deliberately 5x the read reward: writing is the behavior the
    /// platform most wants to encourage.
    pub article_write_reward: u32,

    /// How many leaderboard entries are shown as the visible window.
    ///
    /// The user's full rank is always computed even when they fall
    /// outside this window.
    pub leaderboard_top_n: usize,

    /// Period of the recurring remote-sync tick.
    ///
    /// Change-triggered pushes happen immediately regardless; this timer
    /// only bounds how stale the remote mirror can get after a failed
    /// push.
    pub sync_period: Duration,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            starting_glowbits: 150,
            article_read_reward: 10,
            article_write_reward: 50,
            leaderboard_top_n: 10,
            sync_period: Duration::from_secs(30),
        }
    }
}

impl EngineConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> Result<()> {
        if self.article_read_reward == 0 || self.article_write_reward == 0 {
            return Err(EngineError::Config(
                "article rewards must be positive".into(),
            ));
        }
        if self.leaderboard_top_n == 0 {
            return Err(EngineError::Config(
                "leaderboard_top_n must be at least 1".into(),
            ));
        }
        if self.sync_period.is_zero() {
            return Err(EngineError::Config("sync_period must be non-zero".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(EngineConfig::default().validate().is_ok());
    }

    #[test]
    fn test_zero_reward_rejected() {
        let config = EngineConfig {
            article_read_reward: 0,
            ..EngineConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_empty_leaderboard_window_rejected() {
        let config = EngineConfig {
            leaderboard_top_n: 0,
            ..EngineConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
