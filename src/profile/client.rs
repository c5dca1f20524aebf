//! Async HTTP client for the remote profile service
//!
//! Thin JSON-over-HTTP boundary; the engine never blocks on any of
//! these calls for its local effect. Routes follow the hosted service:
//! `/profile/{user}` plus sub-resources, and `/leaderboard`.

use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::avatar::AvatarConfig;
use crate::core::error::{EngineError, Result};
use crate::core::types::{Glowbits, UserKey};
use crate::leaderboard::LeaderboardEntry;
use crate::profile::snapshot::ProfileSnapshot;

/// Async client for the profile service
pub struct ProfileClient {
    client: Client,
    base_url: String,
    auth_token: Option<String>,
}

/// Partial stats update; absent fields are left untouched remotely
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct StatsUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub articles_read: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub articles_written: Option<u32>,
}

#[derive(Serialize)]
struct GlowbitsUpdate {
    glowbits: Glowbits,
}

#[derive(Serialize)]
struct AvatarUpdate<'a> {
    avatar: &'a AvatarConfig,
    purchased_items: &'a [String],
}

#[derive(Serialize)]
struct NicknameUpdate<'a> {
    nickname: &'a str,
}

#[derive(Deserialize)]
struct NicknameResponse {
    success: bool,
}

impl ProfileClient {
    /// Create a client for an explicit base URL
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
            auth_token: None,
        }
    }

    /// Attach a bearer token sent with every request
    pub fn with_auth(mut self, token: impl Into<String>) -> Self {
        self.auth_token = Some(token.into());
        self
    }

    /// Create a client from environment variables
    ///
    /// Required: LUMO_PROFILE_URL
    /// Optional: LUMO_PROFILE_TOKEN
    pub fn from_env() -> Result<Self> {
        let base_url = std::env::var("LUMO_PROFILE_URL")
            .map_err(|_| EngineError::Profile("LUMO_PROFILE_URL not set".into()))?;
        let mut client = Self::new(base_url);
        if let Ok(token) = std::env::var("LUMO_PROFILE_TOKEN") {
            client = client.with_auth(token);
        }
        Ok(client)
    }

    fn request(&self, method: reqwest::Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}/{}", self.base_url.trim_end_matches('/'), path);
        let mut builder = self.client.request(method, url);
        if let Some(token) = &self.auth_token {
            builder = builder.bearer_auth(token);
        }
        builder
    }

    async fn send(&self, builder: reqwest::RequestBuilder) -> Result<reqwest::Response> {
        let response = builder
            .send()
            .await
            .map_err(|e| EngineError::Profile(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            return Err(EngineError::Profile(format!("API error {status}: {text}")));
        }
        Ok(response)
    }

    /// Fetch the stored profile at session start
    pub async fn fetch_profile(&self, user: UserKey) -> Result<ProfileSnapshot> {
        let response = self
            .send(self.request(reqwest::Method::GET, &format!("profile/{user}")))
            .await?;
        response
            .json()
            .await
            .map_err(|e| EngineError::Profile(e.to_string()))
    }

    /// Replace the whole mirrored profile (the sync adapter's push)
    pub async fn push_snapshot(&self, user: UserKey, snapshot: &ProfileSnapshot) -> Result<()> {
        self.send(
            self.request(reqwest::Method::PUT, &format!("profile/{user}"))
                .json(snapshot),
        )
        .await?;
        Ok(())
    }

    pub async fn update_glowbits(&self, user: UserKey, glowbits: Glowbits) -> Result<()> {
        self.send(
            self.request(reqwest::Method::POST, &format!("profile/{user}/glowbits"))
                .json(&GlowbitsUpdate { glowbits }),
        )
        .await?;
        Ok(())
    }

    pub async fn update_avatar(
        &self,
        user: UserKey,
        avatar: &AvatarConfig,
        purchased_items: &[String],
    ) -> Result<()> {
        self.send(
            self.request(reqwest::Method::POST, &format!("profile/{user}/avatar"))
                .json(&AvatarUpdate {
                    avatar,
                    purchased_items,
                }),
        )
        .await?;
        Ok(())
    }

    /// Returns false when the service rejects the nickname (e.g. taken)
    pub async fn update_nickname(&self, user: UserKey, nickname: &str) -> Result<bool> {
        let response = self
            .send(
                self.request(reqwest::Method::POST, &format!("profile/{user}/nickname"))
                    .json(&NicknameUpdate { nickname }),
            )
            .await?;
        let parsed: NicknameResponse = response
            .json()
            .await
            .map_err(|e| EngineError::Profile(e.to_string()))?;
        Ok(parsed.success)
    }

    pub async fn update_stats(&self, user: UserKey, stats: StatsUpdate) -> Result<()> {
        self.send(
            self.request(reqwest::Method::POST, &format!("profile/{user}/stats"))
                .json(&stats),
        )
        .await?;
        Ok(())
    }

    /// Fetch the current board; ordering is not guaranteed by the service
    pub async fn fetch_leaderboard(&self) -> Result<Vec<LeaderboardEntry>> {
        let response = self
            .send(self.request(reqwest::Method::GET, "leaderboard"))
            .await?;
        response
            .json()
            .await
            .map_err(|e| EngineError::Profile(e.to_string()))
    }
}
