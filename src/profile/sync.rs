//! Sync adapter - mirrors engine state to the remote profile service
//!
//! The engine publishes versioned snapshots into a watch channel; a
//! background task pushes the latest snapshot on every change
//! notification and on a recurring timer tick. Send-latest-wins: an
//! unread snapshot is simply replaced by a newer one. A failed push is
//! logged and retried on the next wakeup; local state is never blocked
//! or rolled back.

use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::core::error::Result;
use crate::core::types::UserKey;
use crate::profile::client::ProfileClient;
use crate::profile::snapshot::ProfileSnapshot;

/// Transport used by the sync task to push snapshots
#[async_trait]
pub trait ProfilePush: Send + Sync {
    async fn push(&self, user: UserKey, snapshot: &ProfileSnapshot) -> Result<()>;
}

#[async_trait]
impl ProfilePush for ProfileClient {
    async fn push(&self, user: UserKey, snapshot: &ProfileSnapshot) -> Result<()> {
        self.push_snapshot(user, snapshot).await
    }
}

/// Handle the engine publishes snapshots through
#[derive(Clone)]
pub struct SyncHandle {
    tx: watch::Sender<Option<ProfileSnapshot>>,
}

impl SyncHandle {
    pub fn publish(&self, snapshot: ProfileSnapshot) {
        // Ignore send errors: a stopped sync task just means nothing
        // mirrors the state anymore, which never blocks the engine.
        let _ = self.tx.send(Some(snapshot));
    }
}

/// Owns the background sync task
pub struct SyncAdapter {
    task: JoinHandle<()>,
    shutdown_tx: watch::Sender<bool>,
}

impl SyncAdapter {
    /// Spawn the sync task and return the handle the engine publishes
    /// through. Must be called from within a tokio runtime.
    pub fn spawn<P: ProfilePush + 'static>(
        push: P,
        user: UserKey,
        period: Duration,
    ) -> (Self, SyncHandle) {
        let (tx, rx) = watch::channel(None);
        let (shutdown_tx, shutdown_rx) = watch::channel(false);
        let task = tokio::spawn(run_sync_loop(push, user, period, rx, shutdown_rx));
        (Self { task, shutdown_tx }, SyncHandle { tx })
    }

    /// Stop the task after one final best-effort flush (the logout path)
    pub async fn shutdown(self) {
        let _ = self.shutdown_tx.send(true);
        let _ = self.task.await;
    }
}

async fn run_sync_loop<P: ProfilePush>(
    push: P,
    user: UserKey,
    period: Duration,
    mut rx: watch::Receiver<Option<ProfileSnapshot>>,
    mut shutdown_rx: watch::Receiver<bool>,
) {
    // First tick a full period out; pushes before that are change-driven
    let mut interval = tokio::time::interval_at(tokio::time::Instant::now() + period, period);
    interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
    let mut last_pushed: u64 = 0;
    info!(%user, ?period, "profile sync task started");

    loop {
        let mut stop = false;
        tokio::select! {
            _ = interval.tick() => {}
            changed = rx.changed() => {
                // A closed channel means no more snapshots will arrive
                if changed.is_err() {
                    stop = true;
                }
            }
            _ = shutdown_rx.changed() => {
                stop = true;
            }
        }
        // Every stop path gets one final best-effort flush
        push_latest(&push, user, &mut rx, &mut last_pushed).await;
        if stop {
            break;
        }
    }

    info!(%user, "profile sync task stopped");
}

/// Push the most recent snapshot if it is newer than the last success
async fn push_latest<P: ProfilePush>(
    push: &P,
    user: UserKey,
    rx: &mut watch::Receiver<Option<ProfileSnapshot>>,
    last_pushed: &mut u64,
) {
    // Mark the value seen so a timer-tick push also consumes the pending
    // change notification
    let snapshot = rx.borrow_and_update().clone();
    let Some(snapshot) = snapshot else {
        return;
    };
    if snapshot.version <= *last_pushed {
        return;
    }

    match push.push(user, &snapshot).await {
        Ok(()) => {
            *last_pushed = snapshot.version;
            debug!(%user, version = snapshot.version, "profile synced");
        }
        Err(e) => {
            warn!(%user, version = snapshot.version, error = %e, "profile sync failed; will retry");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::avatar::AvatarConfig;
    use std::sync::{Arc, Mutex};

    /// Records pushed versions; fails the first `fail_first` attempts
    #[derive(Clone, Default)]
    struct RecordingPush {
        pushed: Arc<Mutex<Vec<u64>>>,
        attempts: Arc<Mutex<u32>>,
        fail_first: u32,
    }

    #[async_trait]
    impl ProfilePush for RecordingPush {
        async fn push(&self, _user: UserKey, snapshot: &ProfileSnapshot) -> Result<()> {
            let attempt = {
                let mut attempts = self.attempts.lock().unwrap();
                *attempts += 1;
                *attempts
            };
            if attempt <= self.fail_first {
                return Err(crate::core::error::EngineError::Profile(
                    "service unavailable".into(),
                ));
            }
            self.pushed.lock().unwrap().push(snapshot.version);
            Ok(())
        }
    }

    fn snapshot(version: u64) -> ProfileSnapshot {
        ProfileSnapshot {
            version,
            nickname: "Sena".into(),
            glowbits: 150,
            avatar: AvatarConfig::default(),
            purchased_items: vec![],
            claimed_quests: vec![],
            articles_read: 0,
            articles_written: 0,
        }
    }

    async fn settle() {
        // Paused-clock sleeps yield to the sync task and auto-advance
        tokio::time::sleep(Duration::from_millis(10)).await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_change_triggered_push() {
        let push = RecordingPush::default();
        let (adapter, handle) =
            SyncAdapter::spawn(push.clone(), UserKey::new(), Duration::from_secs(30));

        handle.publish(snapshot(1));
        settle().await;

        assert_eq!(*push.pushed.lock().unwrap(), vec![1]);
        adapter.shutdown().await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_failed_push_retried_on_timer_tick() {
        let push = RecordingPush {
            fail_first: 1,
            ..RecordingPush::default()
        };
        let (adapter, handle) =
            SyncAdapter::spawn(push.clone(), UserKey::new(), Duration::from_secs(30));

        handle.publish(snapshot(1));
        settle().await;
        assert!(push.pushed.lock().unwrap().is_empty());

        // Next timer tick retries the same snapshot
        tokio::time::sleep(Duration::from_secs(31)).await;
        assert_eq!(*push.pushed.lock().unwrap(), vec![1]);
        adapter.shutdown().await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_already_pushed_version_not_resent() {
        let push = RecordingPush::default();
        let (adapter, handle) =
            SyncAdapter::spawn(push.clone(), UserKey::new(), Duration::from_secs(30));

        handle.publish(snapshot(1));
        settle().await;

        // Timer ticks with no newer snapshot stay quiet
        tokio::time::sleep(Duration::from_secs(90)).await;
        assert_eq!(*push.pushed.lock().unwrap(), vec![1]);

        handle.publish(snapshot(2));
        settle().await;
        assert_eq!(*push.pushed.lock().unwrap(), vec![1, 2]);
        adapter.shutdown().await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_newer_snapshot_supersedes_unsent_one() {
        let push = RecordingPush {
            fail_first: 1,
            ..RecordingPush::default()
        };
        let (adapter, handle) =
            SyncAdapter::spawn(push.clone(), UserKey::new(), Duration::from_secs(30));

        // First push fails; a newer snapshot lands before the retry
        handle.publish(snapshot(1));
        settle().await;
        handle.publish(snapshot(2));
        settle().await;

        // Only the latest state ever goes out
        assert_eq!(*push.pushed.lock().unwrap(), vec![2]);
        adapter.shutdown().await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_shutdown_flushes_pending_state() {
        let push = RecordingPush::default();
        let (adapter, handle) =
            SyncAdapter::spawn(push.clone(), UserKey::new(), Duration::from_secs(30));

        handle.publish(snapshot(7));
        adapter.shutdown().await;

        assert_eq!(*push.pushed.lock().unwrap(), vec![7]);
    }
}
