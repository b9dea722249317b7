//! Periodic deletion of long-dead share links.

use std::sync::Arc;
use std::time::Duration as StdDuration;

use chrono::Duration;
use tokio::sync::watch;
use tokio::time;
use tracing::{error, info};

use docvault_core::config::{ShareConfig, TTL_CEILING_MINUTES};
use docvault_core::result::AppResult;
use docvault_core::traits::{Clock, LinkStore};

/// Deletes links whose `expires_at` lies more than `retention` in the past.
///
/// Expired links already refuse redemption; this only reclaims storage.
#[derive(Clone)]
pub struct ExpiredLinkSweeper {
    links: Arc<dyn LinkStore>,
    clock: Arc<dyn Clock>,
    retention: Duration,
    interval: StdDuration,
}

impl std::fmt::Debug for ExpiredLinkSweeper {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExpiredLinkSweeper")
            .field("retention", &self.retention)
            .field("interval", &self.interval)
            .finish()
    }
}

impl ExpiredLinkSweeper {
    /// Creates a sweeper using the interval and retention from `config`.
    pub fn new(links: Arc<dyn LinkStore>, clock: Arc<dyn Clock>, config: &ShareConfig) -> Self {
        Self {
            links,
            clock,
            retention: Duration::try_minutes(
                config.sweep_retention_minutes.clamp(0, TTL_CEILING_MINUTES),
            )
            .unwrap_or_else(Duration::zero),
            interval: StdDuration::from_secs(config.sweep_interval_seconds),
        }
    }

    /// Whether periodic sweeping is enabled (`sweep_interval_seconds > 0`).
    pub fn is_enabled(&self) -> bool {
        !self.interval.is_zero()
    }

    /// Runs a single sweep. Returns the number of deleted links.
    pub async fn sweep_once(&self) -> AppResult<u64> {
        let Some(cutoff) = self.clock.now().checked_sub_signed(self.retention) else {
            return Ok(0);
        };
        let deleted = self.links.delete_expired(cutoff).await?;
        if deleted > 0 {
            info!(deleted, cutoff = %cutoff, "Swept expired share links");
        }
        Ok(deleted)
    }

    /// Sweeps every interval until `shutdown` flips to `true`.
    pub async fn run(self, mut shutdown: watch::Receiver<bool>) {
        if !self.is_enabled() {
            info!("Expired link sweeper disabled");
            return;
        }

        info!(
            interval_seconds = self.interval.as_secs(),
            retention_minutes = self.retention.num_minutes(),
            "Expired link sweeper started"
        );

        let mut ticker = time::interval(self.interval);
        ticker.set_missed_tick_behavior(time::MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                changed = shutdown.changed() => {
                    if changed.is_err() || *shutdown.borrow() {
                        info!("Expired link sweeper received shutdown signal");
                        break;
                    }
                }
                _ = ticker.tick() => {
                    if let Err(e) = self.sweep_once().await {
                        error!(error = %e, "Expired link sweep failed");
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use docvault_core::traits::ManualClock;
    use docvault_core::types::{DocumentId, ShareLink};
    use docvault_database::memory::MemoryLinkStore;

    use super::*;

    fn config(interval: u64, retention_minutes: i64) -> ShareConfig {
        ShareConfig {
            sweep_interval_seconds: interval,
            sweep_retention_minutes: retention_minutes,
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_sweep_respects_retention() {
        let clock = Arc::new(ManualClock::starting_now());
        let store = Arc::new(MemoryLinkStore::new());
        let start = clock.now();
        store
            .insert(&ShareLink::issue("a".into(), DocumentId::new(), start, Duration::minutes(10)).unwrap())
            .await
            .unwrap();

        let sweeper = ExpiredLinkSweeper::new(store.clone(), clock.clone(), &config(60, 30));

        // Expired 20 minutes ago: still inside retention.
        clock.advance(Duration::minutes(30));
        assert_eq!(sweeper.sweep_once().await.unwrap(), 0);

        clock.advance(Duration::minutes(11));
        assert_eq!(sweeper.sweep_once().await.unwrap(), 1);
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn test_oversized_retention_is_clamped() {
        let clock = Arc::new(ManualClock::starting_now());
        let store = Arc::new(MemoryLinkStore::new());
        let sweeper = ExpiredLinkSweeper::new(store.clone(), clock.clone(), &config(60, i64::MAX));
        assert_eq!(sweeper.retention, Duration::minutes(TTL_CEILING_MINUTES));
        assert_eq!(sweeper.sweep_once().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_zero_interval_disables() {
        let sweeper = ExpiredLinkSweeper::new(
            Arc::new(MemoryLinkStore::new()),
            Arc::new(ManualClock::new(Utc::now())),
            &config(0, 0),
        );
        assert!(!sweeper.is_enabled());
        let (_tx, rx) = watch::channel(false);
        // Returns immediately instead of looping.
        sweeper.run(rx).await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_run_stops_on_shutdown() {
        let sweeper = ExpiredLinkSweeper::new(
            Arc::new(MemoryLinkStore::new()),
            Arc::new(ManualClock::starting_now()),
            &config(1, 0),
        );
        let (tx, rx) = watch::channel(false);
        let handle = tokio::spawn(sweeper.run(rx));

        time::sleep(StdDuration::from_secs(3)).await;
        tx.send(true).unwrap();
        handle.await.unwrap();
    }
}
