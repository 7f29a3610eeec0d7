use std::time::Duration;

use tracing::{info, warn};

use crate::config::KeepAliveConfig;

/// Periodically pings the configured URL so free-tier hosting does not idle
/// the process out. Failures are logged and swallowed; there is no retry
/// before the next scheduled tick.
pub fn spawn(config: KeepAliveConfig) -> tokio::task::JoinHandle<()> {
    info!(
        url = %config.url,
        interval_minutes = config.interval_minutes,
        "keep-alive pinger scheduled"
    );
    tokio::spawn(async move {
        let client = reqwest::Client::new();
        let mut interval =
            tokio::time::interval(Duration::from_secs(config.interval_minutes * 60));
        // The first tick completes immediately; consume it so pings start
        // one full interval after boot.
        interval.tick().await;
        loop {
            interval.tick().await;
            match client.get(&config.url).send().await {
                Ok(res) => info!(status = %res.status(), "keep-alive ping ok"),
                Err(e) => warn!(error = %e, "keep-alive ping failed"),
            }
        }
    })
}
