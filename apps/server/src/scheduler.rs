//! Background scheduler for the periodic exchange-rate refresh.

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::interval;
use tracing::{info, warn};

use crate::main_lib::AppState;

/// Delay before the first fetch so the listener comes up first.
const INITIAL_DELAY_SECS: u64 = 5;

/// Starts the refresh loop. The returned handle lets the caller cancel the
/// task at shutdown; the loop itself never exits on its own.
pub fn start_rates_refresh_scheduler(
    state: Arc<AppState>,
    refresh_interval: Duration,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        info!(
            "Rate refresh scheduler started ({}s interval)",
            refresh_interval.as_secs()
        );

        tokio::time::sleep(Duration::from_secs(INITIAL_DELAY_SECS)).await;

        // First tick is immediate, subsequent ticks are one interval apart.
        let mut refresh_ticker = interval(refresh_interval);
        let mut consecutive_failures: u32 = 0;

        loop {
            refresh_ticker.tick().await;

            match state.currency_service.refresh_rates().await {
                Ok(written) => {
                    consecutive_failures = 0;
                    info!("Refreshed {} currency quote(s)", written);
                }
                Err(e) => {
                    // One failed cycle is routine; the count is what tells an
                    // operator the upstream has been down for a while.
                    consecutive_failures += 1;
                    warn!(
                        "Rate refresh cycle failed ({} consecutive): {}",
                        consecutive_failures, e
                    );
                }
            }
        }
    })
}
