use chrono::{DateTime, Local};
use std::time::{Duration, Instant};

/// Wall-clock bookends for one scrape run.
pub struct RunTimer {
    started: Instant,
    started_at: DateTime<Local>,
}

impl RunTimer {
    pub fn start() -> Self {
        let timer = Self {
            started: Instant::now(),
            started_at: Local::now(),
        };
        tracing::info!(
            "Scraping process started at {}",
            timer.started_at.format("%Y-%m-%d %H:%M:%S")
        );
        timer
    }

    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }

    pub fn report(&self) {
        let elapsed = self.elapsed();
        tracing::info!("This operation took: {:.2} seconds", elapsed.as_secs_f64());

        let (minutes, seconds) = minutes_and_seconds(elapsed);
        tracing::info!("This operation took: {minutes} minutes {seconds} seconds");
    }
}

/// Whole minutes and the leftover whole seconds.
pub fn minutes_and_seconds(elapsed: Duration) -> (u64, u64) {
    let secs = elapsed.as_secs();
    (secs / 60, secs % 60)
}
