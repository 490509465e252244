use std::time::{Duration, Instant};

/// Measures how long the current drill session has been running.
pub struct SessionTimer {
    start: Instant,
}

impl SessionTimer {
    pub fn start() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }
}

/// Formats a duration as `H:MM:SS.ffffff`. Hours are not padded and not wrapped at 24.
pub fn format_elapsed(elapsed: Duration) -> String {
    let secs = elapsed.as_secs();
    format!(
        "{}:{:02}:{:02}.{:06}",
        secs / 3600,
        (secs / 60) % 60,
        secs % 60,
        elapsed.subsec_micros()
    )
}
