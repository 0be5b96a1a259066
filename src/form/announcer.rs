//! Live status region for assistive-technology announcements.

use std::time::{Duration, Instant};

/// Holds the latest announcement until its time-to-live lapses.
#[derive(Debug)]
pub struct Announcer {
    ttl: Duration,
    current: Option<(String, Instant)>,
}

impl Announcer {
    pub fn new(ttl: Duration) -> Self {
        Self { ttl, current: None }
    }

    pub fn announce(&mut self, message: impl Into<String>) {
        let message = message.into();
        tracing::debug!("Announcing: {}", message);
        self.current = Some((message, Instant::now()));
    }

    /// The message still showing, if any.
    pub fn current(&self) -> Option<&str> {
        self.current
            .as_ref()
            .filter(|(_, at)| at.elapsed() < self.ttl)
            .map(|(message, _)| message.as_str())
    }
}
