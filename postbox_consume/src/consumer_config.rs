use std::time::Duration;

/// Configuration options for a Consumer
#[derive(Debug, Clone)]
pub struct ConsumerConfig {
    /// How long to wait after every poll, whatever its outcome
    poll_interval: Duration,
}

impl Default for ConsumerConfig {
    fn default() -> Self {
        Self {
            poll_interval: Duration::from_millis(2000),
        }
    }
}

impl ConsumerConfig {
    pub fn new() -> ConsumerConfig {
        ConsumerConfig::default()
    }

    pub fn poll_interval(mut self, poll_interval: Duration) -> ConsumerConfig {
        self.poll_interval = poll_interval;
        self
    }
    pub fn get_poll_interval(&self) -> Duration {
        self.poll_interval
    }
}
