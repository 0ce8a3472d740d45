use crate::consumer_config::ConsumerConfig;
use crate::{Handler, LogHandler};
use postbox_core::{BlogPost, Context, ListQueue, PostboxError, Result};
use tokio_util::sync::CancellationToken;
use tracing::{error, info, warn};

/// Outcome of a single poll of the queue
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Poll {
    /// An entry was popped, parsed and handled
    Received(BlogPost),
    /// An entry was popped and parsed but the handler failed; the entry is gone either way
    Rejected { post: BlogPost, error: String },
    /// An entry was popped but could not be parsed; it is dropped
    Malformed { raw: String, error: String },
    /// The queue had nothing to give
    Empty,
}

/// Interface for polling, parsing and handling posts from a Postbox queue.
///
/// Pops are not acknowledged: whatever is popped is gone from the store, even
/// if it turns out to be malformed or the handler fails.
pub struct Consumer<H: Handler = LogHandler, Q: ListQueue = Context> {
    queue: Q,
    config: ConsumerConfig,
    handler: H,
}

impl<Q: ListQueue> Consumer<LogHandler, Q> {
    /// Create a consumer that logs every post it receives
    pub fn logging(queue: Q) -> Self {
        Self::with_queue(queue, LogHandler)
    }
}

impl<H: Handler, Q: ListQueue> Consumer<H, Q> {
    pub fn with_queue(queue: Q, handler: H) -> Self {
        Self {
            queue,
            config: ConsumerConfig::default(),
            handler,
        }
    }

    pub fn with_config(mut self, config: ConsumerConfig) -> Self {
        self.config = config;
        self
    }

    pub fn queue(&self) -> &Q {
        &self.queue
    }

    /// Poll until `cancel` fires, sleeping the same interval after every outcome.
    ///
    /// Store errors never stop the loop. Cancellation interrupts the sleep but
    /// lets an in-flight poll finish so a popped entry is still handled.
    pub async fn run(&self, cancel: CancellationToken) -> Result<()> {
        let interval = self.config.get_poll_interval();
        info!(
            queue = %self.queue.name(),
            interval_ms = %interval.as_millis(),
            "Now polling queue"
        );

        while !cancel.is_cancelled() {
            if let Err(e) = self.poll_once().await {
                self.report_error(&e);
            }
            tokio::select! {
                _ = cancel.cancelled() => break,
                _ = tokio::time::sleep(interval) => {}
            }
        }

        info!(queue = %self.queue.name(), "Stopped polling queue");
        Ok(())
    }

    /// Pop one entry, parse it and hand it to the handler
    pub async fn poll_once(&self) -> Result<Poll> {
        let queue = self.queue.name();
        let Some(raw) = self.queue.pop().await? else {
            info!(queue = %queue, "Queue is empty");
            return Ok(Poll::Empty);
        };
        info!(queue = %queue, raw = %raw, "Entry received");

        let post = match BlogPost::from_json(&raw) {
            Ok(post) => post,
            Err(e) => {
                error!(queue = %queue, raw = %raw, "Failed to parse entry, dropping it: {}", e);
                return Ok(Poll::Malformed {
                    raw,
                    error: e.to_string(),
                });
            }
        };

        match self.handler.handle(&post).await {
            Ok(()) => Ok(Poll::Received(post)),
            Err(e) => {
                error!(queue = %queue, post_id = %post.post_id, "Handler failed: {}", e);
                Ok(Poll::Rejected {
                    post,
                    error: e.to_string(),
                })
            }
        }
    }

    fn report_error(&self, e: &PostboxError) {
        error!(queue = %self.queue.name(), "Error while popping from queue: {}", e);
        if e.is_network() {
            warn!("Network-related error, polling again after the usual interval");
        }
    }
}
