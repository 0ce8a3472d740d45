use crate::{Forum, ListQueue, Result};
use std::future::Future;

/// The queue every Postbox producer and consumer talks to unless told otherwise.
///
/// Shared with the existing TypeScript producer and consumer deployments, keep in sync.
pub const DEFAULT_QUEUE: &str = "blog_posts_queue_ts";

/// Queue-specific context for Postbox operations
#[derive(Clone)]
pub struct Context {
    forum: Forum,
    queue: String,
}

impl Context {
    /// Create a new context with the given forum and queue
    pub fn new(forum: Forum, queue: impl ToString) -> Self {
        Self {
            forum,
            queue: queue.to_string(),
        }
    }

    /// Get the queue name
    pub fn queue(&self) -> &str {
        &self.queue
    }
}

impl ListQueue for Context {
    fn name(&self) -> &str {
        &self.queue
    }

    fn push<'a>(&'a self, entry: &'a str) -> impl Future<Output = Result<usize>> + Send + 'a {
        self.forum.rpush(&self.queue, entry)
    }

    fn pop(&self) -> impl Future<Output = Result<Option<String>>> + Send + '_ {
        self.forum.lpop(&self.queue)
    }

    fn ping(&self) -> impl Future<Output = Result<String>> + Send + '_ {
        self.forum.ping()
    }
}
