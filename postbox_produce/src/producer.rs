use crate::catalog::default_catalog;
use postbox_core::*;
use std::sync::atomic::{AtomicUsize, Ordering};
use tracing::{error, info};

/// What a successful publish pushed and how long the queue was afterwards
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Published {
    pub post: BlogPost,
    pub queue_length: usize,
}

/// Interface for publishing canned blog posts to a Postbox queue in round-robin order
pub struct Producer<Q: ListQueue = Context> {
    queue: Q,
    catalog: Vec<BlogPost>,
    cursor: AtomicUsize,
}

impl<Q: ListQueue> Producer<Q> {
    /// Create a producer cycling through the default catalog
    pub fn with_queue(queue: Q) -> Self {
        Self {
            queue,
            catalog: default_catalog(),
            cursor: AtomicUsize::new(0),
        }
    }

    /// Replace the catalog and restart the cycle from its first post
    pub fn with_catalog(mut self, catalog: Vec<BlogPost>) -> Result<Self> {
        if catalog.is_empty() {
            return Err(PostboxError::InvalidConfig(
                "producer catalog must not be empty".to_string(),
            ));
        }
        self.catalog = catalog;
        self.cursor = AtomicUsize::new(0);
        Ok(self)
    }

    pub fn queue(&self) -> &Q {
        &self.queue
    }

    pub fn catalog(&self) -> &[BlogPost] {
        &self.catalog
    }

    /// Take the post under the cursor and advance the cursor, wrapping at the catalog end
    pub fn next_post(&self) -> BlogPost {
        let len = self.catalog.len();
        let index = self
            .cursor
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |i| Some((i + 1) % len))
            .unwrap_or_else(|i| i);
        self.catalog[index].clone()
    }

    /// Select the next post and append it to the tail of the queue; never retries
    pub async fn publish(&self) -> Result<Published> {
        let post = self.next_post();
        match self.push(&post).await {
            Ok(queue_length) => {
                info!(
                    post_id = %post.post_id,
                    queue = %self.queue.name(),
                    queue_length = %queue_length,
                    "Post pushed to queue"
                );
                Ok(Published { post, queue_length })
            }
            Err(e) => {
                error!(
                    post_id = %post.post_id,
                    queue = %self.queue.name(),
                    "Error publishing post: {}",
                    e
                );
                Err(e)
            }
        }
    }

    async fn push(&self, post: &BlogPost) -> Result<usize> {
        let entry = post.to_json()?;
        info!(queue = %self.queue.name(), entry = %entry, "Publishing post");
        self.queue.push(&entry).await
    }
}
