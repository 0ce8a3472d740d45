use postbox_core::{BlogPost, Result};
use std::future::Future;
use tracing::info;

/// What to do with each successfully parsed post
pub trait Handler: Send + Sync {
    fn handle<'a>(&'a self, post: &'a BlogPost) -> impl Future<Output = Result<()>> + Send + 'a;
}

/// Logs the post and otherwise does nothing with it
#[derive(Debug, Clone, Copy, Default)]
pub struct LogHandler;

impl Handler for LogHandler {
    async fn handle(&self, post: &BlogPost) -> Result<()> {
        info!(post_id = %post.post_id, text = %post.text, "Post consumed");
        Ok(())
    }
}
