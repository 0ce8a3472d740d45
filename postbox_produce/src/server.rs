//! HTTP surface of the producer: `GET /publish` pushes the next canned post.

use crate::{Producer, ServerConfig};
use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use postbox_core::{ListQueue, Result};
use serde::{Deserialize, Serialize};
use std::future::Future;
use std::sync::Arc;
use tracing::info;

/// JSON body answered by `GET /publish`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublishResponse {
    pub success: bool,
    pub message: String,
    #[serde(rename = "postId", skip_serializing_if = "Option::is_none", default)]
    pub post_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub text: Option<String>,
}

/// Build the router serving the publish endpoint
pub fn router<Q: ListQueue + 'static>(producer: Arc<Producer<Q>>) -> Router {
    Router::new()
        .route("/publish", get(publish::<Q>))
        .with_state(producer)
}

/// Bind and serve until `shutdown` resolves
pub async fn serve<Q, F>(producer: Arc<Producer<Q>>, config: &ServerConfig, shutdown: F) -> Result<()>
where
    Q: ListQueue + 'static,
    F: Future<Output = ()> + Send + 'static,
{
    let listener = tokio::net::TcpListener::bind(config.get_bind_addr()).await?;
    let addr = listener.local_addr()?;
    info!(
        addr = %addr,
        queue = %producer.queue().name(),
        "Producer listening, send GET /publish to push a blog post"
    );
    axum::serve(listener, router(producer))
        .with_graceful_shutdown(shutdown)
        .await?;
    info!("Producer stopped");
    Ok(())
}

async fn publish<Q: ListQueue + 'static>(
    State(producer): State<Arc<Producer<Q>>>,
) -> (StatusCode, Json<PublishResponse>) {
    info!("Received request at /publish");
    match producer.publish().await {
        Ok(published) => (
            StatusCode::OK,
            Json(PublishResponse {
                success: true,
                message: "Blog post published successfully!".to_string(),
                post_id: Some(published.post.post_id),
                text: Some(published.post.text),
            }),
        ),
        Err(_) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(PublishResponse {
                success: false,
                message: "Error publishing message to Redis.".to_string(),
                post_id: None,
                text: None,
            }),
        ),
    }
}
