//! Fail-fast precondition check shared by the producer and the consumer.

use crate::{Context, Forum, ListQueue, Result, StoreConfig};
use tracing::{error, info};

/// Validate the configuration, connect, and PING the store before any real work starts.
///
/// Configuration problems are reported before any network traffic happens.
pub async fn connect(config: &StoreConfig, queue: &str) -> Result<Context> {
    if let Err(e) = config.validate() {
        error!(
            "Store URL or token is missing or invalid, check {} and {}: {}",
            crate::URL_ENV_VAR,
            crate::TOKEN_ENV_VAR,
            e
        );
        return Err(e);
    }

    info!(
        url = %config.redacted_url(),
        "Configuring store client (token is hidden)"
    );
    let context = match Forum::new(config) {
        Ok(forum) => forum.queue(queue),
        Err(e) => {
            error!(url = %config.redacted_url(), "Could not configure store client: {}", e);
            return Err(e);
        }
    };
    verify(&context).await?;
    Ok(context)
}

/// PING the store behind the queue, logging the outcome
pub async fn verify<Q: ListQueue>(queue: &Q) -> Result<String> {
    info!("Verifying store connection with PING");
    match queue.ping().await {
        Ok(reply) => {
            info!(reply = %reply, "PING succeeded");
            Ok(reply)
        }
        Err(e) => {
            error!("Failed to reach the store: {}", e);
            error!("Ensure the store URL and token are correct and the database is reachable");
            if e.is_network() {
                error!("This looks like a network or DNS problem, check connectivity and DNS settings");
            }
            Err(e)
        }
    }
}
