use postbox::core::{DEFAULT_QUEUE, StoreConfig, startup};
use postbox::produce::{Producer, ServerConfig, server};
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{error, info};

#[tokio::main]
async fn main() -> ExitCode {
    postbox::logging::init("info");
    info!("Producer initializing");

    let config = StoreConfig::from_env();
    let context = match startup::connect(&config, DEFAULT_QUEUE).await {
        Ok(context) => context,
        Err(e) => {
            error!("Startup check failed, exiting: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let producer = Arc::new(Producer::with_queue(context));
    let shutdown = async {
        let _ = tokio::signal::ctrl_c().await;
        info!("Shutdown signal received");
    };

    match server::serve(producer, &ServerConfig::new(), shutdown).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Producer server failed: {}", e);
            ExitCode::FAILURE
        }
    }
}
