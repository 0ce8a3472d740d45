use postbox::consume::{Consumer, ConsumerConfig};
use postbox::core::{DEFAULT_QUEUE, StoreConfig, startup};
use std::process::ExitCode;
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

#[tokio::main]
async fn main() -> ExitCode {
    postbox::logging::init("info");
    info!("Consumer initializing");

    let config = StoreConfig::from_env();
    let context = match startup::connect(&config, DEFAULT_QUEUE).await {
        Ok(context) => context,
        Err(e) => {
            error!("Startup check failed, exiting: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let cancel = CancellationToken::new();
    let on_signal = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("Shutdown signal received");
            on_signal.cancel();
        }
    });

    let consumer = Consumer::logging(context).with_config(ConsumerConfig::new());
    match consumer.run(cancel).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Consumer failed: {}", e);
            ExitCode::FAILURE
        }
    }
}
