//! build-notifier - Lambda function announcing pushed Docker images
//!
//! Publishes a fixed notification to the SNS topic named by `SNS_TOPIC_ARN`
//! each time it is invoked.

use anyhow::{Context as _, Result};
use build_notifier::{config::Config, BuildNotifier, SnsPublisher};
use lambda_runtime::{service_fn, LambdaEvent};
use serde_json::Value;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::load().context("invalid function configuration")?;

    // CloudWatch stamps each line itself; colour codes would only add noise.
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .without_time()
        .init();

    let publisher = Arc::new(SnsPublisher::from_config(&config).await);
    info!(topic_arn = %publisher.topic_arn(), "build-notifier starting up...");

    let notifier = BuildNotifier::new(publisher);
    let notifier = &notifier;

    lambda_runtime::run(service_fn(move |event: LambdaEvent<Value>| async move {
        notifier
            .handle(event)
            .await
            .map_err(lambda_runtime::Error::from)
    }))
    .await
    .map_err(|e| anyhow::anyhow!(e))
}
