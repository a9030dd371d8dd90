//! A publisher backed by Amazon SNS.

use super::{Notification, NotifyError, Publisher};
use crate::config::Config;
use async_trait::async_trait;
use aws_config::BehaviorVersion;
use aws_sdk_sns::Client;
use tracing::{debug, info, instrument};

/// Publishes notifications to a single SNS topic.
#[derive(Clone, Debug)]
pub struct SnsPublisher {
    client: Client,
    topic_arn: String,
}

impl SnsPublisher {
    /// Creates a new `SnsPublisher` around an existing client.
    pub fn new(client: Client, topic_arn: impl Into<String>) -> Self {
        Self {
            client,
            topic_arn: topic_arn.into(),
        }
    }

    /// Builds a client from the ambient credential chain of the execution
    /// environment, honouring an endpoint override when one is configured.
    pub async fn from_config(config: &Config) -> Self {
        let mut loader = aws_config::defaults(BehaviorVersion::latest());
        if let Some(endpoint) = &config.aws_endpoint_url {
            debug!(endpoint = %endpoint, "Using SNS endpoint override");
            loader = loader.endpoint_url(endpoint);
        }
        let sdk_config = loader.load().await;
        Self::new(Client::new(&sdk_config), config.sns_topic_arn.clone())
    }

    /// The topic every notification is published to.
    pub fn topic_arn(&self) -> &str {
        &self.topic_arn
    }
}

#[async_trait]
impl Publisher for SnsPublisher {
    #[instrument(skip(self, notification), fields(topic_arn = %self.topic_arn))]
    async fn publish(&self, notification: &Notification) -> Result<String, NotifyError> {
        let output = self
            .client
            .publish()
            .topic_arn(&self.topic_arn)
            .subject(&notification.subject)
            .message(&notification.message)
            .send()
            .await
            .map_err(aws_sdk_sns::Error::from)?;

        let message_id = output.message_id().unwrap_or_default().to_string();
        info!(message_id = %message_id, "Published notification to SNS.");
        Ok(message_id)
    }
}
