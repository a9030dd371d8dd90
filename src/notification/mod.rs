//! The notification sent when an image build completes.
//!
//! The content is fixed. Delivery goes through the [`Publisher`] trait so the
//! handler can be exercised without a live SNS endpoint.

pub mod sns;

use async_trait::async_trait;
use thiserror::Error;

pub use sns::SnsPublisher;

pub const BUILD_COMPLETE_SUBJECT: &str = "CI/CD Notification";
pub const BUILD_COMPLETE_MESSAGE: &str = "New Docker image built and pushed successfully!";

/// A message to be delivered to the configured topic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    /// Subject line, used by email subscriptions.
    pub subject: String,
    /// Message body delivered to every subscriber.
    pub message: String,
}

impl Notification {
    /// The notification announcing a successfully pushed image.
    pub fn build_complete() -> Self {
        Self {
            subject: BUILD_COMPLETE_SUBJECT.to_string(),
            message: BUILD_COMPLETE_MESSAGE.to_string(),
        }
    }
}

#[derive(Error, Debug)]
pub enum NotifyError {
    #[error("SNS publish failed: {0}")]
    Sns(#[from] aws_sdk_sns::Error),
}

/// A destination that notifications can be published to.
#[async_trait]
pub trait Publisher: Send + Sync {
    /// Publishes a single notification, returning the message id assigned by the service.
    async fn publish(&self, notification: &Notification) -> Result<String, NotifyError>;
}
