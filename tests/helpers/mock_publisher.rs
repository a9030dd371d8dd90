//! A mock publisher for testing the handler without SNS.

use async_trait::async_trait;
use build_notifier::{Notification, NotifyError, Publisher};
use std::sync::{Arc, Mutex};

#[derive(Clone, Debug, Default)]
pub struct MockPublisher {
    pub sent: Arc<Mutex<Vec<Notification>>>,
    pub fail: bool,
}

impl MockPublisher {
    pub fn new() -> Self {
        Self::default()
    }

    /// A publisher whose every call fails with a service error.
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn sent(&self) -> Vec<Notification> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl Publisher for MockPublisher {
    async fn publish(&self, notification: &Notification) -> Result<String, NotifyError> {
        self.sent.lock().unwrap().push(notification.clone());
        if self.fail {
            let err = aws_sdk_sns::types::error::NotFoundException::builder()
                .message("Topic does not exist")
                .build();
            return Err(NotifyError::Sns(aws_sdk_sns::Error::NotFoundException(err)));
        }
        Ok(format!("message-{}", self.sent.lock().unwrap().len()))
    }
}
