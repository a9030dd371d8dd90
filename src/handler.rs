//! The Lambda entry point logic.
//!
//! Every invocation publishes the same build-complete notification and
//! answers with a 200 status. The incoming event is only read for logging.

use crate::notification::{Notification, NotifyError, Publisher};
use lambda_runtime::LambdaEvent;
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, error, info, instrument};

/// The value returned to the runtime after a successful invocation.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct InvocationResponse {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
}

impl InvocationResponse {
    pub fn ok() -> Self {
        Self { status_code: 200 }
    }
}

/// Publishes a build notification for each invocation.
pub struct BuildNotifier<P: Publisher> {
    publisher: Arc<P>,
}

impl<P: Publisher> BuildNotifier<P> {
    /// Creates a new `BuildNotifier`.
    pub fn new(publisher: Arc<P>) -> Self {
        Self { publisher }
    }

    /// Handles one invocation.
    ///
    /// A publish failure is returned as-is so the runtime reports the
    /// invocation as failed.
    #[instrument(skip_all, fields(request_id = %event.context.request_id))]
    pub async fn handle(
        &self,
        event: LambdaEvent<Value>,
    ) -> Result<InvocationResponse, NotifyError> {
        if let Some(source) = event_source(&event.payload) {
            debug!(source = %source, "Received build event");
        }

        let notification = Notification::build_complete();
        match self.publisher.publish(&notification).await {
            Ok(message_id) => {
                info!(message_id = %message_id, "Build notification sent.");
                Ok(InvocationResponse::ok())
            }
            Err(e) => {
                error!(error = %e, "Failed to send build notification");
                Err(e)
            }
        }
    }
}

/// Extracts the `source` field of an EventBridge-style event, if any.
fn event_source(payload: &Value) -> Option<&str> {
    payload.get("source").and_then(Value::as_str)
}
