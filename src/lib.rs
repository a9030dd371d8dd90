/// build-notifier - announces finished CI/CD image builds
///
/// This library provides the Lambda handler that publishes a fixed
/// build-complete notification to an SNS topic.
pub mod config;
pub mod handler;
pub mod notification;

pub use handler::{BuildNotifier, InvocationResponse};
pub use notification::{Notification, NotifyError, Publisher, SnsPublisher};
