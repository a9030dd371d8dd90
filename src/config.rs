//! Configuration management for the build notifier
//!
//! The function has no configuration file; everything comes from the Lambda
//! execution environment. `figment` merges the raw `SNS_TOPIC_ARN` variable
//! with `BUILD_NOTIFIER_`-prefixed overrides on top of the defaults.

use figment::{
    providers::{Env, Serialized},
    Figment,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Name of the environment variable holding the destination topic.
pub const TOPIC_ARN_VAR: &str = "SNS_TOPIC_ARN";

/// Prefix for the optional tuning variables, e.g. `BUILD_NOTIFIER_LOG_LEVEL`.
pub const ENV_PREFIX: &str = "BUILD_NOTIFIER_";

/// The main configuration struct for the function.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Config {
    /// ARN of the SNS topic that receives the build notification.
    pub sns_topic_arn: String,
    /// The logging level used when `RUST_LOG` is not set.
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Overrides the SNS endpoint, for LocalStack and similar.
    #[serde(default)]
    pub aws_endpoint_url: Option<String>,
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to load configuration: {0}")]
    Figment(#[from] Box<figment::Error>),

    #[error("SNS_TOPIC_ARN is set but empty")]
    EmptyTopicArn,
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Defaults for everything except the topic, which has no sensible default.
#[derive(Serialize)]
struct Defaults {
    log_level: String,
}

impl Config {
    /// Returns the layered provider the configuration is extracted from.
    pub fn figment() -> Figment {
        Figment::new()
            .merge(Serialized::defaults(Defaults {
                log_level: default_log_level(),
            }))
            .merge(Env::raw().only(&[TOPIC_ARN_VAR]))
            // e.g. BUILD_NOTIFIER_LOG_LEVEL=debug; the topic only comes from SNS_TOPIC_ARN.
            .merge(Env::prefixed(ENV_PREFIX).ignore(&["sns_topic_arn"]))
    }

    /// Loads the configuration from the process environment.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_figment(Self::figment())
    }

    /// Extracts and validates a configuration from an arbitrary provider.
    pub fn from_figment(figment: Figment) -> Result<Self, ConfigError> {
        let mut config: Config = figment.extract().map_err(Box::new)?;
        config.sns_topic_arn = config.sns_topic_arn.trim().to_string();
        if config.sns_topic_arn.is_empty() {
            return Err(ConfigError::EmptyTopicArn);
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_figment_applies_defaults() {
        let figment = Figment::new()
            .merge(Serialized::defaults(Defaults {
                log_level: default_log_level(),
            }))
            .merge(("sns_topic_arn", "arn:aws:sns:us-east-1:123456789012:builds"));

        let config = Config::from_figment(figment).unwrap();

        assert_eq!(config.sns_topic_arn, "arn:aws:sns:us-east-1:123456789012:builds");
        assert_eq!(config.log_level, "info");
        assert_eq!(config.aws_endpoint_url, None);
    }

    #[test]
    fn test_blank_topic_is_rejected() {
        let figment = Figment::new().merge(("sns_topic_arn", "   "));

        let result = Config::from_figment(figment);

        assert!(matches!(result, Err(ConfigError::EmptyTopicArn)));
    }

    #[test]
    fn test_missing_topic_is_rejected() {
        let result = Config::from_figment(Figment::new());

        assert!(matches!(result, Err(ConfigError::Figment(_))));
    }
}
