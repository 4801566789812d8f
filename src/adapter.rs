use std::collections::HashMap;
use std::sync::Arc;

use tracing::{debug, error, info, instrument};

use crate::auth::build_sdk_config;
use crate::client::{MessageAttribute, PublishOutput, PublishRequest, SnsApi};
use crate::config::SnsConfig;
use crate::error::SnsError;

/// Optional publish fields forwarded to the provider request alongside the
/// topic ARN and message body.
#[derive(Debug, Clone, Default)]
pub struct PublishOptions {
    /// Message subject (used for email endpoints).
    pub subject: Option<String>,

    /// Set to `json` to deliver per-protocol payloads from a JSON message body.
    pub message_structure: Option<String>,

    /// Message attributes forwarded with the request.
    pub message_attributes: HashMap<String, MessageAttribute>,

    /// Message group id (FIFO topics).
    pub message_group_id: Option<String>,

    /// Message deduplication id (FIFO topics).
    pub message_dedup_id: Option<String>,
}

impl PublishOptions {
    /// Set the message subject.
    #[must_use]
    pub fn with_subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = Some(subject.into());
        self
    }

    /// Set the message structure.
    #[must_use]
    pub fn with_message_structure(mut self, structure: impl Into<String>) -> Self {
        self.message_structure = Some(structure.into());
        self
    }

    /// Add a message attribute.
    #[must_use]
    pub fn with_attribute(mut self, name: impl Into<String>, attribute: MessageAttribute) -> Self {
        self.message_attributes.insert(name.into(), attribute);
        self
    }

    /// Set the message group id (FIFO topics).
    #[must_use]
    pub fn with_message_group_id(mut self, group_id: impl Into<String>) -> Self {
        self.message_group_id = Some(group_id.into());
        self
    }

    /// Set the message deduplication id (FIFO topics).
    #[must_use]
    pub fn with_message_dedup_id(mut self, dedup_id: impl Into<String>) -> Self {
        self.message_dedup_id = Some(dedup_id.into());
        self
    }
}

/// Publish-only adapter over an SNS network client.
///
/// Holds one long-lived client handle, shared read-only across calls.
/// Concurrent publishes are independent; the adapter adds no queueing,
/// timeout, or cancellation of its own.
pub struct SnsAdapter {
    client: Arc<dyn SnsApi>,
}

impl std::fmt::Debug for SnsAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SnsAdapter")
            .field("client", &"<SnsClient>")
            .finish()
    }
}

impl SnsAdapter {
    /// Create a new adapter by building an AWS SDK client from `config`.
    ///
    /// Missing options fall back to defaults (`us-east-1`, the SDK default
    /// credential chain); a partial static credential pair is ignored.
    /// Construction never fails.
    pub async fn new(config: SnsConfig) -> Self {
        let sdk_config = build_sdk_config(&config).await;
        Self {
            client: Arc::new(aws_sdk_sns::Client::new(&sdk_config)),
        }
    }

    /// Create an adapter around a pre-built client.
    ///
    /// The supplied instance is used verbatim; no construction options are
    /// consulted on this path.
    pub fn with_client(client: Arc<dyn SnsApi>) -> Self {
        Self { client }
    }

    /// The underlying client handle. Intended for inspection and tests.
    pub fn client(&self) -> &Arc<dyn SnsApi> {
        &self.client
    }

    /// Publish one message to one topic.
    ///
    /// Fails with [`SnsError::MissingArguments`] before any network call when
    /// `topic_arn` or `message` is empty. On success the provider response is
    /// returned unmodified; on failure the provider error is logged once and
    /// propagated unchanged, leaving retry decisions to the caller.
    #[instrument(skip_all, fields(topic_arn = %topic_arn))]
    pub async fn publish(
        &self,
        topic_arn: &str,
        message: &str,
        options: PublishOptions,
    ) -> Result<PublishOutput, SnsError> {
        if topic_arn.is_empty() || message.is_empty() {
            return Err(SnsError::MissingArguments);
        }

        debug!("publishing to SNS topic");

        let request = PublishRequest {
            topic_arn: topic_arn.to_owned(),
            message: message.to_owned(),
            subject: options.subject,
            message_structure: options.message_structure,
            message_attributes: options.message_attributes,
            message_group_id: options.message_group_id,
            message_dedup_id: options.message_dedup_id,
        };

        match self.client.send(request).await {
            Ok(output) => {
                let message_id = output.message_id.as_deref().unwrap_or("unknown");
                info!(message_id = %message_id, "SNS message published");
                Ok(output)
            }
            Err(e) => {
                error!(error = %e, "failed to publish message");
                Err(SnsError::Publish(e))
            }
        }
    }
}


#[cfg(all(test, feature = "integration"))]
mod integration_tests {
    use super::*;

    #[tokio::test]
    async fn new_builds_a_client_from_config() {
        let adapter = SnsAdapter::new(SnsConfig::new("ap-southeast-1")).await;
        // The handle exists and is usable as a trait object.
        let _client: &Arc<dyn SnsApi> = adapter.client();
    }

    #[tokio::test]
    async fn new_accepts_partial_credentials() {
        let config = SnsConfig::default().with_access_key("custom_access_key");
        let _adapter = SnsAdapter::new(config).await;
    }
}
