use std::collections::HashMap;

use async_trait::async_trait;
use aws_sdk_sns::types::MessageAttributeValue;

use crate::error::BoxError;

/// A single message attribute forwarded with a publish request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageAttribute {
    /// SNS attribute data type (`String`, `Number`, or `Binary`).
    pub data_type: String,
    /// Attribute value, transported as a string.
    pub value: String,
}

impl MessageAttribute {
    /// Create an attribute with an explicit data type.
    pub fn new(data_type: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            data_type: data_type.into(),
            value: value.into(),
        }
    }

    /// Create a `String`-typed attribute.
    pub fn string(value: impl Into<String>) -> Self {
        Self::new("String", value)
    }
}

/// Provider request for one publish call: the topic ARN, the message body,
/// and the optional publish fields SNS accepts alongside them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PublishRequest {
    pub topic_arn: String,
    pub message: String,
    pub subject: Option<String>,
    pub message_structure: Option<String>,
    pub message_attributes: HashMap<String, MessageAttribute>,
    pub message_group_id: Option<String>,
    pub message_dedup_id: Option<String>,
}

/// Provider response for one publish call, returned to the caller unmodified.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PublishOutput {
    /// Unique identifier assigned to the published message.
    pub message_id: Option<String>,
    /// Sequence number (FIFO topics only).
    pub sequence_number: Option<String>,
}

/// Network client responsible for delivering one publish request to SNS.
///
/// [`aws_sdk_sns::Client`] is the production implementation; transport,
/// signing, connection pooling, and timeouts are entirely its concern. Tests
/// substitute a recording stub.
#[async_trait]
pub trait SnsApi: Send + Sync {
    /// Deliver one publish request. Exactly one network operation, no retry.
    async fn send(&self, request: PublishRequest) -> Result<PublishOutput, BoxError>;
}

#[async_trait]
impl SnsApi for aws_sdk_sns::Client {
    async fn send(&self, request: PublishRequest) -> Result<PublishOutput, BoxError> {
        let mut call = self
            .publish()
            .topic_arn(request.topic_arn)
            .message(request.message);

        if let Some(subject) = request.subject {
            call = call.subject(subject);
        }
        if let Some(structure) = request.message_structure {
            call = call.message_structure(structure);
        }
        for (name, attribute) in request.message_attributes {
            let value = MessageAttributeValue::builder()
                .data_type(attribute.data_type)
                .string_value(attribute.value)
                .build()?;
            call = call.message_attributes(name, value);
        }
        if let Some(group_id) = request.message_group_id {
            call = call.message_group_id(group_id);
        }
        if let Some(dedup_id) = request.message_dedup_id {
            call = call.message_deduplication_id(dedup_id);
        }

        let output = call.send().await?;

        Ok(PublishOutput {
            message_id: output.message_id().map(str::to_owned),
            sequence_number: output.sequence_number().map(str::to_owned),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn string_attribute_sets_data_type() {
        let attribute = MessageAttribute::string("green");
        assert_eq!(attribute.data_type, "String");
        assert_eq!(attribute.value, "green");
    }

    #[test]
    fn attribute_with_explicit_data_type() {
        let attribute = MessageAttribute::new("Number", "42");
        assert_eq!(attribute.data_type, "Number");
        assert_eq!(attribute.value, "42");
    }
}
