//! Publish-only adapter over AWS SNS with host registration.
//!
//! Two pieces, trivially composed:
//!
//! - [`SnsAdapter`] — owns a long-lived SNS client handle and exposes one
//!   operation, [`publish`](SnsAdapter::publish).
//! - [`plugin::register`] — constructs an adapter from [`SnsConfig`] and
//!   attaches it to a shared [`AdapterRegistry`] under the fixed capability
//!   name `"sns"`.
//!
//! The adapter validates its two required arguments, forwards the request to
//! the injected client, and hands back the provider's response or its error
//! unchanged. There is no queuing, retry, batching, or delivery tracking;
//! transport, signing, and credential resolution belong to the AWS SDK
//! client behind the [`SnsApi`] seam.
//!
//! ```no_run
//! use sns_publish::{AdapterRegistry, PublishOptions, SnsConfig, plugin};
//!
//! # async fn example() -> Result<(), sns_publish::SnsError> {
//! let registry = AdapterRegistry::new();
//! let config = SnsConfig::new("us-east-1").with_endpoint_url("http://localhost:4575");
//! plugin::register(&registry, config).await;
//!
//! let sns = registry.get(plugin::CAPABILITY).unwrap();
//! let output = sns
//!     .publish(
//!         "arn:aws:sns:us-east-1:123456789012:MyTopic",
//!         "Hello, world!",
//!         PublishOptions::default().with_subject("Test Subject"),
//!     )
//!     .await?;
//! println!("published: {:?}", output.message_id);
//! # Ok(())
//! # }
//! ```

pub mod adapter;
pub mod auth;
pub mod client;
pub mod config;
pub mod error;
pub mod plugin;
pub mod registry;

pub use adapter::{PublishOptions, SnsAdapter};
pub use client::{MessageAttribute, PublishOutput, PublishRequest, SnsApi};
pub use config::SnsConfig;
pub use error::{BoxError, SnsError};
pub use registry::AdapterRegistry;
