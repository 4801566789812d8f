use aws_config::Region;
use aws_credential_types::Credentials;
use tracing::debug;

use crate::config::SnsConfig;

/// Build an AWS SDK configuration from the given [`SnsConfig`].
///
/// Uses the SDK default credential chain unless a full static key pair is
/// configured, and optionally overrides the endpoint URL for local
/// development (e.g. `LocalStack`).
pub async fn build_sdk_config(config: &SnsConfig) -> aws_config::SdkConfig {
    let mut loader = aws_config::from_env().region(Region::new(config.region.clone()));

    if let Some((access_key, secret_key)) = config.static_credentials() {
        debug!("using static credentials");
        loader = loader.credentials_provider(Credentials::from_keys(access_key, secret_key, None));
    }

    if let Some(endpoint) = &config.endpoint_url {
        debug!(endpoint = %endpoint, "using custom AWS endpoint");
        loader = loader.endpoint_url(endpoint);
    }

    loader.load().await
}
