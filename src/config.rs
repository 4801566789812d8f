use serde::{Deserialize, Serialize};

fn default_region() -> String {
    "us-east-1".to_owned()
}

/// Construction options for the SNS adapter.
///
/// Every field is optional from the caller's point of view: the region falls
/// back to `us-east-1`, credentials fall back to the SDK default credential
/// chain, and the endpoint override only matters for local development
/// (e.g. `LocalStack`). Construction never fails on missing options.
#[derive(Clone, Serialize, Deserialize)]
pub struct SnsConfig {
    /// AWS region (e.g. `"us-east-1"`).
    #[serde(default = "default_region")]
    pub region: String,

    /// Static access key id. Only used when `secret_key` is also set.
    #[serde(default)]
    pub access_key: Option<String>,

    /// Static secret access key. Only used when `access_key` is also set.
    #[serde(default)]
    pub secret_key: Option<String>,

    /// Optional endpoint URL override for local development (e.g. `LocalStack`).
    #[serde(default)]
    pub endpoint_url: Option<String>,
}

impl std::fmt::Debug for SnsConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SnsConfig")
            .field("region", &self.region)
            .field("access_key", &self.access_key)
            .field("secret_key", &self.secret_key.as_ref().map(|_| "[REDACTED]"))
            .field("endpoint_url", &self.endpoint_url)
            .finish()
    }
}

impl SnsConfig {
    /// Create a new `SnsConfig` with the given region.
    pub fn new(region: impl Into<String>) -> Self {
        Self {
            region: region.into(),
            access_key: None,
            secret_key: None,
            endpoint_url: None,
        }
    }

    /// Set the static access key id.
    #[must_use]
    pub fn with_access_key(mut self, access_key: impl Into<String>) -> Self {
        self.access_key = Some(access_key.into());
        self
    }

    /// Set the static secret access key.
    #[must_use]
    pub fn with_secret_key(mut self, secret_key: impl Into<String>) -> Self {
        self.secret_key = Some(secret_key.into());
        self
    }

    /// Set an endpoint URL override for local development.
    #[must_use]
    pub fn with_endpoint_url(mut self, endpoint_url: impl Into<String>) -> Self {
        self.endpoint_url = Some(endpoint_url.into());
        self
    }

    /// The static credential pair, if fully configured.
    ///
    /// A key supplied without its counterpart is ignored and the SDK default
    /// credential chain applies instead.
    pub fn static_credentials(&self) -> Option<(&str, &str)> {
        match (self.access_key.as_deref(), self.secret_key.as_deref()) {
            (Some(access_key), Some(secret_key)) => Some((access_key, secret_key)),
            _ => None,
        }
    }
}

impl Default for SnsConfig {
    fn default() -> Self {
        Self {
            region: default_region(),
            access_key: None,
            secret_key: None,
            endpoint_url: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_config_sets_region() {
        let config = SnsConfig::new("ap-southeast-1");
        assert_eq!(config.region, "ap-southeast-1");
        assert!(config.access_key.is_none());
        assert!(config.secret_key.is_none());
        assert!(config.endpoint_url.is_none());
    }

    #[test]
    fn default_config_falls_back_to_us_east_1() {
        let config = SnsConfig::default();
        assert_eq!(config.region, "us-east-1");
    }

    #[test]
    fn with_endpoint_url_sets_value() {
        let config = SnsConfig::default().with_endpoint_url("http://localhost:4575");
        assert_eq!(
            config.endpoint_url.as_deref(),
            Some("http://localhost:4575")
        );
    }

    #[test]
    fn static_credentials_requires_both_halves() {
        let config = SnsConfig::default()
            .with_access_key("custom_access_key")
            .with_secret_key("custom_secret_key");
        assert_eq!(
            config.static_credentials(),
            Some(("custom_access_key", "custom_secret_key"))
        );
    }

    #[test]
    fn partial_credential_pair_is_ignored() {
        let config = SnsConfig::default().with_access_key("custom_access_key");
        assert!(config.static_credentials().is_none());

        let config = SnsConfig::default().with_secret_key("custom_secret_key");
        assert!(config.static_credentials().is_none());
    }

    #[test]
    fn debug_redacts_secret_key() {
        let config = SnsConfig::default()
            .with_access_key("AKIAEXAMPLE")
            .with_secret_key("super-secret-value");
        let debug = format!("{config:?}");
        assert!(debug.contains("[REDACTED]"));
        assert!(!debug.contains("super-secret-value"));
    }

    #[test]
    fn serde_roundtrip() {
        let config = SnsConfig::new("eu-west-1").with_endpoint_url("http://localhost:4575");

        let json = serde_json::to_string(&config).unwrap();
        let deserialized: SnsConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(deserialized.region, "eu-west-1");
        assert_eq!(
            deserialized.endpoint_url.as_deref(),
            Some("http://localhost:4575")
        );
    }

    #[test]
    fn deserialize_applies_region_default() {
        let config: SnsConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.region, "us-east-1");
    }
}
