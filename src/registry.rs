use std::sync::Arc;

use dashmap::DashMap;

use crate::adapter::SnsAdapter;

/// Named registry of adapters, shared with a hosting application.
///
/// Hosts embed one registry in their application state; the registration
/// shim attaches capabilities by name and lookups hand out cheap clones of
/// the shared handle. Safe to use from concurrent callers.
#[derive(Debug, Default)]
pub struct AdapterRegistry {
    adapters: DashMap<String, Arc<SnsAdapter>>,
}

impl AdapterRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            adapters: DashMap::new(),
        }
    }

    /// Attach `adapter` under `name`, replacing any previous entry.
    pub fn register(&self, name: impl Into<String>, adapter: Arc<SnsAdapter>) {
        self.adapters.insert(name.into(), adapter);
    }

    /// Look up a capability by name.
    pub fn get(&self, name: &str) -> Option<Arc<SnsAdapter>> {
        self.adapters.get(name).map(|entry| Arc::clone(entry.value()))
    }

    /// Whether a capability is registered under `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.adapters.contains_key(name)
    }

    /// Number of registered capabilities.
    pub fn len(&self) -> usize {
        self.adapters.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.adapters.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;

    use super::*;
    use crate::client::{PublishOutput, PublishRequest, SnsApi};
    use crate::error::BoxError;

    struct StubClient;

    #[async_trait]
    impl SnsApi for StubClient {
        async fn send(&self, _request: PublishRequest) -> Result<PublishOutput, BoxError> {
            Ok(PublishOutput::default())
        }
    }

    fn stub_adapter() -> Arc<SnsAdapter> {
        Arc::new(SnsAdapter::with_client(Arc::new(StubClient)))
    }

    #[test]
    fn new_registry_is_empty() {
        let registry = AdapterRegistry::new();
        assert!(registry.is_empty());
        assert_eq!(registry.len(), 0);
    }

    #[test]
    fn register_and_get() {
        let registry = AdapterRegistry::new();
        let adapter = stub_adapter();

        registry.register("sns", Arc::clone(&adapter));

        let found = registry.get("sns").unwrap();
        assert!(Arc::ptr_eq(&found, &adapter));
        assert!(registry.contains("sns"));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn get_unknown_name_returns_none() {
        let registry = AdapterRegistry::new();
        assert!(registry.get("sns").is_none());
        assert!(!registry.contains("sns"));
    }

    #[test]
    fn reregistration_replaces_entry() {
        let registry = AdapterRegistry::new();
        let first = stub_adapter();
        let second = stub_adapter();

        registry.register("sns", Arc::clone(&first));
        registry.register("sns", Arc::clone(&second));

        let found = registry.get("sns").unwrap();
        assert!(Arc::ptr_eq(&found, &second));
        assert_eq!(registry.len(), 1);
    }
}
