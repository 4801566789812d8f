use std::sync::Arc;

use tracing::info;

use crate::adapter::SnsAdapter;
use crate::client::SnsApi;
use crate::config::SnsConfig;
use crate::registry::AdapterRegistry;

/// Capability name the adapter is registered under.
pub const CAPABILITY: &str = "sns";

/// Construct an adapter from `config` and attach it to `registry` under
/// [`CAPABILITY`], so hosting code can publish without re-constructing a
/// client. Returns the registered handle.
pub async fn register(registry: &AdapterRegistry, config: SnsConfig) -> Arc<SnsAdapter> {
    let adapter = Arc::new(SnsAdapter::new(config).await);
    registry.register(CAPABILITY, Arc::clone(&adapter));
    info!(capability = CAPABILITY, "SNS adapter registered");
    adapter
}

/// Attach an adapter around a pre-built client under [`CAPABILITY`].
///
/// Mirrors [`register`] for hosts that already own a client instance; no
/// construction options are consulted.
pub fn register_with_client(
    registry: &AdapterRegistry,
    client: Arc<dyn SnsApi>,
) -> Arc<SnsAdapter> {
    let adapter = Arc::new(SnsAdapter::with_client(client));
    registry.register(CAPABILITY, Arc::clone(&adapter));
    info!(capability = CAPABILITY, "SNS adapter registered");
    adapter
}
