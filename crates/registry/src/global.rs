//! Process-wide provider chain.
//!
//! Mirrors the package-level registration API for hosts that prefer a single
//! shared chain over passing a [`ProviderChain`] around. Register providers
//! during startup, before the first lookup.

use std::sync::Arc;

use formation_types::ResourceProperties;
use once_cell::sync::Lazy;

use crate::{ProviderChain, ResourceFactory, ResourceProvider};

static GLOBAL_CHAIN: Lazy<Arc<ProviderChain>> = Lazy::new(|| Arc::new(ProviderChain::new()));

/// Handle to the process-wide chain.
pub fn global_chain() -> Arc<ProviderChain> {
    Arc::clone(&GLOBAL_CHAIN)
}

/// Append a closure provider to the process-wide chain.
///
/// Intended for startup-time use only. Providers are never removed, and a
/// provider registered earlier shadows later ones claiming the same kind.
pub fn register_provider<F>(provider: F)
where
    F: Fn(&str) -> Option<Box<dyn ResourceProperties>> + Send + Sync + 'static,
{
    GLOBAL_CHAIN.register_fn(provider);
}

/// Append a provider value (for example a
/// [`ManifestProvider`](crate::ManifestProvider)) to the process-wide chain.
pub fn register_resource_provider<P>(provider: P)
where
    P: ResourceProvider + 'static,
{
    GLOBAL_CHAIN.register(provider);
}

/// Factory bound to the process-wide chain.
pub fn global_factory() -> ResourceFactory {
    ResourceFactory::new(global_chain())
}

/// Resolve `kind` through the built-in catalog and then the process-wide chain.
pub fn new_resource_by_type(kind: &str) -> Option<Box<dyn ResourceProperties>> {
    global_factory().create(kind)
}
