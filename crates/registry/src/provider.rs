//! Fallback constructors for kinds outside the built-in catalog.

use std::{
    fmt,
    sync::{Arc, PoisonError, RwLock},
};

use formation_types::ResourceProperties;
use tracing::debug;

/// Supplies records for kind names the built-in catalog does not know.
///
/// A provider returns `None` for every kind it does not claim. Closures of
/// the shape `Fn(&str) -> Option<Box<dyn ResourceProperties>>` are providers.
pub trait ResourceProvider: Send + Sync {
    fn provide(&self, kind: &str) -> Option<Box<dyn ResourceProperties>>;
}

impl<F> ResourceProvider for F
where
    F: Fn(&str) -> Option<Box<dyn ResourceProperties>> + Send + Sync,
{
    fn provide(&self, kind: &str) -> Option<Box<dyn ResourceProperties>> {
        self(kind)
    }
}

/// Ordered, append-only list of providers.
///
/// Resolution walks the providers in registration order and returns the
/// first record produced. Two providers claiming the same kind shadow each
/// other silently; the earlier registration wins.
///
/// Registration is meant to happen during startup, before lookups begin.
/// Interleaving is still safe: lookups iterate a snapshot taken under the
/// read lock, so a provider may call back into the chain.
#[derive(Default)]
pub struct ProviderChain {
    providers: RwLock<Vec<Arc<dyn ResourceProvider>>>,
}

impl fmt::Debug for ProviderChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderChain").field("providers", &self.len()).finish()
    }
}

impl ProviderChain {
    /// Create an empty chain.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a provider to the end of the chain.
    pub fn register<P>(&self, provider: P)
    where
        P: ResourceProvider + 'static,
    {
        self.register_shared(Arc::new(provider));
    }

    /// Append a closure provider to the end of the chain.
    ///
    /// ```rust
    /// use formation_registry::ProviderChain;
    /// use formation_types::ResourceProperties;
    ///
    /// let chain = ProviderChain::new();
    /// chain.register_fn(|_kind: &str| -> Option<Box<dyn ResourceProperties>> { None });
    /// assert_eq!(chain.len(), 1);
    /// ```
    pub fn register_fn<F>(&self, provider: F)
    where
        F: Fn(&str) -> Option<Box<dyn ResourceProperties>> + Send + Sync + 'static,
    {
        self.register(provider);
    }

    /// Append an already shared provider.
    pub fn register_shared(&self, provider: Arc<dyn ResourceProvider>) {
        let mut providers = self.providers.write().unwrap_or_else(PoisonError::into_inner);
        providers.push(provider);
        debug!(provider_count = providers.len(), "registered resource provider");
    }

    /// Ask each provider in registration order for `kind`.
    pub fn resolve(&self, kind: &str) -> Option<Box<dyn ResourceProperties>> {
        self.snapshot().iter().enumerate().find_map(|(position, provider)| {
            let record = provider.provide(kind)?;
            debug!(kind, position, "resource provider matched");
            Some(record)
        })
    }

    pub fn len(&self) -> usize {
        self.providers.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn snapshot(&self) -> Vec<Arc<dyn ResourceProvider>> {
        self.providers.read().unwrap_or_else(PoisonError::into_inner).clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use formation_types::{ResourceKind, impl_resource};
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Clone, Default, Serialize, Deserialize)]
    struct First {}

    #[derive(Debug, Clone, Default, Serialize, Deserialize)]
    struct Second {}

    impl_resource!(First, "Test::Chain::First");
    impl_resource!(Second, "Test::Chain::Second");

    fn claiming<T>(kind: &'static str) -> impl Fn(&str) -> Option<Box<dyn ResourceProperties>> + Send + Sync + 'static
    where
        T: ResourceProperties + Default + 'static,
    {
        move |requested: &str| -> Option<Box<dyn ResourceProperties>> {
            if requested == kind { Some(Box::new(T::default())) } else { None }
        }
    }

    #[test]
    fn empty_chain_resolves_nothing() {
        let chain = ProviderChain::new();
        assert!(chain.is_empty());
        assert!(chain.resolve("Totally::Unknown::Kind").is_none());
    }

    #[test]
    fn earlier_registration_wins() {
        let chain = ProviderChain::new();
        chain.register_fn(claiming::<First>("Shared::Kind::Name"));
        chain.register_fn(claiming::<Second>("Shared::Kind::Name"));

        let record = chain.resolve("Shared::Kind::Name").expect("claimed kind");
        assert_eq!(record.resource_type(), First::KIND);
    }

    #[test]
    fn later_providers_answer_kinds_earlier_ones_decline() {
        let chain = ProviderChain::new();
        chain.register_fn(claiming::<First>("Only::First::Kind"));
        chain.register_fn(claiming::<Second>("Only::Second::Kind"));

        let record = chain.resolve("Only::Second::Kind").expect("second provider");
        assert!(record.is::<Second>());
        assert_eq!(chain.len(), 2);
    }

    #[test]
    fn duplicate_registrations_are_kept() {
        let chain = ProviderChain::new();
        let shared: Arc<dyn ResourceProvider> = Arc::new(claiming::<First>("Dup::Kind::Name"));
        chain.register_shared(Arc::clone(&shared));
        chain.register_shared(shared);
        assert_eq!(chain.len(), 2);
    }

    #[test]
    fn concurrent_registration_and_resolution_keep_first_wins_order() {
        const REGISTRARS: usize = 4;
        const PER_REGISTRAR: usize = 25;

        let chain = ProviderChain::new();
        chain.register_fn(claiming::<First>("Shared::Kind::Name"));

        std::thread::scope(|scope| {
            for _ in 0..REGISTRARS {
                scope.spawn(|| {
                    for _ in 0..PER_REGISTRAR {
                        chain.register_fn(claiming::<Second>("Shared::Kind::Name"));
                    }
                });
            }
            for _ in 0..REGISTRARS {
                scope.spawn(|| {
                    for _ in 0..PER_REGISTRAR {
                        let record = chain.resolve("Shared::Kind::Name").expect("claimed kind");
                        assert!(record.is::<First>());
                        assert!(chain.resolve("Unclaimed::Kind::Name").is_none());
                    }
                });
            }
        });

        assert_eq!(chain.len(), 1 + REGISTRARS * PER_REGISTRAR);
        assert!(chain.resolve("Shared::Kind::Name").expect("claimed kind").is::<First>());
    }

    #[test]
    fn provider_may_register_during_resolution() {
        let chain = Arc::new(ProviderChain::new());
        let inner = Arc::clone(&chain);
        chain.register_fn(move |_kind: &str| -> Option<Box<dyn ResourceProperties>> {
            inner.register_fn(|_nested: &str| -> Option<Box<dyn ResourceProperties>> { None });
            None
        });

        assert!(chain.resolve("Any::Kind::Name").is_none());
        assert_eq!(chain.len(), 2);
    }
}
