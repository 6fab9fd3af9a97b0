//! Kind-name to record construction over the built-in catalog and a provider chain.

use std::sync::Arc;

use formation_types::{DecodeError, ResourceProperties};
use serde_json::Value;
use tracing::debug;

use crate::ProviderChain;

/// Turns kind names into freshly constructed resource records.
///
/// # Purpose
/// Consults the built-in catalog first and the provider chain second. A kind
/// present in the built-in catalog always yields its compiled record, no
/// matter what providers claim.
///
/// # Fields
/// - `providers`: Chain consulted when the built-in catalog misses. Shared
///   so several factories (or the process-wide one) can see the same chain.
#[derive(Debug, Clone, Default)]
pub struct ResourceFactory {
    providers: Arc<ProviderChain>,
}

impl ResourceFactory {
    /// Create a factory bound to a provider chain.
    pub fn new(providers: Arc<ProviderChain>) -> Self {
        Self { providers }
    }

    /// The provider chain this factory falls back to.
    pub fn providers(&self) -> &Arc<ProviderChain> {
        &self.providers
    }

    /// Returns a new zero-valued record for `kind`, or `None` when neither
    /// the built-in catalog nor any provider recognizes it.
    ///
    /// Every call builds a new instance; nothing is shared between calls.
    pub fn create(&self, kind: &str) -> Option<Box<dyn ResourceProperties>> {
        if let Some(record) = formation_catalog::new_builtin(kind) {
            debug!(kind, "resolved built-in resource type");
            return Some(record);
        }

        let record = self.providers.resolve(kind);
        if record.is_none() {
            debug!(kind, provider_count = self.providers.len(), "unknown resource type");
        }
        record
    }

    /// Create the record for `kind` and populate it from `raw` properties.
    ///
    /// # Errors
    /// - `DecodeError::UnknownKind` when [`create`](Self::create) returns `None`
    /// - `DecodeError::Malformed` when the properties do not fit the record
    pub fn decode_properties(&self, kind: &str, raw: &Value) -> Result<Box<dyn ResourceProperties>, DecodeError> {
        let mut record = self.create(kind).ok_or_else(|| DecodeError::unknown_kind(kind))?;
        record.decode_from(raw)?;
        Ok(record)
    }

    pub fn is_known(&self, kind: &str) -> bool {
        formation_catalog::contains(kind) || self.providers.resolve(kind).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use formation_catalog::s3::Bucket;
    use serde_json::json;

    #[test]
    fn builtin_kinds_resolve_without_providers() {
        let factory = ResourceFactory::default();
        let record = factory.create("AWS::S3::Bucket").expect("bucket");
        assert!(record.is::<Bucket>());
    }

    #[test]
    fn unknown_kind_is_absent_not_an_error() {
        let factory = ResourceFactory::default();
        assert!(factory.create("Totally::Unknown::Kind").is_none());
        assert!(factory.create("").is_none());
        assert!(!factory.is_known("Totally::Unknown::Kind"));
    }

    #[test]
    fn decode_properties_reports_unknown_kind() {
        let factory = ResourceFactory::default();
        let error = factory
            .decode_properties("Totally::Unknown::Kind", &json!({}))
            .expect_err("unknown kind");
        assert!(matches!(error, DecodeError::UnknownKind { ref kind } if kind == "Totally::Unknown::Kind"));
    }

    #[test]
    fn decode_properties_populates_builtin_record() {
        let factory = ResourceFactory::default();
        let record = factory
            .decode_properties("AWS::S3::Bucket", &json!({"Tags": {"Key": "env", "Value": "prod"}}))
            .expect("decode bucket");
        let bucket = record.downcast_ref::<Bucket>().expect("bucket");
        assert_eq!(bucket.tags.as_ref().map(|tags| tags.len()), Some(1));
    }
}
