//! Catalog manifests: resource kinds declared as data and served by a provider.
//!
//! A manifest lists extra kind names together with the properties that hold
//! repeatable sub-objects. [`ManifestProvider`] answers exactly those kinds
//! with a [`GenericResource`], whose properties stay as JSON.

use std::{
    any::Any,
    collections::HashSet,
    fs,
    path::{Path, PathBuf},
    sync::Arc,
};

use formation_types::{DecodeError, ResourceProperties, decode_collection, decode_element, decode_record};
use indexmap::IndexMap;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;
use tracing::debug;

use crate::ResourceProvider;

static KIND_NAME_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9_]+(::[A-Za-z0-9_]+)+$").expect("kind name regex should compile"));

/// A set of kinds declared outside the compiled catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogManifest {
    #[serde(default)]
    pub kinds: Vec<ManifestKind>,
}

/// One declared kind.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestKind {
    /// Kind name, for example `Custom::Acme::Widget`.
    pub name: String,
    /// Properties normalized to arrays when decoded.
    #[serde(default)]
    pub collections: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Errors raised while loading or validating a manifest.
#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("failed to read manifest {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON manifest: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid YAML manifest: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("invalid kind name '{name}': expected segments separated by '::'")]
    InvalidKindName { name: String },

    #[error("kind '{name}' is declared more than once")]
    DuplicateKind { name: String },
}

/// Validate a kind name such as `AWS::S3::Bucket`.
pub fn validate_kind_name(name: &str) -> Result<(), ManifestError> {
    if !KIND_NAME_REGEX.is_match(name) {
        return Err(ManifestError::InvalidKindName { name: name.to_string() });
    }
    Ok(())
}

impl CatalogManifest {
    /// Read a manifest file; `.yaml` and `.yml` files parse as YAML, everything else as JSON.
    pub fn from_path(path: &Path) -> Result<Self, ManifestError> {
        let content = fs::read_to_string(path).map_err(|source| ManifestError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let is_yaml = path
            .extension()
            .and_then(|extension| extension.to_str())
            .is_some_and(|extension| extension.eq_ignore_ascii_case("yaml") || extension.eq_ignore_ascii_case("yml"));
        if is_yaml { Self::from_yaml_str(&content) } else { Self::from_json_str(&content) }
    }

    pub fn from_json_str(content: &str) -> Result<Self, ManifestError> {
        Ok(serde_json::from_str(content)?)
    }

    pub fn from_yaml_str(content: &str) -> Result<Self, ManifestError> {
        Ok(serde_yaml::from_str(content)?)
    }

    /// Check every kind name and reject duplicates.
    pub fn validate(&self) -> Result<(), ManifestError> {
        let mut seen = HashSet::new();
        for kind in &self.kinds {
            validate_kind_name(&kind.name)?;
            if !seen.insert(kind.name.as_str()) {
                return Err(ManifestError::DuplicateKind { name: kind.name.clone() });
            }
        }
        Ok(())
    }
}

/// Provider serving the kinds declared in one manifest.
#[derive(Debug, Clone, Default)]
pub struct ManifestProvider {
    kinds: IndexMap<String, Arc<ManifestKind>>,
}

impl ManifestProvider {
    /// Build a provider from a validated manifest.
    pub fn new(manifest: CatalogManifest) -> Result<Self, ManifestError> {
        manifest.validate()?;
        let kinds = manifest
            .kinds
            .into_iter()
            .map(|kind| (kind.name.clone(), Arc::new(kind)))
            .collect();
        Ok(Self { kinds })
    }

    /// Load and validate a manifest file.
    pub fn load(path: &Path) -> Result<Self, ManifestError> {
        let provider = Self::new(CatalogManifest::from_path(path)?)?;
        debug!(path = %path.display(), kind_count = provider.kinds.len(), "loaded catalog manifest");
        Ok(provider)
    }

    /// Declared kind names in manifest order.
    pub fn kinds(&self) -> impl Iterator<Item = &str> {
        self.kinds.keys().map(String::as_str)
    }
}

impl ResourceProvider for ManifestProvider {
    fn provide(&self, kind: &str) -> Option<Box<dyn ResourceProperties>> {
        let definition = self.kinds.get(kind)?;
        Some(Box::new(GenericResource::new(Arc::clone(definition))))
    }
}

/// A record for a manifest-declared kind. Properties are kept as JSON.
#[derive(Debug, Clone)]
pub struct GenericResource {
    definition: Arc<ManifestKind>,
    properties: Map<String, Value>,
}

impl GenericResource {
    pub fn new(definition: Arc<ManifestKind>) -> Self {
        Self {
            definition,
            properties: Map::new(),
        }
    }

    pub fn definition(&self) -> &ManifestKind {
        &self.definition
    }

    pub fn properties(&self) -> &Map<String, Value> {
        &self.properties
    }

    pub fn property(&self, name: &str) -> Option<&Value> {
        self.properties.get(name)
    }
}

impl ResourceProperties for GenericResource {
    fn resource_type(&self) -> &str {
        &self.definition.name
    }

    fn decode_from(&mut self, raw: &Value) -> Result<(), DecodeError> {
        let mut properties: Map<String, Value> = decode_record(raw)?;
        for name in &self.definition.collections {
            if let Some(value) = properties.get_mut(name).filter(|value| !value.is_null()) {
                let items = decode_collection(value, decode_element::<Value>)?;
                *value = Value::Array(items);
            }
        }
        self.properties = properties;
        Ok(())
    }

    fn to_value(&self) -> Result<Value, DecodeError> {
        Ok(Value::Object(self.properties.clone()))
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn clone_boxed(&self) -> Box<dyn ResourceProperties> {
        Box::new(self.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io::Write;

    fn widget_manifest() -> CatalogManifest {
        CatalogManifest {
            kinds: vec![ManifestKind {
                name: "Custom::Acme::Widget".into(),
                collections: vec!["Parts".into()],
                description: None,
            }],
        }
    }

    #[test]
    fn validate_kind_name_accepts_namespaced_names() {
        assert!(validate_kind_name("AWS::S3::Bucket").is_ok());
        assert!(validate_kind_name("Custom::goAWS::HelloWorldResource").is_ok());
        assert!(validate_kind_name("Custom::my_widget").is_ok());
    }

    #[test]
    fn validate_kind_name_rejects_malformed_names() {
        assert!(validate_kind_name("").is_err());
        assert!(validate_kind_name("Bucket").is_err());
        assert!(validate_kind_name("AWS::S3::").is_err());
        assert!(validate_kind_name("AWS:S3:Bucket").is_err());
        assert!(validate_kind_name("AWS::S3 ::Bucket").is_err());
    }

    #[test]
    fn duplicate_kinds_are_rejected() {
        let mut manifest = widget_manifest();
        manifest.kinds.push(manifest.kinds[0].clone());
        assert!(matches!(ManifestProvider::new(manifest), Err(ManifestError::DuplicateKind { .. })));
    }

    #[test]
    fn provider_answers_only_declared_kinds() {
        let provider = ManifestProvider::new(widget_manifest()).expect("valid manifest");
        let record = provider.provide("Custom::Acme::Widget").expect("declared kind");
        assert_eq!(record.resource_type(), "Custom::Acme::Widget");
        assert!(provider.provide("Custom::Acme::Gadget").is_none());
    }

    #[test]
    fn declared_collections_are_normalized() {
        let provider = ManifestProvider::new(widget_manifest()).expect("valid manifest");
        let mut record = provider.provide("Custom::Acme::Widget").expect("declared kind");
        record
            .decode_from(&json!({"Name": "w", "Parts": {"Id": 1}, "Other": {"Id": 2}}))
            .expect("decode widget");

        let widget = record.downcast_ref::<GenericResource>().expect("generic record");
        assert_eq!(widget.property("Parts"), Some(&json!([{"Id": 1}])));
        assert_eq!(widget.property("Other"), Some(&json!({"Id": 2})));
    }

    #[test]
    fn non_object_properties_are_malformed() {
        let provider = ManifestProvider::new(widget_manifest()).expect("valid manifest");
        let mut record = provider.provide("Custom::Acme::Widget").expect("declared kind");
        assert!(matches!(record.decode_from(&json!(["x"])), Err(DecodeError::Malformed(_))));
    }

    #[test]
    fn loads_yaml_manifest_from_disk() {
        let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().expect("temp file");
        writeln!(file, "kinds:\n  - name: Custom::Acme::Widget\n    collections: [Parts]").expect("write manifest");

        let provider = ManifestProvider::load(file.path()).expect("load manifest");
        assert_eq!(provider.kinds().collect::<Vec<_>>(), vec!["Custom::Acme::Widget"]);
    }

    #[test]
    fn missing_manifest_reports_path() {
        let error = ManifestProvider::load(Path::new("/nonexistent/formation/manifest.json")).expect_err("missing file");
        assert!(error.to_string().contains("/nonexistent/formation/manifest.json"));
    }
}
