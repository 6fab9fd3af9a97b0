//! Resource factory for the formation catalog.
//!
//! A [`ResourceFactory`] turns a kind name such as `AWS::S3::Bucket` into a
//! fresh record. The built-in catalog is consulted first; kinds it does not
//! know fall through to an ordered [`ProviderChain`].
//!
//! Providers can be closures, [`ManifestProvider`]s loaded from catalog
//! manifests, or any other [`ResourceProvider`]. A [`RegistryConfig`] lists
//! the manifests to load at startup.

pub mod config;
pub mod entry;
pub mod factory;
pub mod global;
pub mod manifest;
pub mod provider;

pub use config::{ConfigError, ManifestSource, RegistryConfig, default_config_path, expand_tilde};
pub use entry::ResourceEntry;
pub use factory::ResourceFactory;
pub use formation_types::DecodeError;
pub use global::{global_chain, global_factory, new_resource_by_type, register_provider, register_resource_provider};
pub use manifest::{CatalogManifest, GenericResource, ManifestError, ManifestKind, ManifestProvider, validate_kind_name};
pub use provider::{ProviderChain, ResourceProvider};
