use std::{io::Write, sync::Arc};

use formation_catalog::s3::Bucket;
use formation_registry::{
    GenericResource, ManifestProvider, ProviderChain, RegistryConfig, ResourceEntry, ResourceFactory, new_resource_by_type,
    register_provider,
};
use formation_types::{ResourceKind, ResourceProperties, impl_resource};
use serde::{Deserialize, Serialize};
use serde_json::json;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct HelloWorld {}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct Impostor {}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct LateArrival {}

impl_resource!(HelloWorld, "Totally::Unknown::Kind");
impl_resource!(Impostor, "Custom::Test::Impostor");
impl_resource!(LateArrival, "Custom::Test::LateArrival");

fn chain_with<F>(provider: F) -> Arc<ProviderChain>
where
    F: Fn(&str) -> Option<Box<dyn ResourceProperties>> + Send + Sync + 'static,
{
    let chain = ProviderChain::new();
    chain.register_fn(provider);
    Arc::new(chain)
}

#[test]
fn provider_extends_factory_for_unknown_kind() {
    let chain = Arc::new(ProviderChain::new());
    let factory = ResourceFactory::new(Arc::clone(&chain));
    assert!(factory.create("Totally::Unknown::Kind").is_none());

    chain.register_fn(|kind: &str| -> Option<Box<dyn ResourceProperties>> {
        (kind == HelloWorld::KIND).then(|| Box::new(HelloWorld::default()) as Box<dyn ResourceProperties>)
    });

    let record = factory.create("Totally::Unknown::Kind").expect("provided kind");
    assert!(record.is::<HelloWorld>());
    assert_eq!(record.resource_type(), "Totally::Unknown::Kind");
}

#[test]
fn builtin_catalog_takes_precedence_over_providers() {
    let factory = ResourceFactory::new(chain_with(|kind: &str| -> Option<Box<dyn ResourceProperties>> {
        (kind == "AWS::S3::Bucket").then(|| Box::new(Impostor::default()) as Box<dyn ResourceProperties>)
    }));

    let record = factory.create("AWS::S3::Bucket").expect("bucket");
    assert!(record.is::<Bucket>());
    assert_eq!(record.resource_type(), "AWS::S3::Bucket");
}

#[test]
fn first_registered_provider_wins() {
    let chain = ProviderChain::new();
    chain.register_fn(|kind: &str| -> Option<Box<dyn ResourceProperties>> {
        (kind == "Custom::Test::Contested").then(|| Box::new(Impostor::default()) as Box<dyn ResourceProperties>)
    });
    chain.register_fn(|kind: &str| -> Option<Box<dyn ResourceProperties>> {
        (kind == "Custom::Test::Contested").then(|| Box::new(LateArrival::default()) as Box<dyn ResourceProperties>)
    });
    let factory = ResourceFactory::new(Arc::new(chain));

    let record = factory.create("Custom::Test::Contested").expect("contested kind");
    assert!(record.is::<Impostor>());
}

#[test]
fn create_is_total_over_arbitrary_names() {
    let factory = ResourceFactory::default();
    for kind in ["", "::", "AWS", "AWS::S3", "aws::s3::bucket", "AWS::S3::Bucket ", "Custom::\u{1F600}", "AWS::S3::Bucket::Extra"] {
        assert!(factory.create(kind).is_none(), "expected no record for {kind:?}");
    }
}

#[test]
fn each_creation_returns_a_fresh_record() {
    let factory = ResourceFactory::default();
    let mut first = factory.create("AWS::S3::Bucket").expect("bucket");
    first.decode_from(&json!({"BucketName": "logs"})).expect("decode bucket");

    let second = factory.create("AWS::S3::Bucket").expect("bucket");
    assert_eq!(second.to_value().expect("encode"), json!({}));
}

#[test]
fn global_chain_serves_registered_kind() {
    assert!(new_resource_by_type("Custom::Global::HelloWorld").is_none());

    register_provider(|kind: &str| -> Option<Box<dyn ResourceProperties>> {
        (kind == "Custom::Global::HelloWorld").then(|| Box::new(LateArrival::default()) as Box<dyn ResourceProperties>)
    });

    let record = new_resource_by_type("Custom::Global::HelloWorld").expect("registered kind");
    assert!(record.is::<LateArrival>());
    assert!(new_resource_by_type("AWS::SQS::Queue").is_some());
}

#[test]
fn manifest_kinds_decode_through_entries() {
    let mut manifest = tempfile::Builder::new().suffix(".json").tempfile().expect("temp file");
    write!(
        manifest,
        r#"{{"kinds":[{{"name":"Custom::Acme::Widget","collections":["Parts"],"description":"test widget"}}]}}"#
    )
    .expect("write manifest");

    let chain = ProviderChain::new();
    chain.register(ManifestProvider::load(manifest.path()).expect("load manifest"));
    let factory = ResourceFactory::new(Arc::new(chain));

    let entry = ResourceEntry::decode(
        &json!({"Type": "Custom::Acme::Widget", "Properties": {"Parts": {"Id": "a"}}}),
        &factory,
    )
    .expect("decode entry");
    let widget = entry.properties.downcast_ref::<GenericResource>().expect("generic record");
    assert_eq!(widget.definition().description.as_deref(), Some("test widget"));
    assert_eq!(
        entry.to_value().expect("encode"),
        json!({"Type": "Custom::Acme::Widget", "Properties": {"Parts": [{"Id": "a"}]}})
    );
}

#[test]
fn config_driven_factory_loads_enabled_manifests() {
    let dir = tempfile::tempdir().expect("temp dir");
    let manifest_path = dir.path().join("kinds.yaml");
    std::fs::write(&manifest_path, "kinds:\n  - name: Custom::Acme::Gadget\n").expect("write manifest");
    let config_path = dir.path().join("config.json");
    std::fs::write(
        &config_path,
        json!({"manifests": [
            {"path": manifest_path.to_string_lossy(), "enabled": true},
            {"path": dir.path().join("disabled.json").to_string_lossy(), "enabled": false}
        ]})
        .to_string(),
    )
    .expect("write config");

    let config = RegistryConfig::load_from_path(&config_path).expect("load config");
    let factory = config.build_factory();
    assert_eq!(factory.providers().len(), 1);
    assert_eq!(factory.create("Custom::Acme::Gadget").map(|record| record.resource_type().to_string()), Some("Custom::Acme::Gadget".into()));
}
