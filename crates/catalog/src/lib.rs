//! Built-in resource catalog.
//!
//! Each module holds the records for one service. The records are plain
//! serde structs; every list-of-sub-objects field is a
//! [`PropertyList`](formation_types::PropertyList) so a bare object is
//! accepted wherever the wire format allows a list.
//!
//! [`BUILTIN_KINDS`] is the closed name-to-constructor table consulted by
//! the factory before any provider.

pub mod cloudformation;
pub mod common;
pub mod dynamodb;
pub mod events;
pub mod iam;
pub mod lambda;
pub mod logs;
pub mod s3;
pub mod sns;
pub mod sqs;

use formation_types::{ResourceKind, ResourceProperties};
use indexmap::IndexMap;
use once_cell::sync::Lazy;

pub use common::Tag;

/// Builds a fresh, zero-valued record.
pub type Constructor = fn() -> Box<dyn ResourceProperties>;

fn construct<T>() -> Box<dyn ResourceProperties>
where
    T: ResourceProperties + Default + 'static,
{
    Box::new(T::default())
}

macro_rules! builtin_table {
    ($($record:ty),+ $(,)?) => {
        &[$((<$record as ResourceKind>::KIND, construct::<$record> as Constructor)),+]
    };
}

/// Every compiled record, keyed by its kind name.
pub static BUILTIN_KINDS: &[(&str, Constructor)] = builtin_table![
    cloudformation::CustomResource,
    cloudformation::WaitConditionHandle,
    dynamodb::Table,
    events::Rule,
    iam::Policy,
    iam::Role,
    lambda::EventSourceMapping,
    lambda::Function,
    lambda::Permission,
    logs::LogGroup,
    logs::SubscriptionFilter,
    s3::Bucket,
    s3::BucketPolicy,
    sns::Subscription,
    sns::Topic,
    sqs::Queue,
];

static CATALOG: Lazy<IndexMap<&'static str, Constructor>> = Lazy::new(|| BUILTIN_KINDS.iter().copied().collect());

/// Look up the constructor for a built-in kind.
pub fn constructor(kind: &str) -> Option<Constructor> {
    CATALOG.get(kind).copied()
}

/// Returns a new zero-valued record for a built-in kind.
pub fn new_builtin(kind: &str) -> Option<Box<dyn ResourceProperties>> {
    constructor(kind).map(|construct| construct())
}

pub fn contains(kind: &str) -> bool {
    CATALOG.contains_key(kind)
}

/// Built-in kind names in table order.
pub fn kinds() -> impl Iterator<Item = &'static str> {
    CATALOG.keys().copied()
}
