//! Amazon DynamoDB records.

use formation_types::{Expr, PropertyList, impl_resource};
use serde::{Deserialize, Serialize};

use crate::common::Tag;

/// `AWS::DynamoDB::Table`
///
/// Key schemas and attribute definitions are repeatable; a table with a
/// single hash key is commonly written with bare objects.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct Table {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attribute_definitions: Option<PropertyList<AttributeDefinition>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_mode: Option<Expr>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub global_secondary_indexes: Option<PropertyList<GlobalSecondaryIndex>>,
    pub key_schema: PropertyList<KeySchema>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provisioned_throughput: Option<ProvisionedThroughput>,
    #[serde(rename = "SSESpecification", skip_serializing_if = "Option::is_none")]
    pub sse_specification: Option<SseSpecification>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stream_specification: Option<StreamSpecification>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub table_name: Option<Expr>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<PropertyList<Tag>>,
}

impl_resource!(Table, "AWS::DynamoDB::Table");

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct AttributeDefinition {
    pub attribute_name: Expr,
    pub attribute_type: Expr,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct KeySchema {
    pub attribute_name: Expr,
    pub key_type: Expr,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct GlobalSecondaryIndex {
    pub index_name: Expr,
    pub key_schema: PropertyList<KeySchema>,
    pub projection: Projection,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provisioned_throughput: Option<ProvisionedThroughput>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct Projection {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub non_key_attributes: Option<Expr>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub projection_type: Option<Expr>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct ProvisionedThroughput {
    pub read_capacity_units: Expr,
    pub write_capacity_units: Expr,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SseSpecification {
    #[serde(rename = "SSEEnabled")]
    pub sse_enabled: Expr,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct StreamSpecification {
    pub stream_view_type: Expr,
}
