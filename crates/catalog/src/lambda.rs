//! AWS Lambda records.

use formation_types::{Expr, PropertyList, impl_resource};
use serde::{Deserialize, Serialize};

use crate::common::Tag;

/// `AWS::Lambda::Function`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct Function {
    pub code: Code,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dead_letter_config: Option<DeadLetterConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<Expr>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub environment: Option<Environment>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub function_name: Option<Expr>,
    pub handler: Expr,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layers: Option<Expr>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub memory_size: Option<Expr>,
    pub role: Expr,
    pub runtime: Expr,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout: Option<Expr>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tracing_config: Option<TracingConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vpc_config: Option<VpcConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<PropertyList<Tag>>,
}

impl_resource!(Function, "AWS::Lambda::Function");

/// Deployment package location, either in S3 or inline.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct Code {
    #[serde(rename = "S3Bucket", skip_serializing_if = "Option::is_none")]
    pub s3_bucket: Option<Expr>,
    #[serde(rename = "S3Key", skip_serializing_if = "Option::is_none")]
    pub s3_key: Option<Expr>,
    #[serde(rename = "S3ObjectVersion", skip_serializing_if = "Option::is_none")]
    pub s3_object_version: Option<Expr>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zip_file: Option<Expr>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct DeadLetterConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_arn: Option<Expr>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct Environment {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variables: Option<Expr>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct TracingConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<Expr>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct VpcConfig {
    pub security_group_ids: Expr,
    pub subnet_ids: Expr,
}

/// `AWS::Lambda::Permission`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct Permission {
    pub action: Expr,
    pub function_name: Expr,
    pub principal: Expr,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_account: Option<Expr>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_arn: Option<Expr>,
}

impl_resource!(Permission, "AWS::Lambda::Permission");

/// `AWS::Lambda::EventSourceMapping`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct EventSourceMapping {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub batch_size: Option<Expr>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<Expr>,
    pub event_source_arn: Expr,
    pub function_name: Expr,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub starting_position: Option<Expr>,
}

impl_resource!(EventSourceMapping, "AWS::Lambda::EventSourceMapping");
