//! Amazon S3 records.

use formation_types::{Expr, PropertyList, impl_resource};
use serde::{Deserialize, Serialize};

use crate::common::Tag;

/// `AWS::S3::Bucket`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct Bucket {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bucket_name: Option<Expr>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_control: Option<Expr>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cors_configuration: Option<CorsConfiguration>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lifecycle_configuration: Option<LifecycleConfiguration>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notification_configuration: Option<NotificationConfiguration>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub versioning_configuration: Option<VersioningConfiguration>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<PropertyList<Tag>>,
}

impl_resource!(Bucket, "AWS::S3::Bucket");

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct CorsConfiguration {
    pub cors_rules: PropertyList<CorsRule>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct CorsRule {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allowed_headers: Option<Expr>,
    pub allowed_methods: Expr,
    pub allowed_origins: Expr,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_age: Option<Expr>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct LifecycleConfiguration {
    pub rules: PropertyList<LifecycleRule>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct LifecycleRule {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Expr>,
    pub status: Expr,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiration_in_days: Option<Expr>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prefix: Option<Expr>,
}

/// Event notifications; each target list may also be a single object.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct NotificationConfiguration {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lambda_configurations: Option<PropertyList<LambdaConfiguration>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub queue_configurations: Option<PropertyList<QueueConfiguration>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub topic_configurations: Option<PropertyList<TopicConfiguration>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct LambdaConfiguration {
    pub event: Expr,
    pub function: Expr,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<NotificationFilter>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct QueueConfiguration {
    pub event: Expr,
    pub queue: Expr,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<NotificationFilter>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct TopicConfiguration {
    pub event: Expr,
    pub topic: Expr,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<NotificationFilter>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NotificationFilter {
    #[serde(rename = "S3Key")]
    pub s3_key: S3KeyFilter,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct S3KeyFilter {
    pub rules: PropertyList<FilterRule>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct FilterRule {
    pub name: Expr,
    pub value: Expr,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct VersioningConfiguration {
    pub status: Expr,
}

/// `AWS::S3::BucketPolicy`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct BucketPolicy {
    pub bucket: Expr,
    pub policy_document: Expr,
}

impl_resource!(BucketPolicy, "AWS::S3::BucketPolicy");
