//! Amazon SNS records.

use formation_types::{Expr, PropertyList, impl_resource};
use serde::{Deserialize, Serialize};

use crate::common::Tag;

/// `AWS::SNS::Topic`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct Topic {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<Expr>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kms_master_key_id: Option<Expr>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subscription: Option<PropertyList<TopicSubscription>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub topic_name: Option<Expr>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<PropertyList<Tag>>,
}

impl_resource!(Topic, "AWS::SNS::Topic");

/// An inline subscription declared on a topic.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct TopicSubscription {
    pub endpoint: Expr,
    pub protocol: Expr,
}

/// `AWS::SNS::Subscription`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct Subscription {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<Expr>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter_policy: Option<Expr>,
    pub protocol: Expr,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw_message_delivery: Option<Expr>,
    pub topic_arn: Expr,
}

impl_resource!(Subscription, "AWS::SNS::Subscription");
