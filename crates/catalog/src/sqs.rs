use formation_types::{Expr, PropertyList, impl_resource};
use serde::{Deserialize, Serialize};

use crate::common::Tag;

/// `AWS::SQS::Queue`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct Queue {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delay_seconds: Option<Expr>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fifo_queue: Option<Expr>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_retention_period: Option<Expr>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub queue_name: Option<Expr>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redrive_policy: Option<Expr>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visibility_timeout: Option<Expr>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<PropertyList<Tag>>,
}

impl_resource!(Queue, "AWS::SQS::Queue");
