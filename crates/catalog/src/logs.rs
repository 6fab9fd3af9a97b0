//! CloudWatch Logs records.

use formation_types::{Expr, impl_resource};
use serde::{Deserialize, Serialize};

/// `AWS::Logs::LogGroup`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct LogGroup {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_group_name: Option<Expr>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retention_in_days: Option<Expr>,
}

impl_resource!(LogGroup, "AWS::Logs::LogGroup");

/// `AWS::Logs::SubscriptionFilter`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct SubscriptionFilter {
    pub destination_arn: Expr,
    pub filter_pattern: Expr,
    pub log_group_name: Expr,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role_arn: Option<Expr>,
}

impl_resource!(SubscriptionFilter, "AWS::Logs::SubscriptionFilter");
