//! Amazon EventBridge records.

use formation_types::{Expr, PropertyList, impl_resource};
use serde::{Deserialize, Serialize};

/// `AWS::Events::Rule`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct Rule {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<Expr>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_bus_name: Option<Expr>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_pattern: Option<Expr>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<Expr>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role_arn: Option<Expr>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schedule_expression: Option<Expr>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<Expr>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub targets: Option<PropertyList<Target>>,
}

impl_resource!(Rule, "AWS::Events::Rule");

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct Target {
    pub arn: Expr,
    pub id: Expr,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input: Option<Expr>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input_path: Option<Expr>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role_arn: Option<Expr>,
}
