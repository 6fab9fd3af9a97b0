//! AWS Identity and Access Management records.

use formation_types::{Expr, PropertyList, impl_resource};
use serde::{Deserialize, Serialize};

use crate::common::Tag;

/// `AWS::IAM::Role`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct Role {
    pub assume_role_policy_document: Expr,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub managed_policy_arns: Option<Expr>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<Expr>,
    /// Inline policies; a single policy object is accepted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub policies: Option<PropertyList<InlinePolicy>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role_name: Option<Expr>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<PropertyList<Tag>>,
}

impl_resource!(Role, "AWS::IAM::Role");

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct InlinePolicy {
    pub policy_document: Expr,
    pub policy_name: Expr,
}

/// `AWS::IAM::Policy`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct Policy {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub groups: Option<Expr>,
    pub policy_document: Expr,
    pub policy_name: Expr,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub roles: Option<Expr>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub users: Option<Expr>,
}

impl_resource!(Policy, "AWS::IAM::Policy");
