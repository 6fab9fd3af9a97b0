//! Records for CloudFormation's own resource types.

use formation_types::{Expr, impl_resource};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// `AWS::CloudFormation::CustomResource`
///
/// Only `ServiceToken` is fixed; every other property is passed through to
/// the backing handler.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct CustomResource {
    pub service_token: Expr,
    #[serde(flatten)]
    pub properties: Map<String, Value>,
}

impl_resource!(CustomResource, "AWS::CloudFormation::CustomResource");

/// `AWS::CloudFormation::WaitConditionHandle`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WaitConditionHandle {}

impl_resource!(WaitConditionHandle, "AWS::CloudFormation::WaitConditionHandle");
