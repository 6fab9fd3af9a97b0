use formation_types::Expr;
use serde::{Deserialize, Serialize};

/// A key-value tag attached to a resource.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct Tag {
    pub key: Expr,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<Expr>,
}

impl Tag {
    pub fn new(key: impl Into<Expr>, value: impl Into<Expr>) -> Self {
        Self {
            key: key.into(),
            value: Some(value.into()),
        }
    }
}
