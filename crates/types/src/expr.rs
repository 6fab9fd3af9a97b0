use serde::{Deserialize, Serialize};
use serde_json::Value;

/// An opaque leaf value inside a resource's properties.
///
/// Either a literal scalar (`"my-bucket"`, `30`, `true`) or an intrinsic
/// function object such as `{"Ref": "MyRole"}` or `{"Fn::GetAtt": [..]}`.
/// The value is carried through decoding uninterpreted.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Expr(Value);

impl Expr {
    /// Wrap any JSON value as an expression.
    pub fn new(value: impl Into<Value>) -> Self {
        Self(value.into())
    }

    /// Returns the literal string when the expression is a plain string.
    pub fn as_str(&self) -> Option<&str> {
        self.0.as_str()
    }

    /// Returns the intrinsic function name (`Ref`, `Fn::Join`, ...) when the
    /// expression is a single-key function object.
    pub fn intrinsic_name(&self) -> Option<&str> {
        let object = self.0.as_object()?;
        if object.len() != 1 {
            return None;
        }
        object
            .keys()
            .next()
            .map(String::as_str)
            .filter(|name| *name == "Ref" || name.starts_with("Fn::") || *name == "Condition")
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    pub fn into_value(self) -> Value {
        self.0
    }
}

impl From<&str> for Expr {
    fn from(literal: &str) -> Self {
        Self(Value::String(literal.to_string()))
    }
}

impl From<String> for Expr {
    fn from(literal: String) -> Self {
        Self(Value::String(literal))
    }
}

impl From<bool> for Expr {
    fn from(literal: bool) -> Self {
        Self(Value::Bool(literal))
    }
}

impl From<i64> for Expr {
    fn from(literal: i64) -> Self {
        Self(Value::from(literal))
    }
}

impl From<Value> for Expr {
    fn from(value: Value) -> Self {
        Self(value)
    }
}
