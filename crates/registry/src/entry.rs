//! A single resource declaration: its type, properties and attributes.

use formation_types::{DecodeError, PropertyList, ResourceProperties};
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::ResourceFactory;

/// A decoded resource declaration.
///
/// `properties` holds the polymorphic record built by the factory; the
/// declaration's `Type` is always the record's own kind name.
#[derive(Debug, Clone)]
pub struct ResourceEntry {
    pub properties: Box<dyn ResourceProperties>,
    pub depends_on: Vec<String>,
    pub condition: Option<String>,
    pub deletion_policy: Option<String>,
    pub metadata: Option<Map<String, Value>>,
}

#[derive(Deserialize)]
#[serde(rename_all = "PascalCase")]
struct RawEntry {
    #[serde(rename = "Type")]
    kind: Option<Value>,
    properties: Option<Value>,
    depends_on: Option<PropertyList<String>>,
    condition: Option<String>,
    deletion_policy: Option<String>,
    metadata: Option<Map<String, Value>>,
}

impl ResourceEntry {
    /// Wrap a record with no attributes.
    pub fn new(properties: Box<dyn ResourceProperties>) -> Self {
        Self {
            properties,
            depends_on: Vec::new(),
            condition: None,
            deletion_policy: None,
            metadata: None,
        }
    }

    pub fn resource_type(&self) -> &str {
        self.properties.resource_type()
    }

    /// Decode a declaration such as
    /// `{"Type": "AWS::SQS::Queue", "Properties": {...}, "DependsOn": "Role"}`.
    ///
    /// `DependsOn` accepts a single name or a list of names. Missing or null
    /// `Properties` decode as an empty object.
    ///
    /// # Errors
    /// - `DecodeError::MissingField` when `Type` is absent or not a string
    /// - `DecodeError::UnknownKind` when the factory does not recognize `Type`
    /// - `DecodeError::Malformed` for structural errors in the declaration or its properties
    pub fn decode(raw: &Value, factory: &ResourceFactory) -> Result<Self, DecodeError> {
        let entry = RawEntry::deserialize(raw)?;
        let kind = match entry.kind {
            Some(Value::String(kind)) => kind,
            _ => return Err(DecodeError::missing_field("Type")),
        };
        let properties = entry.properties.filter(|value| !value.is_null()).unwrap_or_else(|| Value::Object(Map::new()));

        Ok(Self {
            properties: factory.decode_properties(&kind, &properties)?,
            depends_on: entry.depends_on.map(PropertyList::into_inner).unwrap_or_default(),
            condition: entry.condition,
            deletion_policy: entry.deletion_policy,
            metadata: entry.metadata,
        })
    }

    /// Encode the declaration, deriving `Type` from the record.
    pub fn to_value(&self) -> Result<Value, DecodeError> {
        let mut object = Map::new();
        object.insert("Type".into(), Value::String(self.resource_type().to_string()));
        object.insert("Properties".into(), self.properties.to_value()?);
        if !self.depends_on.is_empty() {
            object.insert("DependsOn".into(), Value::from(self.depends_on.clone()));
        }
        if let Some(condition) = &self.condition {
            object.insert("Condition".into(), Value::String(condition.clone()));
        }
        if let Some(policy) = &self.deletion_policy {
            object.insert("DeletionPolicy".into(), Value::String(policy.clone()));
        }
        if let Some(metadata) = &self.metadata {
            object.insert("Metadata".into(), Value::Object(metadata.clone()));
        }
        Ok(Value::Object(object))
    }
}
