//! The capability every resource record exposes.

use std::{any::Any, fmt};

use serde::{Serialize, de::DeserializeOwned};
use serde_json::Value;

use crate::DecodeError;

/// Compile-time kind name of a concrete resource type.
pub trait ResourceKind {
    /// Wire-level type string, for example `AWS::S3::Bucket`.
    const KIND: &'static str;
}

/// A polymorphic resource record.
///
/// Records are created zero-valued by a factory and then populated from raw
/// properties with [`ResourceProperties::decode_from`]. Compiled records
/// implement this through [`impl_resource!`](crate::impl_resource).
pub trait ResourceProperties: fmt::Debug + Send + Sync {
    /// The wire-level kind name, independent of the record's field values.
    fn resource_type(&self) -> &str;

    /// Replace this record's fields with the ones decoded from `raw`.
    fn decode_from(&mut self, raw: &Value) -> Result<(), DecodeError>;

    /// Encode the record's fields back into a properties object.
    fn to_value(&self) -> Result<Value, DecodeError>;

    fn as_any(&self) -> &dyn Any;

    fn clone_boxed(&self) -> Box<dyn ResourceProperties>;
}

impl dyn ResourceProperties {
    /// Downcast to a concrete record type.
    pub fn downcast_ref<T: ResourceProperties + 'static>(&self) -> Option<&T> {
        self.as_any().downcast_ref::<T>()
    }

    pub fn is<T: ResourceProperties + 'static>(&self) -> bool {
        self.as_any().is::<T>()
    }
}

impl Clone for Box<dyn ResourceProperties> {
    fn clone(&self) -> Self {
        self.clone_boxed()
    }
}

/// Decode a serde record from raw properties. Backs `decode_from` for
/// compiled records.
pub fn decode_record<T: DeserializeOwned>(raw: &Value) -> Result<T, DecodeError> {
    Ok(T::deserialize(raw)?)
}

/// Encode a serde record into a properties value.
pub fn encode_record<T: Serialize>(record: &T) -> Result<Value, DecodeError> {
    Ok(serde_json::to_value(record)?)
}

/// Implement [`ResourceKind`] and [`ResourceProperties`] for a serde record.
///
/// The type must be `Default + Clone + Debug + Serialize + DeserializeOwned`.
///
/// ```rust
/// use formation_types::{ResourceKind, ResourceProperties, impl_resource};
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Debug, Clone, Default, Serialize, Deserialize)]
/// #[serde(rename_all = "PascalCase")]
/// pub struct Widget {
///     pub name: Option<String>,
/// }
///
/// impl_resource!(Widget, "Custom::Acme::Widget");
///
/// assert_eq!(Widget::KIND, "Custom::Acme::Widget");
/// assert_eq!(Widget::default().resource_type(), "Custom::Acme::Widget");
/// ```
#[macro_export]
macro_rules! impl_resource {
    ($record:ty, $kind:literal) => {
        impl $crate::ResourceKind for $record {
            const KIND: &'static str = $kind;
        }

        impl $crate::ResourceProperties for $record {
            fn resource_type(&self) -> &str {
                <$record as $crate::ResourceKind>::KIND
            }

            fn decode_from(&mut self, raw: &$crate::__private::Value) -> ::std::result::Result<(), $crate::DecodeError> {
                *self = $crate::decode_record::<$record>(raw)?;
                Ok(())
            }

            fn to_value(&self) -> ::std::result::Result<$crate::__private::Value, $crate::DecodeError> {
                $crate::encode_record(self)
            }

            fn as_any(&self) -> &dyn ::std::any::Any {
                self
            }

            fn clone_boxed(&self) -> ::std::boxed::Box<dyn $crate::ResourceProperties> {
                ::std::boxed::Box::new(::std::clone::Clone::clone(self))
            }
        }
    };
}
