//! Permissive decoding for repeatable fields.
//!
//! Templates tolerate a bare object wherever a list of objects is expected.
//! Every list-of-sub-objects field goes through [`decode_collection`], which
//! tries the single-element shape first and falls back to the array shape.

use std::{
    fmt,
    ops::{Deref, DerefMut},
};

use serde::{
    Deserialize, Deserializer, Serialize, Serializer,
    de::{DeserializeOwned, Error as _, Unexpected},
};
use serde_json::Value;

use crate::DecodeError;

/// Decode `raw` into an ordered sequence of `T`.
///
/// `element_decoder` is first applied to `raw` itself; success yields a
/// one-element sequence. Otherwise `raw` must be an array whose items each
/// decode with `element_decoder`, in wire order. When both attempts fail the
/// error of the array attempt is returned and the single-element error is
/// discarded.
///
/// # Examples
///
/// ```rust
/// use formation_types::{decode_collection, decode_element};
/// use serde_json::json;
///
/// let single: Vec<String> = decode_collection(&json!("a"), decode_element).unwrap();
/// assert_eq!(single, vec!["a".to_string()]);
///
/// let many: Vec<String> = decode_collection(&json!(["a", "b"]), decode_element).unwrap();
/// assert_eq!(many, vec!["a".to_string(), "b".to_string()]);
/// ```
pub fn decode_collection<T, F>(raw: &Value, element_decoder: F) -> Result<Vec<T>, DecodeError>
where
    F: Fn(&Value) -> Result<T, DecodeError>,
{
    if let Ok(element) = element_decoder(raw) {
        return Ok(vec![element]);
    }

    match raw {
        Value::Array(items) => items.iter().map(&element_decoder).collect(),
        other => Err(serde_json::Error::invalid_type(unexpected(other), &"a sequence").into()),
    }
}

/// Decode a single collection element with serde.
///
/// A bare array is never a single element: derived struct impls accept
/// positional sequences, which would let `[{..}, {..}]` decode as one
/// record built from its items.
pub fn decode_element<T: DeserializeOwned>(raw: &Value) -> Result<T, DecodeError> {
    if raw.is_array() {
        return Err(serde_json::Error::invalid_type(Unexpected::Seq, &"a single element").into());
    }
    Ok(T::deserialize(raw)?)
}

fn unexpected(value: &Value) -> Unexpected<'_> {
    match value {
        Value::Null => Unexpected::Unit,
        Value::Bool(flag) => Unexpected::Bool(*flag),
        Value::Number(number) => {
            if let Some(unsigned) = number.as_u64() {
                Unexpected::Unsigned(unsigned)
            } else if let Some(signed) = number.as_i64() {
                Unexpected::Signed(signed)
            } else {
                Unexpected::Float(number.as_f64().unwrap_or_default())
            }
        }
        Value::String(text) => Unexpected::Str(text),
        Value::Array(_) => Unexpected::Seq,
        Value::Object(_) => Unexpected::Map,
    }
}

/// A repeatable field holding zero or more `T`.
///
/// Deserializes from either a bare `T` or an array of `T` and always
/// serializes as an array.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct PropertyList<T>(Vec<T>);

impl<T> PropertyList<T> {
    /// Create an empty list.
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Consume the list, returning the decoded items.
    pub fn into_inner(self) -> Vec<T> {
        self.0
    }
}

impl<T> Default for PropertyList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for PropertyList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.0.iter()).finish()
    }
}

impl<T> Deref for PropertyList<T> {
    type Target = Vec<T>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<T> DerefMut for PropertyList<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl<T> From<Vec<T>> for PropertyList<T> {
    fn from(items: Vec<T>) -> Self {
        Self(items)
    }
}

impl<T> FromIterator<T> for PropertyList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<T> IntoIterator for PropertyList<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a PropertyList<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<T: Serialize> Serialize for PropertyList<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.0.serialize(serializer)
    }
}

/// An explicit `null` decodes as an empty list, the same as an absent field.
impl<'de, T: DeserializeOwned> Deserialize<'de> for PropertyList<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Value::deserialize(deserializer)?;
        if raw.is_null() {
            return Ok(Self::default());
        }
        decode_collection(&raw, decode_element::<T>)
            .map(Self)
            .map_err(serde::de::Error::custom)
    }
}
