//! Shared types for the formation resource catalog.
//!
//! This crate defines the pieces every resource record is built from:
//! - [`ResourceProperties`]: the polymorphic record capability
//! - [`PropertyList`] and [`decode_collection`]: object-or-array decoding for repeatable fields
//! - [`Expr`]: opaque leaf values (literals and intrinsic functions)
//! - [`DecodeError`]: the error returned by every decoding path

pub mod collection;
pub mod error;
pub mod expr;
pub mod resource;

pub use collection::{PropertyList, decode_collection, decode_element};
pub use error::DecodeError;
pub use expr::Expr;
pub use resource::{ResourceKind, ResourceProperties, decode_record, encode_record};

#[doc(hidden)]
pub mod __private {
    pub use serde_json::Value;
}
