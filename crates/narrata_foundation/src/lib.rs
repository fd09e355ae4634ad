//! Errors, lookup tables, and naming helpers for narrata.
//!
//! This crate provides:
//! - [`Error`] - Rich error types with context
//! - [`LookupTable`] - Ordered key/value tables persisted across runs
//! - Namespacing helpers ([`namespaced`], [`strip_namespace`])
//! - Identifier case conversion ([`to_pascal_case`], [`to_camel_case`], [`to_snake_case`])

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod case;
pub mod error;
pub mod namespace;
pub mod table;

pub use case::{to_camel_case, to_pascal_case, to_snake_case};
pub use error::{Error, ErrorContext, ErrorKind, Result};
pub use namespace::{NAMESPACE_MARKER, namespace_of, namespaced, strip_namespace};
pub use table::LookupTable;
