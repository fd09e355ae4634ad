//! Cross-reference merge and resource catalog for narrata.
//!
//! This crate provides:
//! - [`CrossReference`] - Collects character and resource names from parsed
//!   records and merges them into the persisted [`PackTables`]
//! - [`ResourceCatalog`] - Describes a package's asset files and keeps their
//!   generated identifiers stable across runs

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod crossref;
pub mod resources;

pub use crossref::{CrossReference, MergeReport, PackTables, is_placeholder};
pub use resources::{IdGenerator, Resource, ResourceCatalog, ResourceKind, UuidGenerator};
