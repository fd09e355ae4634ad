//! Package discovery, table files, and CLI for narrata.
//!
//! This crate provides:
//! - [`ProjectOptions`] - Directory layout and output naming
//! - [`discover`] - Finding packages and their files
//! - [`TableReader`] - Reading previously generated tables
//! - [`OutputWriter`] - Rendering and saving generated files
//! - [`Project`] - The whole pipeline, one package at a time
//! - The `narrata` command line

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod discover;
pub mod logging;
pub mod output;
pub mod project;
pub mod reader;

pub use config::ProjectOptions;
pub use discover::{SourcePack, discover};
pub use output::{OutputPack, OutputWriter, ResourceFile};
pub use project::{PackageOutcome, Project};
pub use reader::{TableFile, TableKind, TableReader};
