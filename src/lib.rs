//! Narrata - Script parser and lookup-table generator for narrative packages
//!
//! This crate re-exports all layers of the narrata system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 3: narrata_runtime   : Options, discovery, table files, CLI
//! Layer 2: narrata_engine    : Cross-reference merge, resource catalog
//! Layer 1: narrata_parser    : Descriptors, decomposition, scanning, dialects
//! Layer 0: narrata_foundation: Core types (Error, LookupTable, naming helpers)
//! ```

pub use narrata_engine as engine;
pub use narrata_foundation as foundation;
pub use narrata_parser as parser;
pub use narrata_runtime as runtime;
