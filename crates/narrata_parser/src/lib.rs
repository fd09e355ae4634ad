//! Declarative dialect descriptors, token decomposition, and record
//! extraction for narrata.
//!
//! # Architecture
//!
//! ```text
//! "# Garden&bg_garden<fade:1s>"   (ch1.place)
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ SCANNER         │  → every match of the place descriptor's pattern
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ EXTRACTOR       │  → name="Garden", media="bg_garden", style="fade:1s"
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ DECOMPOSER      │  → media=[bg_garden], style=[fade(1s)]
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ FINALIZE        │  → name="ch1=>Garden", media=[bg_garden(1920x1080)]
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ AGGREGATOR      │  → { chapters, markers, places } for the whole project
//! └─────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`descriptor`] - Descriptor model (pattern, field map, finalize hook)
//! - [`decompose`] - Compound field micro-syntax
//! - [`extract`] - One match to one record
//! - [`scanner`] - One document to many records
//! - [`dialect`] - Chapter, marker and place descriptors
//! - [`aggregate`] - Whole-project aggregation

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod aggregate;
pub mod decompose;
pub mod descriptor;
pub mod dialect;
pub mod extract;
pub mod scanner;

pub use aggregate::{Aggregate, Aggregator};
pub use decompose::{CompoundItem, ItemSyntax};
pub use descriptor::{Descriptor, DescriptorBuilder, Field, FieldKind};
pub use dialect::{
    Chapter, Dialect, Dialects, DialogLine, Marker, Place, RawFile, SourceDocument, TextSegment,
};
pub use extract::Extractor;
pub use scanner::Scanner;
