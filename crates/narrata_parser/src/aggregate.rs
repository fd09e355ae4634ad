//! Per-project aggregation.
//!
//! Runs every source document of a project through the descriptor of its
//! dialect and groups the records by dialect. Documents are processed in
//! lexical path order so that downstream tables are deterministic.

use tracing::debug;

use narrata_foundation::Result;

use crate::dialect::{Chapter, Dialect, Dialects, Marker, Place, SourceDocument};
use crate::scanner::Scanner;

/// Records of one project, grouped by dialect.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Aggregate {
    /// Every chapter, in file then document order.
    pub chapters: Vec<Chapter>,
    /// Every marker, in file then document order.
    pub markers: Vec<Marker>,
    /// Every place, in file then document order.
    pub places: Vec<Place>,
}

impl Aggregate {
    /// Total number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.chapters.len() + self.markers.len() + self.places.len()
    }

    /// Returns true if no records were found.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Runs the scan pipeline over a whole project.
pub struct Aggregator {
    dialects: Dialects,
}

impl Aggregator {
    /// Creates an aggregator with the built-in dialect descriptors.
    ///
    /// # Errors
    ///
    /// Returns an invalid descriptor error if a built-in descriptor is malformed.
    pub fn new() -> Result<Self> {
        Ok(Self::with_dialects(Dialects::builtin()?))
    }

    /// Creates an aggregator with custom descriptors.
    #[must_use]
    pub fn with_dialects(dialects: Dialects) -> Self {
        Self { dialects }
    }

    /// The descriptors in use.
    #[must_use]
    pub fn dialects(&self) -> &Dialects {
        &self.dialects
    }

    /// Scans one document and appends its records to `into`.
    pub fn scan_document(&self, document: &SourceDocument, into: &mut Aggregate) {
        let namespace = document.file.namespace();
        let text = document.text.as_str();

        let found = match document.file.dialect {
            Dialect::Chapter => {
                let records = Scanner::scan(&self.dialects.chapter, text, &namespace);
                let n = records.len();
                into.chapters.extend(records);
                n
            }
            Dialect::Marker => {
                let records = Scanner::scan(&self.dialects.marker, text, &namespace);
                let n = records.len();
                into.markers.extend(records);
                n
            }
            Dialect::Place => {
                let records = Scanner::scan(&self.dialects.place, text, &namespace);
                let n = records.len();
                into.places.extend(records);
                n
            }
        };

        debug!(
            path = %document.file.path.display(),
            dialect = %document.file.dialect,
            records = found,
            "parsed source file"
        );
    }

    /// Scans every document, in lexical path order.
    #[must_use]
    pub fn aggregate<'a>(&self, documents: impl IntoIterator<Item = &'a SourceDocument>) -> Aggregate {
        let mut documents: Vec<&SourceDocument> = documents.into_iter().collect();
        documents.sort_by(|a, b| a.file.path.cmp(&b.file.path));

        let mut aggregate = Aggregate::default();
        for document in documents {
            self.scan_document(document, &mut aggregate);
        }
        aggregate
    }
}
