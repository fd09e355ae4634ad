//! Document scanning.
//!
//! Applies a descriptor to a whole document. Every non-overlapping match
//! becomes one finalized record, in document order; text that matches
//! nothing is ignored, so free-form prose between declarations is allowed.

use std::borrow::Cow;

use tracing::trace;

use crate::descriptor::Descriptor;
use crate::extract::Extractor;

/// Enumerates the records a descriptor declares in a document.
pub struct Scanner;

impl Scanner {
    /// Scans `text` and returns one finalized record per match.
    ///
    /// `namespace` is handed to the descriptor's finalize hook; by convention
    /// it is the source file's base name without extension.
    #[must_use]
    pub fn scan<R: Default>(descriptor: &Descriptor<R>, text: &str, namespace: &str) -> Vec<R> {
        let text = normalize_line_endings(text);

        let records: Vec<R> = descriptor
            .pattern()
            .captures_iter(&text)
            .map(|captures| {
                let record = Extractor::extract(descriptor, &captures);
                descriptor.finalize(record, namespace)
            })
            .collect();

        trace!(
            descriptor = descriptor.name(),
            namespace,
            records = records.len(),
            "scanned document"
        );
        records
    }
}

fn normalize_line_endings(text: &str) -> Cow<'_, str> {
    if text.contains('\r') {
        Cow::Owned(text.replace("\r\n", "\n"))
    } else {
        Cow::Borrowed(text)
    }
}
