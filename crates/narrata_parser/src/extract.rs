//! Field extraction.
//!
//! Turns one pattern match into one record. Every declared field is always
//! populated: a group that did not participate yields an empty string (or an
//! empty list after decomposition), never an absent value.

use regex::Captures;

use crate::descriptor::{Descriptor, FieldKind};

/// Builds records from pattern matches.
pub struct Extractor;

impl Extractor {
    /// Builds one record from `captures` according to `descriptor`.
    ///
    /// The finalize hook is not run here; see [`Scanner`](crate::Scanner).
    #[must_use]
    pub fn extract<R: Default>(descriptor: &Descriptor<R>, captures: &Captures<'_>) -> R {
        let mut record = R::default();

        for field in descriptor.fields() {
            match &field.kind {
                FieldKind::Scalar { group, assign } => {
                    assign(&mut record, group_text(captures, *group).to_string());
                }
                FieldKind::Composite { groups, apply } => {
                    let raw: Vec<&str> = groups.iter().map(|g| group_text(captures, *g)).collect();
                    apply(&mut record, &raw);
                }
            }
        }

        record
    }
}

fn group_text<'h>(captures: &Captures<'h>, group: usize) -> &'h str {
    captures.get(group).map_or("", |m| m.as_str())
}
