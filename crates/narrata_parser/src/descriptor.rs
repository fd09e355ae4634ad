//! Declarative dialect descriptors.
//!
//! A [`Descriptor`] is pure configuration: a line (or block) pattern, a map
//! from logical fields to capture groups, and an optional finalize hook. All
//! dialects are instances of this one type; the [`Extractor`](crate::Extractor)
//! and [`Scanner`](crate::Scanner) interpret it.

use std::fmt;

use narrata_foundation::{Error, Result};
use regex::{Regex, RegexBuilder};

/// Post-processing hook run once per record with the document namespace.
pub type Finalize<R> = fn(R, &str) -> R;

type Apply<R> = Box<dyn Fn(&mut R, &[&str])>;

/// How a field obtains its value from a match.
pub enum FieldKind<R> {
    /// The field is one capture group, copied verbatim.
    Scalar {
        /// 1-based capture group index.
        group: usize,
        /// Stores the captured text in the record.
        assign: fn(&mut R, String),
    },
    /// The field is decomposed from one or more capture groups.
    Composite {
        /// 1-based capture group indices, passed to the decomposer in order.
        groups: Vec<usize>,
        /// Decomposes the raw group texts and stores the result.
        apply: Apply<R>,
    },
}

/// One named field of a descriptor.
pub struct Field<R> {
    /// Logical field name, used in diagnostics.
    pub name: &'static str,
    /// How the field is populated.
    pub kind: FieldKind<R>,
}

impl<R> Field<R> {
    /// Capture groups this field reads.
    #[must_use]
    pub fn groups(&self) -> &[usize] {
        match &self.kind {
            FieldKind::Scalar { group, .. } => std::slice::from_ref(group),
            FieldKind::Composite { groups, .. } => groups,
        }
    }

    /// Returns true for composite fields.
    #[must_use]
    pub fn is_composite(&self) -> bool {
        matches!(self.kind, FieldKind::Composite { .. })
    }
}

impl<R> fmt::Debug for Field<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = if self.is_composite() { "composite" } else { "scalar" };
        f.debug_struct("Field")
            .field("name", &self.name)
            .field("kind", &kind)
            .field("groups", &self.groups())
            .finish()
    }
}

/// Declarative definition of one dialect.
pub struct Descriptor<R> {
    name: &'static str,
    pattern: Regex,
    fields: Vec<Field<R>>,
    finalize: Option<Finalize<R>>,
}

impl<R> Descriptor<R> {
    /// Starts building a descriptor for `pattern`.
    ///
    /// The pattern is always compiled with multi-line semantics so `^` and
    /// `$` anchor at every line.
    #[must_use]
    pub fn builder(name: &'static str, pattern: &str) -> DescriptorBuilder<R> {
        DescriptorBuilder {
            name,
            pattern: pattern.to_string(),
            fields: Vec::new(),
            finalize: None,
        }
    }

    /// Descriptor name.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Compiled pattern.
    #[must_use]
    pub fn pattern(&self) -> &Regex {
        &self.pattern
    }

    /// Declared fields, in declaration order.
    #[must_use]
    pub fn fields(&self) -> &[Field<R>] {
        &self.fields
    }

    /// Runs the finalize hook, if any.
    #[must_use]
    pub fn finalize(&self, record: R, namespace: &str) -> R {
        match self.finalize {
            Some(hook) => hook(record, namespace),
            None => record,
        }
    }
}

impl<R> fmt::Debug for Descriptor<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Descriptor")
            .field("name", &self.name)
            .field("pattern", &self.pattern.as_str())
            .field("fields", &self.fields)
            .field("finalize", &self.finalize.is_some())
            .finish()
    }
}

/// Builder for [`Descriptor`]; validation happens in [`DescriptorBuilder::build`].
pub struct DescriptorBuilder<R> {
    name: &'static str,
    pattern: String,
    fields: Vec<Field<R>>,
    finalize: Option<Finalize<R>>,
}

impl<R: 'static> DescriptorBuilder<R> {
    /// Declares a scalar field bound to one capture group.
    #[must_use]
    pub fn scalar(mut self, name: &'static str, group: usize, assign: fn(&mut R, String)) -> Self {
        self.fields.push(Field {
            name,
            kind: FieldKind::Scalar { group, assign },
        });
        self
    }

    /// Declares a composite field: the texts of `groups` go through
    /// `decompose` and the resulting items are stored with `assign`.
    #[must_use]
    pub fn composite<T: 'static>(
        mut self,
        name: &'static str,
        groups: &[usize],
        decompose: impl Fn(&[&str]) -> Vec<T> + 'static,
        assign: fn(&mut R, Vec<T>),
    ) -> Self {
        let apply: Apply<R> = Box::new(move |record: &mut R, raw: &[&str]| assign(record, decompose(raw)));
        self.fields.push(Field {
            name,
            kind: FieldKind::Composite {
                groups: groups.to_vec(),
                apply,
            },
        });
        self
    }

    /// Sets the finalize hook.
    #[must_use]
    pub fn finalize(mut self, hook: Finalize<R>) -> Self {
        self.finalize = Some(hook);
        self
    }

    /// Compiles the pattern and checks every field against its group count.
    ///
    /// # Errors
    ///
    /// Returns an invalid descriptor error if the pattern does not compile,
    /// a composite field names no groups, or a group index is outside
    /// `1..=group count`.
    pub fn build(self) -> Result<Descriptor<R>> {
        let pattern = RegexBuilder::new(&self.pattern)
            .multi_line(true)
            .build()
            .map_err(|e| Error::invalid_descriptor(self.name, e.to_string()))?;

        let group_count = pattern.captures_len() - 1;
        for field in &self.fields {
            if field.groups().is_empty() {
                return Err(Error::invalid_descriptor(
                    self.name,
                    format!("field '{}' declares no capture groups", field.name),
                ));
            }
            if let Some(&bad) = field.groups().iter().find(|&&g| g == 0 || g > group_count) {
                return Err(Error::invalid_descriptor(
                    self.name,
                    format!(
                        "field '{}' refers to capture group {bad} but the pattern has {group_count}",
                        field.name
                    ),
                ));
            }
        }

        Ok(Descriptor {
            name: self.name,
            pattern,
            fields: self.fields,
            finalize: self.finalize,
        })
    }
}
