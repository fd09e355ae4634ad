//! Error types for the narrata system.
//!
//! Uses `thiserror` for ergonomic error definition with rich context.

use std::fmt;

use thiserror::Error;

/// Result type used across narrata crates.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for narrata operations.
#[derive(Debug, Error)]
#[error("{kind}{}", context_suffix(.context))]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about where the error occurred.
    pub context: Option<ErrorContext>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Creates an unknown dialect error for a source file.
    #[must_use]
    pub fn unknown_dialect(path: impl Into<String>, extension: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnknownDialect {
            path: path.into(),
            extension: extension.into(),
        })
    }

    /// Creates an invalid descriptor error.
    #[must_use]
    pub fn invalid_descriptor(descriptor: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidDescriptor {
            descriptor: descriptor.into(),
            message: message.into(),
        })
    }

    /// Creates an I/O error.
    #[must_use]
    pub fn io(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Io(message.into()))
    }

    /// Returns true if this error means the project is miswired
    /// (as opposed to an environmental failure such as I/O).
    #[must_use]
    pub fn is_configuration(&self) -> bool {
        matches!(
            self.kind,
            ErrorKind::UnknownDialect { .. }
                | ErrorKind::InvalidDescriptor { .. }
                | ErrorKind::MissingDirectory(_)
        )
    }
}

fn context_suffix(context: &Option<ErrorContext>) -> String {
    match context {
        Some(ctx) if ctx.source.is_some() || ctx.package.is_some() => format!(" ({ctx})"),
        _ => String::new(),
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// A source file's extension does not name any dialect.
    #[error("unknown source file type '{extension}': {path}")]
    UnknownDialect {
        /// The offending file.
        path: String,
        /// The extension found (may be empty).
        extension: String,
    },

    /// A dialect descriptor could not be constructed.
    #[error("invalid descriptor '{descriptor}': {message}")]
    InvalidDescriptor {
        /// Name of the descriptor.
        descriptor: String,
        /// What is wrong with it.
        message: String,
    },

    /// A required directory does not exist.
    #[error("directory not found: {0}")]
    MissingDirectory(String),

    /// Reading or writing a file failed.
    #[error("i/o error: {0}")]
    Io(String),

    /// Encoding records for output failed.
    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Context about where an error occurred.
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// Source file the error relates to.
    pub source: Option<String>,
    /// Package being processed.
    pub package: Option<String>,
}

impl ErrorContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the source file.
    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Sets the package name.
    #[must_use]
    pub fn with_package(mut self, package: impl Into<String>) -> Self {
        self.package = Some(package.into());
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.package, &self.source) {
            (Some(package), Some(source)) => write!(f, "in package {package} at {source}"),
            (Some(package), None) => write!(f, "in package {package}"),
            (None, Some(source)) => write!(f, "at {source}"),
            (None, None) => Ok(()),
        }
    }
}
