//! Error types for qualifier-core
//!
//! Every failure is fatal to the operation in progress and is returned to the
//! immediate caller as-is. Nothing here is retried or logged.

use thiserror::Error;

/// Main error type for qualifier-core operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QualifierError {
    /// The declaration of a requested qualifier type could not be located
    #[error("Could not find qualifier type: {type_name}. Is it among the available declarations?")]
    Configuration { type_name: String },

    /// Contract violation by this crate or its caller
    #[error("Internal contract violation: {0}")]
    Bug(BugKind),

    /// Operation deliberately left unimplemented for a backend
    #[error("Operation '{operation}' is not implemented by the {backend} backend")]
    NotImplemented {
        operation: &'static str,
        backend: &'static str,
    },
}

/// Kinds of contract violation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BugKind {
    #[error("couldn't find element '{element}' in {type_name}")]
    UnknownElement { element: String, type_name: String },

    #[error("given value for '{element}' differs from expected; found: {found}; expected: {expected}")]
    TypeMismatch {
        element: String,
        found: String,
        expected: String,
    },

    #[error("builder for {type_name} was already built")]
    AlreadyBuilt { type_name: String },

    #[error("cannot {operation} an unmodifiable collection")]
    Unmodifiable { operation: &'static str },

    #[error("unsupported host value of type {found}")]
    UnsupportedValue { found: String },

    #[error("no value for element '{element}' of {type_name} and no declared default")]
    MissingDefault { element: String, type_name: String },

    #[error("no element '{element}' present in {type_name}")]
    NoSuchValue { element: String, type_name: String },

    #[error("element '{element}' holds {found}, not {expected}")]
    WrongValueKind {
        element: String,
        expected: &'static str,
        found: &'static str,
    },

    #[error("{0}")]
    Internal(String),
}

impl QualifierError {
    /// Create a configuration error for a missing declaration
    pub fn configuration(type_name: impl Into<String>) -> Self {
        QualifierError::Configuration {
            type_name: type_name.into(),
        }
    }

    /// Wrap a contract violation
    pub fn bug(kind: BugKind) -> Self {
        QualifierError::Bug(kind)
    }

    /// Create a free-form internal error
    pub fn internal(msg: impl Into<String>) -> Self {
        QualifierError::Bug(BugKind::Internal(msg.into()))
    }

    pub fn unknown_element(element: impl Into<String>, type_name: impl Into<String>) -> Self {
        QualifierError::Bug(BugKind::UnknownElement {
            element: element.into(),
            type_name: type_name.into(),
        })
    }

    pub fn type_mismatch(
        element: impl Into<String>,
        found: impl ToString,
        expected: impl ToString,
    ) -> Self {
        QualifierError::Bug(BugKind::TypeMismatch {
            element: element.into(),
            found: found.to_string(),
            expected: expected.to_string(),
        })
    }

    /// Create the error returned by every mutator of an unmodifiable collection
    pub fn unmodifiable(operation: &'static str) -> Self {
        QualifierError::Bug(BugKind::Unmodifiable { operation })
    }

    pub fn not_implemented(operation: &'static str, backend: &'static str) -> Self {
        QualifierError::NotImplemented { operation, backend }
    }

    pub fn is_bug(&self) -> bool {
        matches!(self, QualifierError::Bug(_))
    }

    pub fn is_configuration(&self) -> bool {
        matches!(self, QualifierError::Configuration { .. })
    }

    pub fn is_not_implemented(&self) -> bool {
        matches!(self, QualifierError::NotImplemented { .. })
    }

    /// The contract-violation kind, if this is a bug
    pub fn bug_kind(&self) -> Option<&BugKind> {
        match self {
            QualifierError::Bug(kind) => Some(kind),
            _ => None,
        }
    }
}

/// Result type alias for qualifier operations
pub type Result<T> = std::result::Result<T, QualifierError>;
