//! Error types for the circle library.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Fields that can be named in a validation failure.
///
/// The display strings are part of the error contract and are fixed here
/// rather than derived from type names at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    /// The friend reference on a plan record
    FriendName,
    /// A person's name
    Name,
    /// The plan's name
    PlanName,
    /// The plan's scheduled date and time
    PlanDateTime,
    /// A person's phone number
    Phone,
    /// A person's email address
    Email,
}

impl Field {
    /// Human-readable field name used in error messages.
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::FriendName => "friend name",
            Field::Name => "name",
            Field::PlanName => "plan name",
            Field::PlanDateTime => "plan date-time",
            Field::Phone => "phone",
            Field::Email => "email",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kinds of entities stored in the address book.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Person,
    Plan,
}

impl EntityKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Person => "person",
            EntityKind::Plan => "plan",
        }
    }

    /// Capitalized possessive form used in missing-field messages.
    fn owner(&self) -> &'static str {
        match self {
            EntityKind::Person => "Person",
            EntityKind::Plan => "Plan",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The closed set of reasons a record can fail to convert into an entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// A required field is absent from the record
    MissingField(Field),
    /// A field is present but violates its format rules
    InvalidFormat(Field),
    /// A field refers to an entity the catalog does not know about
    ReferenceNotFound(EntityKind),
}

/// A data error found while turning a stored record back into an entity.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct ValidationError {
    kind: ValidationErrorKind,
    message: String,
}

impl ValidationError {
    /// Message used when a referenced person is absent from the catalog.
    pub const MESSAGE_PERSON_DOES_NOT_EXIST: &'static str =
        "The person referenced does not exist in the address book";

    /// Creates an error for a field that is absent from a record of `owner`.
    pub fn missing_field(owner: EntityKind, field: Field) -> Self {
        Self {
            kind: ValidationErrorKind::MissingField(field),
            message: format!("{}'s {} field is missing!", owner.owner(), field),
        }
    }

    /// Creates an error for a malformed field, carrying the value type's
    /// constraint message.
    pub fn invalid_format(field: Field, constraints: impl Into<String>) -> Self {
        Self {
            kind: ValidationErrorKind::InvalidFormat(field),
            message: constraints.into(),
        }
    }

    /// Creates an error for a dangling reference.
    pub fn reference_not_found(entity: EntityKind) -> Self {
        let message = match entity {
            EntityKind::Person => Self::MESSAGE_PERSON_DOES_NOT_EXIST.to_string(),
            EntityKind::Plan => "The plan referenced does not exist in the address book".to_string(),
        };
        Self {
            kind: ValidationErrorKind::ReferenceNotFound(entity),
            message,
        }
    }

    pub fn kind(&self) -> ValidationErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Comprehensive error type for all circle operations.
#[derive(Error, Debug)]
pub enum CircleError {
    /// A stored record or user input failed validation
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// A person with the same name is already in the address book
    #[error("Person '{name}' already exists in the address book")]
    DuplicatePerson { name: String },
    /// An identical plan is already in the address book
    #[error("Plan '{name}' at {date_time} with {friend} already exists in the address book")]
    DuplicatePlan {
        name: String,
        date_time: String,
        friend: String,
    },
    /// A plan refers to a person that is not in the address book
    #[error("Person '{name}' not found in the address book")]
    PersonNotFound { name: String },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
    /// XDG directory specification errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
}

/// Builder for creating file system errors with a path.
pub struct FileSystemErrorBuilder {
    path: PathBuf,
}

impl FileSystemErrorBuilder {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Build the error with the given source.
    pub fn with_source(self, source: std::io::Error) -> CircleError {
        CircleError::FileSystem {
            path: self.path,
            source,
        }
    }
}

impl CircleError {
    /// Creates a builder for file system errors.
    pub fn file_system(path: impl Into<PathBuf>) -> FileSystemErrorBuilder {
        FileSystemErrorBuilder::new(path)
    }

    /// The validation error behind this error, if any.
    pub fn as_validation(&self) -> Option<&ValidationError> {
        match self {
            CircleError::Validation(e) => Some(e),
            _ => None,
        }
    }
}

/// Extension trait for I/O results that attaches the path being accessed.
pub trait IoResultExt<T> {
    fn path_context(self, path: &std::path::Path) -> Result<T>;
}

impl<T> IoResultExt<T> for std::result::Result<T, std::io::Error> {
    fn path_context(self, path: &std::path::Path) -> Result<T> {
        self.map_err(|e| CircleError::file_system(path).with_source(e))
    }
}

/// Result type alias for circle operations
pub type Result<T> = std::result::Result<T, CircleError>;
