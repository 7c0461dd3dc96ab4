//! Error kinds for recongraph operations

use strum_macros::{Display, IntoStaticStr};

/// The kind of error that occurred.
///
/// This enum categorizes errors to help users write clear error handling logic.
/// Users can match on ErrorKind to decide how to handle specific error cases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, IntoStaticStr, Display)]
#[non_exhaustive]
pub enum ErrorKind {
    // =========================================================================
    // General errors
    // =========================================================================
    /// An unexpected error occurred - catch-all for unhandled cases
    Unexpected,

    /// The requested feature or operation is not supported
    Unsupported,

    /// Invalid configuration or parameters
    ConfigInvalid,

    /// Invalid argument passed to function
    InvalidArgument,

    // =========================================================================
    // Input document errors
    // =========================================================================
    /// Failed to parse the input document as JSON
    ParseFailed,

    /// Document is valid JSON but not a recognized shape
    InvalidFormat,

    /// Encoding error (invalid UTF-8, etc.)
    EncodingError,

    // =========================================================================
    // Record errors
    // =========================================================================
    /// An individual entity/link/finding record is missing a required field
    RecordInvalid,

    /// A link references an entity id that does not exist in the graph
    ReferenceUnresolved,

    // =========================================================================
    // Export errors
    // =========================================================================
    /// Serialization of a value or record failed
    SerializationFailed,

    /// Visual rendering failed
    RenderFailed,

    // =========================================================================
    // Sink/IO errors
    // =========================================================================
    /// Input file not found
    FileNotFound,

    /// Permission denied
    PermissionDenied,

    /// IO operation failed
    IoFailed,

    /// Output sink could not be written
    SinkFailed,
}

impl ErrorKind {
    /// Returns the error kind as a static string
    pub fn as_str(&self) -> &'static str {
        (*self).into()
    }

    /// Check if this error kind is fatal to an export run by default.
    ///
    /// Only sink and IO failures abort a run; record-level and value-level
    /// problems are skipped or degraded instead.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            ErrorKind::SinkFailed
                | ErrorKind::IoFailed
                | ErrorKind::FileNotFound
                | ErrorKind::PermissionDenied
        )
    }
}
