//! The main Error type for recongraph.

use crate::{ErrorKind, Severity};
use std::fmt;

/// Unified error type for all recongraph operations.
pub struct Error {
    kind: ErrorKind,
    message: String,
    severity: Severity,
    operation: &'static str,
    context: Vec<(&'static str, String)>,
    source: Option<Box<dyn std::error::Error + Send + Sync + 'static>>,
}

impl Error {
    /// Create a new error with the given kind and message.
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        let severity = if kind.is_fatal() {
            Severity::Fatal
        } else {
            Severity::Recoverable
        };

        Self {
            kind,
            message: message.into(),
            severity,
            operation: "",
            context: Vec::new(),
            source: None,
        }
    }

    /// Get the error kind.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Get the error severity
    pub fn severity(&self) -> Severity {
        self.severity
    }

    /// Get the operation that caused this error
    pub fn operation(&self) -> &'static str {
        self.operation
    }

    /// Get the context key-value pairs
    pub fn context(&self) -> &[(&'static str, String)] {
        &self.context
    }

    /// Get the source error (if any).
    pub fn source_ref(&self) -> Option<&(dyn std::error::Error + Send + Sync + 'static)> {
        self.source.as_ref().map(|e| e.as_ref())
    }

    /// Set the error severity.
    pub fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    /// Mark as recoverable (batch continues)
    pub fn recoverable(mut self) -> Self {
        self.severity = Severity::Recoverable;
        self
    }

    /// Mark as fatal (run aborts)
    pub fn fatal(mut self) -> Self {
        self.severity = Severity::Fatal;
        self
    }

    /// Set the operation that caused this error.
    ///
    /// If an operation was already set, the previous one is moved to context
    /// as "called" to preserve the call chain.
    pub fn with_operation(mut self, operation: &'static str) -> Self {
        if !self.operation.is_empty() {
            self.context.push(("called", self.operation.to_string()));
        }
        self.operation = operation;
        self
    }

    /// Add context to the error
    pub fn with_context(mut self, key: &'static str, value: impl Into<String>) -> Self {
        self.context.push((key, value.into()));
        self
    }

    /// Set the source error.
    ///
    /// # Panics (debug only)
    /// Panics in debug mode if source was already set.
    pub fn set_source<E>(mut self, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        debug_assert!(self.source.is_none(), "source error already set");
        self.source = Some(Box::new(source));
        self
    }

    /// Check if the surrounding batch can continue past this error
    pub fn is_recoverable(&self) -> bool {
        self.severity.is_recoverable()
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}) at {}", self.kind, self.severity, self.operation)?;

        if !self.context.is_empty() {
            write!(f, ", context {{ ")?;
            for (i, (key, value)) in self.context.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{}: {}", key, value)?;
            }
            write!(f, " }}")?;
        }

        if !self.message.is_empty() {
            write!(f, " => {}", self.message)?;
        }

        Ok(())
    }
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} ({}) at {}", self.kind, self.severity, self.operation)?;

        if !self.message.is_empty() {
            writeln!(f)?;
            writeln!(f, "    Message: {}", self.message)?;
        }

        if !self.context.is_empty() {
            writeln!(f)?;
            writeln!(f, "    Context:")?;
            for (key, value) in &self.context {
                writeln!(f, "        {}: {}", key, value)?;
            }
        }

        if let Some(source) = &self.source {
            writeln!(f)?;
            writeln!(f, "    Source: {:?}", source)?;
        }

        Ok(())
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn std::error::Error + 'static))
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        let kind = match err.kind() {
            std::io::ErrorKind::NotFound => ErrorKind::FileNotFound,
            std::io::ErrorKind::PermissionDenied => ErrorKind::PermissionDenied,
            _ => ErrorKind::IoFailed,
        };
        Error::new(kind, err.to_string())
            .with_operation("io")
            .set_source(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::new(ErrorKind::ParseFailed, err.to_string())
            .with_operation("json")
            .set_source(err)
    }
}

impl From<String> for Error {
    fn from(msg: String) -> Self {
        Error::new(ErrorKind::Unexpected, msg)
    }
}

impl From<&str> for Error {
    fn from(msg: &str) -> Self {
        Error::new(ErrorKind::Unexpected, msg)
    }
}

impl Error {
    /// Create an Unexpected error.
    pub fn unexpected(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Unexpected, message)
    }

    /// Create an Unsupported error
    pub fn unsupported(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Unsupported, message)
    }

    /// Create a ParseFailed error
    pub fn parse_failed(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::ParseFailed, message)
    }

    /// Create an InvalidFormat error
    pub fn invalid_format(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidFormat, message)
    }

    /// Create a RecordInvalid error
    pub fn record_invalid(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::RecordInvalid, message)
    }

    /// Create a ReferenceUnresolved error
    pub fn reference_unresolved(id: impl Into<String>) -> Self {
        let id = id.into();
        Self::new(
            ErrorKind::ReferenceUnresolved,
            format!("entity '{}' not found in graph", id),
        )
        .with_context("entity_id", id)
    }

    /// Create a FileNotFound error
    pub fn file_not_found(path: impl Into<String>) -> Self {
        let path = path.into();
        Self::new(
            ErrorKind::FileNotFound,
            format!("file '{}' not found", path),
        )
        .with_context("path", path)
    }

    /// Create a SinkFailed error
    pub fn sink_failed(path: impl Into<String>) -> Self {
        let path = path.into();
        Self::new(
            ErrorKind::SinkFailed,
            format!("cannot write output '{}'", path),
        )
        .with_context("path", path)
    }

    /// Create a SerializationFailed error
    pub fn serialization_failed(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::SerializationFailed, message)
    }

    /// Create a RenderFailed error
    pub fn render_failed(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::RenderFailed, message)
    }

    /// Create an InvalidArgument error
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidArgument, message)
    }

    /// Create a ConfigInvalid error
    pub fn config_invalid(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::ConfigInvalid, message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let err = Error::new(ErrorKind::RecordInvalid, "entity has no id");
        assert_eq!(err.kind(), ErrorKind::RecordInvalid);
        assert_eq!(err.message(), "entity has no id");
        assert_eq!(err.severity(), Severity::Recoverable);
    }

    #[test]
    fn test_error_with_context() {
        let err = Error::new(ErrorKind::RecordInvalid, "missing source")
            .with_operation("builder::normalize_link")
            .with_context("index", "7")
            .with_context("file", "report.json");

        assert_eq!(err.operation(), "builder::normalize_link");
        assert_eq!(err.context().len(), 2);
        assert_eq!(err.context()[0], ("index", "7".to_string()));
    }

    #[test]
    fn test_operation_chaining() {
        let err = Error::new(ErrorKind::SerializationFailed, "failed")
            .with_operation("graphml::write_node")
            .with_operation("export::run");

        assert_eq!(err.operation(), "export::run");
        assert_eq!(err.context().len(), 1);
        assert_eq!(
            err.context()[0],
            ("called", "graphml::write_node".to_string())
        );
    }

    #[test]
    fn test_severity_defaults() {
        let err = Error::new(ErrorKind::SinkFailed, "disk full");
        assert!(!err.is_recoverable()); // sink failures abort the run

        let err = Error::new(ErrorKind::RecordInvalid, "no id");
        assert!(err.is_recoverable()); // record problems skip and continue
    }

    #[test]
    fn test_display() {
        let err = Error::new(ErrorKind::ParseFailed, "unexpected EOF")
            .with_operation("builder::from_document")
            .with_context("file", "report.json")
            .with_context("offset", "42");

        let display = format!("{}", err);
        assert!(display.contains("ParseFailed"));
        assert!(display.contains("recoverable"));
        assert!(display.contains("builder::from_document"));
        assert!(display.contains("file: report.json"));
    }

    #[test]
    fn test_convenience_constructors() {
        let err = Error::reference_unresolved("X");
        assert_eq!(err.kind(), ErrorKind::ReferenceUnresolved);
        assert!(err.message().contains('X'));

        let err = Error::file_not_found("report.json");
        assert_eq!(err.kind(), ErrorKind::FileNotFound);

        let err = Error::sink_failed("entities.csv");
        assert_eq!(err.kind(), ErrorKind::SinkFailed);
        assert!(!err.is_recoverable());
    }

    #[test]
    fn test_set_source() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err = Error::new(ErrorKind::FileNotFound, "report.json not found").set_source(io_err);

        assert!(err.source_ref().is_some());
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: Error = io_err.into();
        assert_eq!(err.kind(), ErrorKind::PermissionDenied);
        assert!(!err.is_recoverable());
    }
}
