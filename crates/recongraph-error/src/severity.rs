//! Error severity for batch-processing decisions

use std::fmt;

/// The severity of an error, indicating whether the surrounding batch
/// can continue.
///
/// This helps callers decide how to handle errors:
/// - `Recoverable`: skip the offending record or degrade the value,
///   the rest of the batch proceeds
/// - `Fatal`: abort the export run, the failure is outside the engine's
///   control (e.g., the output sink cannot be written)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Severity {
    /// Error is scoped to one record or value - skip and continue.
    ///
    /// Examples: RecordInvalid, ReferenceUnresolved, SerializationFailed
    #[default]
    Recoverable,

    /// Error aborts the whole export run.
    ///
    /// Examples: SinkFailed, IoFailed
    Fatal,
}

impl Severity {
    /// Check if the surrounding batch can continue
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Severity::Recoverable)
    }

    /// Get severity as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Recoverable => "recoverable",
            Severity::Fatal => "fatal",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
