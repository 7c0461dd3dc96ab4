//! # recongraph-error
//!
//! Unified error handling for recongraph - following OpenDAL's error handling practices.
//!
//! ## Design Philosophy
//!
//! - **ErrorKind**: Know what error occurred (e.g., ParseFailed, SinkFailed)
//! - **Severity**: Decide how to handle it (Recoverable, Fatal)
//! - **Error Context**: Assist in locating the cause with rich context
//! - **Error Source**: Wrap underlying errors without leaking raw types
//!
//! ## Usage
//!
//! ```rust
//! use recongraph_error::{Error, ErrorKind};
//!
//! fn example() -> Result<(), Error> {
//!     Err(Error::new(ErrorKind::RecordInvalid, "entity has no id")
//!         .with_operation("builder::from_document")
//!         .with_context("index", "3"))
//! }
//! ```
//!
//! ## Principles
//!
//! - All fallible engine operations return `Result<T, recongraph_error::Error>`
//! - External errors are wrapped with `set_source(err)`
//! - Same error handled once, subsequent ops only append context
//! - Record-level problems are Recoverable and never abort a batch;
//!   only sink failures are Fatal to an export run

mod error;
mod kind;
mod severity;

pub use error::Error;
pub use kind::ErrorKind;
pub use severity::Severity;

/// Result type alias using recongraph Error
pub type Result<T> = std::result::Result<T, Error>;
