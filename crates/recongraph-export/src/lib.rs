//! Interchange-format export of the canonical graph.
//!
//! Every exporter takes a shared read-only view of the graph and returns
//! an in-memory UTF-8 string; writing the result to a file or response
//! body is the caller's business. Outputs are deterministic for identical
//! input so they can be compared byte-for-byte in regression tests.
//!
//! # Module Structure
//!
//! - [`tabular`]: delimited entity/link tables with inferred property columns
//! - [`graphml`]: the two GraphML dialects behind one serializer
//! - [`xml`]: minimal XML writing helpers shared by the dialects

pub mod graphml;
pub mod tabular;
mod xml;

pub use graphml::{
    Dialect, GENERIC, GRAPHML_NS, MALTEGO, generic_graphml, maltego_graphml, render_graphml,
};
pub use tabular::{entities_csv, links_csv};
pub use xml::XmlBuilder;
