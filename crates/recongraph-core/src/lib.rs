pub mod builder;
pub mod model;
pub mod report;
pub mod schema;
pub mod value;

pub use builder::{InputMode, build_document_graph};
pub use model::{DEFAULT_RELATION, Entity, Graph, Link, Properties, UNKNOWN_ENTITY_KIND};
pub use recongraph_error::{Error, ErrorKind, Result, Severity};
pub use report::build_report_graph;
pub use schema::{entity_schema, infer_schema, link_schema};
pub use value::property_text;
