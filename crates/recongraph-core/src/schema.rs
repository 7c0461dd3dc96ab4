//! Property schema inference for stable tabular/attribute layout.

use std::collections::BTreeSet;

use crate::model::{Graph, Properties};

/// Derive the full set of property keys present across a record collection.
///
/// The result is lexicographically sorted and deduplicated, so repeated
/// runs over the same input always produce the same column layout. Only key
/// names are inspected; a value that is itself a nested structure is never
/// flattened into sub-keys.
pub fn infer_schema<'a, I>(records: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a Properties>,
{
    let mut keys = BTreeSet::new();
    for props in records {
        for key in props.keys() {
            keys.insert(key.clone());
        }
    }
    keys.into_iter().collect()
}

/// Schema over all entity property bags in the graph.
pub fn entity_schema(graph: &Graph) -> Vec<String> {
    infer_schema(graph.entities().iter().map(|e| &e.properties))
}

/// Schema over all link property bags in the graph.
pub fn link_schema(graph: &Graph) -> Vec<String> {
    infer_schema(graph.links().iter().map(|l| &l.properties))
}
