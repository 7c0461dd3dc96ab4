//! Graph construction from a generic entity/link JSON document.
//!
//! Normalization is deliberately lenient: each array element is
//! deserialized on its own, and a malformed element is skipped with a
//! warning while the rest of the batch proceeds. Only a document that is
//! not a JSON object at all fails the build.

use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, warn};

use recongraph_error::{Error, Result};

use crate::model::{DEFAULT_RELATION, Entity, Graph, Link, Properties, UNKNOWN_ENTITY_KIND};

/// Which normalization pass an input document calls for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Pre-shaped `{entities: [...], links: [...]}` document.
    Document,
    /// Aggregated `{targets: {...}, modules: [...]}` report envelope.
    Report,
}

impl InputMode {
    /// Sniff the mode from a document's top-level keys.
    pub fn detect(doc: &Value) -> Result<Self> {
        let Some(obj) = doc.as_object() else {
            return Err(Error::invalid_format("input document is not a JSON object")
                .with_operation("builder::detect_mode"));
        };
        if obj.contains_key("entities") || obj.contains_key("links") {
            Ok(Self::Document)
        } else if obj.contains_key("modules") || obj.contains_key("targets") {
            Ok(Self::Report)
        } else {
            Err(Error::invalid_format(
                "document has neither entities/links nor targets/modules",
            )
            .with_operation("builder::detect_mode"))
        }
    }
}

/// Raw entity record as it appears on the wire. Unknown keys are ignored,
/// known keys all have lenient defaults.
#[derive(Debug, Deserialize)]
struct RawEntity {
    #[serde(default)]
    id: String,
    #[serde(default, rename = "type")]
    kind: Option<String>,
    #[serde(default)]
    value: String,
    #[serde(default)]
    properties: Option<Properties>,
}

/// Raw link record. Source/target stay verbatim even when empty; dropping
/// dangling links is the exporters' job, not the model's.
#[derive(Debug, Deserialize)]
struct RawLink {
    #[serde(default)]
    source: String,
    #[serde(default)]
    target: String,
    #[serde(default, rename = "type")]
    relation: Option<String>,
    #[serde(default)]
    properties: Option<Properties>,
}

/// Build the canonical graph from a generic entity/link document.
///
/// Entities with an empty or missing id are excluded entirely. Links are
/// retained even when their endpoints do not resolve to a known entity.
pub fn build_document_graph(doc: &Value) -> Result<Graph> {
    let Some(obj) = doc.as_object() else {
        return Err(Error::invalid_format("input document is not a JSON object")
            .with_operation("builder::build_document_graph"));
    };

    let mut graph = Graph::new();
    let mut skipped = 0usize;

    for (index, raw) in array_field(obj.get("entities")).iter().enumerate() {
        match serde_json::from_value::<RawEntity>((*raw).clone()) {
            Ok(entity) => {
                if entity.id.is_empty() {
                    warn!(index, "skipping entity without id");
                    skipped += 1;
                    continue;
                }
                let mut normalized = Entity::new(
                    entity.id,
                    entity
                        .kind
                        .unwrap_or_else(|| UNKNOWN_ENTITY_KIND.to_string()),
                    entity.value,
                );
                normalized.properties = entity.properties.unwrap_or_default();
                if !graph.push_entity(normalized) {
                    warn!(index, "skipping entity with duplicate id");
                    skipped += 1;
                }
            }
            Err(err) => {
                warn!(index, %err, "skipping malformed entity record");
                skipped += 1;
            }
        }
    }

    for (index, raw) in array_field(obj.get("links")).iter().enumerate() {
        match serde_json::from_value::<RawLink>((*raw).clone()) {
            Ok(link) => {
                let mut normalized = Link::new(
                    link.source,
                    link.target,
                    link.relation
                        .unwrap_or_else(|| DEFAULT_RELATION.to_string()),
                );
                normalized.properties = link.properties.unwrap_or_default();
                graph.push_link(normalized);
            }
            Err(err) => {
                warn!(index, %err, "skipping malformed link record");
                skipped += 1;
            }
        }
    }

    debug!(
        entities = graph.entity_count(),
        links = graph.link_count(),
        skipped,
        "document graph built"
    );
    Ok(graph)
}

fn array_field(field: Option<&Value>) -> &[Value] {
    field.and_then(Value::as_array).map_or(&[], Vec::as_slice)
}
