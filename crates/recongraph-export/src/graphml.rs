//! GraphML serialization of the canonical graph.
//!
//! Two dialects are produced by one serializer parameterized by a small
//! [`Dialect`] configuration, so the shared invariants (namespace,
//! entities-then-links ordering, XML declaration, deterministic output)
//! cannot drift between them:
//!
//! - the **generic** dialect declares attribute keys and emits
//!   `label`/`type` data on nodes and `relation` data on edges;
//! - the **Maltego-compatible** dialect restricts every node and edge to
//!   a single `Label` data field, synthesizes sequential edge ids, and
//!   applies the import validator's stricter skip rules.

use tracing::debug;

use recongraph_core::{Graph, Link};

use crate::xml::XmlBuilder;

/// The GraphML XML namespace.
pub const GRAPHML_NS: &str = "http://graphml.graphdrawing.org/xmlns";

/// Attribute representation for nodes and edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttributeStyle {
    /// Declared `<key>` schemas; nodes carry `label` + `type`, edges
    /// carry `relation`.
    Declared,
    /// No key declarations; every element carries exactly one `Label`
    /// data field combining value and type (nodes) or the relation type
    /// (edges).
    LabelOnly,
}

/// Edge id synthesis strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeIdStyle {
    /// No edge ids.
    None,
    /// Zero-based sequential ids: `e0`, `e1`, … — counted over emitted
    /// edges, so skipped links leave no gaps.
    Sequential,
}

/// Which links are valid enough to emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkValidity {
    /// Both endpoints must resolve to an existing entity id.
    Resolved,
    /// Both endpoint fields must merely be non-empty.
    EndpointsPresent,
}

/// Configuration of one GraphML dialect.
#[derive(Debug, Clone, Copy)]
pub struct Dialect {
    pub attributes: AttributeStyle,
    pub edge_ids: EdgeIdStyle,
    pub link_validity: LinkValidity,
    /// Re-check node ids for emptiness even though the model already
    /// excludes such entities.
    pub skip_empty_node_ids: bool,
}

/// Standard GraphML.
pub const GENERIC: Dialect = Dialect {
    attributes: AttributeStyle::Declared,
    edge_ids: EdgeIdStyle::None,
    link_validity: LinkValidity::Resolved,
    skip_empty_node_ids: false,
};

/// GraphML constrained to what Maltego's importer accepts.
pub const MALTEGO: Dialect = Dialect {
    attributes: AttributeStyle::LabelOnly,
    edge_ids: EdgeIdStyle::Sequential,
    link_validity: LinkValidity::EndpointsPresent,
    skip_empty_node_ids: true,
};

/// Serialize the graph as standard GraphML.
pub fn generic_graphml(graph: &Graph) -> String {
    render_graphml(graph, &GENERIC)
}

/// Serialize the graph as Maltego-compatible GraphML.
pub fn maltego_graphml(graph: &Graph) -> String {
    render_graphml(graph, &MALTEGO)
}

/// Serialize the graph in the given dialect.
///
/// Entities are written first, then links, both in graph order; output is
/// byte-stable across runs for identical input.
pub fn render_graphml(graph: &Graph, dialect: &Dialect) -> String {
    let mut xml = XmlBuilder::new();
    xml.open("graphml", &[("xmlns", GRAPHML_NS)]);

    if dialect.attributes == AttributeStyle::Declared {
        xml.leaf(
            "key",
            &[
                ("id", "d0"),
                ("for", "node"),
                ("attr.name", "label"),
                ("attr.type", "string"),
            ],
        );
        xml.leaf(
            "key",
            &[
                ("id", "d1"),
                ("for", "node"),
                ("attr.name", "type"),
                ("attr.type", "string"),
            ],
        );
        xml.leaf(
            "key",
            &[
                ("id", "d2"),
                ("for", "edge"),
                ("attr.name", "relation"),
                ("attr.type", "string"),
            ],
        );
    }

    xml.open("graph", &[("edgedefault", "directed")]);

    let mut skipped_nodes = 0usize;
    for entity in graph.entities() {
        if dialect.skip_empty_node_ids && entity.id.is_empty() {
            skipped_nodes += 1;
            continue;
        }
        xml.open("node", &[("id", entity.id.as_str())]);
        match dialect.attributes {
            AttributeStyle::Declared => {
                xml.text_element("data", &[("key", "d0")], &entity.value);
                xml.text_element("data", &[("key", "d1")], &entity.kind);
            }
            AttributeStyle::LabelOnly => {
                let label = format!("{} ({})", entity.value, entity.kind);
                xml.text_element("data", &[("key", "Label")], &label);
            }
        }
        xml.close();
    }

    let mut emitted_edges = 0usize;
    let mut skipped_edges = 0usize;
    for link in graph.links() {
        if !link_is_exportable(graph, link, dialect.link_validity) {
            skipped_edges += 1;
            continue;
        }

        let edge_id;
        let mut attrs: Vec<(&str, &str)> = Vec::with_capacity(3);
        if dialect.edge_ids == EdgeIdStyle::Sequential {
            edge_id = format!("e{emitted_edges}");
            attrs.push(("id", edge_id.as_str()));
        }
        attrs.push(("source", link.source.as_str()));
        attrs.push(("target", link.target.as_str()));

        xml.open("edge", &attrs);
        match dialect.attributes {
            AttributeStyle::Declared => {
                xml.text_element("data", &[("key", "d2")], &link.relation);
            }
            AttributeStyle::LabelOnly => {
                xml.text_element("data", &[("key", "Label")], &link.relation);
            }
        }
        xml.close();
        emitted_edges += 1;
    }

    debug!(
        nodes = graph.entity_count() - skipped_nodes,
        edges = emitted_edges,
        skipped_edges,
        "graphml rendered"
    );
    xml.build()
}

fn link_is_exportable(graph: &Graph, link: &Link, validity: LinkValidity) -> bool {
    match validity {
        LinkValidity::Resolved => graph.resolves(link),
        LinkValidity::EndpointsPresent => link.has_endpoints(),
    }
}
