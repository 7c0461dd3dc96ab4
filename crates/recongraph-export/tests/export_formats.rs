use pretty_assertions::assert_eq;
use recongraph_core::{build_document_graph, entity_schema, link_schema};
use recongraph_export::{entities_csv, generic_graphml, links_csv, maltego_graphml};
use serde_json::json;

fn scenario_graph() -> recongraph_core::Graph {
    let doc = json!({
        "entities": [
            {"id": "a", "type": "Domain", "value": "example.com"},
            {"id": "b", "type": "Email", "value": "x@example.com", "properties": {"breached": true}},
        ],
        "links": [
            {"source": "a", "target": "b", "type": "resolves_to"},
        ],
    });
    build_document_graph(&doc).expect("scenario graph")
}

/// Pull node ids and (source, target, relation) triples back out of the
/// generic dialect. The exporter's layout is line-oriented, so attribute
/// scanning is enough for a round-trip check.
fn reparse_generic(doc: &str) -> (Vec<String>, Vec<(String, String, String)>) {
    fn attr(line: &str, name: &str) -> Option<String> {
        let marker = format!("{name}=\"");
        let start = line.find(&marker)? + marker.len();
        let end = line[start..].find('"')? + start;
        Some(line[start..end].to_string())
    }

    let mut node_ids = Vec::new();
    let mut edges = Vec::new();
    let mut pending: Option<(String, String)> = None;

    for line in doc.lines() {
        let trimmed = line.trim();
        if trimmed.starts_with("<node ") {
            node_ids.push(attr(trimmed, "id").expect("node id"));
        } else if trimmed.starts_with("<edge ") {
            pending = Some((
                attr(trimmed, "source").expect("edge source"),
                attr(trimmed, "target").expect("edge target"),
            ));
        } else if let Some((source, target)) = pending.take() {
            let relation = trimmed
                .strip_prefix("<data key=\"d2\">")
                .and_then(|rest| rest.strip_suffix("</data>"))
                .expect("edge relation data")
                .to_string();
            edges.push((source, target, relation));
        }
    }

    (node_ids, edges)
}

#[test]
fn scenario_document_exports() {
    let graph = scenario_graph();

    let entities = entities_csv(&graph, &entity_schema(&graph)).expect("entities csv");
    assert!(entities.starts_with("id,type,value,breached\n"));
    assert!(entities.contains("b,Email,x@example.com,true"));

    let generic = generic_graphml(&graph);
    assert_eq!(generic.matches("<node ").count(), 2);
    assert_eq!(generic.matches("<edge ").count(), 1);
    assert!(generic.contains("<data key=\"d2\">resolves_to</data>"));

    let maltego = maltego_graphml(&graph);
    assert!(maltego.contains("<edge id=\"e0\" source=\"a\" target=\"b\">"));
}

#[test]
fn generic_graphml_round_trips() {
    let graph = scenario_graph();
    let (node_ids, edges) = reparse_generic(&generic_graphml(&graph));

    let expected_ids: Vec<String> = graph.entities().iter().map(|e| e.id.clone()).collect();
    assert_eq!(node_ids, expected_ids);
    assert_eq!(
        edges,
        vec![(
            "a".to_string(),
            "b".to_string(),
            "resolves_to".to_string()
        )]
    );
}

#[test]
fn dangling_link_present_in_table_absent_from_graphml() {
    let doc = json!({
        "entities": [{"id": "a", "type": "Domain", "value": "example.com"}],
        "links": [{"source": "a", "target": "X", "type": "resolves_to"}],
    });
    let graph = build_document_graph(&doc).expect("graph");

    let links = links_csv(&graph, &link_schema(&graph)).expect("links csv");
    assert!(links.contains("a,X,resolves_to"));

    let generic = generic_graphml(&graph);
    assert_eq!(generic.matches("<edge ").count(), 0);
}

#[test]
fn export_counts_match_canonical_counts() {
    let doc = json!({
        "entities": [
            {"id": "a"}, {"id": "b"}, {"id": "c"},
        ],
        "links": [
            {"source": "a", "target": "b"},
            {"source": "b", "target": "c"},
            {"source": "c", "target": "missing"},
        ],
    });
    let graph = build_document_graph(&doc).expect("graph");

    let entities = entities_csv(&graph, &entity_schema(&graph)).expect("entities csv");
    let links = links_csv(&graph, &link_schema(&graph)).expect("links csv");
    // header + one row per record: the tabular exporter filters nothing
    assert_eq!(entities.lines().count(), 1 + graph.entity_count());
    assert_eq!(links.lines().count(), 1 + graph.link_count());

    // graph formats drop the one dangling link
    let generic = generic_graphml(&graph);
    assert_eq!(generic.matches("<node ").count(), graph.entity_count());
    assert_eq!(generic.matches("<edge ").count(), graph.link_count() - 1);
}
