use pretty_assertions::assert_eq;
use recongraph_core::{
    InputMode, build_document_graph, build_report_graph, entity_schema, infer_schema,
    link_schema,
};
use serde_json::json;

#[test]
fn document_and_report_graphs_satisfy_the_same_invariants() {
    let document = json!({
        "entities": [
            {"id": "a", "type": "Domain", "value": "example.com"},
            {"id": "", "type": "Ghost"},
        ],
        "links": [
            {"source": "a", "target": "b"},
        ],
    });
    let report = json!({
        "targets": {"domain": "example.com"},
        "modules": [
            {"source": "whois", "domain": "example.com"},
        ],
    });

    for graph in [
        build_document_graph(&document).expect("document graph"),
        build_report_graph(&report).expect("report graph"),
    ] {
        // no entity carries an empty id, whatever the input shape
        assert!(graph.entities().iter().all(|e| !e.id.is_empty()));
        // ids are unique
        let mut ids: Vec<&str> = graph.entities().iter().map(|e| e.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), graph.entity_count());
    }
}

#[test]
fn schema_inference_spans_both_record_kinds() {
    let doc = json!({
        "entities": [
            {"id": "a", "properties": {"country": "ES", "age": 41}},
            {"id": "b", "properties": {"country": "US"}},
            {"id": "c", "properties": {"age": 7, "note": "seen"}},
        ],
        "links": [
            {"source": "a", "target": "b", "properties": {"confidence": 0.9}},
            {"source": "b", "target": "c"},
        ],
    });
    let graph = build_document_graph(&doc).expect("graph");

    assert_eq!(entity_schema(&graph), vec!["age", "country", "note"]);
    assert_eq!(link_schema(&graph), vec!["confidence"]);
}

#[test]
fn schema_inference_is_independent_of_record_order() {
    let forward = build_document_graph(&json!({
        "entities": [
            {"id": "a", "properties": {"country": "ES", "age": 41}},
            {"id": "b", "properties": {"age": 7, "note": "x"}},
        ],
    }))
    .expect("graph");
    let backward = build_document_graph(&json!({
        "entities": [
            {"id": "b", "properties": {"age": 7, "note": "x"}},
            {"id": "a", "properties": {"country": "ES", "age": 41}},
        ],
    }))
    .expect("graph");

    assert_eq!(entity_schema(&forward), entity_schema(&backward));
    assert_eq!(entity_schema(&forward), vec!["age", "country", "note"]);
}

#[test]
fn empty_property_bags_yield_base_columns_only() {
    let graph = build_document_graph(&json!({
        "entities": [{"id": "a"}, {"id": "b"}],
        "links": [{"source": "a", "target": "b"}],
    }))
    .expect("graph");

    assert!(entity_schema(&graph).is_empty());
    assert!(link_schema(&graph).is_empty());
    assert!(infer_schema(graph.entities().iter().map(|e| &e.properties)).is_empty());
}

#[test]
fn mode_detection_prefers_document_shape() {
    // a document carrying both shapes normalizes as entity/link data
    let both = json!({
        "entities": [{"id": "a"}],
        "modules": [{"source": "dns"}],
    });
    assert_eq!(InputMode::detect(&both).expect("mode"), InputMode::Document);
}
