//! Graph construction from an aggregated reconnaissance report.
//!
//! A report envelope carries the investigated targets plus one finding
//! record per data-source module. Normalization synthesizes a star-like
//! target-centric graph: one node per target, one node per finding, and a
//! target→finding link whenever the finding echoes the target's field.

use serde_json::{Map, Value};
use tracing::{debug, warn};

use recongraph_error::{Error, Result};

use crate::model::{DEFAULT_RELATION, Entity, Graph, Link};

/// Declared correspondence between a target kind and the field a finding
/// record echoes when it concerns that target.
///
/// Connection is decided by this table alone, never inferred from whatever
/// fields happen to be present on a finding.
struct TargetBinding {
    kind: &'static str,
    echo_field: &'static str,
}

const TARGET_BINDINGS: &[TargetBinding] = &[
    TargetBinding {
        kind: "domain",
        echo_field: "domain",
    },
    TargetBinding {
        kind: "email",
        echo_field: "email",
    },
    TargetBinding {
        kind: "username",
        echo_field: "username",
    },
];

/// Entity kind assigned to synthesized finding nodes.
pub const FINDING_KIND: &str = "module";

/// Build the canonical graph from an aggregated report envelope.
///
/// Target nodes are created first (ids `n0`, `n1`, … in target-kind
/// order), then one node per finding in module order. Findings without a
/// `source` field are malformed and skipped; the batch proceeds.
pub fn build_report_graph(doc: &Value) -> Result<Graph> {
    let Some(obj) = doc.as_object() else {
        return Err(Error::invalid_format("report document is not a JSON object")
            .with_operation("report::build_report_graph"));
    };

    let mut graph = Graph::new();
    let mut next_id = 0usize;
    let mut make_id = move || {
        let id = format!("n{next_id}");
        next_id += 1;
        id
    };

    // Target nodes. serde_json maps iterate in sorted key order, so the
    // id assignment is reproducible across runs.
    let mut target_ids: Vec<(&str, String)> = Vec::new();
    if let Some(targets) = obj.get("targets").and_then(Value::as_object) {
        for (kind, value) in targets {
            let Some(value) = value.as_str().filter(|v| !v.is_empty()) else {
                warn!(kind = %kind, "skipping target without a usable value");
                continue;
            };
            let id = make_id();
            graph.push_entity(Entity::new(&id, kind, value));
            target_ids.push((kind.as_str(), id));
        }
    }

    // Finding nodes and target→finding links.
    let modules = obj
        .get("modules")
        .and_then(Value::as_array)
        .map_or(&[][..], Vec::as_slice);
    for (index, finding) in modules.iter().enumerate() {
        let Some(finding) = finding.as_object() else {
            warn!(index, "skipping non-object finding record");
            continue;
        };
        let Some(source) = finding.get("source").and_then(Value::as_str) else {
            warn!(index, "skipping finding without source");
            continue;
        };

        let id = make_id();
        let mut node = Entity::new(&id, FINDING_KIND, source);
        if let Some(summary) = finding_summary(finding) {
            node.properties
                .insert("summary".to_string(), Value::String(summary));
        }
        graph.push_entity(node);

        for binding in TARGET_BINDINGS {
            if !echoes_target(finding, binding.echo_field) {
                continue;
            }
            if let Some((_, target_id)) =
                target_ids.iter().find(|(kind, _)| *kind == binding.kind)
            {
                graph.push_link(Link::new(target_id, &id, DEFAULT_RELATION));
            }
        }
    }

    debug!(
        entities = graph.entity_count(),
        links = graph.link_count(),
        "report graph built"
    );
    Ok(graph)
}

/// One-line human summary of a finding's collections. Later collections
/// take precedence, mirroring how reports list them.
fn finding_summary(finding: &Map<String, Value>) -> Option<String> {
    let mut summary = None;
    if let Some(breaches) = finding.get("breaches") {
        summary = Some(format!("breaches:{}", collection_len(breaches)));
    }
    if let Some(found_on) = finding.get("found_on") {
        summary = Some(format!("found_on:{}", collection_len(found_on)));
    }
    if finding.contains_key("records") {
        summary = Some("dns_records".to_string());
    }
    summary
}

fn collection_len(value: &Value) -> usize {
    value.as_array().map_or(0, Vec::len)
}

/// A finding concerns a target only when it echoes the target's field
/// back as a non-empty string.
fn echoes_target(finding: &Map<String, Value>, field: &str) -> bool {
    finding
        .get(field)
        .and_then(Value::as_str)
        .is_some_and(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn sample_report() -> Value {
        json!({
            "targets": {"email": "x@example.com", "domain": "example.com"},
            "modules": [
                {
                    "source": "haveibeenpwned",
                    "email": "x@example.com",
                    "breaches": [{"Name": "Adobe"}, {"Name": "LinkedIn"}],
                },
                {
                    "source": "dns",
                    "domain": "example.com",
                    "records": {"A": ["93.184.216.34"], "MX": []},
                },
                {
                    "source": "username",
                    "username": "ghost",
                    "found_on": [],
                },
            ],
        })
    }

    #[test]
    fn targets_come_first_in_kind_order() {
        let graph = build_report_graph(&sample_report()).unwrap();

        // "domain" sorts before "email"; modules follow in array order.
        let kinds: Vec<&str> = graph.entities().iter().map(|e| e.kind.as_str()).collect();
        assert_eq!(
            kinds,
            vec!["domain", "email", "module", "module", "module"]
        );
        assert_eq!(graph.entities()[0].id, "n0");
        assert_eq!(graph.entities()[0].value, "example.com");
        assert_eq!(graph.entities()[1].id, "n1");
    }

    #[test]
    fn findings_link_only_to_echoed_targets() {
        let graph = build_report_graph(&sample_report()).unwrap();

        // hibp echoes email, dns echoes domain; the username module's
        // target was never investigated so its echo connects nothing.
        assert_eq!(graph.link_count(), 2);
        let hibp = graph.entities().iter().find(|e| e.value == "haveibeenpwned").unwrap();
        let email = &graph.entities()[1];
        assert!(
            graph
                .links()
                .iter()
                .any(|l| l.source == email.id && l.target == hibp.id)
        );
        assert!(graph.links().iter().all(|l| graph.resolves(l)));
    }

    #[test]
    fn summaries_follow_collection_precedence() {
        let graph = build_report_graph(&sample_report()).unwrap();
        let summary_of = |value: &str| -> String {
            graph
                .entities()
                .iter()
                .find(|e| e.value == value)
                .and_then(|e| e.properties.get("summary"))
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string()
        };

        assert_eq!(summary_of("haveibeenpwned"), "breaches:2");
        assert_eq!(summary_of("dns"), "dns_records");
        assert_eq!(summary_of("username"), "found_on:0");
    }

    #[test]
    fn findings_without_source_are_skipped() {
        let doc = json!({
            "targets": {"domain": "example.com"},
            "modules": [{"domain": "example.com"}, {"source": "whois", "domain": "example.com"}],
        });
        let graph = build_report_graph(&doc).unwrap();
        // one target node + one surviving finding node
        assert_eq!(graph.entity_count(), 2);
        assert_eq!(graph.link_count(), 1);
    }

    #[test]
    fn empty_report_builds_empty_graph() {
        let graph = build_report_graph(&json!({"targets": {}, "modules": []})).unwrap();
        assert!(graph.is_empty());
    }
}
