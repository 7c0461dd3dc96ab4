//! Core processing pipeline: load → normalize → export.

use std::time::Instant;

use serde_json::Value;
use tracing::info;

use recongraph_core::{
    InputMode, build_document_graph, build_report_graph, entity_schema, link_schema,
};
use recongraph_error::{Error, Result};
use recongraph_export::{entities_csv, generic_graphml, links_csv, maltego_graphml};
use recongraph_svg::{RenderOptions, render_svg};

use crate::{Format, RecongraphOptions};

/// One generated output: a file name (relative to the output directory)
/// plus its full contents. Producing artifacts is pure; writing them is
/// the caller's concern.
#[derive(Debug, Clone)]
pub struct Artifact {
    pub file_name: String,
    pub contents: String,
}

/// Run the engine over the input document and produce every requested
/// artifact in memory.
///
/// This is the core pipeline:
/// 1. Load and parse the input JSON
/// 2. Detect the normalization mode (or honor --report)
/// 3. Build the canonical graph
/// 4. Export each requested format from the shared read-only graph
pub fn run(opts: &RecongraphOptions) -> Result<Vec<Artifact>> {
    let load_start = Instant::now();
    let text = std::fs::read_to_string(&opts.input).map_err(|err| {
        Error::from(err).with_context("path", opts.input.display().to_string())
    })?;
    let doc: Value = serde_json::from_str(&text)
        .map_err(|err| Error::from(err).with_context("path", opts.input.display().to_string()))?;
    info!("Input loaded: {:.2}s", load_start.elapsed().as_secs_f64());

    let mode = if opts.force_report {
        InputMode::Report
    } else {
        InputMode::detect(&doc)?
    };

    let build_start = Instant::now();
    let graph = match mode {
        InputMode::Document => build_document_graph(&doc)?,
        InputMode::Report => build_report_graph(&doc)?,
    };
    info!(
        entities = graph.entity_count(),
        links = graph.link_count(),
        "Graph built: {:.2}s",
        build_start.elapsed().as_secs_f64()
    );

    let base = base_name(opts);
    let mut artifacts = Vec::new();

    for format in &opts.formats {
        let export_start = Instant::now();
        match format {
            Format::Tabular => {
                let entity_keys = entity_schema(&graph);
                let link_keys = link_schema(&graph);
                artifacts.push(Artifact {
                    file_name: "entities.csv".to_string(),
                    contents: entities_csv(&graph, &entity_keys)?,
                });
                artifacts.push(Artifact {
                    file_name: "links.csv".to_string(),
                    contents: links_csv(&graph, &link_keys)?,
                });
            }
            Format::Graphml => {
                artifacts.push(Artifact {
                    file_name: format!("{base}.graphml"),
                    contents: generic_graphml(&graph),
                });
            }
            Format::Maltego => {
                artifacts.push(Artifact {
                    file_name: format!("{base}_maltego.graphml"),
                    contents: maltego_graphml(&graph),
                });
            }
            Format::Svg => {
                let render_options = RenderOptions {
                    show_properties: opts.show_properties,
                    directed: !opts.undirected,
                };
                artifacts.push(Artifact {
                    file_name: format!("{base}_graph.svg"),
                    contents: render_svg(&graph, &render_options),
                });
            }
        }
        info!(
            "{:?} export: {:.2}s",
            format,
            export_start.elapsed().as_secs_f64()
        );
    }

    Ok(artifacts)
}

/// Base name for generated files: the explicit option, else the input
/// file stem, else a fixed fallback.
fn base_name(opts: &RecongraphOptions) -> String {
    if let Some(name) = &opts.base_name {
        return name.clone();
    }
    opts.input
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or("graph")
        .to_string()
}
