//! recongraph command-line interface.
//!
pub mod output;
pub mod pipeline;

use std::path::PathBuf;

use recongraph_error::Result;

/// An export format the pipeline can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// entities.csv + links.csv
    Tabular,
    /// Standard GraphML
    Graphml,
    /// Maltego-compatible GraphML
    Maltego,
    /// SVG diagram
    Svg,
}

impl Format {
    /// Every format, in the order artifacts are produced.
    pub fn all() -> Vec<Format> {
        vec![Format::Tabular, Format::Graphml, Format::Maltego, Format::Svg]
    }
}

/// Options for running recongraph.
pub struct RecongraphOptions {
    /// Input JSON document.
    pub input: PathBuf,
    /// Directory receiving the generated files.
    pub out_dir: PathBuf,
    /// Base name for generated files; defaults to the input file stem.
    pub base_name: Option<String>,
    /// Formats to produce.
    pub formats: Vec<Format>,
    /// Force aggregated-report normalization regardless of document shape.
    pub force_report: bool,
    /// Rich SVG mode: render every property as an extra label line.
    pub show_properties: bool,
    /// Draw undirected SVG connectors.
    pub undirected: bool,
}

/// Main entry point: normalize the input and write every requested
/// artifact. Returns the paths written.
pub fn run_main(opts: &RecongraphOptions) -> Result<Vec<PathBuf>> {
    let artifacts = pipeline::run(opts)?;
    output::write_artifacts(&opts.out_dir, &artifacts)
}
