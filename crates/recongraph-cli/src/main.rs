use std::path::PathBuf;
use std::time::Instant;

use clap::Parser;

use recongraph::{Format, RecongraphOptions, run_main};
use recongraph_error::Result;

#[derive(Parser, Debug)]
#[command(
    name = "recongraph",
    about = "recongraph: one graph out of every finding, exported everywhere",
    version
)]
pub struct Cli {
    /// Input JSON document (entity/link document or aggregated report)
    #[arg(value_name = "JSON")]
    json: PathBuf,

    /// Directory receiving the generated files
    #[arg(short = 'o', long = "out-dir", value_name = "DIR", default_value = ".")]
    out_dir: PathBuf,

    /// Base name for generated files (defaults to the input file stem)
    #[arg(long = "base-name", value_name = "NAME")]
    base_name: Option<String>,

    /// Export the entity/link tables (entities.csv, links.csv)
    #[arg(long)]
    csv: bool,

    /// Export standard GraphML
    #[arg(long)]
    graphml: bool,

    /// Export Maltego-compatible GraphML
    #[arg(long)]
    maltego: bool,

    /// Render the SVG diagram
    #[arg(long)]
    svg: bool,

    /// Treat the input as an aggregated report envelope
    #[arg(long)]
    report: bool,

    /// Render every property as an extra label line in the SVG
    #[arg(long = "show-properties")]
    show_properties: bool,

    /// Draw undirected connectors instead of arrows
    #[arg(long)]
    undirected: bool,
}

impl Cli {
    /// Formats selected by flags; no flags means every format.
    fn formats(&self) -> Vec<Format> {
        let mut formats = Vec::new();
        if self.csv {
            formats.push(Format::Tabular);
        }
        if self.graphml {
            formats.push(Format::Graphml);
        }
        if self.maltego {
            formats.push(Format::Maltego);
        }
        if self.svg {
            formats.push(Format::Svg);
        }
        if formats.is_empty() {
            formats = Format::all();
        }
        formats
    }
}

pub fn run(args: Cli) -> Result<()> {
    let total_start = Instant::now();

    // Initialize tracing subscriber for logging
    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_writer(std::io::stderr)
            .init();
    }

    let opts = RecongraphOptions {
        input: args.json.clone(),
        out_dir: args.out_dir.clone(),
        base_name: args.base_name.clone(),
        formats: args.formats(),
        force_report: args.report,
        show_properties: args.show_properties,
        undirected: args.undirected,
    };

    match run_main(&opts) {
        Ok(written) => {
            for path in &written {
                println!("[+] {}", path.display());
            }
        }
        Err(e) => {
            eprintln!("Error: {e}");
            tracing::error!(error = %e, "execution failed");
            return Err(e);
        }
    }

    let total_secs = total_start.elapsed().as_secs_f64();
    tracing::info!(total_secs, "complete");
    Ok(())
}

pub fn main() -> Result<()> {
    let args = Cli::parse();
    run(args)
}
