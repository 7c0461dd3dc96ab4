//! Artifact writing - the only side-effectful stage of the pipeline.

use std::path::{Path, PathBuf};

use tracing::info;

use recongraph_error::{Error, Result};

use crate::pipeline::Artifact;

/// Write every artifact into the output directory, creating it if needed.
///
/// A failed write is a sink failure: surfaced verbatim, never retried,
/// and fatal to the run.
pub fn write_artifacts(out_dir: &Path, artifacts: &[Artifact]) -> Result<Vec<PathBuf>> {
    std::fs::create_dir_all(out_dir).map_err(|err| {
        Error::sink_failed(out_dir.display().to_string())
            .with_operation("output::create_dir")
            .set_source(err)
    })?;

    let mut written = Vec::with_capacity(artifacts.len());
    for artifact in artifacts {
        let path = out_dir.join(&artifact.file_name);
        std::fs::write(&path, &artifact.contents).map_err(|err| {
            Error::sink_failed(path.display().to_string())
                .with_operation("output::write")
                .set_source(err)
        })?;
        info!(path = %path.display(), "output written");
        written.push(path);
    }
    Ok(written)
}
