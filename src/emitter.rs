use crate::error::{Result, SampleError};
use crate::model::SampleMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

const FENCE_OPEN: &str = "```bash cURL";
const FENCE_CLOSE: &str = "```";

/// Wrap a command in a `bash cURL` fenced block. The command is copied verbatim.
pub fn render_markdown(command: &str) -> String {
    format!("{}\n{}\n{}", FENCE_OPEN, command, FENCE_CLOSE)
}

/// `<output_dir>/<name>.md`. The name is used as-is, separators included.
pub fn artifact_path(output_dir: &Path, name: &str) -> PathBuf {
    output_dir.join(format!("{}.md", name))
}

/// Write one Markdown artifact per sample into `output_dir`.
///
/// The directory is created if needed. Existing artifacts are overwritten.
/// Returns the written paths in sample order; a failed write stops the run
/// and leaves earlier artifacts in place.
pub fn emit(samples: &SampleMap, output_dir: &Path) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(output_dir).map_err(|source| SampleError::OutputWriteFailure {
        path: output_dir.to_path_buf(),
        source,
    })?;
    debug!(dir = %output_dir.display(), "output directory ready");

    let mut written = Vec::with_capacity(samples.len());
    for sample in samples.iter() {
        let path = artifact_path(output_dir, sample.name);
        fs::write(&path, render_markdown(sample.command)).map_err(|source| {
            SampleError::OutputWriteFailure {
                path: path.clone(),
                source,
            }
        })?;
        info!(sample = sample.name, path = %path.display(), "wrote artifact");
        written.push(path);
    }

    Ok(written)
}
