mod config;
mod emitter;
mod error;
mod model;

use anyhow::{Context, Result};
use config::GeneratorConfig;
use model::SampleMap;
use std::path::PathBuf;
use tracing::{debug, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive("curl2md=info".parse()?))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    run(&GeneratorConfig::default())?;
    Ok(())
}

/// Load every sample, then write its artifact. The input is fully read
/// before the output directory is touched.
fn run(config: &GeneratorConfig) -> Result<Vec<PathBuf>> {
    info!(input = %config.input.display(), "loading code samples");

    let samples = SampleMap::load(&config.input)
        .with_context(|| format!("Failed to load {}", config.input.display()))?;
    if samples.is_empty() {
        warn!(input = %config.input.display(), "no code samples defined");
    }
    debug!(count = samples.len(), "samples loaded");

    let written = emitter::emit(&samples, &config.output_dir)
        .with_context(|| format!("Failed to write samples to {}", config.output_dir.display()))?;

    info!(
        count = written.len(),
        dir = %config.output_dir.display(),
        "code samples generated"
    );
    Ok(written)
}
