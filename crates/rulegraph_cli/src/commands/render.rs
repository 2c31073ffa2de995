//! Render command implementation

use std::path::Path;

use miette::{IntoDiagnostic, Result, WrapErr};
use rulegraph_ast::NetworkArena;
use rulegraph_loader::{JsonNetworkLoader, NetworkLoader};
use tracing::{debug, info, warn};

use crate::cli::{Cli, OutputFormat};
use crate::config::CliConfig;
use crate::output::output_network;

pub fn run_render(
    cli: &Cli,
    file: &Path,
    format: Option<OutputFormat>,
    limit: Option<usize>,
) -> Result<()> {
    let config = if let Some(ref path) = cli.config {
        CliConfig::from_file(path)?
    } else {
        find_config()?
    };

    let format = format.or(config.format).unwrap_or_default();
    let limit = limit.or(config.limit);
    debug!(?format, ?limit, "render settings");

    let loader = JsonNetworkLoader::new();
    if let Some(extension) = file.extension().and_then(|ext| ext.to_str())
        && !loader.can_load(extension)
    {
        warn!(
            "Unrecognized extension '.{}', reading {} as {}",
            extension,
            file.display(),
            loader.name()
        );
    }

    let source = std::fs::read_to_string(file)
        .into_diagnostic()
        .wrap_err_with(|| format!("Failed to read {}", file.display()))?;

    let arena = NetworkArena::with_capacity(source.len());
    let root = loader
        .load(&arena, &source)
        .into_diagnostic()
        .wrap_err_with(|| format!("Failed to load {}", file.display()))?;

    output_network(&root, format, limit)
}

fn find_config() -> Result<CliConfig> {
    if let Some(path) = CliConfig::discover(".") {
        info!("Using config: {}", path.display());
        return CliConfig::from_file(&path);
    }

    debug!("No config file found, using defaults");
    Ok(CliConfig::default())
}
