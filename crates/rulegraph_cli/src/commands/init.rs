//! Init command implementation

use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use miette::{IntoDiagnostic, Result, WrapErr};
use tracing::info;

use crate::cli::{Cli, OutputFormat};
use crate::config::CliConfig;

/// Writes a config file holding the given settings.
///
/// The target is `--config` when given, else `.rulegraph.jsonc` in the
/// working directory. An existing file is only replaced with `--force`.
pub fn run_init(
    cli: &Cli,
    format: Option<OutputFormat>,
    limit: Option<usize>,
    force: bool,
) -> Result<()> {
    let path = cli
        .config
        .clone()
        .unwrap_or_else(|| PathBuf::from(CliConfig::CONFIG_FILES[0]));

    let settings = CliConfig {
        format: Some(format.unwrap_or_default()),
        limit,
    };
    let content = settings.to_jsonc()?;

    if force {
        match std::fs::remove_file(&path) {
            Ok(()) => info!("Replacing {}", path.display()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(e) => {
                return Err(e)
                    .into_diagnostic()
                    .wrap_err_with(|| format!("Failed to remove {}", path.display()));
            }
        }
    }

    let mut file = create_new(&path).map_err(|e| {
        if e.kind() == io::ErrorKind::AlreadyExists {
            miette::miette!(
                "{} already exists. Use --force to overwrite.",
                path.display()
            )
        } else {
            miette::miette!("Failed to create {}: {}", path.display(), e)
        }
    })?;
    file.write_all(content.as_bytes()).into_diagnostic()?;

    info!("Created {}", path.display());
    Ok(())
}

/// Opens `path` for writing only if nothing, not even a symlink, is there.
fn create_new(path: &Path) -> io::Result<File> {
    let mut options = OpenOptions::new();
    options.write(true).create_new(true);

    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.custom_flags(libc::O_NOFOLLOW);
    }

    options.open(path)
}
