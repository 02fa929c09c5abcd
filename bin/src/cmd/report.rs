//! Report command implementation.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use capval::run_valuation;
use tracing::info;

use crate::config::CliConfig;
use crate::scenario::Scenario;

/// Compute a scenario, build its report and write it to disk.
///
/// Writes to `output` when given, otherwise to the suggested file name inside
/// the configured output directory. Directory parts a project name smuggles
/// into the suggested name are dropped, so the default target never leaves
/// the output directory. Returns the path written.
pub(crate) fn write_report(
    path: &Path,
    output: Option<PathBuf>,
    config: &CliConfig,
) -> Result<PathBuf> {
    let (metadata, inputs) = Scenario::load(path)?.into_parts()?;
    let (_, file) = run_valuation(&metadata, &inputs)?;

    let target = match output {
        Some(target) => target,
        None => config.output_dir.join(local_file_name(&file.filename)?),
    };
    std::fs::write(&target, &file.bytes)
        .with_context(|| format!("failed to write report {}", target.display()))?;
    info!(path = %target.display(), bytes = file.bytes.len(), "report written");

    println!("Report written to {}", target.display());
    Ok(target)
}

/// Final path component of a suggested report name.
fn local_file_name(filename: &str) -> Result<&OsStr> {
    Path::new(filename)
        .file_name()
        .with_context(|| format!("report name {filename:?} has no file name component"))
}
