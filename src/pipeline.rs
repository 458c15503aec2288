// src/pipeline.rs
use anyhow::Result;
use std::{path::PathBuf, time::Instant};
use tracing::info;

use crate::{
    load::load_input_dir,
    transform::split,
    write::{write_table, WrittenTable},
};

pub const DEFAULT_INPUT_DIR: &str = "files/input";
pub const DEFAULT_OUTPUT_DIR: &str = "files/output";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineConfig {
    /// Directory scanned for `*.zip` extracts.
    pub input_dir: PathBuf,
    /// Directory receiving `client.csv`, `campaign.csv` and `economics.csv`.
    pub output_dir: PathBuf,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from(DEFAULT_INPUT_DIR),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub archives: usize,
    pub unified_rows: usize,
    /// In write order: client, campaign, economics.
    pub outputs: Vec<WrittenTable>,
}

/// Load every extract, split it into the three tables and write them out.
///
/// All three tables are built before anything is written, so a schema error
/// leaves the output directory untouched.
pub fn run(config: &PipelineConfig) -> Result<RunSummary> {
    let start = Instant::now();

    let input = load_input_dir(&config.input_dir)?;
    let tables = split(&input.table)?;

    let outputs = vec![
        write_table(&config.output_dir, &tables.clients)?,
        write_table(&config.output_dir, &tables.campaigns)?,
        write_table(&config.output_dir, &tables.economics)?,
    ];

    info!(
        archives = input.archives.len(),
        rows = input.table.len(),
        elapsed = ?start.elapsed(),
        "pipeline complete"
    );
    Ok(RunSummary {
        archives: input.archives.len(),
        unified_rows: input.table.len(),
        outputs,
    })
}
