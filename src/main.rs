use anyhow::Result;
use campaignsplit::pipeline::{self, PipelineConfig, DEFAULT_INPUT_DIR, DEFAULT_OUTPUT_DIR};
use clap::Parser;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Split zipped campaign extracts into client, campaign and economics CSVs"
)]
struct Args {
    /// Directory holding the `*.zip` extracts
    #[arg(long, default_value = DEFAULT_INPUT_DIR)]
    input: PathBuf,
    /// Directory the three CSV tables are written to
    #[arg(long, default_value = DEFAULT_OUTPUT_DIR)]
    output: PathBuf,
}

fn main() -> Result<()> {
    // ─── 1) init logging ─────────────────────────────────────────────
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder()
        .with_env_filter(env)
        .with_span_events(fmt::format::FmtSpan::CLOSE)
        .init();

    // ─── 2) resolve dirs ─────────────────────────────────────────────
    let args = Args::parse();
    let config = PipelineConfig {
        input_dir: args.input,
        output_dir: args.output,
    };
    info!(
        input = %config.input_dir.display(),
        output = %config.output_dir.display(),
        "startup"
    );

    // ─── 3) load, split, write ───────────────────────────────────────
    let summary = pipeline::run(&config)?;
    for out in &summary.outputs {
        info!(path = %out.path.display(), rows = out.rows, "output");
    }

    info!(
        archives = summary.archives,
        rows = summary.unified_rows,
        "all done"
    );
    Ok(())
}
