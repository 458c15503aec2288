// Shared fixtures for the in-crate test modules.
use anyhow::Result;
use std::{
    fs::File,
    io::Write,
    path::{Path, PathBuf},
};
use tracing_subscriber::{EnvFilter, FmtSubscriber};
use zip::{write::SimpleFileOptions, CompressionMethod, ZipWriter};

pub const SAMPLE_HEADER: &str = ",client_id,age,job,marital,education,credit_default,mortgage,month,day,contact_duration,number_contacts,previous_campaign_contacts,previous_outcome,cons_price_idx,euribor_three_months,campaign_outcome";

pub fn init_test_logging() {
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,campaignsplit=debug")),
        )
        .with_test_writer()
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
}

/// Zip `entries` (name, contents) into `dir/name`.
pub fn write_zip_entries(dir: &Path, name: &str, entries: &[(&str, &str)]) -> Result<PathBuf> {
    let path = dir.join(name);
    let mut zip = ZipWriter::new(File::create(&path)?);
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Stored);
    for (entry_name, contents) in entries {
        zip.start_file(*entry_name, options)?;
        zip.write_all(contents.as_bytes())?;
    }
    zip.finish()?;
    Ok(path)
}

/// Zip a single CSV file into `dir/name`, the shape every campaign extract has.
pub fn write_campaign_zip(dir: &Path, name: &str, csv: &str) -> Result<PathBuf> {
    let inner = name.trim_end_matches(".zip");
    write_zip_entries(dir, name, &[(inner, csv)])
}

/// Header plus `rows`, each row already prefixed with its per-file index.
pub fn sample_csv(rows: &[&str]) -> String {
    let mut csv = String::from(SAMPLE_HEADER);
    csv.push('\n');
    for row in rows {
        csv.push_str(row);
        csv.push('\n');
    }
    csv
}
