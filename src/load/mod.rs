// src/load/mod.rs
use anyhow::{anyhow, bail, Context, Result};
use csv::ReaderBuilder;
use glob::{glob, Pattern};
use std::{
    collections::HashSet,
    fs::{self, File},
    io::{BufReader, Read},
    path::{Path, PathBuf},
};
use tracing::{debug, info, warn};
use zip::ZipArchive;

use crate::table::{Cell, UnifiedTable};

/// Suffix an input file must carry to be picked up. Matched case-sensitively.
pub const ARCHIVE_SUFFIX: &str = ".zip";

/// Field values read as missing, in addition to the empty field.
const NULL_TOKENS: &[&str] = &[
    "NA", "N/A", "n/a", "NULL", "null", "NaN", "nan", "#N/A", "<NA>", "None",
];

/// Everything read from one input directory.
#[derive(Debug, Default)]
pub struct LoadedInput {
    /// Archives in the order their rows were appended.
    pub archives: Vec<PathBuf>,
    pub table: UnifiedTable,
}

/// List every `*.zip` entry directly under `input_dir`, sorted by file name.
pub fn find_archives<P: AsRef<Path>>(input_dir: P) -> Result<Vec<PathBuf>> {
    let dir = input_dir.as_ref();
    let meta =
        fs::metadata(dir).with_context(|| format!("reading input directory {:?}", dir))?;
    if !meta.is_dir() {
        bail!("input path {:?} is not a directory", dir);
    }

    let dir_str = dir
        .to_str()
        .ok_or_else(|| anyhow!("input directory {:?} is not valid UTF-8", dir))?;
    let pattern = format!("{}/*{}", Pattern::escape(dir_str), ARCHIVE_SUFFIX);

    let mut archives = Vec::new();
    for entry in glob(&pattern).with_context(|| format!("bad glob pattern {}", pattern))? {
        let path = entry.with_context(|| format!("listing {:?}", dir))?;
        archives.push(path);
    }
    archives.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(archives)
}

/// Load and concatenate every archive in `input_dir`.
///
/// Rows keep per-file order and files are appended in name order. With no archives
/// the result is an empty table without columns.
#[tracing::instrument(level = "info", skip(input_dir), fields(dir = %input_dir.as_ref().display()))]
pub fn load_input_dir<P: AsRef<Path>>(input_dir: P) -> Result<LoadedInput> {
    let archives = find_archives(&input_dir)?;
    if archives.is_empty() {
        warn!("no {} archives found", ARCHIVE_SUFFIX);
    }

    let mut table = UnifiedTable::default();
    for path in &archives {
        let part = load_campaign_zip(path)?;
        info!(archive = %path.display(), rows = part.len(), "loaded archive");
        table.append(part);
    }

    info!(
        archives = archives.len(),
        rows = table.len(),
        columns = table.headers.len(),
        "unified table ready"
    );
    Ok(LoadedInput { archives, table })
}

/// Open `zip_path`, check it holds exactly one file, and parse that file as an
/// index-prefixed CSV.
#[tracing::instrument(level = "debug", skip(zip_path), fields(path = %zip_path.as_ref().display()))]
pub fn load_campaign_zip<P: AsRef<Path>>(zip_path: P) -> Result<UnifiedTable> {
    let zip_path = zip_path.as_ref();
    let file = File::open(zip_path)
        .with_context(|| format!("Failed to open ZIP file: {:?}", zip_path))?;
    let mut archive = ZipArchive::new(BufReader::new(file))
        .with_context(|| format!("Failed to read ZIP archive: {:?}", zip_path))?;

    let mut found: Option<(String, Vec<u8>)> = None;
    for i in 0..archive.len() {
        let mut entry = archive
            .by_index(i)
            .with_context(|| format!("Failed to access ZIP entry #{} in {:?}", i, zip_path))?;
        if !entry.is_file() {
            continue;
        }
        let name = entry.name().to_string();
        if let Some((first, _)) = &found {
            bail!(
                "ZIP archive {:?} holds more than one file ({} and {})",
                zip_path,
                first,
                name
            );
        }

        let mut buf = Vec::with_capacity(entry.size() as usize);
        entry
            .read_to_end(&mut buf)
            .with_context(|| format!("Failed to read {} into memory", name))?;
        found = Some((name, buf));
    }
    drop(archive);

    let (name, data) =
        found.ok_or_else(|| anyhow!("ZIP archive {:?} holds no files", zip_path))?;
    debug!(entry = %name, bytes = data.len(), "decompressed entry");
    parse_indexed_csv(&name, &data)
}

/// Parse CSV bytes whose first column is a row index. The index column is dropped
/// from both the header and every record.
pub fn parse_indexed_csv(file_name: &str, data: &[u8]) -> Result<UnifiedTable> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(data);

    let raw_headers = rdr
        .headers()
        .with_context(|| format!("Failed to read header row of {}", file_name))?
        .clone();
    if raw_headers.is_empty() {
        bail!("{} has no header row", file_name);
    }

    let headers = dedupe_headers(raw_headers.iter().skip(1));
    let width = headers.len();
    let mut table = UnifiedTable::new(headers);

    for (idx, result) in rdr.records().enumerate() {
        let record = result
            .with_context(|| format!("CSV parse error in {} at record {}", file_name, idx))?;
        if record.len() > width + 1 {
            bail!(
                "{} record {} has {} fields, header has {}",
                file_name,
                idx,
                record.len(),
                width + 1
            );
        }
        let mut row: Vec<Cell> = record.iter().skip(1).map(to_cell).collect();
        // short records are padded like trailing empty fields
        row.resize(width, None);
        table.rows.push(row);
    }

    Ok(table)
}

fn to_cell(raw: &str) -> Cell {
    if raw.is_empty() || NULL_TOKENS.contains(&raw) {
        None
    } else {
        Some(raw.to_string())
    }
}

/// Repeated names get `.1`, `.2`, ... suffixes so each column stays addressable.
fn dedupe_headers<'a, I: Iterator<Item = &'a str>>(names: I) -> Vec<String> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut out = Vec::new();
    for name in names {
        let mut candidate = name.to_string();
        let mut n = 1;
        while seen.contains(&candidate) {
            candidate = format!("{}.{}", name, n);
            n += 1;
        }
        seen.insert(candidate.clone());
        out.push(candidate);
    }
    out
}
