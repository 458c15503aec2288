use anyhow::{Context, Result};
use csv::WriterBuilder;
use serde::Serialize;
use std::{
    fs::{self, File},
    io::BufWriter,
    path::{Path, PathBuf},
};
use tracing::info;

/// A row type with a fixed output file and header.
pub trait OutputRecord: Serialize {
    /// Logical table name; the file is `<TABLE>.csv`.
    const TABLE: &'static str;
    /// Header row. Must list the struct's fields in declaration order.
    const HEADERS: &'static [&'static str];

    fn file_name() -> String {
        format!("{}.csv", Self::TABLE)
    }
}

/// Where a table ended up and how many data rows it has.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenTable {
    pub path: PathBuf,
    pub rows: usize,
}

/// Serialize `records` to `<out_dir>/<TABLE>.csv`, replacing any previous file.
///
/// The header is written even for zero rows. Output goes to a hidden temp file that
/// is renamed over the target, so readers never see a half-written table.
#[tracing::instrument(level = "info", skip(out_dir, records), fields(dir = %out_dir.as_ref().display()))]
pub fn write_table<R: OutputRecord, P: AsRef<Path>>(
    out_dir: P,
    records: &[R],
) -> Result<WrittenTable> {
    let dir = out_dir.as_ref();
    fs::create_dir_all(dir).with_context(|| format!("creating output directory {:?}", dir))?;

    let file_name = R::file_name();
    let path = dir.join(&file_name);
    let tmp_path = dir.join(format!(".{}.tmp", file_name));

    let file =
        File::create(&tmp_path).with_context(|| format!("creating {:?}", tmp_path))?;
    let mut wtr = WriterBuilder::new()
        .has_headers(false)
        .from_writer(BufWriter::new(file));

    wtr.write_record(R::HEADERS)
        .with_context(|| format!("writing header of {}", file_name))?;
    for (idx, record) in records.iter().enumerate() {
        wtr.serialize(record)
            .with_context(|| format!("writing {} row {}", file_name, idx))?;
    }
    wtr.flush()
        .with_context(|| format!("flushing {:?}", tmp_path))?;
    drop(wtr);

    fs::rename(&tmp_path, &path)
        .with_context(|| format!("renaming {:?} -> {:?}", tmp_path, path))?;

    info!(table = R::TABLE, rows = records.len(), path = %path.display(), "wrote table");
    Ok(WrittenTable {
        path,
        rows: records.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transform::{ClientRecord, EconomicsRecord};
    use anyhow::Result;
    use tempfile::tempdir;

    fn client(id: &str, education: Option<&str>) -> ClientRecord {
        ClientRecord {
            client_id: Some(id.into()),
            age: Some("35".into()),
            job: Some("blue_collar".into()),
            marital: Some("married".into()),
            education: education.map(str::to_string),
            credit_default: 0,
            mortgage: 1,
        }
    }

    #[test]
    fn writes_header_and_rows_creating_dir() -> Result<()> {
        let dir = tempdir()?;
        let out_dir = dir.path().join("nested").join("output");

        let written = write_table(&out_dir, &[client("1", Some("basic_4y")), client("2", None)])?;

        assert_eq!(written.path, out_dir.join("client.csv"));
        assert_eq!(written.rows, 2);
        let text = fs::read_to_string(&written.path)?;
        assert_eq!(
            text,
            "client_id,age,job,marital,education,credit_default,mortgage\n\
             1,35,blue_collar,married,basic_4y,0,1\n\
             2,35,blue_collar,married,,0,1\n"
        );
        assert!(!out_dir.join(".client.csv.tmp").exists());
        Ok(())
    }

    #[test]
    fn empty_table_still_gets_a_header() -> Result<()> {
        let dir = tempdir()?;
        let records: Vec<EconomicsRecord> = Vec::new();
        let written = write_table(dir.path(), &records)?;
        assert_eq!(
            fs::read_to_string(written.path)?,
            "client_id,cons_price_idx,euribor_three_months\n"
        );
        Ok(())
    }

    #[test]
    fn overwrites_existing_file() -> Result<()> {
        let dir = tempdir()?;
        fs::write(dir.path().join("client.csv"), "stale contents that are longer\n")?;
        write_table(dir.path(), &[client("9", None)])?;
        let text = fs::read_to_string(dir.path().join("client.csv"))?;
        assert!(text.ends_with("9,35,blue_collar,married,,0,1\n"));
        assert!(!text.contains("stale"));
        Ok(())
    }

    #[test]
    fn quotes_fields_that_need_it() -> Result<()> {
        let dir = tempdir()?;
        let mut record = client("3", Some("a,b"));
        record.job = Some("say \"hi\"".into());
        write_table(dir.path(), &[record])?;
        let text = fs::read_to_string(dir.path().join("client.csv"))?;
        assert!(text.contains("3,35,\"say \"\"hi\"\"\",married,\"a,b\",0,1\n"));
        Ok(())
    }
}
