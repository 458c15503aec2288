// src/table.rs
use crate::error::SchemaError;

/// One field of the unified table. `None` is the missing-value marker.
pub type Cell = Option<String>;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct UnifiedTable {
    /// Column names in first-seen order across every loaded archive.
    pub headers: Vec<String>,
    /// One entry per contact event; every row is exactly `headers.len()` wide.
    pub rows: Vec<Vec<Cell>>,
}

impl UnifiedTable {
    pub fn new(headers: Vec<String>) -> Self {
        Self {
            headers,
            rows: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Position of `name` in the header, or a schema error attributed to `table`.
    pub fn column_index(&self, table: &'static str, name: &str) -> Result<usize, SchemaError> {
        self.headers
            .iter()
            .position(|h| h == name)
            .ok_or_else(|| SchemaError::MissingColumn {
                table,
                column: name.to_string(),
            })
    }

    /// Resolve a fixed list of source columns at once. Fails on the first absent one.
    pub fn require<const N: usize>(
        &self,
        table: &'static str,
        names: [&str; N],
    ) -> Result<[usize; N], SchemaError> {
        let mut indices = [0usize; N];
        for (slot, name) in indices.iter_mut().zip(names) {
            *slot = self.column_index(table, name)?;
        }
        Ok(indices)
    }

    /// Append `other` below the current rows, aligning cells by column name.
    /// Columns only one side knows about are filled with missing cells on the other.
    pub fn append(&mut self, other: UnifiedTable) {
        let mut mapping = Vec::with_capacity(other.headers.len());
        for header in other.headers {
            let idx = match self.headers.iter().position(|h| *h == header) {
                Some(idx) => idx,
                None => {
                    self.headers.push(header);
                    self.headers.len() - 1
                }
            };
            mapping.push(idx);
        }

        let width = self.headers.len();
        for row in &mut self.rows {
            row.resize(width, None);
        }

        self.rows.reserve(other.rows.len());
        for row in other.rows {
            let mut aligned: Vec<Cell> = vec![None; width];
            for (cell, &col) in row.into_iter().zip(&mapping) {
                aligned[col] = cell;
            }
            self.rows.push(aligned);
        }
    }
}
