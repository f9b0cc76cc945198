//! Loading delimited text files into ordered in-memory record stores.

use std::{fs::File, path::PathBuf};

use csv::{ReaderBuilder, Trim};

use crate::{
    error::{LoadError, RecordError},
    prelude::*,
    record::ParseRecord,
};

/// Where and how to read one record file.
///
/// The field layout itself is declared by the record type; this only carries
/// what varies between files.
#[derive(Clone, Debug)]
pub struct Source {
    pub path: PathBuf,
    pub delimiter: u8,
    pub has_header: bool,
}

impl Source {
    /// Semicolon-delimited energy CSV with a single header line.
    pub fn energy_csv(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into(), delimiter: b';', has_header: true }
    }

    /// Pipe-delimited reservation file without a header.
    pub fn reservation_file(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into(), delimiter: b'|', has_header: false }
    }

    /// Read the whole file into a store, preserving line order.
    ///
    /// The first malformed line aborts the load; no partial store is
    /// returned. Blank lines are skipped, and the header line (when the
    /// source declares one) is discarded even in an otherwise empty file.
    #[instrument(skip_all, fields(path = %self.path.display()))]
    pub fn load<R: ParseRecord>(&self) -> Result<RecordStore<R>, LoadError> {
        let file = File::open(&self.path).map_err(|source| LoadError::ResourceUnavailable {
            path: self.path.clone(),
            source,
        })?;
        let mut reader = ReaderBuilder::new()
            .delimiter(self.delimiter)
            .has_headers(self.has_header)
            .flexible(true)
            .quoting(false)
            .trim(Trim::All)
            .from_reader(file);

        let mut records = Vec::new();
        for row in reader.records() {
            let row = row.map_err(|source| LoadError::UnreadableLine {
                path: self.path.clone(),
                line: source.position().map_or(0, csv::Position::line),
                source,
            })?;
            // A whitespace-only line trims down to one empty field.
            if row.len() == 1 && row[0].is_empty() {
                continue;
            }
            let fields: Vec<&str> = row.iter().collect();
            let record = parse_row::<R>(&fields).map_err(|source| LoadError::MalformedRecord {
                path: self.path.clone(),
                line: row.position().map_or(0, csv::Position::line),
                content: fields.join(&char::from(self.delimiter).to_string()),
                source,
            })?;
            records.push(record);
        }

        debug!(n_records = records.len(), "loaded");
        Ok(RecordStore { records })
    }
}

fn parse_row<R: ParseRecord>(fields: &[&str]) -> Result<R, RecordError> {
    if fields.len() == R::FIELD_COUNT {
        R::parse_record(fields)
    } else {
        Err(RecordError::FieldCount { expected: R::FIELD_COUNT, actual: fields.len() })
    }
}

/// Ordered records from one file; read-only once loaded.
#[derive(Debug)]
pub struct RecordStore<R> {
    records: Vec<R>,
}

impl<R> RecordStore<R> {
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, R> {
        self.records.iter()
    }
}

impl<'a, R> IntoIterator for &'a RecordStore<R> {
    type IntoIter = std::slice::Iter<'a, R>;
    type Item = &'a R;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
impl<R> FromIterator<R> for RecordStore<R> {
    fn from_iter<I: IntoIterator<Item = R>>(iter: I) -> Self {
        Self { records: iter.into_iter().collect() }
    }
}
