//! Файл CODA целиком: упорядоченный список записей.

use crate::{
    config::CodecOptions,
    error::{CodaError, Result},
    records::Record,
    registry,
};
use serde::{Serialize, Serializer};

/// Separator used by [`CodaFile::encode`].
pub const LINE_SEPARATOR: &str = if cfg!(windows) { "\r\n" } else { "\n" };

/// Line terminator of CODA files as banks deliver them.
pub const WIRE_SEPARATOR: &str = "\r\n";

#[derive(Debug, Clone, Default)]
pub struct CodaFile {
    records: Vec<Record>,
    options: CodecOptions,
}

impl CodaFile {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: CodecOptions) -> Self {
        Self {
            records: Vec::new(),
            options,
        }
    }

    pub fn options(&self) -> &CodecOptions {
        &self.options
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn records_mut(&mut self) -> &mut Vec<Record> {
        &mut self.records
    }

    pub fn push(&mut self, record: impl Into<Record>) {
        self.records.push(record.into());
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    /// Replaces the records with those decoded from `text`.
    pub fn decode(&mut self, text: &str) -> Result<()> {
        self.decode_lines(text, false)
    }

    /// Appends the records decoded from `text`.
    pub fn decode_append(&mut self, text: &str) -> Result<()> {
        self.decode_lines(text, true)
    }

    /// Decodes every non-empty line of `text`.
    ///
    /// Stops at the first line that fails; the file is left as it was before
    /// the call in that case.
    pub fn decode_lines(&mut self, text: &str, append: bool) -> Result<()> {
        let mut decoded = Vec::new();
        for (index, line) in split_lines(text).enumerate() {
            if line.is_empty() {
                continue;
            }
            let record = registry::dispatch_with(line, &self.options).map_err(|source| {
                CodaError::Record {
                    line: index + 1,
                    source,
                }
            })?;
            tracing::trace!(line = index + 1, kind = %record.kind(), "decoded record");
            decoded.push(record);
        }

        tracing::debug!(records = decoded.len(), append, "decoded CODA text");
        if !append {
            self.records.clear();
        }
        self.records.append(&mut decoded);
        Ok(())
    }

    /// Renders all records joined with [`LINE_SEPARATOR`].
    pub fn encode(&self) -> Result<String> {
        self.encode_with_separator(LINE_SEPARATOR)
    }

    pub fn encode_with_separator(&self, separator: &str) -> Result<String> {
        let mut lines = Vec::with_capacity(self.records.len());
        for (index, record) in self.records.iter().enumerate() {
            let line = record
                .encode_with(&self.options)
                .map_err(|source| CodaError::Record {
                    line: index + 1,
                    source,
                })?;
            lines.push(line);
        }
        tracing::debug!(records = lines.len(), "encoded CODA text");
        Ok(lines.join(separator))
    }
}

impl<'a> IntoIterator for &'a CodaFile {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

impl IntoIterator for CodaFile {
    type Item = Record;
    type IntoIter = std::vec::IntoIter<Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}

impl Extend<Record> for CodaFile {
    fn extend<I: IntoIterator<Item = Record>>(&mut self, iter: I) {
        self.records.extend(iter);
    }
}

impl Serialize for CodaFile {
    fn serialize<S: Serializer>(&self, s: S) -> std::result::Result<S::Ok, S::Error> {
        self.records.serialize(s)
    }
}

/// Splits on `\r\n`, `\n` and lone `\r`, whichever mix the text uses.
fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    let mut rest = Some(text);
    std::iter::from_fn(move || {
        let current = rest?;
        match current.find(['\r', '\n']) {
            Some(i) => {
                let skip = if current[i..].starts_with("\r\n") { 2 } else { 1 };
                rest = Some(&current[i + skip..]);
                Some(&current[..i])
            }
            None => {
                rest = None;
                Some(current)
            }
        }
    })
}
