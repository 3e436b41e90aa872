// crates/stamp-core/src/page.rs - Page Store
//
// A page is one CSV file inside a notebook directory. Each row is
// `timestamp,text`; rows are only ever appended, never rewritten.
//
// ```text
// 2025-07-30 10:00:00,checked email
// 2025-07-30 11:00:00,"standup: api, docs"
// ```
//
// Timestamps are fixed-width local time, so plain string comparison orders
// them chronologically. The query module relies on that.

use chrono::Local;
use std::fs::{self, File, OpenOptions};
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::csv;
use crate::error::{StampError, StampResult};

/// File extension of page files
pub const PAGE_EXTENSION: &str = "csv";

/// On-disk timestamp format
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Current local time in `TIMESTAMP_FORMAT`
pub fn now_timestamp() -> String {
    Local::now().format(TIMESTAMP_FORMAT).to_string()
}

/// A single row of a page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Note {
    /// 1-based position in the page
    pub index: usize,
    pub timestamp: String,
    pub text: String,
}

impl Note {
    pub fn new<T: Into<String>, S: Into<String>>(index: usize, timestamp: T, text: S) -> Self {
        Self {
            index,
            timestamp: timestamp.into(),
            text: text.into(),
        }
    }
}

/// Handle to a page file. Construction does not touch the file system.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    path: PathBuf,
}

impl Page {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Page `name` inside the `notebook` directory
    pub fn in_notebook(notebook: &Path, name: &str) -> Self {
        Self::new(crate::config::page_file(notebook, name))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Page name (file stem)
    pub fn name(&self) -> String {
        self.path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    pub fn exists(&self) -> bool {
        self.path.is_file()
    }

    /// Create the page file if it is missing. Existing rows are left alone.
    pub fn create(&self) -> StampResult<()> {
        OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| StampError::io(&self.path, e))?;
        Ok(())
    }

    /// Append `text` stamped with the current local time
    ///
    /// Returns the timestamp that was written.
    pub fn append(&self, text: &str) -> StampResult<String> {
        let timestamp = now_timestamp();
        self.append_at(&timestamp, text)?;
        Ok(timestamp)
    }

    /// Append a row with an explicit timestamp
    ///
    /// The file is created when absent. If a hand-edited file lacks a final
    /// newline one is inserted first so the new row stays a separate record.
    pub fn append_at(&self, timestamp: &str, text: &str) -> StampResult<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .read(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| StampError::io(&self.path, e))?;

        let mut row = String::new();
        if !ends_with_newline(&mut file).map_err(|e| StampError::io(&self.path, e))? {
            row.push('\n');
        }
        row.push_str(&csv::encode_record(&[timestamp, text]));

        file.write_all(row.as_bytes())
            .map_err(|e| StampError::io(&self.path, e))?;

        debug!(page = %self.path.display(), %timestamp, "note appended");
        Ok(())
    }

    /// Read every row in insertion order
    pub fn read_all(&self) -> StampResult<Vec<Note>> {
        if !self.exists() {
            return Err(StampError::NotFound(format!(
                "page '{}' does not exist ({})",
                self.name(),
                self.path.display()
            )));
        }

        let content = fs::read_to_string(&self.path).map_err(|e| StampError::io(&self.path, e))?;

        let records = csv::parse(&content).map_err(|e| StampError::MalformedPage {
            path: self.path.clone(),
            line: e.line,
            reason: e.reason,
        })?;

        records
            .into_iter()
            .enumerate()
            .map(|(i, record)| {
                let line = record.line;
                let [timestamp, text]: [String; 2] =
                    record.fields.try_into().map_err(|fields: Vec<String>| {
                        StampError::MalformedPage {
                            path: self.path.clone(),
                            line,
                            reason: format!("expected 2 fields, found {}", fields.len()),
                        }
                    })?;
                Ok(Note::new(i + 1, timestamp, text))
            })
            .collect()
    }
}

/// Whether the file is empty or its last byte is `\n`
fn ends_with_newline(file: &mut File) -> std::io::Result<bool> {
    if file.metadata()?.len() == 0 {
        return Ok(true);
    }
    file.seek(SeekFrom::End(-1))?;
    let mut last = [0u8; 1];
    file.read_exact(&mut last)?;
    Ok(last[0] == b'\n')
}
