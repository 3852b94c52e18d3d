//! CSV research log adapter
//!
//! Appends one row per record to a UTF-8 CSV file. The file is created on
//! first write with a byte-order mark and the header row so spreadsheet
//! tools detect the encoding. Fields are quoted per RFC 4180 when needed.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::domain::report::ResearchRecord;
use crate::ports::{ResearchLog, StorageError};

const BOM: &str = "\u{feff}";

/// Research log stored as a CSV file
#[derive(Debug)]
pub struct CsvResearchLog {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl CsvResearchLog {
    /// Create a log writing to `path`; the file is created lazily
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn ensure_dir_exists(&self) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .map_err(|e| StorageError::IoError(format!("Failed to create directory: {}", e)))?;
        }
        Ok(())
    }

    fn needs_header(&self) -> bool {
        fs::metadata(&self.path).map(|m| m.len() == 0).unwrap_or(true)
    }
}

fn map_io_error(context: &str, e: std::io::Error) -> StorageError {
    if e.kind() == std::io::ErrorKind::PermissionDenied {
        StorageError::PermissionDenied(format!("{}: {}", context, e))
    } else {
        StorageError::IoError(format!("{}: {}", context, e))
    }
}

/// Quote a field if it contains a delimiter, quote or line break
fn escape_field(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

fn format_row(fields: &[String]) -> String {
    let mut row = fields
        .iter()
        .map(|f| escape_field(f))
        .collect::<Vec<_>>()
        .join(",");
    row.push_str("\r\n");
    row
}

/// Count CSV rows, treating line breaks inside quoted fields as data
fn count_rows(content: &str) -> usize {
    let mut rows = 0;
    let mut in_quotes = false;
    let mut row_has_data = false;
    for ch in content.chars() {
        match ch {
            '"' => {
                in_quotes = !in_quotes;
                row_has_data = true;
            }
            '\n' if !in_quotes => {
                if row_has_data {
                    rows += 1;
                }
                row_has_data = false;
            }
            '\r' if !in_quotes => {}
            _ => row_has_data = true,
        }
    }
    if row_has_data {
        rows += 1;
    }
    rows
}

impl ResearchLog for CsvResearchLog {
    fn append(&self, record: &ResearchRecord) -> Result<(), StorageError> {
        let _guard = self
            .write_lock
            .lock()
            .map_err(|_| StorageError::IoError("Research log lock poisoned".to_string()))?;

        self.ensure_dir_exists()?;

        let mut payload = String::new();
        if self.needs_header() {
            payload.push_str(BOM);
            payload.push_str(&format_row(&ResearchRecord::header()));
        }
        payload.push_str(&format_row(&record.columns()));

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| map_io_error("Cannot open research log", e))?;
        file.write_all(payload.as_bytes())
            .map_err(|e| map_io_error("Failed to append research record", e))?;

        tracing::info!(path = %self.path.display(), "Research record appended");
        Ok(())
    }

    fn count(&self) -> Result<usize, StorageError> {
        if !self.path.exists() {
            return Ok(0);
        }
        let content = fs::read_to_string(&self.path)
            .map_err(|e| map_io_error("Failed to read research log", e))?;
        let content = content.strip_prefix(BOM).unwrap_or(&content);
        Ok(count_rows(content).saturating_sub(1))
    }
}
