//! Export artifacts
//!
//! An artifact is a named payload (CSV text or PDF bytes) handed to the user
//! for download. Binary payloads are produced through a scoped temporary
//! file that is removed on every exit path.

use std::fs::File;
use std::io::{BufWriter, Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use tracing::{debug, info};

use crate::error::{TrackerError, TrackerResult};

/// Kind of exported payload
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactKind {
    Csv,
    Pdf,
}

impl ArtifactKind {
    /// MIME type of the payload
    pub fn content_type(&self) -> &'static str {
        match self {
            Self::Csv => "text/csv",
            Self::Pdf => "application/pdf",
        }
    }

    /// File name for an export made on `date`
    pub fn file_name(&self, date: NaiveDate) -> String {
        let stamp = date.format("%Y%m%d");
        match self {
            Self::Csv => format!("expenses_{}.csv", stamp),
            Self::Pdf => format!("expense_report_{}.pdf", stamp),
        }
    }
}

/// A generated export ready for download
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportArtifact {
    pub kind: ArtifactKind,
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl ExportArtifact {
    /// Wrap a payload, naming it after the export date
    pub fn new(kind: ArtifactKind, date: NaiveDate, bytes: Vec<u8>) -> Self {
        Self {
            kind,
            file_name: kind.file_name(date),
            bytes,
        }
    }

    /// MIME type of the payload
    pub fn content_type(&self) -> &'static str {
        self.kind.content_type()
    }

    /// Payload size in bytes
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Check whether the payload is empty
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Write the artifact into `dir`, returning the full path
    ///
    /// An existing file with the same name is replaced.
    pub fn save_to(&self, dir: &Path) -> TrackerResult<PathBuf> {
        std::fs::create_dir_all(dir).map_err(|e| {
            TrackerError::Io(format!(
                "Failed to create export directory {}: {}",
                dir.display(),
                e
            ))
        })?;

        let path = dir.join(&self.file_name);
        std::fs::write(&path, &self.bytes).map_err(|e| {
            TrackerError::Io(format!("Failed to write {}: {}", path.display(), e))
        })?;

        info!(path = %path.display(), bytes = self.bytes.len(), "artifact saved");
        Ok(path)
    }
}

/// Produce bytes by writing them into a temporary file and reading them back
///
/// The file is created in `temp_dir` (or the system temp directory), handed
/// to `write`, read back in full and deleted. It is also deleted when
/// `write` fails or reading back fails.
pub fn generate_via_temp_file<F>(temp_dir: Option<&Path>, write: F) -> TrackerResult<Vec<u8>>
where
    F: FnOnce(&mut BufWriter<&mut File>) -> TrackerResult<()>,
{
    let mut builder = tempfile::Builder::new();
    builder.prefix("expense_report_").suffix(".pdf");
    let mut temp = match temp_dir {
        Some(dir) => builder.tempfile_in(dir),
        None => builder.tempfile(),
    }
    .map_err(|e| TrackerError::Export(format!("Failed to create temporary file: {}", e)))?;

    debug!(path = %temp.path().display(), "temporary artifact created");

    {
        let mut writer = BufWriter::new(temp.as_file_mut());
        write(&mut writer)?;
        writer
            .flush()
            .map_err(|e| TrackerError::Export(format!("Failed to flush temporary file: {}", e)))?;
    }

    let mut bytes = Vec::new();
    let file = temp.as_file_mut();
    file.seek(SeekFrom::Start(0))
        .and_then(|_| file.read_to_end(&mut bytes))
        .map_err(|e| TrackerError::Export(format!("Failed to read temporary file: {}", e)))?;

    temp.close()
        .map_err(|e| TrackerError::Io(format!("Failed to remove temporary file: {}", e)))?;

    if bytes.is_empty() {
        return Err(TrackerError::Export("Generated document is empty".into()));
    }

    Ok(bytes)
}
