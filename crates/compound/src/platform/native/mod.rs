//! Native export to the filesystem.

use std::path::PathBuf;

use crate::export::CsvExport;
use crate::platform::{ExportError, Exporter};
use crate::util::io::atomic_write;

/// Writes exports into a directory, replacing files of the same name.
pub struct FileExporter {
    dir: PathBuf,
}

impl FileExporter {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }
}

impl Exporter for FileExporter {
    fn export(&self, export: &CsvExport) -> Result<String, ExportError> {
        std::fs::create_dir_all(&self.dir).map_err(|e| {
            ExportError::Io(format!("cannot create {}: {}", self.dir.display(), e))
        })?;

        let path = self.dir.join(&export.filename);
        atomic_write(&path, &export.contents)
            .map_err(|e| ExportError::Io(format!("cannot write {}: {}", path.display(), e)))?;

        Ok(path.display().to_string())
    }
}
