use super::error::Result;
use super::flatten::{flatten, Table};
use super::geojson::FeatureCollection;
use csv::{Terminator, WriterBuilder};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::{info, warn};

pub trait Output {
    fn write_csv(&self, writer: &mut dyn Write) -> Result<()>;
}

impl Output for Table {
    fn write_csv(&self, writer: &mut dyn Write) -> Result<()> {
        let mut csv_writer = WriterBuilder::new()
            .terminator(Terminator::CRLF)
            .from_writer(writer);
        csv_writer.write_record(&self.columns)?;
        for row in self.rows.iter() {
            csv_writer.write_record(row)?;
        }
        csv_writer.flush()?;
        Ok(())
    }
}

impl Output for FeatureCollection {
    fn write_csv(&self, writer: &mut dyn Write) -> Result<()> {
        flatten(self).write_csv(writer)
    }
}

/// Result of exporting one collection.
#[derive(Debug, Clone, PartialEq)]
pub enum Export {
    Written { path: PathBuf, rows: usize },
    /// The collection had no features, nothing was written.
    Skipped,
}

/// A temporary file created with the same mode a plain `File::create` would get.
#[cfg(unix)]
fn temp_file_in(dir: &Path) -> io::Result<NamedTempFile> {
    use std::os::unix::fs::PermissionsExt;
    // 0o666 is narrowed by the process umask, as for any newly created file
    tempfile::Builder::new()
        .permissions(fs::Permissions::from_mode(0o666))
        .tempfile_in(dir)
}

#[cfg(not(unix))]
fn temp_file_in(dir: &Path) -> io::Result<NamedTempFile> {
    NamedTempFile::new_in(dir)
}

/// Write `collection` as CSV to `path`, replacing any existing file.
///
/// Rows go to a temporary file next to `path` which is moved into place once
/// complete, so a failed export never leaves a truncated file behind. Missing
/// parent directories are created.
pub fn save_csv(collection: &FeatureCollection, path: &Path) -> Result<Export> {
    if collection.is_empty() {
        warn!("No features found in data, skipping {}", path.display());
        return Ok(Export::Skipped);
    }

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir)?;

    let mut file = temp_file_in(dir)?;
    collection.write_csv(&mut file)?;
    file.persist(path).map_err(|err| err.error)?;

    info!("Saved {} rows to {}", collection.len(), path.display());
    Ok(Export::Written {
        path: path.to_path_buf(),
        rows: collection.len(),
    })
}
