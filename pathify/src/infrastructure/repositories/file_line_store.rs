// pathify/src/infrastructure/repositories/file_line_store.rs

use crate::domain::error::{DomainError, DomainResult};
use crate::domain::repositories::line_store::LineStore;
use std::fs::{self, File, OpenOptions};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, instrument, trace};

/// Line store backed by a plain UTF-8 text file, one entry per line.
#[derive(Debug, Clone)]
pub struct FileLineStore {
    path: PathBuf,
}

impl FileLineStore {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn open_for_read(&self) -> DomainResult<File> {
        File::open(&self.path).map_err(|source| DomainError::FileOpen {
            path: self.path.clone(),
            source,
        })
    }

    fn read_lines(&self, file: File) -> DomainResult<Vec<String>> {
        BufReader::new(file)
            .lines()
            .collect::<Result<Vec<_>, _>>()
            .map_err(|source| DomainError::FileRead {
                path: self.path.clone(),
                source,
            })
    }

    fn write_err(&self, source: std::io::Error) -> DomainError {
        DomainError::FileWrite {
            path: self.path.clone(),
            source,
        }
    }
}

impl LineStore for FileLineStore {
    #[instrument(level = "debug", skip(self), fields(file = %self.path.display()))]
    fn append(&self, path: &str) -> DomainResult<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|source| DomainError::FileOpen {
                path: self.path.clone(),
                source,
            })?;

        writeln!(file, "{}", path).map_err(|e| self.write_err(e))?;
        debug!("Appended entry");
        Ok(())
    }

    #[instrument(level = "debug", skip(self), fields(file = %self.path.display()))]
    fn read_all(&self) -> DomainResult<Vec<String>> {
        let file = self.open_for_read()?;
        let lines = self.read_lines(file)?;
        trace!("Read {} entries", lines.len());
        Ok(lines)
    }

    #[instrument(level = "debug", skip(self), fields(file = %self.path.display()))]
    fn delete_matching(&self, path: &str) -> DomainResult<usize> {
        // read fully before truncating, an unreadable file is left untouched
        let file = self.open_for_read()?;
        let lines = self.read_lines(file)?;

        let needle = path.trim();
        let total = lines.len();
        let kept: Vec<String> = lines
            .into_iter()
            .filter(|line| line.trim() != needle)
            .collect();
        let removed = total - kept.len();

        let file = File::create(&self.path).map_err(|e| self.write_err(e))?;
        let mut writer = BufWriter::new(file);
        for line in &kept {
            writeln!(writer, "{}", line).map_err(|e| self.write_err(e))?;
        }
        writer.flush().map_err(|e| self.write_err(e))?;

        debug!("Removed {} of {} entries", removed, total);
        Ok(removed)
    }
}

/// Create the storage directory if it does not exist yet.
#[instrument(level = "debug")]
pub fn ensure_directory(dir: &Path) -> DomainResult<()> {
    if dir.is_dir() {
        trace!("Storage directory exists");
        return Ok(());
    }
    fs::create_dir_all(dir).map_err(|source| DomainError::StorageDirectory {
        path: dir.to_path_buf(),
        source,
    })?;
    debug!("Created storage directory");
    Ok(())
}
