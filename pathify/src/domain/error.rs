// pathify/src/domain/error.rs
use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Error creating directory {}: {source}", .path.display())]
    StorageDirectory { path: PathBuf, source: io::Error },

    #[error("Error getting current directory: {0}")]
    CurrentDirectory(#[source] io::Error),

    #[error("Error opening file {}: {source}", .path.display())]
    FileOpen { path: PathBuf, source: io::Error },

    #[error("Error reading file {}: {source}", .path.display())]
    FileRead { path: PathBuf, source: io::Error },

    #[error("Error writing to file {}: {source}", .path.display())]
    FileWrite { path: PathBuf, source: io::Error },

    #[error("Error changing directory to {path}: {source}")]
    ChangeDirectory { path: String, source: io::Error },

    #[error("Terminal IO error: {0}")]
    Terminal(#[from] io::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl DomainError {
    /// True when the error means the backing file does not exist yet.
    pub fn is_missing_file(&self) -> bool {
        matches!(
            self,
            DomainError::FileOpen { source, .. } if source.kind() == io::ErrorKind::NotFound
        )
    }
}

pub type DomainResult<T> = Result<T, DomainError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_not_found_open_error_when_checked_then_is_missing_file() {
        let err = DomainError::FileOpen {
            path: PathBuf::from("/nowhere/paths"),
            source: io::Error::new(io::ErrorKind::NotFound, "gone"),
        };
        assert!(err.is_missing_file());
    }

    #[test]
    fn given_permission_error_when_checked_then_is_not_missing_file() {
        let err = DomainError::FileOpen {
            path: PathBuf::from("/root/paths"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(!err.is_missing_file());

        let err = DomainError::FileRead {
            path: PathBuf::from("/root/paths"),
            source: io::Error::new(io::ErrorKind::NotFound, "gone"),
        };
        assert!(!err.is_missing_file());
    }

    #[test]
    fn given_file_error_when_displayed_then_contains_path() {
        let err = DomainError::FileWrite {
            path: PathBuf::from("/tmp/marked_paths"),
            source: io::Error::new(io::ErrorKind::Other, "disk full"),
        };
        let msg = err.to_string();
        assert!(msg.contains("/tmp/marked_paths"));
        assert!(msg.contains("disk full"));
    }
}
