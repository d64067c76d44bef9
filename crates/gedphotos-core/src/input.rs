//! Input file validation, run before any parsing.

use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum InputError {
    #[error("File '{}' does not exist.", .0.display())]
    NotFound(PathBuf),
    #[error("File '{}' is not readable.", .path.display())]
    NotReadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Checks that `path` exists and can be opened for reading as a regular file.
pub fn validate_input_file(path: &Path) -> Result<(), InputError> {
    if !path.exists() {
        return Err(InputError::NotFound(path.to_path_buf()));
    }
    if path.is_dir() {
        return Err(InputError::NotReadable {
            path: path.to_path_buf(),
            source: io::Error::new(io::ErrorKind::Other, "is a directory"),
        });
    }
    File::open(path).map_err(|source| InputError::NotReadable {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(())
}
