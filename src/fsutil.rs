use std::fs::{self, File};
use std::io::{self, BufReader};
use std::path::{Path, PathBuf};

/// Error that occurs when opening a file fails.
#[derive(Debug, thiserror::Error)]
#[error("failed to open file `{path}`: {source}")]
pub struct FileOpenError {
    pub path: PathBuf,
    #[source]
    pub source: io::Error,
}

/// Errors that may occur while making sure a directory exists.
#[derive(Debug, thiserror::Error)]
pub enum DirError {
    #[error("failed to check if path `{path}` exists: {source}")]
    ExistenceCheck {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to create directory `{path}`: {source}")]
    Create {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("path `{path}` exists but is not a directory")]
    NotADirectory { path: PathBuf },
}

/// Opens a file at the given path and wraps it in a [`BufReader`].
///
/// # Errors
///
/// Returns a [`FileOpenError`] if the file cannot be opened.
///
/// # Example
/// ```no_run
/// # use kaggle_env::fsutil;
/// let reader = fsutil::open_file_reader("/some/file.json")?;
/// # Ok::<(), fsutil::FileOpenError>(())
/// ```
pub fn open_file_reader(path: impl AsRef<Path>) -> Result<BufReader<File>, FileOpenError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| FileOpenError {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(BufReader::new(file))
}

/// Makes sure a directory exists at `path`, creating it and any missing parents.
///
/// A directory that appears between the existence check and the creation
/// (another process creating the same path) counts as success.
///
/// # Arguments
///
/// * `path` - The directory that must exist afterwards.
///
/// # Returns
///
/// * `Ok(true)` if the directory was missing at the existence check and
///   exists now, created by this call or by a concurrent one.
/// * `Ok(false)` if it already existed.
///
/// # Errors
///
/// * [`DirError::ExistenceCheck`] if the existence of `path` cannot be determined.
/// * [`DirError::NotADirectory`] if `path` exists but is not a directory.
/// * [`DirError::Create`] if the directory cannot be created.
pub fn ensure_dir(path: impl AsRef<Path>) -> Result<bool, DirError> {
    let path = path.as_ref();

    let exists = path.try_exists().map_err(|source| DirError::ExistenceCheck {
        path: path.to_path_buf(),
        source,
    })?;
    if exists {
        if !path.is_dir() {
            return Err(DirError::NotADirectory {
                path: path.to_path_buf(),
            });
        }
        return Ok(false);
    }

    match fs::create_dir_all(path) {
        Ok(()) => {
            log::debug!("Created directory `{}`", path.display());
            Ok(true)
        }
        Err(err) if err.kind() == io::ErrorKind::AlreadyExists && path.is_dir() => Ok(false),
        Err(source) => Err(DirError::Create {
            path: path.to_path_buf(),
            source,
        }),
    }
}
