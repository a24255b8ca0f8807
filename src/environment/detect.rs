use std::path::{Path, PathBuf};

use super::{Error, Mode, Result};

/// Marker that identifies the hosted notebook platform in a working directory.
const KAGGLE_MARKER: &str = "kaggle";

/// Detects the environment mode from a working directory path.
///
/// The path is in [`Mode::Kaggle`] if the substring `kaggle` appears anywhere
/// in it, otherwise in [`Mode::Local`]. This is a plain substring test, so a
/// local directory such as `/home/me/kaggle-notes` is detected as
/// [`Mode::Kaggle`] as well.
///
/// # Arguments
///
/// * `cwd` - The working directory to inspect.
///
/// # Returns
///
/// The detected [`Mode`].
///
/// # Example
///
/// ```
/// use kaggle_env::environment::{Mode, detect_mode};
///
/// assert_eq!(detect_mode("/kaggle/working"), Mode::Kaggle);
/// assert_eq!(detect_mode("/home/user/project"), Mode::Local);
/// ```
pub fn detect_mode(cwd: impl AsRef<Path>) -> Mode {
    let cwd = cwd.as_ref();
    let cwd_str = match cwd.to_str() {
        Some(s) => std::borrow::Cow::Borrowed(s),
        None => {
            log::warn!(
                "Working directory `{}` is not valid UTF-8, inspecting it lossily",
                cwd.display()
            );
            cwd.to_string_lossy()
        }
    };

    let mode = if cwd_str.contains(KAGGLE_MARKER) {
        Mode::Kaggle
    } else {
        Mode::Local
    };
    log::debug!("Detected `{}` mode from working directory `{}`", mode, cwd_str);
    mode
}

/// Returns the current working directory of the process.
///
/// # Errors
///
/// Returns [`Error::CurrentDir`] if the working directory cannot be read,
/// e.g. because it was removed.
pub fn current_working_dir() -> Result<PathBuf> {
    std::env::current_dir().map_err(|source| Error::CurrentDir { source })
}

/// Detects the environment mode from the current working directory.
///
/// # Errors
///
/// Returns [`Error::CurrentDir`] if the working directory cannot be read.
pub fn detect_current_mode() -> Result<Mode> {
    current_working_dir().map(detect_mode)
}
