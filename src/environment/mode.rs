use std::fmt;
use std::path::MAIN_SEPARATOR;
use std::str::FromStr;

use super::Error;

/// Input directory on the hosted notebook platform.
pub const KAGGLE_PATH_INPUT: &str = "/kaggle/input/";
/// Output directory on the hosted notebook platform.
pub const KAGGLE_PATH_OUTPUT: &str = "/kaggle/working/";

/// Execution contexts an [`Environment`](super::Environment) can be in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Running inside a hosted Kaggle notebook.
    Kaggle,
    /// Running anywhere else, typically a local workstation.
    Local,
}

impl Mode {
    /// Returns the lowercase name, `kaggle` or `local`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Kaggle => "kaggle",
            Mode::Local => "local",
        }
    }

    /// Returns true for [`Mode::Kaggle`].
    pub fn is_kaggle(&self) -> bool {
        matches!(self, Mode::Kaggle)
    }

    /// Returns true for [`Mode::Local`].
    pub fn is_local(&self) -> bool {
        matches!(self, Mode::Local)
    }

    /// Returns the default input directory for this mode.
    ///
    /// The local default is relative and uses the platform's path separator,
    /// e.g. `./data/input/` on Unix and `.\data\input\` on Windows.
    pub fn default_path_input(&self) -> String {
        match self {
            Mode::Kaggle => KAGGLE_PATH_INPUT.to_owned(),
            Mode::Local => local_data_dir("input"),
        }
    }

    /// Returns the default output directory for this mode.
    ///
    /// See [`Mode::default_path_input`] for the shape of the local default.
    pub fn default_path_output(&self) -> String {
        match self {
            Mode::Kaggle => KAGGLE_PATH_OUTPUT.to_owned(),
            Mode::Local => local_data_dir("output"),
        }
    }
}

fn local_data_dir(leaf: &str) -> String {
    let sep = MAIN_SEPARATOR;
    format!(".{sep}data{sep}{leaf}{sep}")
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "kaggle" => Ok(Mode::Kaggle),
            "local" => Ok(Mode::Local),
            other => Err(Error::UnknownMode(other.to_owned())),
        }
    }
}
