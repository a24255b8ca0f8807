use std::path::Path;

use serde_json::{Map, Value};

use super::{Error, Mode, Result};
use crate::fsutil;

/// Custom attribute names mapped to arbitrary JSON values.
pub type Attributes = Map<String, Value>;

/// Custom attributes for each environment mode.
///
/// Only the attributes of the detected mode are ever applied to an
/// [`Environment`](super::Environment). The JSON shape is:
///
/// ```json
/// {
///     "kaggle": { "token": 123 },
///     "local": { "token": 321 }
/// }
/// ```
///
/// Both keys are optional and any other top-level key is ignored.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct EnvironmentData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kaggle: Option<Attributes>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub local: Option<Attributes>,
}

impl EnvironmentData {
    /// Returns empty data, equivalent to `{}`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the attributes configured for `mode`, if any.
    pub fn for_mode(&self, mode: Mode) -> Option<&Attributes> {
        match mode {
            Mode::Kaggle => self.kaggle.as_ref(),
            Mode::Local => self.local.as_ref(),
        }
    }

    /// Sets an attribute for `mode`, replacing any previous value.
    pub fn insert(&mut self, mode: Mode, key: impl Into<String>, value: impl Into<Value>) {
        let attrs = match mode {
            Mode::Kaggle => &mut self.kaggle,
            Mode::Local => &mut self.local,
        };
        attrs
            .get_or_insert_with(Map::new)
            .insert(key.into(), value.into());
    }

    /// Builder-style variant of [`EnvironmentData::insert`].
    ///
    /// # Example
    ///
    /// ```
    /// use kaggle_env::environment::{EnvironmentData, Mode};
    ///
    /// let data = EnvironmentData::new()
    ///     .with(Mode::Kaggle, "token", 123)
    ///     .with(Mode::Local, "token", 321);
    /// assert_eq!(data.for_mode(Mode::Local).unwrap()["token"], 321);
    /// ```
    pub fn with(mut self, mode: Mode, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(mode, key, value);
        self
    }

    /// Returns true if no mode has any attribute.
    pub fn is_empty(&self) -> bool {
        self.kaggle.as_ref().is_none_or(Map::is_empty)
            && self.local.as_ref().is_none_or(Map::is_empty)
    }

    /// Parses environment data from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ParseData`] if the input is not valid JSON or a
    /// `kaggle`/`local` entry is not a JSON object.
    pub fn from_json_str(s: &str) -> Result<Self> {
        serde_json::from_str(s).map_err(Error::ParseData)
    }

    /// Reads environment data from a JSON file.
    ///
    /// # Errors
    ///
    /// * [`Error::FileOpen`] if the file cannot be opened.
    /// * [`Error::ParseDataFile`] if its contents are not valid environment data.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use kaggle_env::environment::EnvironmentData;
    ///
    /// let data = EnvironmentData::from_json_file("environment.json").unwrap();
    /// println!("{:?}", data);
    /// ```
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let reader = fsutil::open_file_reader(path)?;
        serde_json::from_reader(reader).map_err(|source| Error::ParseDataFile {
            path: path.to_path_buf(),
            source,
        })
    }
}

impl TryFrom<Value> for EnvironmentData {
    type Error = Error;

    fn try_from(value: Value) -> std::result::Result<Self, Self::Error> {
        serde_json::from_value(value).map_err(Error::ParseData)
    }
}
