use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde_json::Value;

use super::data::{Attributes, EnvironmentData};
use super::detect::{current_working_dir, detect_mode};
use super::{Error, Mode, Result};
use crate::fsutil;

const ATTR_MODE: &str = "mode";
const ATTR_PATH_INPUT: &str = "path_input";
const ATTR_PATH_OUTPUT: &str = "path_output";

/// Read-only description of the environment the process runs in.
///
/// An `Environment` is built once from the working directory and optional
/// [`EnvironmentData`]. Building it guarantees that the input and output
/// directories exist. Afterwards every attribute is read-only: there is no
/// mutating API and [`Environment::set`] always fails.
///
/// # Example
///
/// ```no_run
/// use kaggle_env::environment::{Environment, EnvironmentData, Mode};
///
/// let data = EnvironmentData::new()
///     .with(Mode::Kaggle, "train_path", "/kaggle/input/train.csv")
///     .with(Mode::Local, "train_path", "./data/input/train.csv");
/// let env = Environment::with_data(data)?;
///
/// println!("running in {} mode", env.mode());
/// println!("train set: {}", env.get_str("train_path").unwrap());
/// # Ok::<(), kaggle_env::environment::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Environment {
    mode: Mode,
    path_input: String,
    path_output: String,
    working_dir: PathBuf,
    attributes: BTreeMap<String, Value>,
}

impl Environment {
    /// Builds an environment for the current working directory without custom data.
    ///
    /// # Errors
    ///
    /// See [`EnvironmentBuilder::build`].
    pub fn new() -> Result<Self> {
        Self::builder().build()
    }

    /// Builds an environment for the current working directory with custom data.
    ///
    /// # Errors
    ///
    /// See [`EnvironmentBuilder::build`].
    pub fn with_data(data: EnvironmentData) -> Result<Self> {
        Self::builder().data(data).build()
    }

    /// Returns a builder for an environment with an injected working directory or data.
    pub fn builder() -> EnvironmentBuilder {
        EnvironmentBuilder::default()
    }

    /// The mode detected from the working directory.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// The input directory, the mode default unless overridden.
    pub fn path_input(&self) -> &str {
        &self.path_input
    }

    /// The output directory, the mode default unless overridden.
    pub fn path_output(&self) -> &str {
        &self.path_output
    }

    /// The working directory the mode was detected from.
    pub fn working_dir(&self) -> &Path {
        &self.working_dir
    }

    /// [`Environment::path_input`] resolved against the working directory.
    pub fn input_dir(&self) -> PathBuf {
        self.working_dir.join(&self.path_input)
    }

    /// [`Environment::path_output`] resolved against the working directory.
    pub fn output_dir(&self) -> PathBuf {
        self.working_dir.join(&self.path_output)
    }

    /// Returns the custom attribute `name`, if it was supplied.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.attributes.get(name)
    }

    /// Returns the custom attribute `name` if it is a string.
    pub fn get_str(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(Value::as_str)
    }

    /// Deserializes the custom attribute `name` into `T`.
    ///
    /// # Errors
    ///
    /// * [`Error::UnknownAttribute`] if no custom attribute `name` exists.
    /// * [`Error::AttributeType`] if the value cannot be deserialized into `T`.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use kaggle_env::environment::{Environment, EnvironmentData, Mode};
    ///
    /// let data = EnvironmentData::new().with(Mode::Local, "epochs", 10);
    /// let env = Environment::with_data(data)?;
    /// let epochs: u32 = env.get_as("epochs")?;
    /// # Ok::<(), kaggle_env::environment::Error>(())
    /// ```
    pub fn get_as<T: DeserializeOwned>(&self, name: &str) -> Result<T> {
        let value = self.get(name).ok_or_else(|| Error::UnknownAttribute {
            name: name.to_owned(),
        })?;
        T::deserialize(value).map_err(|source| Error::AttributeType {
            name: name.to_owned(),
            source,
        })
    }

    /// Returns true if a custom attribute `name` was supplied.
    pub fn contains(&self, name: &str) -> bool {
        self.attributes.contains_key(name)
    }

    /// Iterates over the custom attributes in name order.
    pub fn attributes(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.attributes.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Looks up any attribute by name, including `mode`, `path_input` and `path_output`.
    pub fn attribute(&self, name: &str) -> Option<Value> {
        match name {
            ATTR_MODE => Some(Value::from(self.mode.as_str())),
            ATTR_PATH_INPUT => Some(Value::from(self.path_input.as_str())),
            ATTR_PATH_OUTPUT => Some(Value::from(self.path_output.as_str())),
            _ => self.get(name).cloned(),
        }
    }

    /// Rejects assignment to an attribute.
    ///
    /// All attributes are fixed once the environment is built, so this
    /// returns an error for every name, known or not.
    ///
    /// # Errors
    ///
    /// Always returns [`Error::ReadOnlyAttribute`].
    pub fn set(&self, name: &str, _value: impl Into<Value>) -> Result<()> {
        Err(Error::ReadOnlyAttribute {
            name: name.to_owned(),
        })
    }
}

/// Builder for [`Environment`].
///
/// Defaults to the process working directory and no custom data.
#[derive(Debug, Default)]
pub struct EnvironmentBuilder {
    working_dir: Option<PathBuf>,
    data: Option<EnvironmentData>,
}

impl EnvironmentBuilder {
    /// Uses `path` instead of the process working directory.
    ///
    /// Relative input and output paths are created below this directory.
    pub fn working_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.working_dir = Some(path.into());
        self
    }

    /// Sets the custom data; only the entry of the detected mode is applied.
    pub fn data(mut self, data: EnvironmentData) -> Self {
        self.data = Some(data);
        self
    }

    /// Detects the mode, applies the custom data of that mode and makes sure
    /// the input and output directories exist.
    ///
    /// # Errors
    ///
    /// * [`Error::CurrentDir`] if no working directory was given and the
    ///   process working directory cannot be read.
    /// * [`Error::ReservedAttribute`] if the custom data tries to set `mode`.
    /// * [`Error::InvalidPathOverride`] if `path_input` or `path_output` is
    ///   overridden with a value that is not a non-empty string.
    /// * [`Error::SetupDir`] if a directory cannot be created.
    pub fn build(self) -> Result<Environment> {
        let working_dir = match self.working_dir {
            Some(path) => path,
            None => current_working_dir()?,
        };
        let mode = detect_mode(&working_dir);

        let mut env = Environment {
            mode,
            path_input: mode.default_path_input(),
            path_output: mode.default_path_output(),
            working_dir,
            attributes: BTreeMap::new(),
        };

        if let Some(attrs) = self.data.as_ref().and_then(|data| data.for_mode(mode)) {
            apply_attributes(&mut env, attrs)?;
        }

        fsutil::ensure_dir(env.input_dir())?;
        fsutil::ensure_dir(env.output_dir())?;

        Ok(env)
    }
}

fn apply_attributes(env: &mut Environment, attrs: &Attributes) -> Result<()> {
    for (name, value) in attrs {
        log::trace!("Setting `{}` attribute `{}` to {}", env.mode, name, value);
        match name.as_str() {
            ATTR_MODE => {
                return Err(Error::ReservedAttribute {
                    name: name.clone(),
                });
            }
            ATTR_PATH_INPUT => env.path_input = path_override(name, value)?,
            ATTR_PATH_OUTPUT => env.path_output = path_override(name, value)?,
            _ => {
                env.attributes.insert(name.clone(), value.clone());
            }
        }
    }
    Ok(())
}

fn path_override(name: &str, value: &Value) -> Result<String> {
    value
        .as_str()
        .filter(|path| !path.is_empty())
        .map(str::to_owned)
        .ok_or_else(|| Error::InvalidPathOverride {
            name: name.to_owned(),
            value: value.clone(),
        })
}
