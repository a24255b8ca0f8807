//! Environment detection module.
//!
//! Determines whether the program is running in a hosted Kaggle notebook or
//! locally, and exposes the read-only paths and custom attributes of that mode.
mod config;
mod data;
mod detect;
mod error;
mod mode;

pub use config::{Environment, EnvironmentBuilder};
pub use data::{Attributes, EnvironmentData};
pub use detect::{current_working_dir, detect_current_mode, detect_mode};
pub use error::{Error, Result};
pub use mode::{KAGGLE_PATH_INPUT, KAGGLE_PATH_OUTPUT, Mode};
