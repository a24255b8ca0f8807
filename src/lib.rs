//! Kaggle Env: detects whether a process runs inside a hosted Kaggle notebook
//! or on a local workstation.
//!
//! The detected [`Mode`](environment::Mode) decides the default input and
//! output directories, which are created on construction, and which set of
//! caller-supplied custom attributes is exposed.
//!
//! ```no_run
//! use kaggle_env::environment::Environment;
//!
//! let env = Environment::new()?;
//! println!("reading from {}", env.path_input());
//! println!("writing to {}", env.path_output());
//! # Ok::<(), kaggle_env::environment::Error>(())
//! ```
pub mod environment;
pub mod fsutil;

pub use environment::{Environment, EnvironmentData, Mode};
