#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # varlink
//!
//! A library for linking Terraform environments to shell variables.
//!
//! Starting from a directory, the library walks upward until it finds an
//! `environments/<name>` directory, collects every `.tfvars` file along the
//! way, and projects the parsed variables as `TF_VAR_<key>` environment
//! variables. Deactivation removes every `TF_VAR_*` variable again.
//!
//! ## Core Types
//!
//! - [`EnvironmentLocator`] and [`Discovery`]: the upward environment walk
//! - [`VariableFileParser`] and [`VariableMap`]: `key = value` parsing
//! - [`ActivatePlan`] and [`DeactivatePlan`]: plan-then-apply operations
//! - [`EnvStore`]: the environment being changed
//! - [`Error`] and [`Result`]: Error handling types
//! - [`Logger`] and [`LogLevel`]: Logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use varlink::env::MemoryEnv;
//! use varlink::{ActivatePlan, SearchLimits};
//! use std::fs;
//!
//! let root = tempfile::tempdir().unwrap();
//! let dev = root.path().join("environments").join("dev");
//! fs::create_dir_all(&dev).unwrap();
//! fs::write(dev.join("dev.tfvars"), "region = \"eu-west-1\"\n").unwrap();
//!
//! let plan = ActivatePlan::for_dir(&dev, SearchLimits::default()).unwrap();
//! assert_eq!(plan.environment, "dev");
//!
//! let mut store = MemoryEnv::new();
//! plan.execute(&mut store);
//! assert_eq!(store.get("TF_VAR_region"), Some("eu-west-1"));
//! ```

pub mod config;
pub mod discovery;
pub mod env;
pub mod error;
pub mod logging;
pub mod operations;
pub mod output;
pub mod path;
pub mod tfvars;

// Re-export key types at crate root for convenience
pub use config::{Config, ConfigBuilder};
pub use discovery::{Discovery, EnvironmentLocator, SearchLimits};
pub use env::{EnvStore, MemoryEnv, ProcessEnv, ShellScript, TF_VAR_PREFIX};
pub use error::{Error, Result};
pub use logging::{init_logger, LogLevel, Logger};
pub use operations::{ActivateOptions, ActivatePlan, ActivateResult, DeactivatePlan};
pub use tfvars::{VariableFileParser, VariableMap};
