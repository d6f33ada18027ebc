//! Configuration system for varlink.
//!
//! Settings come from several layers, merged with the following precedence
//! (highest to lowest):
//!
//! 1. Programmatic overrides (via `ConfigBuilder::with_config`, used for
//!    command-line flags)
//! 2. Environment variables (`VARLINK_*`)
//! 3. Configuration file (`--config`, else `~/.varlink/config.yaml`)
//! 4. Built-in defaults
//!
//! # Examples
//!
//! ```no_run
//! use varlink::config::ConfigBuilder;
//!
//! let config = ConfigBuilder::new().build().unwrap();
//! let limits = config.limits();
//! println!("levels above: {}", limits.levels_above);
//! ```

pub mod builder;
pub mod environment;
pub mod loader;
pub mod merger;
pub mod schema;
pub mod validator;

pub use builder::ConfigBuilder;
pub use environment::EnvironmentConfig;
pub use loader::{ConfigLoader, ConfigSource};
pub use merger::ConfigMerger;
pub use schema::Config;
pub use validator::ConfigValidator;
