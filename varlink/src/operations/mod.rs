//! Activation and deactivation using the plan-execute pattern.
//!
//! Operations are split into two phases:
//! 1. **Planning**: discovers the environment and reads variable files, or
//!    lists the variables to remove
//! 2. **Execution**: applies the plan to an [`EnvStore`](crate::env::EnvStore)
//!
//! Dry runs stop after planning.
//!
//! # Examples
//!
//! ```no_run
//! use varlink::env::MemoryEnv;
//! use varlink::operations::{ActivateOptions, ActivatePlan};
//! use std::path::PathBuf;
//!
//! let plan = ActivatePlan::build(&ActivateOptions::new(PathBuf::from("."))).unwrap();
//! let mut store = MemoryEnv::new();
//! let result = plan.execute(&mut store);
//! println!("{} variables for {}", result.applied, result.environment);
//! ```

pub mod activate;
pub mod deactivate;

pub use activate::{ActivateOptions, ActivatePlan, ActivateResult};
pub use deactivate::DeactivatePlan;
