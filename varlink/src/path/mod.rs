//! Start-directory resolution for the environment walk.
//!
//! The walk always operates on an absolute, lexically normalized path. A
//! relative start directory is resolved against the current working
//! directory, which fails if that directory has been deleted or is not
//! accessible.
//!
//! # Examples
//!
//! ```no_run
//! use varlink::path::resolve_start_dir;
//! use std::path::Path;
//!
//! let start = resolve_start_dir(Path::new(".")).unwrap();
//! assert!(start.is_absolute());
//! ```

pub mod normalize;

use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Resolve the directory an environment search starts from.
///
/// # Errors
///
/// Returns [`Error::PathResolution`] if the path cannot be made absolute or
/// does not name an existing directory.
pub fn resolve_start_dir(path: &Path) -> Result<PathBuf> {
    let resolved = normalize::normalize(path)?;

    match resolved.metadata() {
        Ok(meta) if meta.is_dir() => Ok(resolved),
        Ok(_) => Err(Error::PathResolution {
            path: resolved,
            reason: "not a directory".to_string(),
        }),
        Err(e) => Err(Error::PathResolution {
            path: resolved,
            reason: e.to_string(),
        }),
    }
}
