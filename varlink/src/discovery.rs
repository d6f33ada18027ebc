//! Environment discovery by walking up the directory tree.
//!
//! Projects are laid out as `environments/<name>/...`, with `.tfvars` files
//! sprinkled at various levels. Starting from a directory, the locator walks
//! towards the filesystem root, collecting every variable file it passes and
//! noting the first directory whose parent is named `environments`. Once the
//! environment is known, the walk continues for [`SearchLimits::levels_above`]
//! more ancestors so shared variable files above the environment are picked up.
//!
//! # Examples
//!
//! ```no_run
//! use varlink::discovery::{EnvironmentLocator, SearchLimits};
//! use std::path::Path;
//!
//! let locator = EnvironmentLocator::new(SearchLimits::default());
//! let discovery = locator.locate(Path::new(".")).unwrap();
//! println!("environment: {}", discovery.environment);
//! for file in &discovery.files {
//!     println!("  {}", file.display());
//! }
//! ```

use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::path::resolve_start_dir;

/// Name of the directory whose children are environments.
pub const ENVIRONMENTS_DIR: &str = "environments";

/// Suffix identifying variable files.
pub const VARIABLE_FILE_SUFFIX: &str = ".tfvars";

/// Default number of ancestors scanned after the environment is found.
pub const DEFAULT_LEVELS_ABOVE: usize = 1;

/// Default maximum number of directories visited.
pub const DEFAULT_MAX_SEARCH_DEPTH: usize = 10;

/// Bounds for the upward walk.
///
/// # Examples
///
/// ```
/// use varlink::discovery::SearchLimits;
///
/// let limits = SearchLimits::default();
/// assert_eq!(limits.levels_above, 1);
/// assert_eq!(limits.max_search_depth, 10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchLimits {
    /// Ancestors to keep scanning once the environment directory is found.
    pub levels_above: usize,
    /// Maximum number of directories visited before giving up.
    pub max_search_depth: usize,
}

impl Default for SearchLimits {
    fn default() -> Self {
        Self {
            levels_above: DEFAULT_LEVELS_ABOVE,
            max_search_depth: DEFAULT_MAX_SEARCH_DEPTH,
        }
    }
}

impl SearchLimits {
    /// Create limits with explicit values.
    #[must_use]
    pub const fn new(levels_above: usize, max_search_depth: usize) -> Self {
        Self {
            levels_above,
            max_search_depth,
        }
    }
}

/// The outcome of a successful walk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Discovery {
    /// Name of the active environment.
    pub environment: String,
    /// Variable files in walk order, starting directory first.
    pub files: Vec<PathBuf>,
    /// The absolute directory the walk started from.
    pub start_dir: PathBuf,
}

/// Mutable state of a single walk.
#[derive(Debug)]
struct SearchState {
    current_dir: PathBuf,
    search_depth: usize,
    environment: Option<String>,
    levels_above_count: usize,
    collected_files: Vec<PathBuf>,
}

impl SearchState {
    fn new(start_dir: PathBuf) -> Self {
        Self {
            current_dir: start_dir,
            search_depth: 0,
            environment: None,
            levels_above_count: 0,
            collected_files: Vec::new(),
        }
    }
}

/// Locates the active environment and its variable files.
#[derive(Debug, Clone, Default)]
pub struct EnvironmentLocator {
    limits: SearchLimits,
}

impl EnvironmentLocator {
    /// Create a locator with the given search limits.
    #[must_use]
    pub const fn new(limits: SearchLimits) -> Self {
        Self { limits }
    }

    /// Returns the configured search limits.
    #[must_use]
    pub const fn limits(&self) -> SearchLimits {
        self.limits
    }

    /// Walk upward from `start_dir` and identify the environment.
    ///
    /// Variable files are collected from every directory visited, including
    /// the directory where the environment is detected and the ancestors
    /// scanned afterwards. Reaching the filesystem root ends the walk.
    ///
    /// # Errors
    ///
    /// - [`Error::PathResolution`] if `start_dir` cannot be resolved
    /// - [`Error::SearchDepthExceeded`] if more than `max_search_depth`
    ///   directories would be visited
    /// - [`Error::EnvironmentNotFound`] if no `environments/<name>` directory
    ///   lies on the path
    pub fn locate(&self, start_dir: &Path) -> Result<Discovery> {
        let start_dir = resolve_start_dir(start_dir)?;
        let mut state = SearchState::new(start_dir.clone());

        loop {
            state.search_depth += 1;
            if state.search_depth > self.limits.max_search_depth {
                return Err(Error::SearchDepthExceeded {
                    limit: self.limits.max_search_depth,
                });
            }

            let files = variable_files_in(&state.current_dir);
            log::debug!(
                "Visited {} (depth {}): {} variable file(s)",
                state.current_dir.display(),
                state.search_depth,
                files.len()
            );
            state.collected_files.extend(files);

            let parent_dir = state
                .current_dir
                .parent()
                .map_or_else(|| state.current_dir.clone(), Path::to_path_buf);

            if state.environment.is_none() {
                if base_name(&parent_dir) == Some(OsStr::new(ENVIRONMENTS_DIR)) {
                    let name = display_name(&state.current_dir);
                    log::debug!("Detected environment '{name}'");
                    state.environment = Some(name);
                }
            } else {
                state.levels_above_count += 1;
                if state.levels_above_count > self.limits.levels_above {
                    break;
                }
            }

            if state.current_dir == parent_dir {
                break;
            }
            state.current_dir = parent_dir;
        }

        // Invoked from inside `environments` itself rather than one of its
        // children: the environment takes the start directory's name.
        if state.environment.is_none()
            && base_name(&start_dir) == Some(OsStr::new(ENVIRONMENTS_DIR))
        {
            state.environment = Some(display_name(&start_dir));
        }

        let environment = state
            .environment
            .ok_or_else(|| Error::EnvironmentNotFound {
                start: start_dir.clone(),
            })?;

        Ok(Discovery {
            environment,
            files: state.collected_files,
            start_dir,
        })
    }
}

/// Walk upward from `start_dir` using `limits`.
///
/// Shorthand for `EnvironmentLocator::new(limits).locate(start_dir)`.
///
/// # Errors
///
/// See [`EnvironmentLocator::locate`].
pub fn locate(start_dir: &Path, limits: SearchLimits) -> Result<Discovery> {
    EnvironmentLocator::new(limits).locate(start_dir)
}

/// Returns `true` if `name` follows the variable file naming convention.
#[must_use]
pub fn is_variable_file_name(name: &OsStr) -> bool {
    name.to_str()
        .is_some_and(|name| name.ends_with(VARIABLE_FILE_SUFFIX))
}

/// List the variable files directly inside `dir`, sorted by name.
///
/// A directory that cannot be listed contributes no files.
fn variable_files_in(dir: &Path) -> Vec<PathBuf> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            log::warn!("Skipping unreadable directory {}: {e}", dir.display());
            return Vec::new();
        }
    };

    let mut files: Vec<PathBuf> = entries
        .filter_map(std::result::Result::ok)
        .filter(|entry| is_variable_file_name(&entry.file_name()))
        .map(|entry| entry.path())
        .filter(|path| path.is_file())
        .collect();
    files.sort();
    files
}

fn base_name(path: &Path) -> Option<&OsStr> {
    path.file_name()
}

fn display_name(path: &Path) -> String {
    base_name(path).map_or_else(
        || path.display().to_string(),
        |name| name.to_string_lossy().into_owned(),
    )
}
