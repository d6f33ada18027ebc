//! Parsing of `.tfvars` variable files.
//!
//! The format understood here is flat: one `key = value`
//! assignment per line, `#` comments, and optional double quotes around the
//! value. Anything richer (lists, maps, heredocs, interpolation) is passed
//! through as an opaque string or ignored.
//!
//! # Examples
//!
//! ```
//! use varlink::tfvars::parse_str;
//!
//! let vars = parse_str("# shared settings\nregion = \"eu-west-1\"\ninstances=3\n");
//! assert_eq!(vars["region"], "eu-west-1");
//! assert_eq!(vars["instances"], "3");
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Variable name to value mapping, ordered by name.
pub type VariableMap = BTreeMap<String, String>;

/// Parse a single line into a key/value pair.
///
/// Returns `None` for blank lines, comments, lines without `=`, and lines
/// with an empty key.
///
/// # Examples
///
/// ```
/// use varlink::tfvars::parse_line;
///
/// assert_eq!(
///     parse_line("  name = \"value\" "),
///     Some(("name".to_string(), "value".to_string()))
/// );
/// assert_eq!(parse_line("# comment"), None);
/// assert_eq!(parse_line("no assignment"), None);
/// ```
#[must_use]
pub fn parse_line(line: &str) -> Option<(String, String)> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return None;
    }

    let (key, value) = line.split_once('=')?;
    let key = key.trim();
    if key.is_empty() {
        return None;
    }

    // Strips every leading and trailing quote, not a matched pair.
    let value = value.trim().trim_matches('"');

    Some((key.to_string(), value.to_string()))
}

/// Parse the contents of one variable file.
///
/// Later assignments of the same key overwrite earlier ones.
#[must_use]
pub fn parse_str(contents: &str) -> VariableMap {
    contents.lines().filter_map(parse_line).collect()
}

/// Parse a single variable file from disk.
///
/// # Errors
///
/// Returns [`Error::FileRead`] if the file cannot be opened or is not valid
/// UTF-8.
pub fn parse_file(path: &Path) -> Result<VariableMap> {
    let contents = fs::read_to_string(path).map_err(|source| Error::FileRead {
        path: path.to_path_buf(),
        source,
    })?;

    let vars = parse_str(&contents);
    log::debug!("Parsed {} variable(s) from {}", vars.len(), path.display());
    Ok(vars)
}

/// Parses an ordered batch of variable files into one mapping.
///
/// Files are merged in the order given; when several files define the same
/// key, the one that comes later wins.
#[derive(Debug, Clone, Default)]
pub struct VariableFileParser {
    files: Vec<PathBuf>,
}

impl VariableFileParser {
    /// Create a parser for the given files.
    #[must_use]
    pub fn new(files: Vec<PathBuf>) -> Self {
        Self { files }
    }

    /// Returns the files this parser reads, in merge order.
    #[must_use]
    pub fn files(&self) -> &[PathBuf] {
        &self.files
    }

    /// Read and merge every file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::FileRead`] for the first file that cannot be read.
    /// No partial mapping is returned.
    pub fn parse(&self) -> Result<VariableMap> {
        parse_files(&self.files)
    }
}

/// Read and merge `files` in order, later files overwriting earlier ones.
///
/// # Errors
///
/// Returns [`Error::FileRead`] for the first file that cannot be read.
pub fn parse_files<P: AsRef<Path>>(files: &[P]) -> Result<VariableMap> {
    let mut vars = VariableMap::new();
    for file in files {
        vars.extend(parse_file(file.as_ref())?);
    }
    Ok(vars)
}
