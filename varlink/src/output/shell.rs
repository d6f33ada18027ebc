//! Shell detection and statement formatting.

use std::env;

use crate::Result;

/// Supported shell types for export formatting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellType {
    /// Bourne Again Shell (bash).
    Bash,
    /// Z Shell (zsh).
    Zsh,
    /// Friendly Interactive Shell (fish).
    Fish,
    /// `PowerShell`.
    PowerShell,
}

impl ShellType {
    /// Detect the current shell from environment variables.
    ///
    /// Detection precedence:
    /// 1. `ZSH_VERSION` - indicates zsh
    /// 2. `FISH_VERSION` - indicates fish
    /// 3. `PSModulePath` - indicates `PowerShell`
    /// 4. `SHELL` environment variable (path like `/bin/bash`)
    /// 5. Default to bash if unable to determine
    #[must_use]
    pub fn detect() -> Self {
        Self::detect_from(|name| env::var(name).ok())
    }

    /// Detect the shell using a custom variable lookup.
    ///
    /// # Examples
    ///
    /// ```
    /// use varlink::output::ShellType;
    ///
    /// let shell = ShellType::detect_from(|name| {
    ///     (name == "SHELL").then(|| "/usr/bin/fish".to_string())
    /// });
    /// assert_eq!(shell, ShellType::Fish);
    /// ```
    pub fn detect_from<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if lookup("ZSH_VERSION").is_some() {
            return Self::Zsh;
        }
        if lookup("FISH_VERSION").is_some() {
            return Self::Fish;
        }
        if lookup("PSModulePath").is_some() {
            return Self::PowerShell;
        }

        if let Some(shell_path) = lookup("SHELL") {
            if shell_path.contains("zsh") {
                return Self::Zsh;
            } else if shell_path.contains("fish") {
                return Self::Fish;
            } else if shell_path.contains("pwsh") || shell_path.contains("powershell") {
                return Self::PowerShell;
            }
        }

        Self::Bash
    }

    /// Parse a shell type from a string.
    ///
    /// Accepts (case-insensitive): "bash", "sh", "zsh", "fish", "powershell",
    /// "pwsh", "ps".
    ///
    /// # Errors
    ///
    /// Returns an error if the shell name is not recognized.
    pub fn from_string(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "bash" | "sh" => Ok(Self::Bash),
            "zsh" => Ok(Self::Zsh),
            "fish" => Ok(Self::Fish),
            "powershell" | "pwsh" | "ps" => Ok(Self::PowerShell),
            _ => Err(crate::Error::Validation {
                field: "shell".to_string(),
                message: format!(
                    "unknown shell type '{s}': supported shells are bash, zsh, fish, powershell"
                ),
            }),
        }
    }

    /// Format an export statement for this shell type.
    ///
    /// Values are quoted only when the shell would otherwise mangle them.
    ///
    /// # Examples
    ///
    /// ```
    /// use varlink::output::ShellType;
    ///
    /// assert_eq!(ShellType::Bash.format_export("TF_VAR_env", "dev"), "export TF_VAR_env=dev");
    /// assert_eq!(
    ///     ShellType::Bash.format_export("TF_VAR_name", "it's here"),
    ///     "export TF_VAR_name='it'\\''s here'"
    /// );
    /// assert_eq!(ShellType::Fish.format_export("TF_VAR_env", "dev"), "set -gx TF_VAR_env dev");
    /// assert_eq!(
    ///     ShellType::PowerShell.format_export("TF_VAR_env", "dev"),
    ///     "$env:TF_VAR_env=\"dev\""
    /// );
    /// ```
    #[must_use]
    pub fn format_export(&self, var: &str, value: &str) -> String {
        match self {
            Self::Bash | Self::Zsh => format!("export {var}={}", posix_quote(value)),
            Self::Fish => format!("set -gx {var} {}", fish_quote(value)),
            Self::PowerShell => format!("$env:{var}={}", powershell_quote(value)),
        }
    }

    /// Format a statement removing a variable from the environment.
    ///
    /// # Examples
    ///
    /// ```
    /// use varlink::output::ShellType;
    ///
    /// assert_eq!(ShellType::Zsh.format_unset("TF_VAR_env"), "unset TF_VAR_env");
    /// assert_eq!(ShellType::Fish.format_unset("TF_VAR_env"), "set -e TF_VAR_env");
    /// ```
    #[must_use]
    pub fn format_unset(&self, var: &str) -> String {
        match self {
            Self::Bash | Self::Zsh => format!("unset {var}"),
            Self::Fish => format!("set -e {var}"),
            Self::PowerShell => {
                format!("Remove-Item Env:{var} -ErrorAction SilentlyContinue")
            }
        }
    }
}

impl std::fmt::Display for ShellType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Bash => write!(f, "bash"),
            Self::Zsh => write!(f, "zsh"),
            Self::Fish => write!(f, "fish"),
            Self::PowerShell => write!(f, "powershell"),
        }
    }
}

/// Validates that a string is a valid environment variable name.
///
/// Valid names must:
/// - Start with a letter or underscore
/// - Contain only letters, digits, and underscores
#[must_use]
pub fn is_valid_env_var_name(name: &str) -> bool {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return false;
    };

    if !first.is_ascii_alphabetic() && first != '_' {
        return false;
    }

    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

fn is_shell_safe(value: &str) -> bool {
    !value.is_empty()
        && value
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || "_-./:,@%+=".contains(c))
}

fn posix_quote(value: &str) -> String {
    if is_shell_safe(value) {
        value.to_string()
    } else {
        format!("'{}'", value.replace('\'', "'\\''"))
    }
}

fn fish_quote(value: &str) -> String {
    if is_shell_safe(value) {
        value.to_string()
    } else {
        format!("'{}'", value.replace('\\', "\\\\").replace('\'', "\\'"))
    }
}

fn powershell_quote(value: &str) -> String {
    let escaped = value
        .replace('`', "``")
        .replace('"', "`\"")
        .replace('$', "`$");
    format!("\"{escaped}\"")
}
