//! Output formatter implementations.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::env::{variable_name, MemoryEnv, ShellScript};
use crate::operations::ActivatePlan;
use crate::{Error, Result};

use super::{is_valid_env_var_name, OutputFormatter, ShellType};

/// Formatter for shell-specific export statements.
pub struct ExportFormatter {
    shell: ShellType,
}

impl ExportFormatter {
    /// Create a new export formatter for `shell`.
    #[must_use]
    pub const fn new(shell: ShellType) -> Self {
        Self { shell }
    }
}

impl OutputFormatter for ExportFormatter {
    fn format(&self, plan: &ActivatePlan) -> Result<String> {
        let mut script = ShellScript::new(self.shell, &MemoryEnv::new());
        plan.execute(&mut script);
        Ok(script.render())
    }
}

#[derive(Serialize)]
struct JsonReport<'a> {
    environment: &'a str,
    files: Vec<String>,
    variables: BTreeMap<&'a str, &'a str>,
    skipped: Vec<String>,
}

/// Formatter for JSON output.
pub struct JsonFormatter;

impl OutputFormatter for JsonFormatter {
    fn format(&self, plan: &ActivatePlan) -> Result<String> {
        let report = JsonReport {
            environment: &plan.environment,
            files: plan
                .files
                .iter()
                .map(|p| p.display().to_string())
                .collect(),
            variables: plan
                .variables
                .iter()
                .filter(|(key, _)| is_valid_env_var_name(&variable_name(key)))
                .map(|(key, value)| (key.as_str(), value.as_str()))
                .collect(),
            skipped: plan.skipped(),
        };

        serde_json::to_string_pretty(&report).map_err(|e| Error::Validation {
            field: "json_output".to_string(),
            message: format!("failed to serialize to JSON: {e}"),
        })
    }
}

/// Formatter for dotenv (.env file) format.
pub struct DotenvFormatter;

impl OutputFormatter for DotenvFormatter {
    fn format(&self, plan: &ActivatePlan) -> Result<String> {
        let lines: Vec<String> = plan
            .exports()
            .into_iter()
            .map(|(name, value)| format!("{name}={}", dotenv_quote(value)))
            .collect();
        Ok(lines.join("\n"))
    }
}

fn dotenv_quote(value: &str) -> String {
    let needs_quotes = value
        .chars()
        .any(|c| c.is_whitespace() || matches!(c, '"' | '\'' | '#' | '\\' | '$'));
    if needs_quotes {
        format!("\"{}\"", value.replace('\\', "\\\\").replace('"', "\\\""))
    } else {
        value.to_string()
    }
}

/// Formatter for the human-readable dry-run report.
pub struct HumanFormatter;

impl OutputFormatter for HumanFormatter {
    fn format(&self, plan: &ActivatePlan) -> Result<String> {
        let mut lines = vec![format!("Would set environment to: {}", plan.environment)];
        for (name, value) in plan.exports() {
            lines.push(format!("Would set {name}={value}"));
        }
        for name in plan.skipped() {
            lines.push(format!("Would skip {name}: not a valid variable name"));
        }
        Ok(lines.join("\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tfvars::VariableMap;
    use std::path::PathBuf;

    fn create_test_plan() -> ActivatePlan {
        let mut variables = VariableMap::new();
        variables.insert("region".to_string(), "us-east-1".to_string());
        variables.insert("name".to_string(), "web app".to_string());

        ActivatePlan {
            environment: "staging".to_string(),
            files: vec![
                PathBuf::from("/infra/environments/staging/env.tfvars"),
                PathBuf::from("/infra/environments/common.tfvars"),
            ],
            variables,
            start_dir: PathBuf::from("/infra/environments/staging"),
        }
    }

    #[test]
    fn test_export_formatter_bash() {
        let output = ExportFormatter::new(ShellType::Bash)
            .format(&create_test_plan())
            .unwrap();
        assert_eq!(
            output,
            "export TF_VAR_name='web app'\nexport TF_VAR_region=us-east-1"
        );
    }

    #[test]
    fn test_export_formatter_fish() {
        let output = ExportFormatter::new(ShellType::Fish)
            .format(&create_test_plan())
            .unwrap();
        assert!(output.contains("set -gx TF_VAR_region us-east-1"));
    }

    #[test]
    fn test_json_formatter() {
        let output = JsonFormatter.format(&create_test_plan()).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(parsed["environment"], "staging");
        assert_eq!(parsed["files"].as_array().unwrap().len(), 2);
        assert_eq!(parsed["variables"]["region"], "us-east-1");
    }

    #[test]
    fn test_dotenv_formatter() {
        let output = DotenvFormatter.format(&create_test_plan()).unwrap();
        assert_eq!(output, "TF_VAR_name=\"web app\"\nTF_VAR_region=us-east-1");
    }

    #[test]
    fn test_human_formatter_matches_dry_run_report() {
        let output = HumanFormatter.format(&create_test_plan()).unwrap();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines[0], "Would set environment to: staging");
        assert_eq!(lines[1], "Would set TF_VAR_name=web app");
        assert_eq!(lines[2], "Would set TF_VAR_region=us-east-1");
    }

    #[test]
    fn test_invalid_names_are_skipped_everywhere() {
        let mut plan = create_test_plan();
        plan.variables.insert("my-var".to_string(), "x".to_string());

        let export = ExportFormatter::new(ShellType::Bash).format(&plan).unwrap();
        assert!(!export.contains("my-var"));

        let dotenv = DotenvFormatter.format(&plan).unwrap();
        assert!(!dotenv.contains("my-var"));

        let human = HumanFormatter.format(&plan).unwrap();
        assert!(!human.contains("Would set TF_VAR_my-var"));
        assert!(human.ends_with("Would skip TF_VAR_my-var: not a valid variable name"));

        let json: serde_json::Value =
            serde_json::from_str(&JsonFormatter.format(&plan).unwrap()).unwrap();
        assert!(json["variables"].get("my-var").is_none());
        assert_eq!(json["skipped"][0], "TF_VAR_my-var");
    }

    #[test]
    fn test_empty_variables() {
        let mut plan = create_test_plan();
        plan.variables.clear();

        assert_eq!(ExportFormatter::new(ShellType::Zsh).format(&plan).unwrap(), "");
        assert_eq!(DotenvFormatter.format(&plan).unwrap(), "");
        assert_eq!(
            HumanFormatter.format(&plan).unwrap(),
            "Would set environment to: staging"
        );
    }
}
