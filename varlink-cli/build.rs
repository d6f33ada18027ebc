//! Build script for varlink-cli.
//!
//! This script generates a man page at build time using clap_mangen.
//! The generated man page is placed in OUT_DIR for inclusion in release builds.
//!
//! Note: We build a minimal command structure here rather than importing from
//! the main crate, since build scripts cannot depend on the crate being built.

use clap::{Arg, ArgAction, Command};
use clap_mangen::Man;
use std::fs;
use std::path::PathBuf;

/// Build the CLI command structure for man page generation.
///
/// IMPORTANT: Keep this structure synchronized with src/cli.rs
/// When adding/removing/modifying commands, update both files.
fn build_cli() -> Command {
    Command::new("varlink")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Export tfvars from the enclosing Terraform environment as TF_VAR_* variables")
        .long_about(
            "Walks up from the current directory to the nearest environments/<name> \
             directory, merges every .tfvars file found on the way, and prints shell \
             statements exporting them as TF_VAR_* variables.",
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .help("Read configuration from this file instead of ~/.varlink/config.yaml")
                .value_name("PATH")
                .global(true)
                .env("VARLINK_CONFIG"),
        )
        .subcommands(vec![
            Command::new("activate")
                .about("Print exports for the enclosing environment's variables")
                .long_about("Use as eval \"$(varlink activate)\" to set TF_VAR_* variables")
                .args([
                    Arg::new("dir")
                        .long("dir")
                        .value_name("PATH")
                        .help("Directory to start searching from"),
                    Arg::new("levels")
                        .long("levels")
                        .value_name("N")
                        .help("Directories to keep scanning above the environments directory"),
                    Arg::new("max-depth")
                        .long("max-depth")
                        .value_name("N")
                        .help("Maximum number of directories to visit"),
                    Arg::new("dry-run")
                        .long("dry-run")
                        .help("Show what would be set without emitting any exports")
                        .action(ArgAction::SetTrue),
                    Arg::new("format")
                        .long("format")
                        .value_parser(["export", "json", "dotenv"])
                        .help("Output format"),
                    Arg::new("shell")
                        .long("shell")
                        .help("Shell type for export format"),
                ]),
            Command::new("deactivate")
                .about("Print statements removing every TF_VAR_* variable")
                .long_about("Use as eval \"$(varlink deactivate)\"")
                .arg(
                    Arg::new("shell")
                        .long("shell")
                        .help("Shell type for unset statements"),
                ),
            Command::new("completions")
                .about("Generate shell completion scripts")
                .long_about("Generate shell completion scripts for bash, zsh, fish, or PowerShell"),
        ])
}

fn main() {
    // Generate man pages at build time
    let out_dir = PathBuf::from(std::env::var("OUT_DIR").unwrap());
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir).unwrap();

    let man = Man::new(build_cli());
    let mut buffer = Vec::new();
    man.render(&mut buffer).unwrap();

    fs::write(man_dir.join("varlink.1"), buffer).unwrap();

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
}
