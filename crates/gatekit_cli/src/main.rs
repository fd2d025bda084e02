//! gatekit CLI, the command-line front end for exporting gate-level designs.
//!
//! Provides `gatekit export` to build a registered design and write its JSON
//! netlist, and `gatekit list` to show the designs that can be exported.

#![warn(missing_docs)]

mod export;
mod list;

use std::process;

use clap::{Parser, Subcommand};

/// gatekit, a gate-level circuit builder and netlist exporter.
#[derive(Parser, Debug)]
#[command(name = "gatekit", version, about = "Gate-level circuit netlist exporter")]
pub struct Cli {
    /// Suppress all output except errors.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Print extra statistics.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to a custom `gatekit.toml` configuration file.
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// The subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Build a design and write its netlist.
    Export(ExportArgs),
    /// List the registered designs.
    List,
}

/// Arguments for the `gatekit export` subcommand.
#[derive(Parser, Debug)]
pub struct ExportArgs {
    /// Registered design name (default: from `gatekit.toml`, else `register`).
    pub design: Option<String>,

    /// Output file path (default: from `gatekit.toml`, else `project.json`).
    #[arg(short, long)]
    pub output: Option<String>,

    /// Indent the JSON output.
    #[arg(long)]
    pub pretty: bool,

    /// Include gate positions, facings and subcircuit names.
    #[arg(long)]
    pub layout: bool,
}

/// Global settings derived from CLI flags.
pub struct GlobalArgs {
    /// Whether to suppress non-error output.
    pub quiet: bool,
    /// Whether to print extra statistics.
    pub verbose: bool,
    /// Optional path to a custom config file.
    pub config: Option<String>,
}

fn main() {
    let cli = Cli::parse();

    let global = GlobalArgs {
        quiet: cli.quiet,
        verbose: cli.verbose,
        config: cli.config,
    };

    let result = match cli.command {
        Command::Export(ref args) => export::run(args, &global),
        Command::List => list::run(&global),
    };

    match result {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("error: {e}");
            process::exit(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn parse_export_default() {
        let cli = Cli::parse_from(["gatekit", "export"]);
        match cli.command {
            Command::Export(ref args) => {
                assert!(args.design.is_none());
                assert!(args.output.is_none());
                assert!(!args.pretty);
                assert!(!args.layout);
            }
            _ => panic!("expected Export command"),
        }
    }

    #[test]
    fn parse_export_with_args() {
        let cli = Cli::parse_from([
            "gatekit",
            "export",
            "adder",
            "-o",
            "build/adder.json",
            "--pretty",
            "--layout",
        ]);
        match cli.command {
            Command::Export(ref args) => {
                assert_eq!(args.design.as_deref(), Some("adder"));
                assert_eq!(args.output.as_deref(), Some("build/adder.json"));
                assert!(args.pretty);
                assert!(args.layout);
            }
            _ => panic!("expected Export command"),
        }
    }

    #[test]
    fn parse_list() {
        let cli = Cli::parse_from(["gatekit", "list"]);
        assert!(matches!(cli.command, Command::List));
    }

    #[test]
    fn parse_global_flags() {
        let cli = Cli::parse_from(["gatekit", "--quiet", "export"]);
        assert!(cli.quiet);
        assert!(!cli.verbose);
    }

    #[test]
    fn parse_verbose_flag() {
        let cli = Cli::parse_from(["gatekit", "--verbose", "list"]);
        assert!(cli.verbose);
        assert!(!cli.quiet);
    }

    #[test]
    fn parse_config_after_subcommand() {
        let cli = Cli::parse_from(["gatekit", "export", "--config", "other.toml"]);
        assert_eq!(cli.config.as_deref(), Some("other.toml"));
    }

    #[test]
    fn parse_unknown_command_fails() {
        assert!(Cli::try_parse_from(["gatekit", "simulate"]).is_err());
    }
}
