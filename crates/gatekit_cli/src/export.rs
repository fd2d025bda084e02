//! `gatekit export`: builds one registered design and writes its netlist.

use std::path::{Path, PathBuf};

use gatekit_config::{ExportOverrides, ProjectConfig, ResolvedExport};
use gatekit_netlist::{ExportOptions, ExportSummary};
use gatekit_stdlib::find_design;

use crate::{ExportArgs, GlobalArgs};

/// Runs the `gatekit export` command.
///
/// Settings come from the command line, then `gatekit.toml`, then built-in
/// defaults. Returns exit code 0 on success; every failure is an error.
pub fn run(args: &ExportArgs, global: &GlobalArgs) -> Result<i32, Box<dyn std::error::Error>> {
    let config = load_project_config(global, &std::env::current_dir()?)?;
    let resolved = resolve(args, config.as_ref());

    let design = find_design(&resolved.design).ok_or_else(|| {
        format!(
            "unknown design '{}' (run `gatekit list` to see the available designs)",
            resolved.design
        )
    })?;

    if !global.quiet {
        match &config {
            Some(config) => eprintln!("  Exporting {} ({})", design.name, config.project.name),
            None => eprintln!("  Exporting {}", design.name),
        }
    }

    let options = ExportOptions {
        pretty: resolved.pretty,
        include_layout: resolved.include_layout,
    };
    let summary = gatekit_netlist::export(design.build, &resolved.output, &options)?;

    if !global.quiet {
        report(&resolved.output, &summary, global.verbose);
    }
    Ok(0)
}

/// Loads the configuration named by `--config`, or `gatekit.toml` in `dir`
/// if there is one.
pub fn load_project_config(
    global: &GlobalArgs,
    dir: &Path,
) -> Result<Option<ProjectConfig>, gatekit_config::ConfigError> {
    match &global.config {
        Some(path) => gatekit_config::load_config_file(Path::new(path)).map(Some),
        None => gatekit_config::load_config(dir),
    }
}

fn resolve(args: &ExportArgs, config: Option<&ProjectConfig>) -> ResolvedExport {
    let overrides = ExportOverrides {
        design: args.design.clone(),
        output: args.output.as_ref().map(PathBuf::from),
        pretty: args.pretty,
        include_layout: args.layout,
    };
    gatekit_config::resolve_export(config, &overrides)
}

fn report(output: &Path, summary: &ExportSummary, verbose: bool) {
    if verbose {
        eprintln!("      Gates {} ({} primitive)", summary.gates, summary.primitives);
        eprintln!("      Nodes {}", summary.nodes);
        eprintln!("Connections {}", summary.connections);
    }
    eprintln!("  Generated {} ({} bytes)", output.display(), summary.bytes);
}
