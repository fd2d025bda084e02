//! `gatekit list`: prints the registered designs.

use gatekit_stdlib::DESIGNS;

use crate::GlobalArgs;

/// Runs the `gatekit list` command.
///
/// Names go to stdout, one per line, so the output can be piped; `--quiet`
/// drops the descriptions.
pub fn run(global: &GlobalArgs) -> Result<i32, Box<dyn std::error::Error>> {
    for line in listing(global.quiet) {
        println!("{line}");
    }
    Ok(0)
}

fn listing(quiet: bool) -> Vec<String> {
    let width = DESIGNS.iter().map(|d| d.name.len()).max().unwrap_or(0);
    DESIGNS
        .iter()
        .map(|d| {
            if quiet {
                d.name.to_string()
            } else {
                format!("{:<width$}  {}", d.name, d.description)
            }
        })
        .collect()
}
