//! Building a design and writing its netlist to disk.

use crate::artifact::Netlist;
use crate::flatten::{flatten, FlattenOptions};
use gatekit_common::{GateError, GateResult};
use gatekit_ir::{Context, GateHandle, Parent};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Errors from [`export`].
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    /// The design could not be built or flattened.
    #[error(transparent)]
    Gate(#[from] GateError),

    /// The netlist could not be serialized.
    #[error("failed to serialize netlist: {0}")]
    Json(#[from] serde_json::Error),

    /// The output file could not be written.
    #[error("failed to write {}: {source}", path.display())]
    Io {
        /// The output path.
        path: PathBuf,
        /// The underlying error.
        source: std::io::Error,
    },
}

/// Output formatting for [`export`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExportOptions {
    /// Indent the JSON document.
    pub pretty: bool,
    /// Include gate layouts and subcircuit names.
    pub include_layout: bool,
}

/// What [`export`] wrote.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExportSummary {
    /// Gates in the netlist at any depth, subcircuits included.
    pub gates: usize,
    /// Primitive gates at any depth.
    pub primitives: usize,
    /// Elementary connection pairs.
    pub connections: usize,
    /// Distinct node ids.
    pub nodes: usize,
    /// Bytes written.
    pub bytes: usize,
}

/// Builds a fresh context around `main` and validates the root circuit.
pub fn elaborate<F>(main: F) -> GateResult<Context>
where
    F: FnOnce(&mut Context, Parent) -> GateResult<GateHandle>,
{
    let mut ctx = Context::new();
    ctx.set_main_circuit(main)?;
    Ok(ctx)
}

/// Serializes a netlist to a JSON string.
pub fn render(netlist: &Netlist, pretty: bool) -> Result<String, serde_json::Error> {
    if pretty {
        serde_json::to_string_pretty(netlist)
    } else {
        serde_json::to_string(netlist)
    }
}

/// Builds `main`, flattens it, and writes the JSON netlist to `output`.
///
/// The document is rendered completely, staged next to `output`, and then
/// renamed over it, so any failure leaves `output` as it was. Missing parent
/// directories are created.
pub fn export<F>(main: F, output: &Path, options: &ExportOptions) -> Result<ExportSummary, ExportError>
where
    F: FnOnce(&mut Context, Parent) -> GateResult<GateHandle>,
{
    let ctx = elaborate(main)?;
    let netlist = flatten(
        &ctx,
        &FlattenOptions {
            include_layout: options.include_layout,
        },
    )?;
    let text = render(&netlist, options.pretty)?;

    let io_error = |source| ExportError::Io {
        path: output.to_path_buf(),
        source,
    };
    let dir = match output.parent().filter(|p| !p.as_os_str().is_empty()) {
        Some(parent) => {
            std::fs::create_dir_all(parent).map_err(io_error)?;
            parent
        }
        None => Path::new("."),
    };
    let mut staged = tempfile::NamedTempFile::new_in(dir).map_err(io_error)?;
    staged.write_all(text.as_bytes()).map_err(io_error)?;
    staged.persist(output).map_err(|e| io_error(e.error))?;

    Ok(ExportSummary {
        gates: netlist.all_gates().len(),
        primitives: netlist.primitive_count(),
        connections: netlist.connections.len(),
        nodes: netlist.node_count(),
        bytes: text.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use gatekit_ir::Type;

    fn one_button(ctx: &mut Context, parent: Parent) -> GateResult<GateHandle> {
        let main = ctx.new_circuit(parent, "main", &Type::unit(), &Type::unit())?;
        ctx.button(main.scope())?;
        Ok(main)
    }

    #[test]
    fn writes_compact_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.json");
        let summary = export(one_button, &path, &ExportOptions::default()).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert!(!text.contains('\n'));
        assert_eq!(summary.bytes, text.len());
        assert_eq!(summary.gates, 1);
        assert_eq!(summary.connections, 0);
        assert_eq!(summary.nodes, 1);

        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "connections": [],
                "toplevel_gates": [{"type": "button", "inputs": [], "outputs": [0]}]
            })
        );
    }

    #[test]
    fn pretty_output_is_indented() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pretty.json");
        let options = ExportOptions {
            pretty: true,
            ..Default::default()
        };
        export(one_button, &path, &options).unwrap();
        assert!(std::fs::read_to_string(&path).unwrap().contains("\n  "));
    }

    #[test]
    fn creates_missing_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("build").join("nested").join("design.json");
        export(one_button, &path, &ExportOptions::default()).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn invalid_main_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.json");
        let err = export(
            |ctx, parent| ctx.new_circuit(parent, "main", &Type::Bit, &Type::unit()),
            &path,
            &ExportOptions::default(),
        )
        .unwrap_err();
        assert!(matches!(
            err,
            ExportError::Gate(GateError::InvalidMainSignature { .. })
        ));
        assert!(!path.exists());
    }

    #[test]
    fn failed_export_keeps_previous_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.json");
        std::fs::write(&path, "previous").unwrap();
        export(
            |ctx, parent| ctx.new_circuit(parent, "main", &Type::unit(), &Type::Bit),
            &path,
            &ExportOptions::default(),
        )
        .unwrap_err();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "previous");

        export(one_button, &path, &ExportOptions::default()).unwrap();
        assert!(std::fs::read_to_string(&path).unwrap().starts_with('{'));
    }

    #[test]
    fn failed_write_leaves_no_staging_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.json");
        std::fs::create_dir(&path).unwrap();
        let err = export(one_button, &path, &ExportOptions::default()).unwrap_err();
        assert!(matches!(err, ExportError::Io { .. }));

        let entries: Vec<_> = std::fs::read_dir(dir.path())
            .unwrap()
            .map(|entry| entry.unwrap().file_name())
            .collect();
        assert_eq!(entries, vec![std::ffi::OsString::from("out.json")]);
        assert!(path.is_dir());
    }

    #[test]
    fn io_error_names_the_path() {
        let dir = tempfile::tempdir().unwrap();
        // a directory cannot be overwritten by a file
        let err = export(one_button, dir.path(), &ExportOptions::default()).unwrap_err();
        assert!(matches!(err, ExportError::Io { .. }));
        assert!(err.to_string().contains(&dir.path().display().to_string()));
    }
}
