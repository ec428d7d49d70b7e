//! Helpers shared by the CLI commands.

use anyhow::{bail, Result};
use std::path::{Path, PathBuf};

use crate::discovery::{find_all_sprint_status_files, SPRINT_STATUS_FILE};

/// Resolve the sprint status file to operate on.
///
/// An explicit `--file` wins; otherwise the workspace is scanned and the
/// file must be unambiguous.
pub fn resolve_sprint_file(root: &Path, file: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(file) = file {
        return Ok(file);
    }

    let mut found = find_all_sprint_status_files(root);
    match found.len() {
        0 => bail!(
            "No {SPRINT_STATUS_FILE} found under {}",
            root.display()
        ),
        1 => Ok(found.remove(0)),
        _ => {
            let listing = found
                .iter()
                .map(|p| format!("  {}", p.display()))
                .collect::<Vec<_>>()
                .join("\n");
            bail!(
                "Multiple {SPRINT_STATUS_FILE} files found, pass --file to pick one:\n{listing}"
            );
        }
    }
}
