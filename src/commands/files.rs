//! `weft files` - list every sprint status file in the workspace.

use anyhow::Result;
use colored::Colorize;
use std::path::Path;

use crate::discovery::{find_all_sprint_status_files, SPRINT_STATUS_FILE};

pub fn execute(root: &Path) -> Result<()> {
    let found = find_all_sprint_status_files(root);

    if found.is_empty() {
        println!("No {SPRINT_STATUS_FILE} found under {}", root.display());
        return Ok(());
    }

    println!(
        "{}",
        format!("{} file(s) found", found.len()).bold()
    );
    for path in found {
        println!("  {}", path.display());
    }

    Ok(())
}
