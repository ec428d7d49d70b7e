//! Locating status files in a workspace.

use std::fs;
use std::path::{Path, PathBuf};

/// Canonical file name for the hierarchical (epics/stories) model.
pub const SPRINT_STATUS_FILE: &str = "sprint-status.yaml";

/// Canonical file name for the sequential (phases/items) model.
pub const WORKFLOW_STATUS_FILE: &str = "bmm-workflow-status.yaml";

/// Directory names that are never descended into.
const SKIP_DIRS: [&str; 2] = ["node_modules", ".git"];

/// Find every `sprint-status.yaml` under `root`, depth first.
///
/// Best-effort scan: unreadable directories are skipped silently rather
/// than failing the whole traversal.
pub fn find_all_sprint_status_files(root: &Path) -> Vec<PathBuf> {
    let mut results = Vec::new();
    search_dir(root, &mut results);
    results
}

fn search_dir(dir: &Path, results: &mut Vec<PathBuf>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };

    for entry in entries.flatten() {
        let Ok(file_type) = entry.file_type() else {
            continue;
        };
        let name = entry.file_name();

        if file_type.is_dir() {
            if !SKIP_DIRS.iter().any(|skip| name == *skip) {
                search_dir(&entry.path(), results);
            }
        } else if file_type.is_file() && name == SPRINT_STATUS_FILE {
            results.push(entry.path());
        }
    }
}

/// Find the workflow status file for a workspace.
///
/// Not recursive: checks `docs/bmm-workflow-status.yaml` then the workspace
/// root, first hit wins.
pub fn find_workflow_status_file(root: &Path) -> Option<PathBuf> {
    let candidates = [
        root.join("docs").join(WORKFLOW_STATUS_FILE),
        root.join(WORKFLOW_STATUS_FILE),
    ];

    candidates.into_iter().find(|candidate| candidate.exists())
}
