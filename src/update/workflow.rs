//! Format-preserving status updates for `bmm-workflow-status.yaml` files.

use anyhow::{Context, Result};
use regex::{Captures, Regex};
use std::fs;
use std::path::Path;

/// Replace the status value of one workflow item, leaving every other byte
/// of the file unchanged.
///
/// Workflow items interleave several fields per entry, so the pattern
/// anchors on the item's `- id:` declaration (quoted or unquoted) and scans
/// forward non-greedily to the nearest following `status:` field. The new
/// value is written quoted. Returns `Ok(false)` without writing when the
/// file does not exist or no item matches.
pub fn update_item_status(path: &Path, item_id: &str, new_status: &str) -> Result<bool> {
    if !path.exists() {
        return Ok(false);
    }

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read workflow status file: {}", path.display()))?;

    let pattern = format!(
        r#"(?s)(- id: ["']?{}["']?.*?status:\s*)["']?[^\s"']+["']?"#,
        regex::escape(item_id)
    );
    let re = Regex::new(&pattern)?;

    if !re.is_match(&content) {
        return Ok(false);
    }

    let updated = re.replace(&content, |caps: &Captures| {
        format!("{}\"{}\"", &caps[1], new_status)
    });
    fs::write(path, updated.as_bytes())
        .with_context(|| format!("Failed to write workflow status file: {}", path.display()))?;

    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const DOC: &str = r#"# generated by bmm
last_updated: 2026-08-20
status: in-progress
workflow_status:
  - id: brief
    phase: 1
    status: "docs/brief.md"
    agent: analyst
    command: product-brief
  - id: "prd"
    phase: 2
    status: required
    agent: pm
    command: prd
"#;

    fn write_doc(dir: &TempDir) -> std::path::PathBuf {
        let path = dir.path().join("bmm-workflow-status.yaml");
        fs::write(&path, DOC).unwrap();
        path
    }

    #[test]
    fn test_update_targets_the_right_item() {
        let dir = TempDir::new().unwrap();
        let path = write_doc(&dir);

        assert!(update_item_status(&path, "prd", "optional").unwrap());

        let after = fs::read_to_string(&path).unwrap();
        // The first item's status and the document-level status are untouched.
        assert!(after.contains("status: in-progress\n"));
        assert!(after.contains(r#"status: "docs/brief.md""#));
        assert!(after.contains(r#"status: "optional""#));
        assert!(!after.contains("status: required"));
    }

    #[test]
    fn test_update_matches_quoted_id_declaration() {
        let dir = TempDir::new().unwrap();
        let path = write_doc(&dir);

        // "prd" is declared as `- id: "prd"` in the document.
        assert!(update_item_status(&path, "prd", "skipped").unwrap());
        let after = fs::read_to_string(&path).unwrap();
        assert!(after.contains(r#"- id: "prd""#));
        assert!(after.contains(r#"status: "skipped""#));
    }

    #[test]
    fn test_intervening_fields_are_untouched() {
        let dir = TempDir::new().unwrap();
        let path = write_doc(&dir);

        assert!(update_item_status(&path, "prd", "done").unwrap());

        let after = fs::read_to_string(&path).unwrap();
        let changed: Vec<(&str, &str)> = DOC
            .lines()
            .zip(after.lines())
            .filter(|(a, b)| a != b)
            .collect();
        assert_eq!(changed.len(), 1);
        assert_eq!(changed[0].0, "    status: required");
        assert_eq!(changed[0].1, "    status: \"done\"");
    }

    #[test]
    fn test_unknown_id_fails_and_leaves_file_untouched() {
        let dir = TempDir::new().unwrap();
        let path = write_doc(&dir);

        assert!(!update_item_status(&path, "ghost", "done").unwrap());
        assert_eq!(fs::read_to_string(&path).unwrap(), DOC);
    }

    #[test]
    fn test_missing_file_fails_without_writing() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bmm-workflow-status.yaml");

        assert!(!update_item_status(&path, "brief", "done").unwrap());
        assert!(!path.exists());
    }
}
