//! Parser for `bmm-workflow-status.yaml` files.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use crate::models::WorkflowData;

/// Parse a workflow status file into a [`WorkflowData`] model.
///
/// Returns `Ok(None)` if the file does not exist. Missing metadata fields
/// default to the empty string; the `workflow_status` sequence defaults to
/// empty and keeps its source order.
pub fn parse_workflow_status(path: &Path) -> Result<Option<WorkflowData>> {
    if !path.exists() {
        return Ok(None);
    }

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read workflow status file: {}", path.display()))?;
    let data: WorkflowData = serde_yaml::from_str(&content)
        .with_context(|| format!("Failed to parse workflow status file: {}", path.display()))?;

    Ok(Some(data))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_file(dir: &TempDir, content: &str) -> std::path::PathBuf {
        let path = dir.path().join("bmm-workflow-status.yaml");
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_missing_file_is_none() {
        let dir = TempDir::new().unwrap();
        let result = parse_workflow_status(&dir.path().join("nope.yaml")).unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn test_full_document() {
        let dir = TempDir::new().unwrap();
        let path = write_file(
            &dir,
            r#"last_updated: 2026-08-20
status: in-progress
status_note: waiting on design
project: demo
project_type: software
selected_track: bmm
field_type: greenfield
workflow_path: bmm/workflows
workflow_status:
  - id: brief
    phase: 1
    status: "docs/brief.md"
    agent: analyst
    command: product-brief
  - id: prd
    phase: 2
    status: required
    agent: pm
    command: prd
    note: start here
"#,
        );

        let data = parse_workflow_status(&path).unwrap().unwrap();
        assert_eq!(data.last_updated, "2026-08-20");
        assert_eq!(data.status, "in-progress");
        assert_eq!(data.status_note.as_deref(), Some("waiting on design"));
        assert_eq!(data.project, "demo");
        assert_eq!(data.selected_track, "bmm");
        assert_eq!(data.items.len(), 2);
        assert_eq!(data.items[0].id, "brief");
        assert_eq!(data.items[0].phase, Some(1));
        assert_eq!(data.items[0].status, "docs/brief.md");
        assert_eq!(data.items[1].note.as_deref(), Some("start here"));
    }

    #[test]
    fn test_missing_fields_default() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "project: demo\n");

        let data = parse_workflow_status(&path).unwrap().unwrap();
        assert_eq!(data.project, "demo");
        assert_eq!(data.last_updated, "");
        assert_eq!(data.status, "");
        assert!(data.status_note.is_none());
        assert!(data.items.is_empty());
    }

    #[test]
    fn test_items_with_missing_subfields_pass_through() {
        let dir = TempDir::new().unwrap();
        let path = write_file(
            &dir,
            r#"workflow_status:
  - id: brief
  - status: optional
    agent: pm
"#,
        );

        let data = parse_workflow_status(&path).unwrap().unwrap();
        assert_eq!(data.items.len(), 2);
        assert_eq!(data.items[0].id, "brief");
        assert!(data.items[0].phase.is_none());
        assert_eq!(data.items[0].status, "");
        assert_eq!(data.items[1].id, "");
        assert_eq!(data.items[1].status, "optional");
    }

    #[test]
    fn test_item_order_is_source_order() {
        let dir = TempDir::new().unwrap();
        let path = write_file(
            &dir,
            r#"workflow_status:
  - id: c
    phase: 1
  - id: a
    phase: 1
  - id: b
    phase: 2
"#,
        );

        let data = parse_workflow_status(&path).unwrap().unwrap();
        let ids: Vec<&str> = data.items.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["c", "a", "b"]);

        let phase1: Vec<&str> = data.items_for_phase(1).iter().map(|i| i.id.as_str()).collect();
        assert_eq!(phase1, vec!["c", "a"]);
    }
}
