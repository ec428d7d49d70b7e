use serde::{Deserialize, Serialize};

/// Parsed contents of a `bmm-workflow-status.yaml` file.
///
/// Document-level metadata fields default to the empty string when absent;
/// items keep their source order.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct WorkflowData {
    #[serde(default)]
    pub last_updated: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub status_note: Option<String>,
    #[serde(default)]
    pub project: String,
    #[serde(default)]
    pub project_type: String,
    #[serde(default)]
    pub selected_track: String,
    #[serde(default)]
    pub field_type: String,
    #[serde(default)]
    pub workflow_path: String,
    #[serde(default, rename = "workflow_status")]
    pub items: Vec<WorkflowItem>,
}

impl WorkflowData {
    /// All items whose phase equals `phase`, in original relative order.
    /// Items with no phase field never match.
    pub fn items_for_phase(&self, phase: i64) -> Vec<&WorkflowItem> {
        self.items
            .iter()
            .filter(|item| item.phase == Some(phase))
            .collect()
    }
}

/// One entry of the `workflow_status` sequence. Missing sub-fields are
/// tolerated; the item still passes through.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct WorkflowItem {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub phase: Option<i64>,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub agent: String,
    #[serde(default)]
    pub command: String,
    #[serde(default)]
    pub note: Option<String>,
}
