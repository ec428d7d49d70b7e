//! Parser for `sprint-status.yaml` files.
//!
//! The document carries a flat `development_status` mapping whose keys
//! encode the epic/story hierarchy by naming convention: `epic-<N>` keys
//! declare epics, `<N>-<slug>` keys declare stories belonging to epic `N`.

use anyhow::{Context, Result};
use regex::Regex;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use crate::models::{Epic, SprintData, Story};

/// Parse a sprint status file into a [`SprintData`] model.
///
/// Returns `Ok(None)` if the file does not exist. Keys that match neither
/// the epic nor the story convention are dropped, as are stories whose
/// numeric prefix has no corresponding epic and any key containing
/// `retrospective`. The silent drop is deliberate: the format tolerates
/// auxiliary entries that are not part of the hierarchy.
pub fn parse_sprint_status(path: &Path) -> Result<Option<SprintData>> {
    if !path.exists() {
        return Ok(None);
    }

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read sprint status file: {}", path.display()))?;
    let doc: serde_yaml::Value = serde_yaml::from_str(&content)
        .with_context(|| format!("Failed to parse sprint status file: {}", path.display()))?;

    let project = doc
        .get("project")
        .and_then(serde_yaml::Value::as_str)
        .unwrap_or("Unknown")
        .to_string();
    let project_key = doc
        .get("project_key")
        .and_then(serde_yaml::Value::as_str)
        .unwrap_or("")
        .to_string();

    let empty = serde_yaml::Mapping::new();
    let dev_status = doc
        .get("development_status")
        .and_then(serde_yaml::Value::as_mapping)
        .unwrap_or(&empty);

    let epic_re = Regex::new(r"^epic-(\d+)$")?;
    let story_re = Regex::new(r"^(\d+)-")?;

    // First pass: collect epics. Keyed by number, so duplicates collapse
    // and iteration comes out in ascending numeric order.
    let mut epics: BTreeMap<u64, Epic> = BTreeMap::new();
    for (key, value) in dev_status {
        let Some(key) = key.as_str() else { continue };
        let Some(status) = scalar_to_string(value) else {
            continue;
        };
        if let Some(caps) = epic_re.captures(key) {
            let Ok(num) = caps[1].parse::<u64>() else {
                continue;
            };
            epics.insert(
                num,
                Epic {
                    id: key.to_string(),
                    name: format!("Epic {num}"),
                    status: status.into(),
                    stories: Vec::new(),
                },
            );
        }
    }

    // Second pass: attach stories to their epics, in source order.
    for (key, value) in dev_status {
        let Some(key) = key.as_str() else { continue };
        if epic_re.is_match(key) || key.contains("retrospective") {
            continue;
        }
        let Some(status) = scalar_to_string(value) else {
            continue;
        };
        if let Some(caps) = story_re.captures(key) {
            let Ok(num) = caps[1].parse::<u64>() else {
                continue;
            };
            if let Some(epic) = epics.get_mut(&num) {
                epic.stories.push(Story {
                    id: key.to_string(),
                    status: status.into(),
                    epic_id: format!("epic-{num}"),
                });
            }
        }
    }

    Ok(Some(SprintData {
        project,
        project_key,
        epics: epics.into_values().collect(),
    }))
}

/// Render a scalar YAML value as a string, or `None` for null and
/// structured values.
fn scalar_to_string(value: &serde_yaml::Value) -> Option<String> {
    match value {
        serde_yaml::Value::String(s) => Some(s.clone()),
        serde_yaml::Value::Number(n) => Some(n.to_string()),
        serde_yaml::Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}
