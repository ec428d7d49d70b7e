//! `weft workflow` - sequential workflow status display and updates.

use anyhow::{bail, Result};
use colored::Colorize;
use std::path::Path;

use crate::discovery::{find_workflow_status_file, WORKFLOW_STATUS_FILE};
use crate::models::{WorkflowData, WorkflowItem};
use crate::parser::parse_workflow_status;
use crate::update::update_item_status;

/// Show workflow metadata and items, optionally filtered by phase.
pub fn show(root: &Path, phase: Option<i64>, json: bool) -> Result<()> {
    let path = locate(root)?;
    let Some(data) = parse_workflow_status(&path)? else {
        bail!("Workflow status file not found: {}", path.display());
    };

    let items: Vec<&WorkflowItem> = match phase {
        Some(phase) => data.items_for_phase(phase),
        None => data.items.iter().collect(),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&items)?);
        return Ok(());
    }

    print_metadata(&data);

    if items.is_empty() {
        match phase {
            Some(phase) => println!("\nNo items in phase {phase}"),
            None => println!("\nNo workflow items"),
        }
        return Ok(());
    }

    println!("\n{}", "Items".bold());
    for item in items {
        let phase = item
            .phase
            .map(|p| p.to_string())
            .unwrap_or_else(|| "-".to_string());
        let mut line = format!(
            "  {} {} {} ({}, {})",
            format!("[P{phase}]").cyan(),
            item.id,
            format!("[{}]", item.status).dimmed(),
            item.agent,
            item.command
        );
        if let Some(note) = &item.note {
            line.push_str(&format!("  {}", note.dimmed()));
        }
        println!("{line}");
    }

    println!();
    Ok(())
}

/// Update one item's status in place.
pub fn set_status(root: &Path, item_id: &str, new_status: &str) -> Result<()> {
    let path = locate(root)?;

    if update_item_status(&path, item_id, new_status)? {
        println!(
            "{} Set '{}' to '{}' in {}",
            "✓".green(),
            item_id.cyan(),
            new_status,
            path.display()
        );
        Ok(())
    } else {
        bail!(
            "No item '{item_id}' with a status field found in {}",
            path.display()
        );
    }
}

fn locate(root: &Path) -> Result<std::path::PathBuf> {
    find_workflow_status_file(root).ok_or_else(|| {
        anyhow::anyhow!("No {WORKFLOW_STATUS_FILE} found under {}", root.display())
    })
}

fn print_metadata(data: &WorkflowData) {
    println!("{}", format!("Workflow: {}", data.project).bold().blue());
    println!("{}", "=".repeat(50));
    println!("  Status:       {}", data.status);
    if let Some(note) = &data.status_note {
        println!("  Note:         {note}");
    }
    println!("  Type:         {}", data.project_type);
    println!("  Track:        {}", data.selected_track);
    println!("  Last updated: {}", data.last_updated);
}
