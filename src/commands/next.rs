//! `weft next` - show the workflow action for a story's current status.

use anyhow::{bail, Result};
use colored::Colorize;
use std::path::{Path, PathBuf};

use crate::actions::workflow_action;
use crate::commands::common::resolve_sprint_file;
use crate::models::Story;
use crate::parser::parse_sprint_status;

pub fn execute(root: &Path, file: Option<PathBuf>, story_id: &str) -> Result<()> {
    let path = resolve_sprint_file(root, file)?;
    let Some(data) = parse_sprint_status(&path)? else {
        bail!("Sprint status file not found: {}", path.display());
    };

    let story: &Story = data
        .epics
        .iter()
        .flat_map(|epic| epic.stories.iter())
        .find(|story| story.id == story_id)
        .ok_or_else(|| anyhow::anyhow!("No story '{story_id}' in {}", path.display()))?;

    match workflow_action(&story.status) {
        Some(action) => {
            println!(
                "{} {} ({})",
                "▶".cyan(),
                action.label.bold(),
                story.status
            );
            println!("  {}", action.full_command(story_id));
        }
        None => {
            eprintln!(
                "Warning: No workflow action for status: {}",
                story.status
            );
        }
    }

    Ok(())
}
