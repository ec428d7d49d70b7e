//! `weft status` - the epic/story dashboard.

use anyhow::{bail, Result};
use colored::{ColoredString, Colorize};
use std::path::{Path, PathBuf};

use crate::actions::workflow_action;
use crate::commands::common::resolve_sprint_file;
use crate::models::{Epic, StoryStatus};
use crate::parser::parse_sprint_status;

/// Render the sprint status tree, or its JSON model with `--json`.
pub fn execute(root: &Path, file: Option<PathBuf>, json: bool) -> Result<()> {
    let path = resolve_sprint_file(root, file)?;
    let Some(data) = parse_sprint_status(&path)? else {
        bail!("Sprint status file not found: {}", path.display());
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&data)?);
        return Ok(());
    }

    let title = if data.project_key.is_empty() {
        data.project.clone()
    } else {
        format!("{} ({})", data.project, data.project_key)
    };
    println!("{}", format!("Sprint Status: {title}").bold().blue());
    println!("{}", "=".repeat(50));

    if data.epics.is_empty() {
        println!("\nNo epics found in {}", path.display());
        return Ok(());
    }

    for epic in &data.epics {
        print_epic(epic);
    }

    println!();
    Ok(())
}

fn print_epic(epic: &Epic) {
    println!(
        "\n{} {} {} ({}/{} stories done)",
        status_glyph(&epic.status),
        epic.name.bold(),
        format!("[{}]", epic.status).dimmed(),
        epic.done_count(),
        epic.stories.len()
    );

    for story in &epic.stories {
        let mut line = format!(
            "  {} {} {}",
            status_glyph(&story.status),
            story.id,
            format!("[{}]", story.status).dimmed()
        );
        if let Some(action) = workflow_action(&story.status) {
            line.push_str(&format!("  {}", format!("next: {}", action.label).cyan()));
        }
        println!("{line}");
    }
}

/// One glyph per status, colored the way the tree view colors its icons.
fn status_glyph(status: &StoryStatus) -> ColoredString {
    match status {
        StoryStatus::Done | StoryStatus::Completed => "✓".green(),
        StoryStatus::InProgress => "↻".blue(),
        StoryStatus::Review => "◆".yellow(),
        StoryStatus::ReadyForDev => "▶".cyan(),
        StoryStatus::Backlog => "○".normal(),
        StoryStatus::Drafted => "✎".white(),
        StoryStatus::Other(_) => "?".dimmed(),
    }
}
