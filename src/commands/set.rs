//! `weft set` - update one story's status in place.

use anyhow::{bail, Result};
use colored::Colorize;
use std::path::{Path, PathBuf};

use crate::commands::common::resolve_sprint_file;
use crate::update::update_story_status;

pub fn execute(root: &Path, file: Option<PathBuf>, story_id: &str, new_status: &str) -> Result<()> {
    let path = resolve_sprint_file(root, file)?;

    if update_story_status(&path, story_id, new_status)? {
        println!(
            "{} Set '{}' to '{}' in {}",
            "✓".green(),
            story_id.cyan(),
            new_status,
            path.display()
        );
        Ok(())
    } else {
        bail!("No entry '{story_id}' found in {}", path.display());
    }
}
