//! Format-preserving status updates for `sprint-status.yaml` files.
//!
//! Updates are anchored regex replacements over the raw file text, never a
//! decode/re-encode cycle: re-serializing YAML would reorder keys, strip
//! comments, and change quoting, all of which must survive an edit.

use anyhow::{Context, Result};
use regex::{Captures, Regex};
use std::fs;
use std::path::Path;

/// Replace the status value of one `<story-id>: <status>` line, leaving
/// every other byte of the file unchanged.
///
/// The pattern is line-anchored so a story id occurring as a substring of
/// another key can never match. Returns `Ok(false)` without writing when
/// the file does not exist or no line matches.
pub fn update_story_status(path: &Path, story_id: &str, new_status: &str) -> Result<bool> {
    if !path.exists() {
        return Ok(false);
    }

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read sprint status file: {}", path.display()))?;

    let pattern = format!(r"(?m)^(\s*{}:\s*)\S+", regex::escape(story_id));
    let re = Regex::new(&pattern)?;

    if !re.is_match(&content) {
        return Ok(false);
    }

    let updated = re.replace(&content, |caps: &Captures| {
        format!("{}{}", &caps[1], new_status)
    });
    fs::write(path, updated.as_bytes())
        .with_context(|| format!("Failed to write sprint status file: {}", path.display()))?;

    Ok(true)
}
