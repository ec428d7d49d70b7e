//! Shell completion script generation.

use clap::Command;
use clap_complete::{generate, Shell};
use std::io;

/// Write a completion script for `shell` to `out`.
///
/// `shell` comes straight from the CLI as a `value_enum`, so unsupported
/// shells are rejected during argument parsing.
pub fn write_completions(cmd: &mut Command, shell: Shell, out: &mut dyn io::Write) {
    let bin_name = cmd.get_name().to_string();
    generate(shell, cmd, bin_name, out);
}
