use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use weft::commands::{files, next, set, status, workflow};
use weft::completions::write_completions;

#[derive(Parser)]
#[command(name = "weft")]
#[command(about = "Sprint and workflow status tracking CLI", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the epic/story tree from a sprint status file
    Status {
        /// Workspace root to search for sprint-status.yaml
        #[arg(short, long, default_value = ".")]
        root: PathBuf,

        /// Use a specific sprint status file instead of searching
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Emit the parsed model as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the sequential workflow status, or update one item
    Workflow {
        #[command(subcommand)]
        command: Option<WorkflowCommands>,

        /// Workspace root to locate bmm-workflow-status.yaml
        #[arg(short, long, default_value = ".", global = true)]
        root: PathBuf,

        /// Only show items in this phase
        #[arg(short, long)]
        phase: Option<i64>,

        /// Emit the items as JSON
        #[arg(long)]
        json: bool,
    },

    /// Update one story's status in place
    Set {
        /// Story or epic key as it appears in the file (e.g. 1-2-build)
        story_id: String,

        /// New status value (e.g. ready-for-dev)
        status: String,

        /// Workspace root to search for sprint-status.yaml
        #[arg(short, long, default_value = ".")]
        root: PathBuf,

        /// Use a specific sprint status file instead of searching
        #[arg(short, long)]
        file: Option<PathBuf>,
    },

    /// Show the suggested workflow action for a story
    Next {
        /// Story key as it appears in the file
        story_id: String,

        /// Workspace root to search for sprint-status.yaml
        #[arg(short, long, default_value = ".")]
        root: PathBuf,

        /// Use a specific sprint status file instead of searching
        #[arg(short, long)]
        file: Option<PathBuf>,
    },

    /// List every sprint status file in the workspace
    Files {
        /// Workspace root to search
        #[arg(short, long, default_value = ".")]
        root: PathBuf,
    },

    /// Generate shell completion script
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Subcommand)]
enum WorkflowCommands {
    /// Update one workflow item's status in place
    Set {
        /// Item id as it appears in the workflow_status sequence
        item_id: String,

        /// New status value
        status: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Status { root, file, json } => status::execute(&root, file, json),
        Commands::Workflow {
            command,
            root,
            phase,
            json,
        } => match command {
            Some(WorkflowCommands::Set { item_id, status }) => {
                workflow::set_status(&root, &item_id, &status)
            }
            None => workflow::show(&root, phase, json),
        },
        Commands::Set {
            story_id,
            status,
            root,
            file,
        } => set::execute(&root, file, &story_id, &status),
        Commands::Next {
            story_id,
            root,
            file,
        } => next::execute(&root, file, &story_id),
        Commands::Files { root } => files::execute(&root),
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            write_completions(&mut cmd, shell, &mut std::io::stdout());
            Ok(())
        }
    }
}
