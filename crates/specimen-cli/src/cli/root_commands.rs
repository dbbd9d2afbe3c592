use clap::{Args, Subcommand};

use crate::cli::subcommands::ProjectCommands;

/// Top-level command tree. Running without a subcommand behaves like `run`.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Build the fixture and print the status line.
    Run,
    /// Print the fixture as copy-as-JSON text.
    Json(JsonArgs),
    /// Print every leaf of the fixture as a path/value variable.
    Vars,
    /// Print the JSON Schema of the fixture.
    Schema,
    /// Manage remembered project directories.
    Projects {
        #[command(subcommand)]
        action: ProjectCommands,
    },
}

#[derive(Clone, Debug, Args)]
pub struct JsonArgs {
    /// Copy a single top-level field (serialized name, e.g. `address`, `scores`)
    #[arg(long)]
    pub field: Option<String>,
}
