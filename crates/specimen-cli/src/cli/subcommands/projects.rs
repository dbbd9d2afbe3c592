use clap::{Subcommand, ValueEnum};
use specimen_core::SortKey;

/// Project registry commands.
#[derive(Clone, Debug, Subcommand)]
pub enum ProjectCommands {
    /// Remember a project directory.
    Add {
        path: String,
        /// Display name; defaults to the directory name.
        #[arg(long, default_value = "")]
        alias: String,
    },
    /// Forget a project.
    Rm { id: String },
    /// Change a project's display name. An empty alias restores the directory name.
    Rename { id: String, alias: String },
    /// Show one project.
    Get { id: String },
    /// Mark a project as just opened.
    Touch { id: String },
    /// List projects a page at a time.
    List {
        /// Case-insensitive match on name or path.
        #[arg(long)]
        search: Option<String>,
        #[arg(long, value_enum, default_value = "name")]
        sort: ProjectSort,
        /// Reverse the order.
        #[arg(long)]
        desc: bool,
        /// 1-based page number.
        #[arg(long, default_value_t = 1)]
        page: usize,
    },
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum ProjectSort {
    Name,
    Accessed,
}

impl From<ProjectSort> for SortKey {
    fn from(sort: ProjectSort) -> Self {
        match sort {
            ProjectSort::Name => Self::Name,
            ProjectSort::Accessed => Self::LastAccess,
        }
    }
}
