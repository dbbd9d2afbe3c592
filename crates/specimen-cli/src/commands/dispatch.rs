use std::io::Write;

use crate::bootstrap;
use crate::cli::{Commands, GlobalFlags};
use crate::commands;

/// Route a parsed command to its handler. No subcommand means `run`.
///
/// `run` and `schema` never read configuration, so they cannot fail on a bad
/// config file or environment. `run` has no failure path at all.
pub fn dispatch(
    command: Option<Commands>,
    flags: &GlobalFlags,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    match command.unwrap_or(Commands::Run) {
        Commands::Run => {
            let _fixture = commands::run::handle(out);
            Ok(())
        }
        Commands::Schema => commands::schema::handle(flags, out),
        Commands::Json(args) => {
            let config = bootstrap::load_config(flags)?;
            commands::json::handle(&args, flags, &config, out)
        }
        Commands::Vars => {
            let config = bootstrap::load_config(flags)?;
            commands::vars::handle(flags, &config, out)
        }
        Commands::Projects { action } => {
            let config = bootstrap::load_config(flags)?;
            commands::projects::handle(&action, flags, &config, out)
        }
    }
}
