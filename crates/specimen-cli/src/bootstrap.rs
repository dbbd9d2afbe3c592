use anyhow::Context;
use specimen_config::SpecimenConfig;

use crate::cli::GlobalFlags;

/// Load layered config, then let command-line flags win.
pub fn load_config(flags: &GlobalFlags) -> anyhow::Result<SpecimenConfig> {
    let config = SpecimenConfig::load_with_dotenv().context("failed to load configuration")?;
    apply_flags(config, flags)
}

fn apply_flags(mut config: SpecimenConfig, flags: &GlobalFlags) -> anyhow::Result<SpecimenConfig> {
    if let Some(max_depth) = flags.max_depth {
        config.inspect.max_depth = max_depth;
    }
    if flags.format == crate::cli::OutputFormat::Raw {
        config.inspect.pretty = false;
    }
    config.validate()?;

    tracing::debug!(
        max_depth = config.inspect.max_depth,
        pretty = config.inspect.pretty,
        "configuration resolved"
    );
    Ok(config)
}
