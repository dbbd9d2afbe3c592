use std::io::Write;

use anyhow::Context;
use specimen_config::SpecimenConfig;
use specimen_core::{TestObject, inspect};

use crate::cli::root_commands::JsonArgs;
use crate::cli::{GlobalFlags, OutputFormat};
use crate::output;

/// Handle `specimen json`.
pub fn handle(
    args: &JsonArgs,
    flags: &GlobalFlags,
    config: &SpecimenConfig,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let fixture = TestObject::new();
    let options = config.inspect.options();

    let value = match args.field.as_deref() {
        Some(field) => inspect::field_value(&fixture, field, options.max_depth)
            .with_context(|| format!("cannot copy field '{field}'"))?,
        None => inspect::to_json_value(&fixture, options.max_depth)?,
    };

    let rendered = match flags.format {
        OutputFormat::Table => {
            output::render_variables_table(&inspect::variables(&value, options)?)
        }
        OutputFormat::Json | OutputFormat::Raw => inspect::render_value(&value, options.pretty)?,
    };

    tracing::debug!(field = ?args.field, bytes = rendered.len(), "copied fixture as json");
    output::emit(out, &rendered)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flags(format: OutputFormat) -> GlobalFlags {
        GlobalFlags {
            format,
            max_depth: None,
            quiet: false,
            verbose: false,
        }
    }

    fn run(field: Option<&str>, format: OutputFormat, config: &SpecimenConfig) -> anyhow::Result<String> {
        let args = JsonArgs {
            field: field.map(str::to_string),
        };
        let mut out = Vec::new();
        handle(&args, &flags(format), config, &mut out)?;
        Ok(String::from_utf8(out)?)
    }

    #[test]
    fn whole_fixture_is_pretty_json() {
        let text = run(None, OutputFormat::Json, &SpecimenConfig::default()).expect("json");
        let parsed: serde_json::Value = serde_json::from_str(&text).expect("valid json");
        assert_eq!(parsed["id"], 1001);
        assert_eq!(parsed["creator"]["email"], "admin@example.com");
        assert!(text.lines().count() > 1);
    }

    #[test]
    fn compact_config_prints_one_line() {
        let mut config = SpecimenConfig::default();
        config.inspect.pretty = false;
        let text = run(Some("address"), OutputFormat::Raw, &config).expect("json");
        assert_eq!(
            text,
            "{\"city\":\"北京\",\"street\":\"朝阳区\",\"zipCode\":\"100000\"}\n"
        );
    }

    #[test]
    fn scalar_field_is_copied_as_literal() {
        let text = run(Some("price"), OutputFormat::Json, &SpecimenConfig::default()).expect("json");
        assert_eq!(text, "99.99\n");
    }

    #[test]
    fn depth_limit_comes_from_config() {
        let mut config = SpecimenConfig::default();
        config.inspect.max_depth = 1;
        let text = run(Some("creator"), OutputFormat::Json, &config).expect("json");
        let parsed: serde_json::Value = serde_json::from_str(&text).expect("valid json");
        assert_eq!(parsed["username"], specimen_core::DEPTH_MARKER);
    }

    #[test]
    fn unknown_field_is_an_error() {
        let err = run(Some("missing"), OutputFormat::Json, &SpecimenConfig::default())
            .expect_err("unknown field");
        assert!(format!("{err:#}").contains("missing"));
    }

    #[test]
    fn table_format_lists_variables() {
        let text = run(Some("scores"), OutputFormat::Table, &SpecimenConfig::default()).expect("table");
        assert!(text.contains("数学"));
        assert!(text.contains("95"));
    }
}
