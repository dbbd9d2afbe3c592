use std::io::Write;

use specimen_config::SpecimenConfig;
use specimen_core::{TestObject, inspect};

use crate::cli::{GlobalFlags, OutputFormat};
use crate::output;

/// Handle `specimen vars`.
pub fn handle(
    flags: &GlobalFlags,
    config: &SpecimenConfig,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let vars = inspect::variables(&TestObject::new(), config.inspect.options())?;

    let rendered = match flags.format {
        OutputFormat::Table => output::render_variables_table(&vars),
        format => output::render(&vars, format)?,
    };
    output::emit(out, &rendered)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(format: OutputFormat) -> String {
        let flags = GlobalFlags {
            format,
            max_depth: None,
            quiet: false,
            verbose: false,
        };
        let mut out = Vec::new();
        handle(&flags, &SpecimenConfig::default(), &mut out).expect("vars");
        String::from_utf8(out).expect("utf-8 output")
    }

    #[test]
    fn json_lists_every_leaf() {
        let parsed: serde_json::Value =
            serde_json::from_str(&render(OutputFormat::Json)).expect("valid json");
        let vars = parsed.as_array().expect("array of variables");
        assert_eq!(vars.len(), 27);
        assert!(vars.iter().any(|v| v["path"] == "address.zipCode" && v["kind"] == "string"));
    }

    #[test]
    fn table_has_header_and_rows() {
        let text = render(OutputFormat::Table);
        let mut lines = text.lines();
        assert!(lines.next().is_some_and(|line| line.starts_with("path")));
        assert!(text.contains("creator.roles[1]"));
        assert_eq!(text.lines().count(), 27 + 2);
    }
}
