use std::io::Write;

use serde::Serialize;
use specimen_core::inspect::{self, InspectOptions, Variable};

use crate::cli::OutputFormat;

pub mod table;

/// Render a serializable response in the requested format.
pub fn render<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Table => {
            let value = serde_json::to_value(value)?;
            let vars = inspect::variables(&value, InspectOptions {
                max_depth: u32::MAX,
                pretty: false,
            })?;
            Ok(render_variables_table(&vars))
        }
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
    }
}

/// Render the flattened variables view as a path/kind/value table.
#[must_use]
pub fn render_variables_table(vars: &[Variable]) -> String {
    if vars.is_empty() {
        return String::from("(no variables)");
    }

    let rows = vars
        .iter()
        .map(|var| {
            vec![
                var.path.clone(),
                var.kind.as_str().to_string(),
                var.value.clone(),
            ]
        })
        .collect::<Vec<_>>();

    table::render_table(&["path", "kind", "value"], &rows, term_width())
}

/// Write a rendered response followed by a newline.
pub fn emit(out: &mut impl Write, rendered: &str) -> anyhow::Result<()> {
    writeln!(out, "{rendered}")?;
    Ok(())
}

pub(crate) fn term_width() -> Option<usize> {
    std::env::var("COLUMNS")
        .ok()
        .and_then(|value| value.parse::<usize>().ok())
        .filter(|width| *width >= 40)
}
