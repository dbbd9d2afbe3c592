use std::io::Write;

use schemars::schema_for;
use specimen_core::TestObject;

use crate::cli::{GlobalFlags, OutputFormat};
use crate::output;

/// Handle `specimen schema`.
pub fn handle(flags: &GlobalFlags, out: &mut impl Write) -> anyhow::Result<()> {
    let schema = schema_for!(TestObject);
    let format = match flags.format {
        OutputFormat::Raw => OutputFormat::Raw,
        OutputFormat::Json | OutputFormat::Table => OutputFormat::Json,
    };
    output::emit(out, &output::render(&schema, format)?)
}
