use std::io::Write;

use specimen_core::{STATUS_LINE, TestObject};

/// Handle `specimen run` (and the bare `specimen` invocation).
///
/// Returns the fixture so the caller's frame keeps it alive for a debugger.
/// A failed status-line write is logged, never returned: this path always
/// exits 0.
pub fn handle(out: &mut impl Write) -> TestObject {
    let fixture = TestObject::new();
    tracing::debug!(
        id = fixture.id(),
        comments = fixture.comments().len(),
        scores = fixture.scores().len(),
        "fixture constructed"
    );

    if let Err(error) = writeln!(out, "{STATUS_LINE}").and_then(|()| out.flush()) {
        tracing::warn!(%error, "failed to write status line");
    }
    fixture
}
