//! JSON renderer.

use anyhow::{Context, Result};

use crate::models::LookupReport;

/// Renders the report as a single-line JSON document, no pretty-printing.
///
/// Field names mirror [`crate::models`] verbatim. Encoding failures are
/// surfaced to the caller rather than silently producing no output; with
/// these types serialization cannot fail in practice, so an error here means
/// a genuine bug.
pub fn render_json(report: &LookupReport) -> Result<String> {
    serde_json::to_string(report).context("Failed to encode lookup report as JSON")
}
