//! Rendering sorted directory entries.

use crate::error::ListError;
use crate::format::{join_lines, OutputFormat};
use crate::listing::types::DirectoryEntry;
use comfy_table::presets::UTF8_BORDERS_ONLY;
use comfy_table::Table;
use tracing::debug;

/// Render files and directories in `entries`; anything else is silently skipped.
pub fn report(entries: &[DirectoryEntry], format: OutputFormat) -> Result<String, ListError> {
    let reportable: Vec<&DirectoryEntry> = entries
        .iter()
        .filter(|e| {
            let keep = e.kind.label().is_some();
            if !keep {
                debug!(path = %e.path.display(), "Skipping entry that is neither file nor directory");
            }
            keep
        })
        .collect();

    match format {
        OutputFormat::Text => Ok(join_lines(reportable.iter().map(|e| e.to_string()))),
        OutputFormat::Json => Ok(format!("{}\n", serde_json::to_string_pretty(&reportable)?)),
        OutputFormat::Table => {
            let mut table = Table::new();
            table.load_preset(UTF8_BORDERS_ONLY);
            table.set_header(vec!["Kind", "Path", "Name", "Size (bytes)"]);
            for entry in reportable {
                table.add_row(vec![
                    entry.kind.label().unwrap_or_default().to_string(),
                    entry.path.display().to_string(),
                    entry.name.clone(),
                    entry.size_bytes.to_string(),
                ]);
            }
            Ok(format!("{}\n", table))
        }
    }
}
