//! Rendering anagram pairs.

use crate::anagram::pairs::AnagramPair;
use crate::error::ListError;
use crate::format::{join_lines, OutputFormat};
use comfy_table::presets::UTF8_BORDERS_ONLY;
use comfy_table::Table;

/// Render `pairs` in the requested format. Pairs are neither sorted nor deduplicated.
pub fn report<'a, I>(pairs: I, format: OutputFormat) -> Result<String, ListError>
where
    I: IntoIterator<Item = AnagramPair<'a>>,
{
    match format {
        OutputFormat::Text => Ok(join_lines(pairs.into_iter().map(|p| p.to_string()))),
        OutputFormat::Json => {
            let pairs: Vec<AnagramPair<'a>> = pairs.into_iter().collect();
            Ok(format!("{}\n", serde_json::to_string_pretty(&pairs)?))
        }
        OutputFormat::Table => {
            let mut table = Table::new();
            table.load_preset(UTF8_BORDERS_ONLY);
            table.set_header(vec!["First", "Second"]);
            for pair in pairs {
                table.add_row(vec![pair.first, pair.second]);
            }
            Ok(format!("{}\n", table))
        }
    }
}
