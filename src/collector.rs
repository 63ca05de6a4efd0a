//! Serialization of scraped attractions into the dump format.
//!
//! The scraper itself is an external data source; this module owns the text
//! layout it persists, which is the format the record parser reads back.

use crate::constants::{
    ADDRESS_LABEL, COMMENT_MARKER, HEADER_WORD, MISSING_VALUE, NAME_LABEL, POPULARITY_LABEL,
    RATING_LABEL, SEPARATOR_WIDTH,
};
use crate::error::Result;
use crate::models::RawAttraction;
use std::path::Path;
use tracing::info;

/// Render attractions in dump layout, numbering them from 1
pub fn render_document(attractions: &[RawAttraction]) -> String {
    let mut out = String::new();
    let separator = "-".repeat(SEPARATOR_WIDTH);

    for (idx, item) in attractions.iter().enumerate() {
        out.push_str(&format!("{} {}:\n", HEADER_WORD, idx + 1));
        out.push_str(&field_line(NAME_LABEL, &item.name));
        out.push_str(&field_line(POPULARITY_LABEL, &item.popularity));
        out.push_str(&field_line(RATING_LABEL, &item.rating));
        out.push_str(&field_line(ADDRESS_LABEL, &item.address));
        out.push_str(&format!("  {}:\n", COMMENT_MARKER));
        for (comment_idx, comment) in item.comments.iter().enumerate() {
            out.push_str(&format!("    {}. {}\n", comment_idx + 1, comment));
        }
        out.push_str(&format!("\n{}\n", separator));
    }

    out
}

/// Write attractions to `path`, creating parent directories as needed
pub fn write_document(path: &Path, attractions: &[RawAttraction]) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, render_document(attractions))?;
    info!("Saved {} attractions to {}", attractions.len(), path.display());
    Ok(())
}

/// `  <label>: <value>` with `None` standing in for a missing value
fn field_line(label: &str, value: &Option<String>) -> String {
    format!("  {}: {}\n", label, value.as_deref().unwrap_or(MISSING_VALUE))
}
