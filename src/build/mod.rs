//! Loading glossary data files and building indexes from them.

pub mod document;

use std::fs;
use std::path::Path;
use tracing::debug;

use crate::error::{Error, Result};
use crate::index::GlossaryIndex;
use crate::types::{GlossaryEntry, IndexFields};

pub use document::*;

/// Parse glossary JSON text.
pub fn parse_glossary(json: &str) -> Result<Vec<GlossaryEntry>> {
    let value: serde_json::Value = serde_json::from_str(json)?;
    entries_from_value(value)
}

/// Read and parse a glossary file.
pub fn load_glossary(path: &Path) -> Result<Vec<GlossaryEntry>> {
    let json = fs::read_to_string(path).map_err(|source| Error::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;
    let entries = parse_glossary(&json)?;
    debug!(path = %path.display(), entries = entries.len(), "loaded glossary");
    Ok(entries)
}

/// Load a glossary file and index it, tokenizing on the rayon pool when the
/// `parallel` feature is on.
pub fn load_index(path: &Path, fields: IndexFields) -> Result<GlossaryIndex> {
    let entries = load_glossary(path)?;
    Ok(GlossaryIndex::build_parallel(entries, fields))
}
