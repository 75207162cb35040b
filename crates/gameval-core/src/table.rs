//! Reading and writing the gameval table file.
//!
//! The file is a JSON object of objects, optionally preceded by a single
//! `//` comment line which is not part of the JSON.

use std::fs;
use std::path::Path;

use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use crate::catalogs::TABLE_HEADER;
use crate::error::{GamevalError, Result};
use crate::types::GamevalTable;

/// Parse table text, dropping a leading `//` line.
pub fn parse_table(content: &str) -> Result<GamevalTable> {
    let json = if content.starts_with("//") {
        content.split_once('\n').map_or("", |(_, rest)| rest)
    } else {
        content
    };
    Ok(serde_json::from_str(json)?)
}

/// Read and parse a table file. A missing file is `MissingTable`.
pub fn load_table(path: &Path) -> Result<GamevalTable> {
    if !path.exists() {
        return Err(GamevalError::MissingTable {
            path: path.to_path_buf(),
        });
    }
    let content = fs::read_to_string(path).map_err(|e| GamevalError::io(path, e))?;
    parse_table(&content)
}

/// Header line plus 4-space-indented JSON, without a trailing newline.
pub fn render_table(table: &GamevalTable) -> Result<String> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    table.serialize(&mut ser)?;
    let json = String::from_utf8_lossy(&buf);
    Ok(format!("{TABLE_HEADER}\n{json}"))
}

/// Render and write a table, creating parent directories.
pub fn write_table(path: &Path, table: &GamevalTable) -> Result<()> {
    let content = render_table(table)?;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| GamevalError::io(parent, e))?;
    }
    fs::write(path, content).map_err(|e| GamevalError::io(path, e))
}
