//! Reference scanner.
//!
//! Looks for literal `"NAME"` occurrences of removed or renamed gamevals in
//! the project's other JSON documents. Matching is a plain substring check on
//! each line, not a JSON parse.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::{GamevalError, Result};
use crate::types::{AffectedFiles, ChangeKind, ChangeSet, FileMatches, NameMatch};

/// Names worth scanning for: removed names and the old side of renames.
///
/// A name that is both removed and renamed is tracked as renamed.
pub fn tracked_names(changes: &ChangeSet) -> BTreeMap<String, ChangeKind> {
    let mut names = BTreeMap::new();
    for constant in changes.removed.values().flatten() {
        names.insert(constant.name.clone(), ChangeKind::Removed);
    }
    for renamed in changes.renamed.values().flatten() {
        names.insert(renamed.old_name.clone(), ChangeKind::Renamed);
    }
    names
}

/// Scan one document's text for tracked names.
pub fn scan_text(text: &str, names: &BTreeMap<String, ChangeKind>) -> FileMatches {
    let lines: Vec<&str> = text.lines().collect();
    let mut matches = FileMatches::new();

    for (name, kind) in names {
        let needle = format!("\"{name}\"");
        let line_numbers: Vec<usize> = lines
            .iter()
            .enumerate()
            .filter(|(_, line)| line.contains(&needle))
            .map(|(i, _)| i + 1)
            .collect();

        if !line_numbers.is_empty() {
            matches.insert(
                name.clone(),
                NameMatch {
                    line_numbers,
                    change_kind: *kind,
                },
            );
        }
    }

    matches
}

/// Scan every `*.json` under `root` except files named `table_file_name`.
///
/// Documents are keyed by their `/`-separated path relative to `root`.
/// Unreadable documents are skipped with a warning.
pub fn scan_project(
    root: &Path,
    table_file_name: &str,
    changes: &ChangeSet,
) -> Result<AffectedFiles> {
    let names = tracked_names(changes);
    let mut affected = AffectedFiles::new();
    if names.is_empty() {
        return Ok(affected);
    }

    for path in find_json_files(root, table_file_name)? {
        let doc = display_name(root, &path);
        let text = match fs::read_to_string(&path) {
            Ok(text) => text,
            Err(e) => {
                warn!("Could not check {doc}: {e}");
                continue;
            }
        };

        let matches = scan_text(&text, &names);
        if !matches.is_empty() {
            debug!(file = %doc, names = matches.len(), "references found");
            affected.insert(doc, matches);
        }
    }

    Ok(affected)
}

fn find_json_files(root: &Path, table_file_name: &str) -> Result<Vec<PathBuf>> {
    let escaped_root = glob::Pattern::escape(&root.to_string_lossy().replace('\\', "/"));
    let pattern_str = format!("{}/**/*.json", escaped_root.trim_end_matches('/'));
    let entries = glob::glob(&pattern_str).map_err(|e| GamevalError::Config {
        message: format!("Invalid scan root {}: {e}", root.display()),
    })?;

    let mut paths = Vec::new();
    for entry in entries {
        match entry {
            Ok(path) => {
                if path.file_name().is_some_and(|n| n == table_file_name) || !path.is_file() {
                    continue;
                }
                paths.push(path);
            }
            Err(e) => warn!("Could not check {}: {}", e.path().display(), e.error()),
        }
    }
    paths.sort();
    Ok(paths)
}

fn display_name(root: &Path, path: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .to_string_lossy()
        .replace('\\', "/")
}
