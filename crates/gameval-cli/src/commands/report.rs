use tracing::warn;

use gameval_core::{
    compare, load_table, parse_table, render, scan_project, DiffOptions, GamevalTable, Result,
};

use crate::git::show_file_at_revision;
use crate::reader::ReportConfig;

/// Diff the table against its previous revision and render the report.
pub fn run_report(config: &ReportConfig) -> Result<String> {
    let old = previous_table(config);
    let new = load_table(&config.table_file())?;

    let changes = compare(
        &old,
        &new,
        DiffOptions {
            dedupe_name_moves: config.dedupe,
        },
    );

    let table_file_name = config
        .table_path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let affected = scan_project(&config.root, &table_file_name, &changes)?;

    Ok(render(&changes, &affected))
}

/// Table at the configured revision; empty when it cannot be retrieved.
fn previous_table(config: &ReportConfig) -> GamevalTable {
    let Some(content) = show_file_at_revision(&config.revision, &config.table_path, &config.root)
    else {
        warn!(
            "Could not fetch old {} from git",
            config.table_path.display()
        );
        return GamevalTable::new();
    };

    parse_table(&content).unwrap_or_else(|e| {
        warn!(
            "Ignoring unparsable {} at {}: {e}",
            config.table_path.display(),
            config.revision
        );
        GamevalTable::new()
    })
}
