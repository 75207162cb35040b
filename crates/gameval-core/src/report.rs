//! Markdown change report for CI comments.

use crate::types::{AffectedFiles, ChangeSet, FileMatches};

pub const NO_CHANGES: &str = "No changes detected.";

/// Render the change report.
///
/// Affected files come first, then one collapsible block per category.
/// With nothing to report the output is the single line [`NO_CHANGES`].
pub fn render(changes: &ChangeSet, affected: &AffectedFiles) -> String {
    let mut lines: Vec<String> = Vec::new();

    if !affected.is_empty() {
        render_affected(&mut lines, affected);
    }

    if changes.is_empty() {
        lines.push(NO_CHANGES.into());
    } else {
        lines.push("## Gamevals Changes".into());
        lines.push(String::new());
        for category in changes.categories() {
            render_category(&mut lines, changes, category);
        }
    }

    lines.join("\n")
}

fn render_affected(lines: &mut Vec<String>, affected: &AffectedFiles) {
    let file_list: Vec<&str> = affected.keys().map(String::as_str).collect();
    lines.extend([
        "**⚠️ Potentially breaking:** The following JSON files reference removed or renamed gamevals and may need updates:".into(),
        String::new(),
        format!("> {}", file_list.join(", ")),
        String::new(),
        "---".into(),
        String::new(),
        "### Affected files (details)".into(),
        String::new(),
    ]);

    for (file_name, matches) in affected {
        open_block(lines, &format!("<b>{file_name}</b>"));
        render_file_matches(lines, matches);
        close_block(lines);
    }
}

fn render_file_matches(lines: &mut Vec<String>, matches: &FileMatches) {
    for (name, found) in matches {
        let line_list: Vec<String> = found.line_numbers.iter().map(usize::to_string).collect();
        lines.push(format!(
            "{}{name} - {} (lines: {})",
            found.change_kind.marker(),
            found.change_kind.label(),
            line_list.join(", ")
        ));
    }
}

fn render_category(lines: &mut Vec<String>, changes: &ChangeSet, category: &str) {
    let total = changes.count_in(category);
    if total == 0 {
        return;
    }

    open_block(
        lines,
        &format!("<b>{}</b> ({total} changes)", category.to_uppercase()),
    );
    for r in changes.renamed_in(category) {
        lines.push(format!("! {} → {} (ID: {})", r.old_name, r.new_name, r.id));
    }
    for c in changes.removed_in(category) {
        lines.push(format!("-{} (ID: {})", c.name, c.id));
    }
    for c in changes.added_in(category) {
        lines.push(format!("+{} (ID: {})", c.name, c.id));
    }
    close_block(lines);
}

fn open_block(lines: &mut Vec<String>, summary: &str) {
    lines.push("<details>".into());
    lines.push(format!("<summary>{summary}</summary>"));
    lines.push(String::new());
    lines.push("```diff".into());
}

fn close_block(lines: &mut Vec<String>) {
    lines.push("```".into());
    lines.push(String::new());
    lines.push("</details>".into());
    lines.push(String::new());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ChangeKind, Constant, NameMatch, Renamed};
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_report_is_sentinel_only() {
        assert_eq!(
            render(&ChangeSet::default(), &AffectedFiles::new()),
            "No changes detected."
        );
    }

    #[test]
    fn category_block_orders_renamed_removed_added() {
        let mut changes = ChangeSet::default();
        changes
            .added
            .insert("npcs".into(), vec![Constant::new("NEW", 3)]);
        changes
            .removed
            .insert("npcs".into(), vec![Constant::new("GONE", 2)]);
        changes
            .renamed
            .insert("npcs".into(), vec![Renamed::new("A", "B", 1)]);

        let expected = [
            "## Gamevals Changes",
            "",
            "<details>",
            "<summary><b>NPCS</b> (3 changes)</summary>",
            "",
            "```diff",
            "! A → B (ID: 1)",
            "-GONE (ID: 2)",
            "+NEW (ID: 3)",
            "```",
            "",
            "</details>",
            "",
        ]
        .join("\n");
        assert_eq!(render(&changes, &AffectedFiles::new()), expected);
    }

    #[test]
    fn categories_sorted_by_name() {
        let mut changes = ChangeSet::default();
        changes
            .added
            .insert("spotanims".into(), vec![Constant::new("S", 1)]);
        changes
            .removed
            .insert("anims".into(), vec![Constant::new("A", 1)]);
        let out = render(&changes, &AffectedFiles::new());
        let anims = out.find("<b>ANIMS</b>").unwrap();
        let spotanims = out.find("<b>SPOTANIMS</b>").unwrap();
        assert!(anims < spotanims);
    }

    #[test]
    fn affected_files_block_comes_first() {
        let mut changes = ChangeSet::default();
        changes
            .removed
            .insert("npcs".into(), vec![Constant::new("OLD", 5)]);
        changes
            .renamed
            .insert("npcs".into(), vec![Renamed::new("TREE", "OAK", 7)]);

        let mut matches = FileMatches::new();
        matches.insert(
            "TREE".into(),
            NameMatch {
                line_numbers: vec![4, 9],
                change_kind: ChangeKind::Renamed,
            },
        );
        matches.insert(
            "OLD".into(),
            NameMatch {
                line_numbers: vec![2],
                change_kind: ChangeKind::Removed,
            },
        );
        let mut affected = AffectedFiles::new();
        affected.insert("lights.json".into(), matches);
        affected.insert("areas.json".into(), FileMatches::new());

        let out = render(&changes, &affected);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(
            lines[0],
            "**⚠️ Potentially breaking:** The following JSON files reference removed or renamed gamevals and may need updates:"
        );
        assert_eq!(lines[2], "> areas.json, lights.json");
        assert!(out.contains("<summary><b>lights.json</b></summary>\n\n```diff\n-OLD - Removed (lines: 2)\n!TREE - Renamed (lines: 4, 9)\n```"));
        assert!(out.find("### Affected files").unwrap() < out.find("## Gamevals Changes").unwrap());
    }
}
