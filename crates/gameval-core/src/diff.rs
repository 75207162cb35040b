//! Table differ.
//!
//! Changes are detected per category by indexing both snapshots by id:
//! an id whose set of names changed is a rename, an id present on one side
//! only is an addition or a removal. A name whose id changed is additionally
//! reported as a removal of the old id and an addition of the new one.

use std::collections::{BTreeMap, BTreeSet, HashSet};

use crate::types::{ChangeSet, Constant, Constants, GamevalTable, Renamed};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DiffOptions {
    /// Skip name-moved records already reported by the id pass.
    pub dedupe_name_moves: bool,
}

/// Compare two table snapshots.
pub fn compare(old: &GamevalTable, new: &GamevalTable, options: DiffOptions) -> ChangeSet {
    let empty = Constants::new();
    let categories: BTreeSet<&String> = old.keys().chain(new.keys()).collect();

    let mut changes = ChangeSet::default();
    for category in categories {
        let old_constants = old.get(category).unwrap_or(&empty);
        let new_constants = new.get(category).unwrap_or(&empty);
        let diff = compare_category(old_constants, new_constants, options);

        if !diff.renamed.is_empty() {
            changes.renamed.insert(category.clone(), diff.renamed);
        }
        if !diff.added.is_empty() {
            changes.added.insert(category.clone(), diff.added);
        }
        if !diff.removed.is_empty() {
            changes.removed.insert(category.clone(), diff.removed);
        }
    }
    changes
}

#[derive(Default)]
struct CategoryDiff {
    renamed: Vec<Renamed>,
    added: Vec<Constant>,
    removed: Vec<Constant>,
}

fn index_by_id(constants: &Constants) -> BTreeMap<i64, BTreeSet<&str>> {
    let mut index: BTreeMap<i64, BTreeSet<&str>> = BTreeMap::new();
    for (name, id) in constants {
        index.entry(*id).or_default().insert(name.as_str());
    }
    index
}

fn compare_category(old: &Constants, new: &Constants, options: DiffOptions) -> CategoryDiff {
    let old_index = index_by_id(old);
    let new_index = index_by_id(new);
    let mut diff = CategoryDiff::default();
    let mut processed: HashSet<i64> = HashSet::new();

    for (id, old_names) in &old_index {
        let Some(new_names) = new_index.get(id) else {
            continue;
        };
        if old_names == new_names {
            continue;
        }
        processed.insert(*id);
        for old_name in old_names.difference(new_names) {
            for new_name in new_names.difference(old_names) {
                diff.renamed.push(Renamed::new(*old_name, *new_name, *id));
            }
        }
    }

    for (id, names) in &old_index {
        if new_index.contains_key(id) || processed.contains(id) {
            continue;
        }
        diff.removed
            .extend(names.iter().map(|name| Constant::new(*name, *id)));
    }

    for (id, names) in &new_index {
        if old_index.contains_key(id) {
            continue;
        }
        diff.added
            .extend(names.iter().map(|name| Constant::new(*name, *id)));
    }

    for (name, old_id) in old {
        let Some(new_id) = new.get(name) else {
            continue;
        };
        if old_id == new_id {
            continue;
        }
        let removed = Constant::new(name.as_str(), *old_id);
        let added = Constant::new(name.as_str(), *new_id);
        if !(options.dedupe_name_moves && diff.removed.contains(&removed)) {
            diff.removed.push(removed);
        }
        if !(options.dedupe_name_moves && diff.added.contains(&added)) {
            diff.added.push(added);
        }
    }

    diff
}
