use crate::types::{Constants, GamevalTable};

/// Update `existing` with `fresh` while keeping the existing key order.
///
/// For every category of `fresh`: keys already present in `existing` come
/// first in their existing order, then keys new to the category in fresh
/// order. Values always come from `fresh`. Categories missing from `fresh`
/// are dropped.
pub fn preserve_order_update(existing: &GamevalTable, fresh: &GamevalTable) -> GamevalTable {
    fresh
        .iter()
        .map(|(category, new_constants)| {
            let merged = match existing.get(category) {
                Some(old_constants) => merge_category(old_constants, new_constants),
                None => new_constants.clone(),
            };
            (category.clone(), merged)
        })
        .collect()
}

fn merge_category(old: &Constants, new: &Constants) -> Constants {
    let mut merged: Constants = old
        .keys()
        .filter_map(|name| new.get(name).map(|id| (name.clone(), *id)))
        .collect();
    for (name, id) in new {
        if !merged.contains_key(name) {
            merged.insert(name.clone(), *id);
        }
    }
    merged
}
