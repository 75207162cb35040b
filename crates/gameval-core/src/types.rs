use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// ---------------------------------------------------------------------------
// Gameval table
// ---------------------------------------------------------------------------

/// Constant name → id for one category, in file order.
pub type Constants = IndexMap<String, i64>;

/// Category → constants, in file order.
pub type GamevalTable = IndexMap<String, Constants>;

// ---------------------------------------------------------------------------
// Change set
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Renamed {
    pub old_name: String,
    pub new_name: String,
    pub id: i64,
}

/// A single added or removed constant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Constant {
    pub name: String,
    pub id: i64,
}

impl Constant {
    pub fn new(name: impl Into<String>, id: i64) -> Self {
        Self {
            name: name.into(),
            id,
        }
    }
}

impl Renamed {
    pub fn new(old_name: impl Into<String>, new_name: impl Into<String>, id: i64) -> Self {
        Self {
            old_name: old_name.into(),
            new_name: new_name.into(),
            id,
        }
    }
}

/// Differences between two table snapshots, keyed by category.
///
/// Categories without records are never present in any partition.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeSet {
    pub renamed: BTreeMap<String, Vec<Renamed>>,
    pub added: BTreeMap<String, Vec<Constant>>,
    pub removed: BTreeMap<String, Vec<Constant>>,
}

impl ChangeSet {
    pub fn is_empty(&self) -> bool {
        self.renamed.values().all(Vec::is_empty)
            && self.added.values().all(Vec::is_empty)
            && self.removed.values().all(Vec::is_empty)
    }

    /// Every category with at least one record, sorted.
    pub fn categories(&self) -> Vec<&str> {
        let mut categories: Vec<&str> = self
            .renamed
            .keys()
            .chain(self.added.keys())
            .chain(self.removed.keys())
            .map(String::as_str)
            .collect();
        categories.sort_unstable();
        categories.dedup();
        categories
    }

    pub fn renamed_in(&self, category: &str) -> &[Renamed] {
        self.renamed.get(category).map_or(&[], Vec::as_slice)
    }

    pub fn added_in(&self, category: &str) -> &[Constant] {
        self.added.get(category).map_or(&[], Vec::as_slice)
    }

    pub fn removed_in(&self, category: &str) -> &[Constant] {
        self.removed.get(category).map_or(&[], Vec::as_slice)
    }

    /// Total number of records for a category across all partitions.
    pub fn count_in(&self, category: &str) -> usize {
        self.renamed_in(category).len()
            + self.added_in(category).len()
            + self.removed_in(category).len()
    }
}

// ---------------------------------------------------------------------------
// Affected files
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeKind {
    Removed,
    Renamed,
}

impl ChangeKind {
    pub fn marker(self) -> char {
        match self {
            ChangeKind::Removed => '-',
            ChangeKind::Renamed => '!',
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ChangeKind::Removed => "Removed",
            ChangeKind::Renamed => "Renamed",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameMatch {
    /// 1-based, ascending.
    pub line_numbers: Vec<usize>,
    pub change_kind: ChangeKind,
}

/// Flagged name → where it occurs in one document.
pub type FileMatches = BTreeMap<String, NameMatch>;

/// Document name → flagged names found in it.
pub type AffectedFiles = BTreeMap<String, FileMatches>;
