//! Directory of mapping tables keyed by originating file
//!
//! Retrieval by recency is a linear scan over the stored tables; a
//! directory is expected to hold tens of entries, not millions.

use std::ffi::OsStr;
use std::fmt::Display;
use std::hash::Hash;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::table::IdMappingTable;

/// Mapping tables for every file a session has touched, keyed by path.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(bound(
    serialize = "A: Serialize + Eq + Hash, B: Serialize + Eq + Hash",
    deserialize = "A: Deserialize<'de> + Eq + Hash, B: Deserialize<'de> + Eq + Hash"
))]
pub struct IdMappingDirectory<A, B> {
    tables: IndexMap<PathBuf, IdMappingTable<A, B>>,
}

impl<A, B> Default for IdMappingDirectory<A, B> {
    fn default() -> Self {
        IdMappingDirectory {
            tables: IndexMap::new(),
        }
    }
}

impl<A, B> IdMappingDirectory<A, B>
where
    A: Clone + Eq + Hash + Display,
    B: Clone + Eq + Hash + Display,
{
    /// Creates an empty directory.
    #[must_use]
    pub fn new() -> Self {
        IdMappingDirectory::default()
    }

    /// Number of tables stored.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tables.len()
    }

    /// Whether no table has been stored yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    /// The table for `path`, created empty (with the given namespace
    /// labels) on first use.
    pub fn get_or_create(
        &mut self,
        path: impl Into<PathBuf>,
        first_name: &str,
        second_name: &str,
    ) -> &mut IdMappingTable<A, B> {
        let path = path.into();
        self.tables
            .entry(path.clone())
            .or_insert_with(|| IdMappingTable::new(first_name, second_name).with_file_path(path))
    }

    /// The table for `path`, if one exists.
    #[must_use]
    pub fn get(&self, path: impl AsRef<Path>) -> Option<&IdMappingTable<A, B>> {
        self.tables.get(path.as_ref())
    }

    /// Store a table under `path`, replacing any previous one.
    pub fn insert(&mut self, path: impl Into<PathBuf>, table: IdMappingTable<A, B>) {
        self.tables.insert(path.into(), table);
    }

    /// All tables, in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&Path, &IdMappingTable<A, B>)> {
        self.tables.iter().map(|(p, t)| (p.as_path(), t))
    }

    /// The most recently used table, if any.
    #[must_use]
    pub fn latest(&self) -> Option<&IdMappingTable<A, B>> {
        self.tables.values().max_by_key(|t| t.last_used())
    }

    /// The most recently used table whose file has the given extension
    /// (compared case-insensitively, without a leading dot).
    #[must_use]
    pub fn latest_for_extension(&self, extension: &str) -> Option<&IdMappingTable<A, B>> {
        self.tables
            .iter()
            .filter(|(path, _)| {
                path.extension()
                    .and_then(OsStr::to_str)
                    .is_some_and(|e| e.eq_ignore_ascii_case(extension))
            })
            .map(|(_, t)| t)
            .max_by_key(|t| t.last_used())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn test_get_or_create_is_idempotent() {
        let mut dir: IdMappingDirectory<Uuid, i64> = IdMappingDirectory::new();
        let guid = Uuid::new_v4();
        dir.get_or_create("model.stx", "Internal", "External")
            .add("NODE", guid, 1);
        let table = dir.get_or_create("model.stx", "Internal", "External");
        assert!(table.has_second_id("NODE", &guid));
        assert_eq!(dir.len(), 1);
    }

    #[test]
    fn test_file_path_is_attached() {
        let mut dir: IdMappingDirectory<Uuid, i64> = IdMappingDirectory::new();
        let table = dir.get_or_create("a/model.stx", "Internal", "External");
        assert_eq!(table.file_path(), Some(Path::new("a/model.stx")));
    }

    #[test]
    fn test_latest_follows_touch() {
        let mut dir: IdMappingDirectory<Uuid, i64> = IdMappingDirectory::new();
        dir.get_or_create("first.stx", "Internal", "External");
        dir.get_or_create("second.stx", "Internal", "External");
        dir.get_or_create("first.stx", "Internal", "External").touch();

        let latest = dir.latest().unwrap();
        assert_eq!(latest.file_path(), Some(Path::new("first.stx")));
    }

    #[test]
    fn test_latest_for_extension() {
        let mut dir: IdMappingDirectory<Uuid, i64> = IdMappingDirectory::new();
        dir.get_or_create("old.stx", "Internal", "External");
        dir.get_or_create("notes.txt", "Internal", "External");
        dir.get_or_create("new.stx", "Internal", "External").touch();

        let latest = dir.latest_for_extension("STX").unwrap();
        assert_eq!(latest.file_path(), Some(Path::new("new.stx")));
        assert!(dir.latest_for_extension("csv").is_none());
    }
}
