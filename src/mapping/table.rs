//! Bidirectional, category-partitioned identifier mapping

use std::fmt::Display;
use std::hash::Hash;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// One category's worth of associations.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(bound(
    serialize = "A: Serialize + Eq + Hash, B: Serialize + Eq + Hash",
    deserialize = "A: Deserialize<'de> + Eq + Hash, B: Deserialize<'de> + Eq + Hash"
))]
struct CategoryMap<A, B> {
    forward: IndexMap<A, B>,
    reverse: IndexMap<B, A>,
}

impl<A, B> Default for CategoryMap<A, B> {
    fn default() -> Self {
        CategoryMap {
            forward: IndexMap::new(),
            reverse: IndexMap::new(),
        }
    }
}

/// Bidirectional map between two identifier namespaces, partitioned by a
/// category string (object kind).
///
/// Within one category each first id maps to exactly one second id and vice
/// versa. Re-adding either side overwrites the association and scrubs the
/// stale inverse entries, so a lookup never returns an id whose counterpart
/// has since been remapped. There is no removal beyond overwrite.
///
/// The table records when it was last touched and, optionally, the file it
/// belongs to, so a [`IdMappingDirectory`](super::IdMappingDirectory) can
/// hand back the most recently used table for a file or extension.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(bound(
    serialize = "A: Serialize + Eq + Hash, B: Serialize + Eq + Hash",
    deserialize = "A: Deserialize<'de> + Eq + Hash, B: Deserialize<'de> + Eq + Hash"
))]
pub struct IdMappingTable<A, B> {
    /// Label for the first id namespace (e.g. "Internal").
    first_name: String,
    /// Label for the second id namespace (e.g. "External").
    second_name: String,
    categories: IndexMap<String, CategoryMap<A, B>>,
    last_used: DateTime<Utc>,
    file_path: Option<PathBuf>,
}

impl<A, B> IdMappingTable<A, B>
where
    A: Clone + Eq + Hash + Display,
    B: Clone + Eq + Hash + Display,
{
    /// Creates an empty table with labels for its two namespaces.
    #[must_use]
    pub fn new(first_name: impl Into<String>, second_name: impl Into<String>) -> Self {
        IdMappingTable {
            first_name: first_name.into(),
            second_name: second_name.into(),
            categories: IndexMap::new(),
            last_used: Utc::now(),
            file_path: None,
        }
    }

    /// Attach the originating file path.
    #[must_use]
    pub fn with_file_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.file_path = Some(path.into());
        self
    }

    /// Label of the first id namespace.
    #[must_use]
    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    /// Label of the second id namespace.
    #[must_use]
    pub fn second_name(&self) -> &str {
        &self.second_name
    }

    /// The file this table belongs to, if known.
    #[must_use]
    pub fn file_path(&self) -> Option<&Path> {
        self.file_path.as_deref()
    }

    /// When this table was last created, mutated, or touched.
    #[must_use]
    pub fn last_used(&self) -> DateTime<Utc> {
        self.last_used
    }

    /// Mark the table as just used.
    pub fn touch(&mut self) {
        self.last_used = Utc::now();
    }

    /// Insert or overwrite the association for (`category`, `first`).
    ///
    /// Whatever either id previously pointed at is removed from both
    /// directions before the new pair is stored.
    pub fn add(&mut self, category: &str, first: A, second: B) {
        let cat = self.categories.entry(category.to_string()).or_default();
        if let Some(old_second) = cat.forward.get(&first).cloned() {
            cat.reverse.shift_remove(&old_second);
        }
        if let Some(old_first) = cat.reverse.get(&second).cloned() {
            cat.forward.shift_remove(&old_first);
        }
        cat.forward.insert(first.clone(), second.clone());
        cat.reverse.insert(second, first);
        self.last_used = Utc::now();
    }

    /// Whether a second id is recorded for (`category`, `first`).
    #[must_use]
    pub fn has_second_id(&self, category: &str, first: &A) -> bool {
        self.categories
            .get(category)
            .is_some_and(|c| c.forward.contains_key(first))
    }

    /// Forward lookup: the second id associated with `first`.
    ///
    /// # Errors
    /// Fails with [`Error::MappingNotFound`] when the category or id is
    /// absent. Probe with [`IdMappingTable::has_second_id`] first when
    /// presence is uncertain.
    pub fn get_second_id(&self, category: &str, first: &A) -> Result<&B> {
        self.categories
            .get(category)
            .and_then(|c| c.forward.get(first))
            .ok_or_else(|| Error::MappingNotFound {
                category: category.to_string(),
                id: first.to_string(),
            })
    }

    /// Whether a first id is recorded for (`category`, `second`).
    #[must_use]
    pub fn has_first_id(&self, category: &str, second: &B) -> bool {
        self.categories
            .get(category)
            .is_some_and(|c| c.reverse.contains_key(second))
    }

    /// Reverse lookup: the first id associated with `second`.
    ///
    /// # Errors
    /// Fails with [`Error::MappingNotFound`] when the category or id is
    /// absent. Probe with [`IdMappingTable::has_first_id`] first when
    /// presence is uncertain.
    pub fn get_first_id(&self, category: &str, second: &B) -> Result<&A> {
        self.categories
            .get(category)
            .and_then(|c| c.reverse.get(second))
            .ok_or_else(|| Error::MappingNotFound {
                category: category.to_string(),
                id: second.to_string(),
            })
    }

    /// Category names, in insertion order.
    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.categories.keys().map(String::as_str)
    }

    /// Associations in `category`, in insertion order.
    pub fn pairs(&self, category: &str) -> impl Iterator<Item = (&A, &B)> {
        self.categories
            .get(category)
            .into_iter()
            .flat_map(|c| c.forward.iter())
    }

    /// Number of associations in `category` (zero when absent).
    #[must_use]
    pub fn category_len(&self, category: &str) -> usize {
        self.categories.get(category).map_or(0, |c| c.forward.len())
    }

    /// Whether the table holds no associations at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.categories.values().all(|c| c.forward.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn table() -> IdMappingTable<Uuid, String> {
        IdMappingTable::new("Internal", "External")
    }

    #[test]
    fn test_bidirectional_lookup() {
        let mut map = table();
        let guid = Uuid::new_v4();
        map.add("ELEMENT", guid, "EL7".to_string());

        assert!(map.has_second_id("ELEMENT", &guid));
        assert_eq!(map.get_second_id("ELEMENT", &guid).unwrap(), "EL7");
        assert!(map.has_first_id("ELEMENT", &"EL7".to_string()));
        assert_eq!(*map.get_first_id("ELEMENT", &"EL7".to_string()).unwrap(), guid);
    }

    #[test]
    fn test_missing_keys_fail_fast() {
        let map = table();
        assert!(!map.has_second_id("ELEMENT", &Uuid::new_v4()));
        let err = map.get_second_id("ELEMENT", &Uuid::new_v4()).unwrap_err();
        assert!(matches!(err, Error::MappingNotFound { .. }));
    }

    #[test]
    fn test_overwrite_scrubs_stale_inverse() {
        let mut map = table();
        let guid = Uuid::new_v4();
        map.add("ELEMENT", guid, "EL1".to_string());
        map.add("ELEMENT", guid, "EL2".to_string());

        assert_eq!(map.get_second_id("ELEMENT", &guid).unwrap(), "EL2");
        assert!(!map.has_first_id("ELEMENT", &"EL1".to_string()));
        assert_eq!(*map.get_first_id("ELEMENT", &"EL2".to_string()).unwrap(), guid);
        assert_eq!(map.category_len("ELEMENT"), 1);
    }

    #[test]
    fn test_overwrite_from_the_second_side() {
        let mut map = table();
        let first = Uuid::new_v4();
        let second = Uuid::new_v4();
        map.add("NODE", first, "N1".to_string());
        map.add("NODE", second, "N1".to_string());

        assert_eq!(*map.get_first_id("NODE", &"N1".to_string()).unwrap(), second);
        assert!(!map.has_second_id("NODE", &first));
        assert_eq!(map.category_len("NODE"), 1);
    }

    #[test]
    fn test_category_isolation() {
        let mut map = table();
        let guid = Uuid::new_v4();
        map.add("SECTION", guid, "7".to_string());

        assert!(!map.has_first_id("ELEMENT", &"7".to_string()));
        assert!(!map.has_second_id("ELEMENT", &guid));
        assert!(map.has_second_id("SECTION", &guid));
    }

    #[test]
    fn test_add_refreshes_last_used() {
        let mut map = table();
        let before = map.last_used();
        map.add("NODE", Uuid::new_v4(), "N1".to_string());
        assert!(map.last_used() >= before);
    }
}
