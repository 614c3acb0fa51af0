//! Model <-> STX exchange
//!
//! Import and export run through a [`SyncSession`]: the session's
//! conversion library renders and parses every field, and its id mapping
//! table keeps external record numbers stable across repeated passes over
//! the same file. Re-exporting an unchanged model reproduces the same
//! numbering; re-importing a file through the same session resolves records
//! back to the objects they came from instead of creating duplicates.

mod export;
mod import;

pub use export::export_model;
pub use import::import_model;

use uuid::Uuid;

use crate::convert::{ConversionLibrary, StandardConverters};
use crate::mapping::IdMappingTable;

/// Mapping category for material records.
pub const CAT_MATERIAL: &str = "MATERIAL";
/// Mapping category for section records.
pub const CAT_SECTION: &str = "SECTION";
/// Mapping category for node records.
pub const CAT_NODE: &str = "NODE";
/// Mapping category for element records.
pub const CAT_ELEMENT: &str = "ELEMENT";

/// State for one import/export conversation with an external file.
pub struct SyncSession {
    library: ConversionLibrary,
    mappings: IdMappingTable<Uuid, i64>,
}

impl SyncSession {
    /// Creates a session with the standard converters and an empty mapping
    /// table.
    #[must_use]
    pub fn new() -> Self {
        let mut library = ConversionLibrary::new();
        library.load_provider(&StandardConverters);
        SyncSession {
            library,
            mappings: IdMappingTable::new("Internal", "External"),
        }
    }

    /// Resume a session from a previously persisted mapping table.
    #[must_use]
    pub fn with_mappings(mappings: IdMappingTable<Uuid, i64>) -> Self {
        let mut session = SyncSession::new();
        session.mappings = mappings;
        session
    }

    /// The session's conversion library.
    #[must_use]
    pub fn library(&self) -> &ConversionLibrary {
        &self.library
    }

    /// Mutable access, for registering application converters.
    pub fn library_mut(&mut self) -> &mut ConversionLibrary {
        &mut self.library
    }

    /// The session's id associations.
    #[must_use]
    pub fn mappings(&self) -> &IdMappingTable<Uuid, i64> {
        &self.mappings
    }

    /// Take the mapping table, e.g. for persisting next to the file.
    #[must_use]
    pub fn into_mappings(self) -> IdMappingTable<Uuid, i64> {
        self.mappings
    }

    /// Lowest unused external id in `category`.
    fn next_external_id(&self, category: &str) -> i64 {
        self.mappings
            .pairs(category)
            .map(|(_, external)| *external)
            .max()
            .unwrap_or(0)
            + 1
    }
}

impl Default for SyncSession {
    fn default() -> Self {
        SyncSession::new()
    }
}
