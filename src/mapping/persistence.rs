//! Saving and loading mapping tables
//!
//! Tables are persisted as JSON next to the files they serve so a later
//! session can resynchronize ids instead of recreating every object.

use std::fmt::Display;
use std::fs;
use std::hash::Hash;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::Result;

use super::directory::IdMappingDirectory;
use super::table::IdMappingTable;

/// Write a table as pretty-printed JSON.
///
/// # Errors
/// Returns an error if serialization or file writing fails.
pub fn save_table<A, B, P>(table: &IdMappingTable<A, B>, path: P) -> Result<()>
where
    A: Serialize + Eq + Hash,
    B: Serialize + Eq + Hash,
    P: AsRef<Path>,
{
    let json = serde_json::to_string_pretty(table)?;
    fs::write(path, json)?;
    Ok(())
}

/// Read a table back from JSON.
///
/// # Errors
/// Returns an error if the file cannot be read or is not a valid table.
pub fn load_table<A, B, P>(path: P) -> Result<IdMappingTable<A, B>>
where
    A: DeserializeOwned + Eq + Hash,
    B: DeserializeOwned + Eq + Hash,
    P: AsRef<Path>,
{
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

/// Write a whole directory of tables as pretty-printed JSON.
///
/// # Errors
/// Returns an error if serialization or file writing fails.
pub fn save_directory<A, B, P>(directory: &IdMappingDirectory<A, B>, path: P) -> Result<()>
where
    A: Serialize + Eq + Hash,
    B: Serialize + Eq + Hash,
    P: AsRef<Path>,
{
    let json = serde_json::to_string_pretty(directory)?;
    fs::write(path, json)?;
    Ok(())
}

/// Read a directory of tables back from JSON.
///
/// # Errors
/// Returns an error if the file cannot be read or is not a valid directory.
pub fn load_directory<A, B, P>(path: P) -> Result<IdMappingDirectory<A, B>>
where
    A: DeserializeOwned + Eq + Hash,
    B: DeserializeOwned + Eq + Hash,
    P: AsRef<Path>,
{
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}
