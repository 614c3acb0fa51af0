//! STX -> Model import

use uuid::Uuid;

use crate::error::{Error, Result};
use crate::formats::stx::{StxDocument, StxRecord, KW_BAR, KW_MATL, KW_NODE, KW_SECT};
use crate::model::{Bar, Material, Model, Section, StructuralNode, Value, ValueKind, Vector};

use super::{SyncSession, CAT_ELEMENT, CAT_MATERIAL, CAT_NODE, CAT_SECTION};

/// Build a [`Model`] from an STX document.
///
/// External ids resolve through the session's mapping table: a record seen
/// in an earlier pass gets its original object GUID back, a new record gets
/// a fresh GUID which is recorded for later passes. Unrecognized keywords
/// are skipped.
///
/// # Errors
/// Fails on malformed fields, wrong field counts, or references to records
/// not defined earlier in the file.
pub fn import_model(session: &mut SyncSession, doc: &StxDocument) -> Result<Model> {
    let mut model = Model::new();

    for record in &doc.records {
        match record.keyword.as_str() {
            KW_MATL => {
                expect_fields(record, 4)?;
                let external = parse_int(session, record, 0)?;
                let guid = internal_id(session, CAT_MATERIAL, external);
                model.materials.push(Material {
                    guid,
                    name: record.fields[1].clone(),
                    elastic_modulus: parse_double(session, record, 2)?,
                    density: parse_double(session, record, 3)?,
                });
            }
            KW_SECT => {
                expect_fields(record, 3)?;
                let external = parse_int(session, record, 0)?;
                let guid = internal_id(session, CAT_SECTION, external);
                let material = parse_reference(session, CAT_MATERIAL, record, 2)?;
                model.sections.push(Section {
                    guid,
                    name: record.fields[1].clone(),
                    material,
                });
            }
            KW_NODE => {
                expect_fields(record, 4)?;
                let external = parse_int(session, record, 0)?;
                let guid = internal_id(session, CAT_NODE, external);
                model.nodes.push(StructuralNode {
                    guid,
                    position: Vector::new(
                        parse_double(session, record, 1)?,
                        parse_double(session, record, 2)?,
                        parse_double(session, record, 3)?,
                    ),
                });
            }
            KW_BAR => {
                expect_fields(record, 4)?;
                let external = parse_int(session, record, 0)?;
                let start = parse_int(session, record, 1)?;
                let end = parse_int(session, record, 2)?;
                let guid = internal_id(session, CAT_ELEMENT, external);
                let start_node = resolve_reference(session, CAT_NODE, start)?;
                let end_node = resolve_reference(session, CAT_NODE, end)?;
                let section = parse_reference(session, CAT_SECTION, record, 3)?;
                model.bars.push(Bar {
                    guid,
                    start_node,
                    end_node,
                    section,
                });
            }
            other => {
                tracing::warn!("skipping unrecognized record '{other}' at line {}", record.line);
            }
        }
    }

    tracing::info!(
        "imported model: {} materials, {} sections, {} nodes, {} bars",
        model.materials.len(),
        model.sections.len(),
        model.nodes.len(),
        model.bars.len()
    );
    Ok(model)
}

fn expect_fields(record: &StxRecord, expected: usize) -> Result<()> {
    if record.fields.len() == expected {
        Ok(())
    } else {
        Err(Error::FieldCount {
            line: record.line,
            keyword: record.keyword.clone(),
            expected,
            actual: record.fields.len(),
        })
    }
}

/// GUID for an external id, reusing a prior association when one exists.
fn internal_id(session: &mut SyncSession, category: &str, external: i64) -> Uuid {
    if let Ok(guid) = session.mappings.get_first_id(category, &external) {
        return *guid;
    }
    let guid = Uuid::new_v4();
    session.mappings.add(category, guid, external);
    guid
}

/// GUID for an external id that must already have been defined.
fn resolve_reference(session: &SyncSession, category: &str, external: i64) -> Result<Uuid> {
    session
        .mappings
        .get_first_id(category, &external)
        .copied()
        .map_err(|_| Error::UnresolvedReference {
            category: category.to_string(),
            id: external.to_string(),
        })
}

/// Optional reference field; zero means none.
fn parse_reference(
    session: &SyncSession,
    category: &str,
    record: &StxRecord,
    index: usize,
) -> Result<Option<Uuid>> {
    let external = parse_int(session, record, index)?;
    if external == 0 {
        return Ok(None);
    }
    resolve_reference(session, category, external).map(Some)
}

/// Parse an integer field through the conversion library.
fn parse_int(session: &SyncSession, record: &StxRecord, index: usize) -> Result<i64> {
    match session
        .library()
        .convert(field_value(record, index), ValueKind::Int)?
    {
        Value::Int(value) => Ok(value),
        _ => Err(field_error(record, index, "an integer")),
    }
}

/// Parse a float field through the conversion library.
fn parse_double(session: &SyncSession, record: &StxRecord, index: usize) -> Result<f64> {
    match session
        .library()
        .convert(field_value(record, index), ValueKind::Double)?
    {
        Value::Double(value) => Ok(value),
        _ => Err(field_error(record, index, "a number")),
    }
}

fn field_value(record: &StxRecord, index: usize) -> Value {
    Value::Text(record.fields.get(index).cloned().unwrap_or_default())
}

fn field_error(record: &StxRecord, index: usize, wanted: &str) -> Error {
    Error::InvalidRecord {
        line: record.line,
        message: format!(
            "field {index} of {} is not {wanted}: '{}'",
            record.keyword,
            record.field(index).unwrap_or_default()
        ),
    }
}
