//! Model -> STX export

use uuid::Uuid;

use crate::error::{Error, Result};
use crate::formats::stx::{StxDocument, StxRecord, KW_BAR, KW_MATL, KW_NODE, KW_SECT};
use crate::model::{Model, Value, ValueKind};

use super::{SyncSession, CAT_ELEMENT, CAT_MATERIAL, CAT_NODE, CAT_SECTION};

/// Render `model` as an STX document.
///
/// External ids come from the session's mapping table: objects seen before
/// keep their numbers, new objects get the next free number in their
/// category and are recorded for later passes.
///
/// Panels have no STX record and are skipped.
///
/// # Errors
/// Fails when a bar or section references an object that is not part of the
/// export.
pub fn export_model(session: &mut SyncSession, model: &Model) -> Result<StxDocument> {
    tracing::info!(
        "exporting model: {} materials, {} sections, {} nodes, {} bars",
        model.materials.len(),
        model.sections.len(),
        model.nodes.len(),
        model.bars.len()
    );

    let mut doc = StxDocument::new();

    for material in &model.materials {
        let ext = external_id(session, CAT_MATERIAL, material.guid);
        doc.records.push(StxRecord::new(
            KW_MATL,
            vec![
                render(session, Value::Int(ext))?,
                material.name.clone(),
                render(session, Value::Double(material.elastic_modulus))?,
                render(session, Value::Double(material.density))?,
            ],
        ));
    }

    for section in &model.sections {
        let ext = external_id(session, CAT_SECTION, section.guid);
        let material_ref = reference_field(session, CAT_MATERIAL, section.material)?;
        doc.records.push(StxRecord::new(
            KW_SECT,
            vec![render(session, Value::Int(ext))?, section.name.clone(), material_ref],
        ));
    }

    for node in &model.nodes {
        let ext = external_id(session, CAT_NODE, node.guid);
        doc.records.push(StxRecord::new(
            KW_NODE,
            vec![
                render(session, Value::Int(ext))?,
                render(session, Value::Double(node.position.x))?,
                render(session, Value::Double(node.position.y))?,
                render(session, Value::Double(node.position.z))?,
            ],
        ));
    }

    for bar in &model.bars {
        let ext = external_id(session, CAT_ELEMENT, bar.guid);
        let start = resolved_reference(session, CAT_NODE, bar.start_node)?;
        let end = resolved_reference(session, CAT_NODE, bar.end_node)?;
        let section_ref = reference_field(session, CAT_SECTION, bar.section)?;
        doc.records.push(StxRecord::new(
            KW_BAR,
            vec![
                render(session, Value::Int(ext))?,
                render(session, Value::Int(start))?,
                render(session, Value::Int(end))?,
                section_ref,
            ],
        ));
    }

    if !model.panels.is_empty() {
        tracing::warn!("skipping {} panels: no STX record for panels", model.panels.len());
    }

    Ok(doc)
}

/// External id for `guid`, reusing a prior association when one exists.
fn external_id(session: &mut SyncSession, category: &str, guid: Uuid) -> i64 {
    if let Ok(external) = session.mappings.get_second_id(category, &guid) {
        return *external;
    }
    let external = session.next_external_id(category);
    session.mappings.add(category, guid, external);
    external
}

/// External id for an object that must already be part of this export.
fn resolved_reference(session: &SyncSession, category: &str, guid: Uuid) -> Result<i64> {
    session
        .mappings
        .get_second_id(category, &guid)
        .copied()
        .map_err(|_| Error::UnresolvedReference {
            category: category.to_string(),
            id: guid.to_string(),
        })
}

/// Optional reference rendered as a field; zero means none.
fn reference_field(session: &SyncSession, category: &str, guid: Option<Uuid>) -> Result<String> {
    match guid {
        Some(guid) => {
            let external = resolved_reference(session, category, guid)?;
            render(session, Value::Int(external))
        }
        None => Ok("0".to_string()),
    }
}

/// Render a field value through the conversion library.
fn render(session: &SyncSession, value: Value) -> Result<String> {
    let converted = session.library().convert(value, ValueKind::Text)?;
    Ok(match converted {
        Value::Text(text) => text,
        other => other.to_string(),
    })
}
