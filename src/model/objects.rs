//! Model object payloads
//!
//! DTO-style structs with GUID identity. Cross-references between objects
//! go by GUID rather than ownership, matching how exchange files reference
//! records by id.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::geometry::Vector;

/// A material definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Material {
    /// Internal identity.
    pub guid: Uuid,
    /// Display name.
    pub name: String,
    /// Elastic modulus (Pa).
    pub elastic_modulus: f64,
    /// Density (kg/m3).
    pub density: f64,
}

impl Material {
    /// Creates a new material with a fresh GUID.
    #[must_use]
    pub fn new(name: impl Into<String>, elastic_modulus: f64, density: f64) -> Self {
        Material {
            guid: Uuid::new_v4(),
            name: name.into(),
            elastic_modulus,
            density,
        }
    }
}

/// A section profile assigned to linear elements.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    /// Internal identity.
    pub guid: Uuid,
    /// Display name (e.g. a catalogue designation).
    pub name: String,
    /// Material this section is made of.
    pub material: Option<Uuid>,
}

impl Section {
    /// Creates a new section with a fresh GUID.
    #[must_use]
    pub fn new(name: impl Into<String>, material: Option<Uuid>) -> Self {
        Section {
            guid: Uuid::new_v4(),
            name: name.into(),
            material,
        }
    }
}

/// A structural node: a connection point in the model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StructuralNode {
    /// Internal identity.
    pub guid: Uuid,
    /// Position in model space.
    pub position: Vector,
}

impl StructuralNode {
    /// Creates a new node with a fresh GUID.
    #[must_use]
    pub fn new(position: Vector) -> Self {
        StructuralNode {
            guid: Uuid::new_v4(),
            position,
        }
    }
}

/// A linear element spanning two nodes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bar {
    /// Internal identity.
    pub guid: Uuid,
    /// Node at the start of the element.
    pub start_node: Uuid,
    /// Node at the end of the element.
    pub end_node: Uuid,
    /// Assigned section profile.
    pub section: Option<Uuid>,
}

impl Bar {
    /// Creates a new bar element with a fresh GUID.
    #[must_use]
    pub fn new(start_node: Uuid, end_node: Uuid, section: Option<Uuid>) -> Self {
        Bar {
            guid: Uuid::new_v4(),
            start_node,
            end_node,
            section,
        }
    }
}

/// A planar element over an outline of nodes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Panel {
    /// Internal identity.
    pub guid: Uuid,
    /// Outline nodes, in order.
    pub outline: Vec<Uuid>,
}

impl Panel {
    /// Creates a new panel element with a fresh GUID.
    #[must_use]
    pub fn new(outline: Vec<Uuid>) -> Self {
        Panel {
            guid: Uuid::new_v4(),
            outline,
        }
    }
}

/// A model: the container adapters import into and export from.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Model {
    /// Material definitions.
    pub materials: Vec<Material>,
    /// Section profiles.
    pub sections: Vec<Section>,
    /// Structural nodes.
    pub nodes: Vec<StructuralNode>,
    /// Linear elements.
    pub bars: Vec<Bar>,
    /// Planar elements.
    pub panels: Vec<Panel>,
}

impl Model {
    /// Creates an empty model.
    #[must_use]
    pub fn new() -> Self {
        Model::default()
    }

    /// Total number of objects across all collections.
    #[must_use]
    pub fn object_count(&self) -> usize {
        self.materials.len()
            + self.sections.len()
            + self.nodes.len()
            + self.bars.len()
            + self.panels.len()
    }

    /// Whether the model holds no objects.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.object_count() == 0
    }

    /// Find a node by its GUID.
    #[must_use]
    pub fn find_node(&self, guid: Uuid) -> Option<&StructuralNode> {
        self.nodes.iter().find(|n| n.guid == guid)
    }
}
