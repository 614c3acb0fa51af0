//! Value kinds and the convertible-type hierarchy
//!
//! Every runtime [`Value`](super::Value) carries a [`ValueKind`] tag. The
//! abstract kinds (`Geometry`, `Curve`, `ModelObject`, `Element`) never
//! appear as runtime tags; they exist so converters can be registered
//! against a whole family of kinds and found by ancestor/descendant search.
//!
//! The hierarchy is a hand-maintained single-inheritance tree, which keeps
//! "closest ancestor" unique by construction and makes subtype distance a
//! table walk rather than runtime introspection.

use std::fmt;

/// Tag identifying the kind of a convertible value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    /// Absent value.
    Null,
    /// Boolean.
    Bool,
    /// 64-bit signed integer.
    Int,
    /// 64-bit float.
    Double,
    /// UTF-8 text.
    Text,
    /// Globally unique identifier.
    Guid,
    /// Abstract root of the geometry family.
    Geometry,
    /// 3D position or direction.
    Vector,
    /// Abstract curve family.
    Curve,
    /// Straight segment between two points.
    Line,
    /// Circular arc with a start angle and sweep.
    Arc,
    /// Full circle.
    Circle,
    /// Abstract root of identified model objects.
    ModelObject,
    /// Structural node (a connection point in the model).
    StructuralNode,
    /// Abstract structural element family.
    Element,
    /// Linear (bar/beam) element spanning two nodes.
    Bar,
    /// Planar (panel/slab) element over an outline of nodes.
    Panel,
    /// Section profile assigned to linear elements.
    Section,
    /// Material definition.
    Material,
}

/// Every kind, in declaration order.
pub const ALL_KINDS: [ValueKind; 19] = [
    ValueKind::Null,
    ValueKind::Bool,
    ValueKind::Int,
    ValueKind::Double,
    ValueKind::Text,
    ValueKind::Guid,
    ValueKind::Geometry,
    ValueKind::Vector,
    ValueKind::Curve,
    ValueKind::Line,
    ValueKind::Arc,
    ValueKind::Circle,
    ValueKind::ModelObject,
    ValueKind::StructuralNode,
    ValueKind::Element,
    ValueKind::Bar,
    ValueKind::Panel,
    ValueKind::Section,
    ValueKind::Material,
];

impl ValueKind {
    /// Get the human-readable name for a kind
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            ValueKind::Null => "null",
            ValueKind::Bool => "bool",
            ValueKind::Int => "int",
            ValueKind::Double => "double",
            ValueKind::Text => "text",
            ValueKind::Guid => "guid",
            ValueKind::Geometry => "geometry",
            ValueKind::Vector => "vector",
            ValueKind::Curve => "curve",
            ValueKind::Line => "line",
            ValueKind::Arc => "arc",
            ValueKind::Circle => "circle",
            ValueKind::ModelObject => "object",
            ValueKind::StructuralNode => "node",
            ValueKind::Element => "element",
            ValueKind::Bar => "bar",
            ValueKind::Panel => "panel",
            ValueKind::Section => "section",
            ValueKind::Material => "material",
        }
    }

    /// Look up a kind by its name
    #[must_use]
    pub fn from_name(name: &str) -> Option<ValueKind> {
        ALL_KINDS.iter().copied().find(|k| k.name() == name)
    }

    /// Check if a kind is numeric
    #[must_use]
    pub fn is_numeric(self) -> bool {
        matches!(self, ValueKind::Int | ValueKind::Double)
    }

    /// Check if a kind is primitive (coercible through the fallback table)
    #[must_use]
    pub fn is_primitive(self) -> bool {
        matches!(
            self,
            ValueKind::Bool | ValueKind::Int | ValueKind::Double | ValueKind::Text | ValueKind::Guid
        )
    }

    /// Check if a kind is abstract (hierarchy node only, never a runtime tag)
    #[must_use]
    pub fn is_abstract(self) -> bool {
        matches!(
            self,
            ValueKind::Geometry | ValueKind::Curve | ValueKind::ModelObject | ValueKind::Element
        )
    }

    /// Supertypes of this kind, nearest first.
    ///
    /// Primitives and roots have none. The ordering is load-bearing:
    /// closest-ancestor search takes the first registered entry.
    #[must_use]
    pub fn ancestors(self) -> &'static [ValueKind] {
        match self {
            ValueKind::Vector | ValueKind::Curve => &[ValueKind::Geometry],
            ValueKind::Line | ValueKind::Arc | ValueKind::Circle => {
                &[ValueKind::Curve, ValueKind::Geometry]
            }
            ValueKind::StructuralNode
            | ValueKind::Element
            | ValueKind::Section
            | ValueKind::Material => &[ValueKind::ModelObject],
            ValueKind::Bar | ValueKind::Panel => &[ValueKind::Element, ValueKind::ModelObject],
            _ => &[],
        }
    }

    /// Whether this kind is `other` or descends from it.
    #[must_use]
    pub fn is_subkind_of(self, other: ValueKind) -> bool {
        self == other || self.ancestors().contains(&other)
    }

    /// Number of hierarchy levels from this kind up to `ancestor`.
    ///
    /// `Some(0)` for the kind itself, `None` when `ancestor` is not above
    /// this kind.
    #[must_use]
    pub fn distance_to(self, ancestor: ValueKind) -> Option<usize> {
        if self == ancestor {
            return Some(0);
        }
        self.ancestors().iter().position(|&a| a == ancestor).map(|i| i + 1)
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_roundtrip() {
        for kind in ALL_KINDS {
            assert_eq!(ValueKind::from_name(kind.name()), Some(kind));
        }
        assert_eq!(ValueKind::from_name("granite"), None);
    }

    #[test]
    fn test_subkind_relation() {
        assert!(ValueKind::Circle.is_subkind_of(ValueKind::Curve));
        assert!(ValueKind::Circle.is_subkind_of(ValueKind::Geometry));
        assert!(ValueKind::Circle.is_subkind_of(ValueKind::Circle));
        assert!(!ValueKind::Curve.is_subkind_of(ValueKind::Circle));
        assert!(!ValueKind::Circle.is_subkind_of(ValueKind::ModelObject));
        assert!(ValueKind::Bar.is_subkind_of(ValueKind::Element));
        assert!(ValueKind::Bar.is_subkind_of(ValueKind::ModelObject));
    }

    #[test]
    fn test_distance() {
        assert_eq!(ValueKind::Circle.distance_to(ValueKind::Circle), Some(0));
        assert_eq!(ValueKind::Circle.distance_to(ValueKind::Curve), Some(1));
        assert_eq!(ValueKind::Circle.distance_to(ValueKind::Geometry), Some(2));
        assert_eq!(ValueKind::Circle.distance_to(ValueKind::Element), None);
        assert_eq!(ValueKind::Vector.distance_to(ValueKind::Geometry), Some(1));
    }

    #[test]
    fn test_abstract_kinds_have_no_runtime_overlap() {
        for kind in ALL_KINDS {
            if kind.is_abstract() {
                assert!(!kind.is_primitive());
                assert!(!kind.is_numeric());
            }
        }
    }
}
