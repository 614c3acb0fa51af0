//! Tagged runtime values
//!
//! [`Value`] is the dynamically-kinded currency of the conversion registry:
//! one variant per concrete [`ValueKind`], plus `Null`. Abstract kinds have
//! no variant; a runtime value is always concretely kinded.

use std::fmt;

use uuid::Uuid;

use super::geometry::{Arc, Circle, Line, Vector};
use super::kind::ValueKind;
use super::objects::{Bar, Material, Panel, Section, StructuralNode};

/// A dynamically-kinded value passing through the conversion registry.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Absent value; passes through dispatch untouched.
    Null,
    /// Boolean.
    Bool(bool),
    /// 64-bit signed integer.
    Int(i64),
    /// 64-bit float.
    Double(f64),
    /// UTF-8 text.
    Text(String),
    /// Globally unique identifier.
    Guid(Uuid),
    /// 3D position or direction.
    Vector(Vector),
    /// Straight segment.
    Line(Line),
    /// Circular arc.
    Arc(Arc),
    /// Full circle.
    Circle(Circle),
    /// Structural node.
    StructuralNode(StructuralNode),
    /// Linear element.
    Bar(Bar),
    /// Planar element.
    Panel(Panel),
    /// Section profile.
    Section(Section),
    /// Material definition.
    Material(Material),
}

impl Value {
    /// The runtime kind tag of this value.
    #[must_use]
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Null => ValueKind::Null,
            Value::Bool(_) => ValueKind::Bool,
            Value::Int(_) => ValueKind::Int,
            Value::Double(_) => ValueKind::Double,
            Value::Text(_) => ValueKind::Text,
            Value::Guid(_) => ValueKind::Guid,
            Value::Vector(_) => ValueKind::Vector,
            Value::Line(_) => ValueKind::Line,
            Value::Arc(_) => ValueKind::Arc,
            Value::Circle(_) => ValueKind::Circle,
            Value::StructuralNode(_) => ValueKind::StructuralNode,
            Value::Bar(_) => ValueKind::Bar,
            Value::Panel(_) => ValueKind::Panel,
            Value::Section(_) => ValueKind::Section,
            Value::Material(_) => ValueKind::Material,
        }
    }

    /// Whether this is the absent value.
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Boolean payload, if any.
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Integer payload, if any.
    #[must_use]
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Float payload, if any.
    #[must_use]
    pub fn as_double(&self) -> Option<f64> {
        match self {
            Value::Double(d) => Some(*d),
            _ => None,
        }
    }

    /// Text payload, if any.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    /// GUID payload, if any.
    #[must_use]
    pub fn as_guid(&self) -> Option<Uuid> {
        match self {
            Value::Guid(g) => Some(*g),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => Ok(()),
            Value::Bool(b) => f.write_str(if *b { "True" } else { "False" }),
            Value::Int(i) => write!(f, "{i}"),
            Value::Double(d) => write!(f, "{d}"),
            Value::Text(s) => f.write_str(s),
            Value::Guid(g) => write!(f, "{g}"),
            // Vectors render space-separated, matching the exchange text form
            Value::Vector(v) => write!(f, "{} {} {}", v.x, v.y, v.z),
            other => f.write_str(other.kind().name()),
        }
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Double(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Text(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Text(v)
    }
}

impl From<Uuid> for Value {
    fn from(v: Uuid) -> Self {
        Value::Guid(v)
    }
}

impl From<Vector> for Value {
    fn from(v: Vector) -> Self {
        Value::Vector(v)
    }
}

impl From<Line> for Value {
    fn from(v: Line) -> Self {
        Value::Line(v)
    }
}

impl From<Arc> for Value {
    fn from(v: Arc) -> Self {
        Value::Arc(v)
    }
}

impl From<Circle> for Value {
    fn from(v: Circle) -> Self {
        Value::Circle(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_tags() {
        assert_eq!(Value::Null.kind(), ValueKind::Null);
        assert_eq!(Value::from(1i64).kind(), ValueKind::Int);
        assert_eq!(Value::from("x").kind(), ValueKind::Text);
        let circle = Circle::new(Vector::new(0.0, 0.0, 0.0), 1.0);
        assert_eq!(Value::from(circle).kind(), ValueKind::Circle);
    }

    #[test]
    fn test_display_conventions() {
        assert_eq!(Value::Bool(true).to_string(), "True");
        assert_eq!(Value::Bool(false).to_string(), "False");
        assert_eq!(Value::Vector(Vector::new(1.0, 2.5, -3.0)).to_string(), "1 2.5 -3");
        assert_eq!(Value::Null.to_string(), "");
    }

    #[test]
    fn test_accessors() {
        assert_eq!(Value::Int(7).as_int(), Some(7));
        assert_eq!(Value::Int(7).as_double(), None);
        assert_eq!(Value::Text("a".to_string()).as_text(), Some("a"));
    }
}
