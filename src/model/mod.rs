//! Minimal structural value model
//!
//! Just enough concrete types to give conversion dispatch a real hierarchy
//! and the exchange adapter real payloads. Full domain modeling is the
//! consuming application's business.

pub mod geometry;
pub mod kind;
pub mod objects;
pub mod value;

pub use geometry::{Arc, Circle, Line, Vector};
pub use kind::{ValueKind, ALL_KINDS};
pub use objects::{Bar, Material, Model, Panel, Section, StructuralNode};
pub use value::Value;
