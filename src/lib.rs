//! # Spandrel
//!
//! Conversion core for structural model exchange: a type-directed converter
//! registry, bidirectional identifier mapping, and a small line-oriented
//! text format that exercises both.
//!
//! ## Converting values
//!
//! Dispatch finds the best registered converter for a (source, target)
//! kind pair — exact match first, then the closest ancestor of the source
//! kind, then the closest descendant of the requested target — and falls
//! back to primitive coercion, then to passing the value through unchanged:
//!
//! ```
//! use spandrel::prelude::*;
//!
//! let mut library = ConversionLibrary::new();
//! library.load_provider(&StandardConverters);
//!
//! let circle = Circle::new(Vector::new(0.0, 0.0, 0.0), 5.0);
//! let arc = library.convert(Value::Circle(circle), ValueKind::Arc)?;
//! assert_eq!(arc.kind(), ValueKind::Arc);
//!
//! // No converter, no coercion: the value passes through untouched.
//! let same = library.convert(Value::Circle(circle), ValueKind::Guid)?;
//! assert_eq!(same.kind(), ValueKind::Circle);
//! # Ok::<(), spandrel::Error>(())
//! ```
//!
//! ## Mapping identifiers
//!
//! Adapters keep internal GUIDs and external record numbers associated per
//! category, so repeated passes over a file reuse objects instead of
//! recreating them:
//!
//! ```
//! use spandrel::mapping::IdMappingTable;
//! use uuid::Uuid;
//!
//! let mut table: IdMappingTable<Uuid, String> = IdMappingTable::new("Internal", "External");
//! let guid = Uuid::new_v4();
//! table.add("ELEMENT", guid, "EL7".to_string());
//! assert_eq!(table.get_second_id("ELEMENT", &guid)?, "EL7");
//! assert_eq!(*table.get_first_id("ELEMENT", &"EL7".to_string())?, guid);
//! # Ok::<(), spandrel::Error>(())
//! ```
//!
//! ## Exchanging models
//!
//! ```
//! use spandrel::prelude::*;
//!
//! let mut model = Model::new();
//! let node = StructuralNode::new(Vector::new(0.0, 0.0, 0.0));
//! model.nodes.push(node);
//!
//! let mut session = SyncSession::new();
//! let doc = export_model(&mut session, &model)?;
//! let text = serialize_stx(&doc);
//! assert!(text.contains("NODE, 1"));
//! # Ok::<(), spandrel::Error>(())
//! ```

pub mod convert;
pub mod error;
pub mod exchange;
pub mod formats;
pub mod mapping;
pub mod model;

// Re-exports for convenience
pub use error::{Error, Result};

/// Prelude module for common imports
pub mod prelude {
    pub use crate::convert::{
        ConversionLibrary, ConverterProvider, FnConverter, StandardConverters, TypeConverter,
    };
    pub use crate::error::{Error, Result};
    pub use crate::exchange::{export_model, import_model, SyncSession};
    pub use crate::formats::stx::{
        parse_stx, read_stx, serialize_stx, write_stx, StxDocument, StxRecord,
    };
    pub use crate::mapping::{IdMappingDirectory, IdMappingTable};
    pub use crate::model::{
        Arc, Bar, Circle, Line, Material, Model, Panel, Section, StructuralNode, Value, ValueKind,
        Vector,
    };
}

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
