//! Type-directed conversion
//!
//! The core of the crate: a registry of converters keyed by
//! (source kind, target kind) with best-match dispatch. Lookup order is
//! exact pair, closest registered ancestor of the runtime kind, closest
//! registered descendant of the requested target, primitive coercion, and
//! finally identity passthrough. "No converter found" is never an error.

mod coerce;
mod converter;
mod library;
mod standard;

pub use coerce::coerce;
pub use converter::{ConverterProvider, FnConverter, TypeConverter};
pub use library::ConversionLibrary;
pub use standard::StandardConverters;
