//! Converter abstraction and registration surface

use std::fmt;

use crate::error::{Error, Result};
use crate::model::{Value, ValueKind};

/// A registered conversion from one value kind to another.
///
/// Implementations must be callable from multiple threads: once a
/// [`ConversionLibrary`](super::ConversionLibrary) is built and published,
/// dispatch reads it concurrently without further synchronization.
pub trait TypeConverter: Send + Sync {
    /// The kind of value this converter accepts (subkinds included).
    fn source_kind(&self) -> ValueKind;

    /// The kind of value this converter produces.
    fn target_kind(&self) -> ValueKind;

    /// Human-readable label for diagnostics. Never consulted by dispatch.
    fn description(&self) -> String;

    /// Convert `source` into a value of the target kind.
    ///
    /// # Errors
    /// Returns [`Error::SourceKindMismatch`] when `source` is not a subkind
    /// of [`TypeConverter::source_kind`], or whatever the underlying routine
    /// reports.
    fn convert(&self, source: &Value) -> Result<Value>;
}

/// A converter built from a plain function or closure.
pub struct FnConverter {
    source: ValueKind,
    target: ValueKind,
    name: String,
    func: Box<dyn Fn(&Value) -> Result<Value> + Send + Sync>,
}

impl FnConverter {
    /// Wraps a function as a converter for the given kind pair.
    #[must_use]
    pub fn new(
        source: ValueKind,
        target: ValueKind,
        name: impl Into<String>,
        func: impl Fn(&Value) -> Result<Value> + Send + Sync + 'static,
    ) -> Self {
        FnConverter {
            source,
            target,
            name: name.into(),
            func: Box::new(func),
        }
    }
}

impl TypeConverter for FnConverter {
    fn source_kind(&self) -> ValueKind {
        self.source
    }

    fn target_kind(&self) -> ValueKind {
        self.target
    }

    fn description(&self) -> String {
        format!("{} -> {} ({})", self.source, self.target, self.name)
    }

    fn convert(&self, source: &Value) -> Result<Value> {
        if !source.kind().is_subkind_of(self.source) {
            return Err(Error::SourceKindMismatch {
                converter: self.description(),
                expected: self.source.name(),
                actual: source.kind().name(),
            });
        }
        (self.func)(source)
    }
}

impl fmt::Debug for FnConverter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnConverter")
            .field("source", &self.source)
            .field("target", &self.target)
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// A source of converters for
/// [`ConversionLibrary::load_provider`](super::ConversionLibrary::load_provider).
///
/// Providers enumerate their converter set explicitly; everything handed
/// back is registered in order. A malformed conversion routine cannot be
/// expressed at this surface, so there is nothing to filter out at load
/// time.
// TODO: converters that take a per-session conversion context alongside the
// source value (adapters will want session state inside conversions).
pub trait ConverterProvider {
    /// The converters this provider contributes, in registration order.
    fn converters(&self) -> Vec<Box<dyn TypeConverter>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fn_converter_description() {
        let conv = FnConverter::new(ValueKind::Int, ValueKind::Text, "int_to_text", |v| {
            Ok(Value::Text(v.to_string()))
        });
        assert_eq!(conv.description(), "int -> text (int_to_text)");
    }

    #[test]
    fn test_fn_converter_rejects_wrong_kind() {
        let conv = FnConverter::new(ValueKind::Int, ValueKind::Text, "int_to_text", |v| {
            Ok(Value::Text(v.to_string()))
        });
        let err = conv.convert(&Value::Bool(true)).unwrap_err();
        assert!(matches!(err, Error::SourceKindMismatch { actual: "bool", .. }));
    }

    #[test]
    fn test_fn_converter_accepts_subkind() {
        use crate::model::{Circle, Vector};
        let conv = FnConverter::new(ValueKind::Curve, ValueKind::Text, "curve_label", |v| {
            Ok(Value::Text(v.kind().name().to_string()))
        });
        let circle = Value::Circle(Circle::new(Vector::new(0.0, 0.0, 0.0), 1.0));
        let out = conv.convert(&circle).unwrap();
        assert_eq!(out, Value::Text("circle".to_string()));
    }
}
