//! Converter registry and best-match dispatch
//!
//! Buckets are keyed by (source kind, target kind) in registration order.
//! Dispatch prefers an exact source match, then the closest registered
//! ancestor of the runtime kind; within a bucket, an exact target match,
//! then the closest registered descendant of the requested target. With
//! nothing registered the primitive coercion table is tried, and failing
//! that the value passes through unchanged.

use std::fmt;

use indexmap::IndexMap;

use crate::error::Result;
use crate::model::{Value, ValueKind};

use super::coerce::coerce;
use super::converter::{ConverterProvider, FnConverter, TypeConverter};

type ConverterList = Vec<Box<dyn TypeConverter>>;
type TargetBuckets = IndexMap<ValueKind, ConverterList>;

/// Registry of [`TypeConverter`]s with type-directed dispatch.
#[derive(Default)]
pub struct ConversionLibrary {
    converters: IndexMap<ValueKind, TargetBuckets>,
}

impl ConversionLibrary {
    /// Creates an empty library.
    #[must_use]
    pub fn new() -> Self {
        ConversionLibrary::default()
    }

    /// Number of registered converters across all buckets.
    #[must_use]
    pub fn converter_count(&self) -> usize {
        self.converters.values().flat_map(IndexMap::values).map(Vec::len).sum()
    }

    /// Whether nothing has been registered yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.converters.is_empty()
    }

    /// Register a converter under its declared (source, target) pair.
    ///
    /// Multiple converters may share a pair; the first registered wins on
    /// dispatch, later entries are reachable only through
    /// [`ConversionLibrary::all_suitable_converters`].
    pub fn register(&mut self, converter: Box<dyn TypeConverter>) {
        tracing::debug!("registering converter: {}", converter.description());
        self.converters
            .entry(converter.source_kind())
            .or_default()
            .entry(converter.target_kind())
            .or_default()
            .push(converter);
    }

    /// Register a plain function or closure as a converter.
    pub fn register_fn(
        &mut self,
        source: ValueKind,
        target: ValueKind,
        name: &str,
        func: impl Fn(&Value) -> Result<Value> + Send + Sync + 'static,
    ) {
        self.register(Box::new(FnConverter::new(source, target, name, func)));
    }

    /// Register everything a provider contributes, in order.
    pub fn load_provider(&mut self, provider: &dyn ConverterProvider) {
        for converter in provider.converters() {
            self.register(converter);
        }
    }

    /// Convert `source` to the requested target kind.
    ///
    /// `Null` passes straight through without invoking anything, as does any
    /// value that no registered converter or primitive coercion can handle:
    /// "nothing applies" is deliberately not an error, so adapters can feed
    /// values through without defensive checks on every call.
    ///
    /// # Errors
    /// Only a failure inside an invoked converter propagates. Dispatch does
    /// not retry later same-bucket entries after a failure.
    pub fn convert(&self, source: Value, target: ValueKind) -> Result<Value> {
        if source.is_null() {
            return Ok(source);
        }
        if let Some(converter) = self.resolve(source.kind(), target) {
            tracing::trace!("dispatching {}", converter.description());
            return converter.convert(&source);
        }
        if let Some(coerced) = coerce(&source, target) {
            return Ok(coerced);
        }
        tracing::trace!(
            "no conversion from {} to {}, passing value through",
            source.kind(),
            target
        );
        Ok(source)
    }

    /// Every registered converter that could accept a value of kind `from`
    /// and whose output is usable where a `to` value is expected.
    ///
    /// Diagnostic surface; dispatch never consults it.
    #[must_use]
    pub fn all_suitable_converters(&self, from: ValueKind, to: ValueKind) -> Vec<&dyn TypeConverter> {
        let mut found: Vec<&dyn TypeConverter> = Vec::new();
        for (source, bucket) in &self.converters {
            if !from.is_subkind_of(*source) {
                continue;
            }
            for (target, list) in bucket {
                if !target.is_subkind_of(to) {
                    continue;
                }
                found.extend(list.iter().map(AsRef::as_ref));
            }
        }
        found
    }

    /// The converter dispatch would invoke for (`kind`, `target`), if any.
    fn resolve(&self, kind: ValueKind, target: ValueKind) -> Option<&dyn TypeConverter> {
        let bucket = self.source_bucket(kind)?;
        Self::target_list(bucket, target)?.first().map(AsRef::as_ref)
    }

    fn source_bucket(&self, kind: ValueKind) -> Option<&TargetBuckets> {
        if let Some(bucket) = self.converters.get(&kind) {
            return Some(bucket);
        }
        // The ancestor table is ordered nearest first, so the first
        // registered hit is the closest.
        kind.ancestors().iter().find_map(|a| self.converters.get(a))
    }

    fn target_list(bucket: &TargetBuckets, target: ValueKind) -> Option<&ConverterList> {
        if let Some(list) = bucket.get(&target) {
            return Some(list);
        }
        // Closest registered descendant of the requested target. Ties keep
        // the first-registered entry (IndexMap iterates in insertion order).
        let mut best: Option<(usize, &ConverterList)> = None;
        for (registered, list) in bucket {
            if let Some(distance) = registered.distance_to(target) {
                if best.is_none_or(|(d, _)| distance < d) {
                    best = Some((distance, list));
                }
            }
        }
        best.map(|(_, list)| list)
    }
}

impl fmt::Debug for ConversionLibrary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConversionLibrary")
            .field("converters", &self.converter_count())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Arc, Circle, Panel, Vector};

    fn circle(radius: f64) -> Value {
        Value::Circle(Circle::new(Vector::new(0.0, 0.0, 0.0), radius))
    }

    fn tagged_text(tag: &'static str) -> impl Fn(&Value) -> Result<Value> + Send + Sync + 'static {
        move |_| Ok(Value::Text(tag.to_string()))
    }

    #[test]
    fn test_exact_match_beats_ancestor() {
        let mut library = ConversionLibrary::new();
        library.register_fn(ValueKind::Curve, ValueKind::Text, "curve", tagged_text("curve"));
        library.register_fn(ValueKind::Circle, ValueKind::Text, "circle", tagged_text("circle"));

        let out = library.convert(circle(5.0), ValueKind::Text).unwrap();
        assert_eq!(out, Value::Text("circle".to_string()));
    }

    #[test]
    fn test_ancestor_fallback() {
        let mut library = ConversionLibrary::new();
        library.register_fn(ValueKind::Curve, ValueKind::Text, "curve", tagged_text("curve"));

        let out = library.convert(circle(5.0), ValueKind::Text).unwrap();
        assert_eq!(out, Value::Text("curve".to_string()));
    }

    #[test]
    fn test_nearest_ancestor_wins() {
        let mut library = ConversionLibrary::new();
        library.register_fn(ValueKind::Geometry, ValueKind::Text, "geometry", tagged_text("geometry"));
        library.register_fn(ValueKind::Curve, ValueKind::Text, "curve", tagged_text("curve"));

        let out = library.convert(circle(5.0), ValueKind::Text).unwrap();
        assert_eq!(out, Value::Text("curve".to_string()));
    }

    #[test]
    fn test_descendant_fallback() {
        let mut library = ConversionLibrary::new();
        library.register_fn(ValueKind::Circle, ValueKind::Arc, "circle_to_arc", |v| match v {
            Value::Circle(c) => Ok(Value::Arc(Arc::from_circle(c))),
            _ => unreachable!(),
        });

        // Requesting the abstract curve family is satisfied by the arc
        // converter, the closest registered descendant.
        let out = library.convert(circle(5.0), ValueKind::Curve).unwrap();
        assert_eq!(out.kind(), ValueKind::Arc);
    }

    #[test]
    fn test_descendant_tie_breaks_by_registration_order() {
        let mut library = ConversionLibrary::new();
        library.register_fn(ValueKind::Int, ValueKind::Panel, "to_panel", |_| {
            Ok(Value::Panel(Panel::new(Vec::new())))
        });
        library.register_fn(ValueKind::Int, ValueKind::Bar, "to_bar", |_| {
            unreachable!("panel converter was registered first")
        });

        // Panel and Bar are equidistant descendants of Element.
        let out = library.convert(Value::Int(1), ValueKind::Element).unwrap();
        assert_eq!(out.kind(), ValueKind::Panel);
    }

    #[test]
    fn test_first_registered_wins_on_exact_pair() {
        let mut library = ConversionLibrary::new();
        library.register_fn(ValueKind::Int, ValueKind::Text, "first", tagged_text("first"));
        library.register_fn(ValueKind::Int, ValueKind::Text, "second", tagged_text("second"));

        let out = library.convert(Value::Int(1), ValueKind::Text).unwrap();
        assert_eq!(out, Value::Text("first".to_string()));
    }

    #[test]
    fn test_null_short_circuit() {
        let mut library = ConversionLibrary::new();
        library.register_fn(ValueKind::Int, ValueKind::Text, "boom", |_| {
            unreachable!("null must not reach a converter")
        });
        let out = library.convert(Value::Null, ValueKind::Text).unwrap();
        assert!(out.is_null());
    }

    #[test]
    fn test_coercion_fallback_without_registration() {
        let library = ConversionLibrary::new();
        let out = library.convert(Value::Int(3), ValueKind::Double).unwrap();
        assert_eq!(out, Value::Double(3.0));
    }

    #[test]
    fn test_passthrough_when_nothing_applies() {
        let library = ConversionLibrary::new();
        let original = circle(5.0);
        let out = library.convert(original.clone(), ValueKind::Text).unwrap();
        assert_eq!(out, original);
    }

    #[test]
    fn test_all_suitable_converters() {
        let mut library = ConversionLibrary::new();
        library.register_fn(ValueKind::Curve, ValueKind::Text, "curve", tagged_text("curve"));
        library.register_fn(ValueKind::Circle, ValueKind::Text, "circle", tagged_text("circle"));
        library.register_fn(ValueKind::Int, ValueKind::Text, "int", tagged_text("int"));

        let suitable = library.all_suitable_converters(ValueKind::Circle, ValueKind::Text);
        let names: Vec<String> = suitable.iter().map(|c| c.description()).collect();
        assert_eq!(names.len(), 2);
        assert!(names.iter().any(|n| n.contains("curve")));
        assert!(names.iter().any(|n| n.contains("circle")));
    }

    #[test]
    fn test_converter_count() {
        let mut library = ConversionLibrary::new();
        assert!(library.is_empty());
        library.register_fn(ValueKind::Int, ValueKind::Text, "a", tagged_text("a"));
        library.register_fn(ValueKind::Int, ValueKind::Text, "b", tagged_text("b"));
        library.register_fn(ValueKind::Bool, ValueKind::Text, "c", tagged_text("c"));
        assert_eq!(library.converter_count(), 3);
    }
}
