//! Stock converters shipped with the library
//!
//! Every exchange session starts from these. Only directions with a clear
//! geometric meaning are included; narrowing conversions that would have to
//! invent data (line to circle, text to arc) are left to the application.

use crate::error::{Error, Result};
use crate::model::{Arc, Value, ValueKind, Vector};

use super::converter::{ConverterProvider, FnConverter, TypeConverter};

/// Provider registering the standard geometry and text conversions.
pub struct StandardConverters;

impl ConverterProvider for StandardConverters {
    fn converters(&self) -> Vec<Box<dyn TypeConverter>> {
        vec![
            Box::new(FnConverter::new(
                ValueKind::Circle,
                ValueKind::Arc,
                "circle_to_arc",
                |v| match v {
                    Value::Circle(c) => Ok(Value::Arc(Arc::from_circle(c))),
                    other => Err(wrong_payload("circle", other)),
                },
            )),
            Box::new(FnConverter::new(
                ValueKind::Arc,
                ValueKind::Line,
                "arc_to_chord",
                |v| match v {
                    Value::Arc(a) => Ok(Value::Line(a.chord())),
                    other => Err(wrong_payload("arc", other)),
                },
            )),
            Box::new(FnConverter::new(
                ValueKind::Vector,
                ValueKind::Text,
                "vector_to_text",
                |v| match v {
                    Value::Vector(vec) => Ok(Value::Text(format!("{} {} {}", vec.x, vec.y, vec.z))),
                    other => Err(wrong_payload("vector", other)),
                },
            )),
            Box::new(FnConverter::new(
                ValueKind::Text,
                ValueKind::Vector,
                "text_to_vector",
                |v| match v {
                    Value::Text(s) => parse_vector(s),
                    other => Err(wrong_payload("text", other)),
                },
            )),
        ]
    }
}

fn wrong_payload(expected: &str, got: &Value) -> Error {
    Error::ConversionFailed {
        message: format!("expected a {expected} payload, got {}", got.kind()),
    }
}

/// Parse a space-separated coordinate triple.
fn parse_vector(text: &str) -> Result<Value> {
    let parts: Vec<f64> = text
        .split_whitespace()
        .map(str::parse)
        .collect::<std::result::Result<_, _>>()
        .map_err(|_| Error::ConversionFailed {
            message: format!("expected three coordinates, got '{text}'"),
        })?;
    if parts.len() != 3 {
        return Err(Error::ConversionFailed {
            message: format!("expected three coordinates, got '{text}'"),
        });
    }
    Ok(Value::Vector(Vector::new(parts[0], parts[1], parts[2])))
}
