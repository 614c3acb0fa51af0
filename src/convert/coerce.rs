//! Primitive coercion fallback
//!
//! When dispatch finds no registered converter, primitive-like values can
//! still be coerced structurally: numeric to numeric, numeric to text and
//! back, bool and guid to text and back. The table is explicit and closed;
//! anything outside it falls through to passthrough.

use uuid::Uuid;

use crate::model::{Value, ValueKind};

/// Attempt a structural coercion of `value` to `target`.
///
/// Returns `None` when the pair is outside the coercion table or the text
/// cannot be parsed as the target kind.
#[must_use]
pub fn coerce(value: &Value, target: ValueKind) -> Option<Value> {
    if value.kind() == target {
        return Some(value.clone());
    }
    match (value, target) {
        // numeric widening/narrowing
        (Value::Int(i), ValueKind::Double) => Some(Value::Double(*i as f64)),
        (Value::Double(d), ValueKind::Int) => Some(Value::Int(*d as i64)),
        (Value::Bool(b), ValueKind::Int) => Some(Value::Int(i64::from(*b))),
        (Value::Bool(b), ValueKind::Double) => Some(Value::Double(if *b { 1.0 } else { 0.0 })),

        // to text
        (Value::Int(i), ValueKind::Text) => Some(Value::Text(i.to_string())),
        (Value::Double(d), ValueKind::Text) => Some(Value::Text(d.to_string())),
        (Value::Bool(b), ValueKind::Text) => {
            Some(Value::Text(if *b { "True" } else { "False" }.to_string()))
        }
        (Value::Guid(g), ValueKind::Text) => Some(Value::Text(g.to_string())),

        // from text
        (Value::Text(s), ValueKind::Int) => s.trim().parse::<i64>().ok().map(Value::Int),
        (Value::Text(s), ValueKind::Double) => s.trim().parse::<f64>().ok().map(Value::Double),
        (Value::Text(s), ValueKind::Bool) => match s.trim() {
            "True" | "true" | "1" => Some(Value::Bool(true)),
            "False" | "false" | "0" => Some(Value::Bool(false)),
            _ => None,
        },
        (Value::Text(s), ValueKind::Guid) => Uuid::parse_str(s.trim()).ok().map(Value::Guid),

        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_pairs() {
        assert_eq!(coerce(&Value::Int(3), ValueKind::Double), Some(Value::Double(3.0)));
        assert_eq!(coerce(&Value::Double(3.9), ValueKind::Int), Some(Value::Int(3)));
        assert_eq!(coerce(&Value::Bool(true), ValueKind::Int), Some(Value::Int(1)));
    }

    #[test]
    fn test_text_pairs() {
        assert_eq!(
            coerce(&Value::Text(" 2.5 ".to_string()), ValueKind::Double),
            Some(Value::Double(2.5))
        );
        assert_eq!(coerce(&Value::Double(2.5), ValueKind::Text), Some(Value::Text("2.5".to_string())));
        assert_eq!(coerce(&Value::Text("1".to_string()), ValueKind::Bool), Some(Value::Bool(true)));
        assert_eq!(
            coerce(&Value::Text("false".to_string()), ValueKind::Bool),
            Some(Value::Bool(false))
        );
        assert_eq!(coerce(&Value::Text("maybe".to_string()), ValueKind::Bool), None);
    }

    #[test]
    fn test_guid_roundtrip() {
        let guid = Uuid::new_v4();
        let text = coerce(&Value::Guid(guid), ValueKind::Text).unwrap();
        assert_eq!(coerce(&text, ValueKind::Guid), Some(Value::Guid(guid)));
    }

    #[test]
    fn test_same_kind_is_identity() {
        let v = Value::Text("abc".to_string());
        assert_eq!(coerce(&v, ValueKind::Text), Some(v));
    }

    #[test]
    fn test_outside_the_table() {
        use crate::model::{Circle, Vector};
        let circle = Value::Circle(Circle::new(Vector::new(0.0, 0.0, 0.0), 1.0));
        assert_eq!(coerce(&circle, ValueKind::Text), None);
        assert_eq!(coerce(&Value::Int(1), ValueKind::Circle), None);
    }
}
