//! Element adapters for `serde_json` values.
//!
//! JSON objects are mappings, strings/numbers/booleans are scalars, `null`
//! is absent, and arrays are unsupported. Nested arrays and objects inside a
//! mapping compare by their compact JSON text.

use std::borrow::Cow;

use serde_json::{Map, Value as Json};

use crate::shape::{Mapping, Selectable, Shape};
use crate::value::{AsValue, Number, Value};

impl AsValue for Json {
    fn as_value(&self) -> Value<'_> {
        match self {
            Json::Null => Value::None,
            Json::Bool(b) => Value::Bool(*b),
            Json::Number(n) => Value::Number(json_number(n)),
            Json::String(s) => Value::String(s),
            Json::Array(_) | Json::Object(_) => Value::Opaque(Cow::Owned(self.to_string())),
        }
    }
}

fn json_number(n: &serde_json::Number) -> Number {
    if let Some(i) = n.as_i64() {
        Number::I64(i)
    } else if let Some(u) = n.as_u64() {
        Number::U64(u)
    } else {
        Number::F64(n.as_f64().unwrap_or(f64::NAN))
    }
}

impl Mapping for Map<String, Json> {
    fn lookup(&self, key: &str) -> Value<'_> {
        self.get(key).map_or(Value::None, AsValue::as_value)
    }
}

impl Selectable for Map<String, Json> {
    fn shape(&self) -> Shape<'_> {
        Shape::Mapping(self)
    }
}

impl Selectable for Json {
    fn shape(&self) -> Shape<'_> {
        match self {
            Json::Null => Shape::Absent,
            Json::Object(map) => Shape::Mapping(map),
            Json::Array(_) => Shape::Unsupported,
            scalar => Shape::Scalar(scalar.as_value()),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::shape::{classify, ElementKind};

    #[test]
    fn json_shapes() {
        assert_eq!(
            classify(&[json!(null), json!({"a": 1})]).kind(),
            Some(ElementKind::Mapping)
        );
        assert_eq!(classify(&[json!("a")]).kind(), Some(ElementKind::Scalar));
        assert_eq!(classify(&[json!(2.5)]).kind(), Some(ElementKind::Scalar));
        assert!(classify(&[json!([1, 2])]).kind().is_none());
    }

    #[test]
    fn json_values() {
        assert_eq!(json!(2).as_value(), Value::Number(Number::I64(2)));
        assert_eq!(
            json!(u64::MAX).as_value(),
            Value::Number(Number::U64(u64::MAX))
        );
        assert_eq!(json!(true).as_value(), Value::Bool(true));
        assert_eq!(json!(null).as_value(), Value::None);
        assert_eq!(
            json!({"k": [1]}).as_value().text().as_deref(),
            Some(r#"{"k":[1]}"#)
        );
    }

    #[test]
    fn object_lookup() {
        let object = json!({"name": "Jane", "age": 2});
        let map = object.as_object().unwrap();
        assert_eq!(map.lookup("name"), Value::String("Jane"));
        assert_eq!(map.lookup("age").text().as_deref(), Some("2"));
        assert_eq!(map.lookup("missing"), Value::None);
    }
}
