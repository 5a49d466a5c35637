use serde_json::{Map, Value};

/// Makes sure a collection response carries `_embedded.elements`.
///
/// OpenProject leaves out empty collections entirely, so callers would otherwise have
/// to handle three shapes. A body that is not an object (e.g. an unparsable response
/// that was replaced with `{}` upstream, or a bare array) becomes an empty collection.
/// An `elements` value that is not an array is replaced with `[]`.
pub fn ensure_collection(mut body: Value) -> Value {
    if !body.is_object() {
        body = Value::Object(Map::new());
    }
    if let Value::Object(root) = &mut body {
        let embedded = root
            .entry("_embedded")
            .or_insert_with(|| Value::Object(Map::new()));
        if !embedded.is_object() {
            *embedded = Value::Object(Map::new());
        }
        if let Value::Object(embedded) = embedded {
            let elements = embedded
                .entry("elements")
                .or_insert_with(|| Value::Array(Vec::new()));
            if !elements.is_array() {
                *elements = Value::Array(Vec::new());
            }
        }
    }
    body
}

/// Borrows the element list of a normalized collection.
pub fn elements(body: &Value) -> &[Value] {
    body.get("_embedded")
        .and_then(|e| e.get("elements"))
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or(&[])
}
