use crate::dom::document::Document;
use crate::registry::field_spec::{FieldKey, FieldSpec};

/// Emptiness as the server renders it: whitespace-only, the literal `None`,
/// and the literal two-character `""` marker all count as empty.
pub fn is_empty(value: &str) -> bool {
    let trimmed = value.trim();
    trimmed.is_empty() || trimmed == "None" || trimmed == "\"\""
}

/// Collapse the server's empty markers to the empty string; otherwise trim.
pub fn normalize_original(raw: &str) -> String {
    if is_empty(raw) {
        String::new()
    } else {
        raw.trim().to_string()
    }
}

/// Live value of the field's bound control. Empty when the control is absent.
pub fn read_current_value(doc: &Document, spec: &FieldSpec) -> String {
    doc.value(&spec.input_id).unwrap_or("").to_string()
}

/// Server-supplied baseline, read from the `original_<key>` companion node
/// and normalized. Empty when the node is absent.
pub fn read_original_value(doc: &Document, key: &FieldKey) -> String {
    let raw = doc.value(&format!("original_{}", key)).unwrap_or("");
    normalize_original(raw)
}
