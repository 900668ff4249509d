use std::collections::HashMap;

use crate::registry::field_spec::{FieldKey, FieldKind, FieldSpec, ToggleSpec};

/// Fixed mapping from field key to its DOM wiring. Hand-authored, loaded
/// once, never mutated afterwards. Lookup by key is O(1); iteration follows
/// insertion order so summary rendering and reports stay deterministic.
#[derive(Debug, Clone)]
pub struct FieldRegistry {
    specs: Vec<FieldSpec>,
    index: HashMap<FieldKey, usize>,
}

impl FieldRegistry {
    /// Build a registry from a list of specs. A key appearing twice keeps
    /// its first spec; later duplicates are dropped.
    pub fn from_specs(specs: Vec<FieldSpec>) -> Self {
        let mut kept = Vec::with_capacity(specs.len());
        let mut index = HashMap::new();

        for spec in specs {
            if index.contains_key(&spec.key) {
                continue;
            }
            index.insert(spec.key.clone(), kept.len());
            kept.push(spec);
        }

        FieldRegistry { specs: kept, index }
    }

    pub fn empty() -> Self {
        FieldRegistry {
            specs: Vec::new(),
            index: HashMap::new(),
        }
    }

    pub fn get(&self, key: &FieldKey) -> Option<&FieldSpec> {
        self.index.get(key).map(|&i| &self.specs[i])
    }

    pub fn contains(&self, key: &FieldKey) -> bool {
        self.index.contains_key(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldSpec> {
        self.specs.iter()
    }

    pub fn len(&self) -> usize {
        self.specs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }
}

/// Wire a date field using the form's id conventions.
pub fn date_field(key: &str, section: &str, label: &str) -> FieldSpec {
    field_with_toggle(key, FieldKind::Date, section, label)
}

/// Wire a text field using the form's id conventions.
pub fn text_field(key: &str, section: &str, label: &str) -> FieldSpec {
    field_with_toggle(key, FieldKind::Text, section, label)
}

fn field_with_toggle(key: &str, kind: FieldKind, section: &str, label: &str) -> FieldSpec {
    FieldSpec {
        key: FieldKey::new(key),
        kind,
        input_id: key.to_string(),
        summary_row_id: format!("li_{}", key),
        summary_value_id: format!("novo_{}", key),
        toggle: Some(ToggleSpec {
            toggle_id: format!("del_{}", key),
            overlay_id: format!("aviso_{}", key),
            section: section.to_string(),
            label: label.to_string(),
        }),
    }
}

/// The production readequação form: one date field and one free-text field
/// per service section.
pub fn default_registry() -> FieldRegistry {
    FieldRegistry::from_specs(vec![
        date_field("data__1", "1A", "AEREO"),
        text_field("texto16__1", "1B", "AEREO"),
        date_field("data__2", "2A", "HOTEL"),
        text_field("texto16__2", "2B", "HOTEL"),
        date_field("data__3", "3A", "TRANSFER"),
        text_field("texto16__3", "3B", "TRANSFER"),
        date_field("data__4", "4A", "INGRESSO"),
        text_field("texto16__4", "4B", "INGRESSO"),
        date_field("data__5", "5A", "PASSEIO"),
        text_field("texto16__5", "5B", "PASSEIO"),
        date_field("data__6", "6A", "SEGURO"),
        text_field("texto16__6", "6B", "SEGURO"),
        date_field("data__7", "7A", "OUTROS"),
        text_field("texto16__7", "7B", "OUTROS"),
    ])
}
